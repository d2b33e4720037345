//! Slice and sequence helpers.

use indexmap::IndexMap;
use std::hash::Hash;

pub fn peek_front<T>(items: &[T]) -> Option<&T> {
    items.first()
}

pub fn peek_last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// How many times `item` appears in `items`.
pub fn occurrences<T: PartialEq>(item: &T, items: &[T]) -> usize {
    items.iter().filter(|element| *element == item).count()
}

/// Builds a lookup function from key/value pairs. Later duplicates win.
pub fn keymap<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> impl Fn(&K) -> Option<V>
where
    K: Hash + Eq,
    V: Clone,
{
    let table: IndexMap<K, V> = pairs.into_iter().collect();
    move |key| table.get(key).cloned()
}

/// Elements of `a` that also appear in `b`, in `a`'s order.
pub fn intersect<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|element| b.contains(element)).cloned().collect()
}

pub fn clear<T>(items: &mut Vec<T>) {
    items.clear();
}

/// Flattens one level of nesting.
pub fn flatten<T>(nested: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    nested.into_iter().flatten().collect()
}

/// `start, start + 1, ..., end - 1`; empty when `end <= start`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

/// At most the first `amount` elements.
pub fn take<T>(amount: usize, items: &[T]) -> &[T] {
    &items[..amount.min(items.len())]
}

/// At most the last `amount` elements.
pub fn drop_last<T>(amount: usize, items: &[T]) -> &[T] {
    &items[items.len().saturating_sub(amount)..]
}

pub fn seq_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

pub fn pick<T>(items: &[T], index: usize) -> Option<&T> {
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peeks() {
        let items = [3, 4, 5];
        assert_eq!(peek_front(&items), Some(&3));
        assert_eq!(peek_last(&items), Some(&5));
        assert_eq!(peek_front::<i32>(&[]), None);
    }

    #[test]
    fn occurrence_count() {
        assert_eq!(occurrences(&"a", &["a", "b", "a"]), 2);
        assert_eq!(occurrences(&9, &[1, 2]), 0);
    }

    #[test]
    fn keymap_lookup() {
        let colors = keymap([("red", 2), ("blue", 4), ("red", 10)]);
        assert_eq!(colors(&"red"), Some(10));
        assert_eq!(colors(&"blue"), Some(4));
        assert_eq!(colors(&"green"), None);
    }

    #[test]
    fn intersection_keeps_left_order() {
        assert_eq!(intersect(&[5, 1, 4, 2], &[2, 5, 7]), vec![5, 2]);
    }

    #[test]
    fn clear_empties() {
        let mut items = vec![1, 2];
        clear(&mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn flatten_one_level() {
        assert_eq!(flatten(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
    }

    #[test]
    fn ranges() {
        assert_eq!(range(2, 5), vec![2, 3, 4]);
        assert!(range(5, 5).is_empty());
        assert!(range(5, 2).is_empty());
    }

    #[test]
    fn take_and_drop_clamp() {
        let items = [1, 2, 3, 4];
        assert_eq!(take(2, &items), &[1, 2]);
        assert_eq!(take(9, &items), &items);
        assert_eq!(drop_last(3, &items), &[2, 3, 4]);
        assert_eq!(drop_last(9, &items), &items);
        assert!(drop_last(0, &items).is_empty());
    }

    #[test]
    fn equality_and_pick() {
        assert!(seq_equals(&[1, 2], &[1, 2]));
        assert!(!seq_equals(&[1, 2], &[1, 2, 3]));
        assert_eq!(pick(&["a", "b"], 1), Some(&"b"));
        assert_eq!(pick(&["a", "b"], 2), None);
    }
}
