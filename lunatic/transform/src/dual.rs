//! Containers that expose their keys and values through two separate producers.

use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// An associative container stored as parallel key and value sequences.
///
/// `keys()` and `values()` are independent producers; [`DualSequence::pairs`]
/// steps both together. A sequence built with [`DualSequence::from_parts`] may
/// hold more keys than values (or the reverse); pairing stops at the shorter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualSequence<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> DualSequence<K, V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn from_parts(keys: Vec<K>, values: Vec<V>) -> Self {
        Self { keys, values }
    }

    pub fn keys(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    pub fn pairs(&self) -> DualPairs<std::slice::Iter<'_, K>, std::slice::Iter<'_, V>> {
        pairs_from_dual_iterator(&self.keys, &self.values)
    }

    /// Number of complete pairs.
    pub fn len(&self) -> usize {
        self.keys.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn push_unchecked(&mut self, key: K, value: V) {
        self.keys.push(key);
        self.values.push(value);
    }

    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }
}

impl<K: PartialEq, V> DualSequence<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.keys
            .iter()
            .position(|k| k == key)
            .and_then(|i| self.values.get(i))
    }

    /// Sets `key` to `value`, replacing in place if the key is already paired.
    /// Returns the previous value.
    ///
    /// Unpaired trailing keys or values are dropped before a new pair is
    /// appended, so the new key always lines up with its value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let paired = self.len();
        match self.keys[..paired].iter().position(|k| *k == key) {
            Some(i) => Some(std::mem::replace(&mut self.values[i], value)),
            None => {
                self.keys.truncate(paired);
                self.values.truncate(paired);
                self.push_unchecked(key, value);
                None
            }
        }
    }
}

impl<K, V> Default for DualSequence<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Later duplicates replace earlier ones. Each element is checked against the
/// keys collected so far, so collecting `n` pairs is quadratic in `n`.
impl<K: PartialEq, V> FromIterator<(K, V)> for DualSequence<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut seq = DualSequence::new();
        for (k, v) in iter {
            seq.insert(k, v);
        }
        seq
    }
}

/// Lockstep pairing of a key producer and a value producer.
///
/// Both producers are stepped on every call. The first completion signal from
/// either ends the sequence for good; a longer producer is silently truncated.
/// Not restartable: take fresh producers from the container to iterate again.
#[derive(Debug, Clone)]
pub struct DualPairs<KI, VI> {
    keys: KI,
    values: VI,
    done: bool,
}

impl<KI, VI> Iterator for DualPairs<KI, VI>
where
    KI: Iterator,
    VI: Iterator,
{
    type Item = (KI::Item, VI::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match (self.keys.next(), self.values.next()) {
            (Some(key), Some(value)) => Some((key, value)),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (klo, khi) = self.keys.size_hint();
        let (vlo, vhi) = self.values.size_hint();
        let hi = match (khi, vhi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (klo.min(vlo), hi)
    }
}

impl<KI: Iterator, VI: Iterator> FusedIterator for DualPairs<KI, VI> {}

/// Pairs a key producer with a value producer, stepping them in lockstep.
pub fn pairs_from_dual_iterator<K, V>(keys: K, values: V) -> DualPairs<K::IntoIter, V::IntoIter>
where
    K: IntoIterator,
    V: IntoIterator,
{
    DualPairs {
        keys: keys.into_iter(),
        values: values.into_iter(),
        done: false,
    }
}
