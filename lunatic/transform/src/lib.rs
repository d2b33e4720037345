//! Shape-preserving map and filter over keyed containers.
//!
//! Every operation reads its input through [`Structure`] and builds a fresh
//! output; inputs are never mutated or retained.

pub mod copy;
pub mod dual;
pub mod structure;

pub use copy::{Frozen, deep_clone, freeze, freeze_clone};
pub use dual::{DualPairs, DualSequence, pairs_from_dual_iterator};
pub use structure::{Shape, Structure};

use indexmap::IndexMap;
use lunatic_common::value::Value;
use std::hash::Hash;
use tracing::trace;

/// The plain key-to-value mapping results are coerced into.
pub type PlainMap<K, V> = IndexMap<K, V>;

/// Maps every value of `container` through `f`, keeping the container kind,
/// the key set and the enumeration order.
pub fn transform_values<C, U, F>(mut f: F, container: &C) -> C::WithValues<U>
where
    C: Structure,
    F: FnMut(&C::Value) -> U,
{
    trace!(shape = ?C::SHAPE, "transform_values");
    let mut out: C::WithValues<U> = container.empty_like();
    for (key, value) in container.enumerate_pairs() {
        out.push_pair(key.clone(), f(value));
    }
    out
}

/// Like [`transform_values`], but always yields a [`PlainMap`].
pub fn transform_values_to_plain_map<C, U, F>(mut f: F, container: &C) -> PlainMap<C::Key, U>
where
    C: Structure,
    C::Key: Hash + Eq,
    F: FnMut(&C::Value) -> U,
{
    trace!(shape = ?C::SHAPE, "transform_values_to_plain_map");
    container
        .enumerate_pairs()
        .map(|(key, value)| (key.clone(), f(value)))
        .collect()
}

/// Keeps the entries whose value satisfies `predicate`, in their original
/// order, in a new container of the same kind.
pub fn filter_values<C, P>(mut predicate: P, container: &C) -> C::WithValues<C::Value>
where
    C: Structure,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    trace!(shape = ?C::SHAPE, "filter_values");
    let mut out: C::WithValues<C::Value> = container.empty_like();
    for (key, value) in container.enumerate_pairs() {
        if predicate(value) {
            out.push_pair(key.clone(), value.clone());
        }
    }
    out
}

/// Filters into a [`PlainMap`]. An absent container yields `None` instead of
/// an error, for optional configuration blocks that may not be set.
pub fn filter_to_plain_map<C, P>(
    mut predicate: P,
    container: Option<&C>,
) -> Option<PlainMap<C::Key, C::Value>>
where
    C: Structure,
    C::Key: Hash + Eq,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    let Some(container) = container else {
        trace!("filter_to_plain_map: absent input");
        return None;
    };
    Some(
        container
            .enumerate_pairs()
            .filter(|&(_, value)| predicate(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}

/// The values of `container` in enumeration order.
pub fn values<C: Structure>(container: &C) -> Vec<&C::Value> {
    container.enumerate_pairs().map(|(_, value)| value).collect()
}

/// Flattens entries into `[k1, v1, k2, v2, ...]`.
pub fn to_flat_pairs<C>(container: &C) -> Vec<Value>
where
    C: Structure,
    C::Key: Into<Value>,
    C::Value: Clone + Into<Value>,
{
    container
        .enumerate_pairs()
        .flat_map(|(key, value)| [key.clone().into(), value.clone().into()])
        .collect()
}
