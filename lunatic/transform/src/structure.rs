//! The container capability the transform operations are written against.

use crate::dual::DualSequence;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

/// How a container exposes its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A mapping enumerated over its own keys.
    KeyedMapping,
    /// Separate key and value producers advanced in lockstep.
    DualSequencePair,
}

/// A keyed collection that can enumerate its entries in a stable order and
/// be rebuilt, entry by entry, as a container of the same concrete kind.
///
/// Rebuilding must reproduce the enumeration order, so hash-ordered maps do
/// not implement this; collect them into an `IndexMap` first.
pub trait Structure {
    type Key: Clone;
    type Value;
    /// The same concrete container holding values of type `U`.
    type WithValues<U>: Structure<Key = Self::Key, Value = U>;

    const SHAPE: Shape;

    fn enumerate_pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// An empty container of the same kind, carrying over any construction
    /// state (hasher, capacity) the kind needs.
    fn empty_like<U>(&self) -> Self::WithValues<U>;

    /// Appends an entry. Callers only push keys taken from another
    /// structure's enumeration, so keys arrive unique.
    fn push_pair(&mut self, key: Self::Key, value: Self::Value);
}

impl<K, V, S> Structure for IndexMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;
    type WithValues<U> = IndexMap<K, U, S>;

    const SHAPE: Shape = Shape::KeyedMapping;

    fn enumerate_pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn empty_like<U>(&self) -> IndexMap<K, U, S> {
        IndexMap::with_capacity_and_hasher(self.len(), S::default())
    }

    fn push_pair(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> Structure for BTreeMap<K, V>
where
    K: Ord + Clone,
{
    type Key = K;
    type Value = V;
    type WithValues<U> = BTreeMap<K, U>;

    const SHAPE: Shape = Shape::KeyedMapping;

    fn enumerate_pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn empty_like<U>(&self) -> BTreeMap<K, U> {
        BTreeMap::new()
    }

    fn push_pair(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> Structure for DualSequence<K, V>
where
    K: Clone,
{
    type Key = K;
    type Value = V;
    type WithValues<U> = DualSequence<K, U>;

    const SHAPE: Shape = Shape::DualSequencePair;

    fn enumerate_pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.pairs()
    }

    fn empty_like<U>(&self) -> DualSequence<K, U> {
        DualSequence::with_capacity(self.len())
    }

    fn push_pair(&mut self, key: K, value: V) {
        self.push_unchecked(key, value);
    }
}
