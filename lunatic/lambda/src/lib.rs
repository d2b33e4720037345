//! General-purpose helpers for plugin code: text, sequences, combinators and
//! dynamic values.

pub mod combinators;
pub mod dynamic;
pub mod seq;
pub mod strings;

pub use combinators::{compose, identity, negate, once, partial, pipe, task, times, trace};
