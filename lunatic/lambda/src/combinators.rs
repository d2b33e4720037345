//! Function combinators.

use std::fmt::Display;
use std::ops::Neg;
use tracing::debug;

/// A boxed single-argument step, as accepted by [`pipe`] and [`compose`].
pub type Step<T> = Box<dyn Fn(T) -> T>;

pub fn identity<T>(value: T) -> T {
    value
}

pub fn negate<T: Neg>(value: T) -> T::Output {
    -value
}

/// Wraps `f` so it runs on the first call only; later calls return `None`.
pub fn once<F, R>(f: F) -> impl FnMut() -> Option<R>
where
    F: FnOnce() -> R,
{
    let mut f = Some(f);
    move || f.take().map(|f| f())
}

/// Calls `f` `iterations` times.
pub fn times(iterations: usize, mut f: impl FnMut()) {
    for _ in 0..iterations {
        f();
    }
}

/// Fixes the first argument of a two-argument function.
pub fn partial<A, B, R>(f: impl Fn(A, B) -> R, first: A) -> impl Fn(B) -> R
where
    A: Clone,
{
    move |second| f(first.clone(), second)
}

/// Runs `steps` left to right.
pub fn pipe<T>(steps: Vec<Step<T>>) -> impl Fn(T) -> T {
    move |data| steps.iter().fold(data, |value, step| step(value))
}

/// Runs `steps` right to left.
pub fn compose<T>(steps: Vec<Step<T>>) -> impl Fn(T) -> T {
    move |data| steps.iter().rev().fold(data, |value, step| step(value))
}

/// A thunk that hands back `value` whenever it is called.
pub fn task<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Logs `label - value` at debug level and passes the value through.
pub fn trace<T: Display>(label: &str, value: T) -> T {
    debug!("{label} - {value}");
    value
}
