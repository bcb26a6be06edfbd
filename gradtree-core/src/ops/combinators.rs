// gradtree-core/src/ops/combinators.rs
//
// Higher-order sequence combinators. All of them are pure and build a new
// sequence; inputs are never mutated.

use num_traits::Float;

use crate::ops::scalar::{add, mul, neg};

/// Returns a function that applies `f` elementwise to a slice, producing a
/// new vector of the same length.
pub fn map<T, F>(f: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Copy,
    F: Fn(T) -> T,
{
    move |values| values.iter().map(|&x| f(x)).collect()
}

/// Returns a function that combines two slices pairwise with `f`.
///
/// The output length is the shorter of the two inputs; pairing stops when
/// either side is exhausted.
pub fn zip_with<T, F>(f: F) -> impl Fn(&[T], &[T]) -> Vec<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    move |lhs, rhs| lhs.iter().zip(rhs.iter()).map(|(&x, &y)| f(x, y)).collect()
}

/// Returns a function that left-folds a slice into a single value, with
/// `start` as the seed when the slice is empty.
pub fn reduce<T, F>(f: F, start: T) -> impl Fn(&[T]) -> T
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    move |values| values.iter().fold(start, |acc, &x| f(acc, x))
}

/// Negates every element of a slice.
pub fn neg_list<T: Float>(values: &[T]) -> Vec<T> {
    map(neg)(values)
}

/// Adds two slices elementwise.
pub fn add_lists<T: Float>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    zip_with(add)(lhs, rhs)
}

/// Sums a slice; the empty slice sums to 0.
pub fn sum<T: Float>(values: &[T]) -> T {
    reduce(add, T::zero())(values)
}

/// Takes the product of a slice; the empty slice multiplies to 1.
pub fn prod<T: Float>(values: &[T]) -> T {
    reduce(mul, T::one())(values)
}

// --- Tests ---
#[cfg(test)]
#[path = "combinators_test.rs"]
mod tests; // Link to the test file
