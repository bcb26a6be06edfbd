// gradtree-core/src/ops/scalar.rs
//
// The fixed catalog of scalar operators and their derivative rules. Every
// function is pure and generic over `num_traits::Float`, so f32 and f64 are
// both supported. The `_back` functions compute the local derivative times
// the upstream gradient (chain rule).

use crate::error::GradTreeError;
use num_traits::{Float, ToPrimitive};

fn domain_error<T: Float + ToPrimitive>(operation: &str, input: T) -> GradTreeError {
    GradTreeError::DomainError {
        operation: operation.to_string(),
        input: input.to_f64().unwrap_or(f64::NAN),
    }
}

/// Multiplies two numbers.
pub fn mul<T: Float>(x: T, y: T) -> T {
    x * y
}

/// Returns the input unchanged.
pub fn id<T: Float>(x: T) -> T {
    x
}

/// Adds two numbers.
pub fn add<T: Float>(x: T, y: T) -> T {
    x + y
}

/// Negates a number.
pub fn neg<T: Float>(x: T) -> T {
    -x
}

/// Strict less-than comparison.
pub fn lt<T: Float>(x: T, y: T) -> bool {
    x < y
}

/// Equality comparison.
pub fn eq<T: Float>(x: T, y: T) -> bool {
    x == y
}

/// Returns the larger of two numbers: `x` if `x >= y`, else `y`.
///
/// Equal inputs resolve to the first operand. [`relu`] relies on this tie
/// rule at `x == 0`.
pub fn max<T: Float>(x: T, y: T) -> T {
    if x >= y {
        x
    } else {
        y
    }
}

/// Checks whether two numbers are close in value: `|x - y| < 1e-5`.
pub fn is_close<T: Float>(x: T, y: T) -> bool {
    let tolerance = T::from(1e-5).unwrap_or_else(T::epsilon);
    (x - y).abs() < tolerance
}

/// The sigmoid function, `1 / (1 + exp(-x))`.
///
/// No overflow guard is applied; large-magnitude inputs saturate the way
/// the underlying `exp` does.
pub fn sigmoid<T: Float>(x: T) -> T {
    T::one() / (T::one() + (-x).exp())
}

/// The rectified linear unit, `max(0, x)`, using the same tie rule as
/// [`max`] so that `relu(0) == 0`.
pub fn relu<T: Float>(x: T) -> T {
    max(T::zero(), x)
}

/// The natural logarithm.
///
/// The domain `x > 0` is not validated here: non-positive inputs yield
/// `-inf`/NaN following the underlying `ln`. The backward counterpart
/// [`log_back`] does validate its domain.
pub fn log<T: Float>(x: T) -> T {
    x.ln()
}

/// The natural exponential.
pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}

/// The reciprocal, `1 / x`.
///
/// # Errors
/// Returns [`GradTreeError::DomainError`] if `x == 0`.
pub fn inv<T: Float>(x: T) -> Result<T, GradTreeError> {
    if x == T::zero() {
        return Err(domain_error("inv", x));
    }
    Ok(T::one() / x)
}

/// The derivative of [`log`] times the upstream gradient:
/// `upstream_grad * (1 / x)`.
///
/// # Errors
/// Returns [`GradTreeError::DomainError`] if `x <= 0`.
pub fn log_back<T: Float>(x: T, upstream_grad: T) -> Result<T, GradTreeError> {
    if x <= T::zero() {
        return Err(domain_error("log_back", x));
    }
    Ok(upstream_grad * (T::one() / x))
}

/// The derivative of [`inv`] times the upstream gradient:
/// `upstream_grad * (-1 / x²)`.
///
/// # Errors
/// Returns [`GradTreeError::DomainError`] if `x == 0`.
pub fn inv_back<T: Float>(x: T, upstream_grad: T) -> Result<T, GradTreeError> {
    if x == T::zero() {
        return Err(domain_error("inv_back", x));
    }
    Ok(upstream_grad * (-T::one() / (x * x)))
}

/// The derivative of [`relu`] times the upstream gradient: `upstream_grad`
/// if `x > 0`, else `0`.
pub fn relu_back<T: Float>(x: T, upstream_grad: T) -> T {
    if x > T::zero() {
        upstream_grad
    } else {
        T::zero()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests; // Link to the test file
