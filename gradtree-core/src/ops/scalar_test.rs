use crate::error::GradTreeError;
use crate::ops::scalar::*;
use approx::assert_relative_eq;

#[test]
fn test_arithmetic_basics() {
    assert_eq!(add(2.0, 3.0), 5.0);
    assert_eq!(mul(2.0, 3.0), 6.0);
    assert_eq!(neg(4.0), -4.0);
    assert_eq!(id(7.5), 7.5);
}

#[test]
fn test_comparisons() {
    assert!(lt(1.0, 2.0));
    assert!(!lt(2.0, 2.0));
    assert!(eq(2.0, 2.0));
    assert!(!eq(2.0, 2.5));
}

#[test]
fn test_max_tie_resolution() {
    // Rule is "x if x >= y else y": equal inputs return the first operand.
    assert_eq!(max(3.0, 3.0), 3.0);
    assert_eq!(max(3.0, 5.0), 5.0);
    assert_eq!(max(5.0, 3.0), 5.0);
    // Sign of zero distinguishes which operand won the tie.
    assert!(max(0.0_f64, -0.0).is_sign_positive());
    assert!(max(-0.0_f64, 0.0).is_sign_negative());
}

#[test]
fn test_is_close_threshold() {
    assert!(is_close(1.0, 1.0));
    assert!(is_close(1.0, 1.0 + 1e-6));
    assert!(!is_close(1.0, 1.0 + 2e-5));
    assert!(!is_close(1.0, 2.0));
}

#[test]
fn test_sigmoid() {
    assert_eq!(sigmoid(0.0), 0.5);
    assert_relative_eq!(sigmoid(1.0), 1.0 / (1.0 + (-1.0f64).exp()), epsilon = 1e-12);
    // sigmoid(-x) == 1 - sigmoid(x)
    assert_relative_eq!(sigmoid(-2.0) + sigmoid(2.0), 1.0, epsilon = 1e-12);
    assert!(sigmoid(40.0) > 0.999_999);
    assert!(sigmoid(-40.0) < 1e-6);
}

#[test]
fn test_relu() {
    assert_eq!(relu(3.0), 3.0);
    assert_eq!(relu(-2.0), 0.0);
    assert_eq!(relu(0.0), 0.0);
}

#[test]
fn test_log_and_exp() {
    assert_eq!(log(1.0), 0.0);
    assert_relative_eq!(log(exp(3.0)), 3.0, epsilon = 1e-12);
    assert_relative_eq!(exp(0.0), 1.0, epsilon = 1e-12);
    // log does not validate its domain; it follows `ln` for bad inputs.
    assert!(log(0.0_f64).is_infinite());
    assert!(log(-1.0_f64).is_nan());
}

#[test]
fn test_inv() -> Result<(), GradTreeError> {
    assert_eq!(inv(2.0)?, 0.5);
    assert_eq!(inv(-4.0)?, -0.25);
    let err = inv(0.0_f64).unwrap_err();
    assert_eq!(
        err,
        GradTreeError::DomainError {
            operation: "inv".to_string(),
            input: 0.0,
        }
    );
    Ok(())
}

#[test]
fn test_log_back() -> Result<(), GradTreeError> {
    // d/dx log(x) = 1/x, times the upstream gradient.
    assert_eq!(log_back(2.0, 4.0)?, 2.0);
    assert_eq!(log_back(1.0, 1.0)?, 1.0);
    assert!(log_back(0.0, 1.0).is_err());
    assert!(log_back(-3.0, 1.0).is_err());
    Ok(())
}

#[test]
fn test_inv_back() -> Result<(), GradTreeError> {
    // d/dx (1/x) = -1/x^2, times the upstream gradient.
    assert_eq!(inv_back(2.0, 8.0)?, -2.0);
    assert_relative_eq!(inv_back(4.0, 1.0)?, -1.0 / 16.0, epsilon = 1e-12);
    let err = inv_back(0.0_f64, 1.0).unwrap_err();
    assert_eq!(
        err,
        GradTreeError::DomainError {
            operation: "inv_back".to_string(),
            input: 0.0,
        }
    );
    Ok(())
}

#[test]
fn test_relu_back() {
    assert_eq!(relu_back(1.0, 5.0), 5.0);
    assert_eq!(relu_back(-1.0, 5.0), 0.0);
    // The zero point carries no gradient.
    assert_eq!(relu_back(0.0, 5.0), 0.0);
}

#[test]
fn test_operators_support_f32() {
    assert_eq!(add(1.5_f32, 2.5_f32), 4.0_f32);
    assert_eq!(sigmoid(0.0_f32), 0.5_f32);
    assert_eq!(relu(-1.0_f32), 0.0_f32);
    assert!(is_close(1.0_f32, 1.0_f32 + 1e-6));
}
