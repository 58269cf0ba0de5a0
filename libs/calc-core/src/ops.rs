//! Stateless arithmetic operations
//!
//! Pure functions with no shared state: identical inputs always produce
//! identical outputs. The stateful [`Calculator`](crate::Calculator) is
//! layered on top of these without duplicating the arithmetic.

use crate::error::{CalcError, Result};

/// Add two numbers
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Multiply two numbers
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide two numbers
///
/// # Errors
/// Returns [`CalcError::DivisionByZero`] when `b` is zero. A zero divisor
/// never produces infinity or NaN.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Calculate the arithmetic mean of a sequence of numbers
///
/// Standard floating-point summation, `sum / len`.
///
/// # Errors
/// Returns [`CalcError::EmptyInput`] when `values` is empty.
pub fn calculate_average(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(CalcError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round to specified decimal places
///
/// Rounding rule: half away from zero (`2.5 -> 3`, `-2.5 -> -3`), i.e. the
/// behavior of [`f64::round`] applied to the scaled value.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.0, 1.0), 0.0);
    }

    #[test]
    fn test_add_commutative() {
        assert_eq!(add(10.5, 3.25), add(3.25, 10.5));
        // Repeated calls are deterministic
        assert_eq!(add(10.5, 3.25), add(10.5, 3.25));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
    }

    #[test]
    fn test_multiply_commutative() {
        assert_eq!(multiply(7.0, 0.5), multiply(0.5, 7.0));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(divide(7.0, 2.0).unwrap(), 3.5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        // Zero dividend is not special
        assert_eq!(divide(0.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(
            divide(1.0, 0.0).unwrap_err().to_string(),
            "Cannot divide by zero"
        );
    }

    #[test]
    fn test_calculate_average() {
        assert_eq!(calculate_average(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(
            calculate_average(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap(),
            30.0
        );
        // Singleton averages to itself
        assert_eq!(calculate_average(&[42.5]).unwrap(), 42.5);
    }

    #[test]
    fn test_calculate_average_empty() {
        assert_eq!(calculate_average(&[]), Err(CalcError::EmptyInput));
        assert_eq!(
            calculate_average(&[]).unwrap_err().to_string(),
            "Cannot calculate average of empty list"
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(3.145, 2), 3.15);
        assert_eq!(round_to(3.14159, 0), 3.0);
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }
}
