//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas.
//! It has O(h²) accuracy for smooth functions.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::check_interval;

/// Integrate a function using the composite trapezoidal rule.
///
/// For uniform spacing `h = (b - a) / n`:
/// `integral = h * (f(a)/2 + f(a + h) + ... + f(b - h) + f(b)/2)`
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals
///
/// # Errors
///
/// Returns an error if `n == 0` or the bounds are not finite with `a < b`.
///
/// # Example
///
/// ```
/// use numeth::integrate::trapezoid_func;
///
/// // Integrate y = x^2 from 0 to 1 with 100 steps
/// let result = trapezoid_func(|x| x * x, 0.0, 1.0, 100).unwrap();
/// assert!((result - 1.0/3.0).abs() < 1e-4);
/// ```
pub fn trapezoid_func<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(IntegrateError::invalid_parameter(
            "n",
            "need at least 1 subinterval",
        ));
    }
    check_interval(a, b, "trapezoid_func")?;

    let h = (b - a) / n as f64;

    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }

    Ok(h * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_trapezoid_constant() {
        // Integral of constant function = constant * width
        let result = trapezoid_func(|_| 5.0, 0.0, 4.0, 4).unwrap();
        assert!((result - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_linear() {
        // Exact for linear functions
        let result = trapezoid_func(|x| x, 0.0, 1.0, 10).unwrap();
        assert!((result - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_single_step() {
        let result = trapezoid_func(|x| x * x, 0.0, 2.0, 1).unwrap();
        assert!((result - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_quadratic() {
        let result = trapezoid_func(|x| x * x, 0.0, 1.0, 1000).unwrap();
        assert!((result - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_trapezoid_sin() {
        let result = trapezoid_func(|x| x.sin(), 0.0, PI, 1000).unwrap();
        assert!((result - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_trapezoid_errors() {
        assert!(trapezoid_func(|x| x, 0.0, 1.0, 0).is_err());
        assert!(trapezoid_func(|x| x, 2.0, 1.0, 10).is_err());
        assert!(trapezoid_func(|x| x, f64::NAN, 1.0, 10).is_err());
    }
}
