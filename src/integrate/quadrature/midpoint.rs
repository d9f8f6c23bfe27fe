//! Midpoint rule for numerical integration.
//!
//! Samples the integrand at the centre of each subinterval. Like the
//! trapezoidal rule it is O(h²), with half the leading error constant.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::check_interval;

/// Integrate a function using the composite midpoint rule.
///
/// `integral = h * Σ f(a + (i + 1/2) h)` for `i` in `0..n`.
///
/// # Errors
///
/// Returns an error if `n == 0` or the bounds are not finite with `a < b`.
///
/// # Example
///
/// ```
/// use numeth::integrate::midpoint_func;
///
/// let result = midpoint_func(|x| x * x, 0.0, 1.0, 200).unwrap();
/// assert!((result - 1.0/3.0).abs() < 1e-5);
/// ```
pub fn midpoint_func<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(IntegrateError::invalid_parameter(
            "n",
            "need at least 1 subinterval",
        ));
    }
    check_interval(a, b, "midpoint_func")?;

    let h = (b - a) / n as f64;
    let sum: f64 = (0..n).map(|i| f(a + (i as f64 + 0.5) * h)).sum();

    Ok(sum * h)
}
