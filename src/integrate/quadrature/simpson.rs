//! Simpson's rule for numerical integration.
//!
//! Simpson's rule uses parabolic approximation between sample points,
//! achieving O(h⁴) accuracy for smooth functions and exact results for
//! polynomials up to degree 3.

use std::convert::Infallible;

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::check_interval;

/// Integrate a function using the composite Simpson's 1/3 rule.
///
/// Evaluates `f` at `n + 1` evenly-spaced nodes with weights
/// `1, 4, 2, 4, ..., 2, 4, 1` scaled by `h / 3`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (an odd count is rounded up to even)
///
/// # Errors
///
/// Returns an error if `n < 2` or the bounds are not finite with `a < b`.
///
/// # Example
///
/// ```
/// use numeth::integrate::simpson_func;
///
/// // Integrate sin(x) from 0 to pi
/// let result = simpson_func(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100).unwrap();
/// assert!((result - 2.0).abs() < 1e-6);
/// ```
pub fn simpson_func<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n < 2 {
        return Err(IntegrateError::invalid_parameter(
            "n",
            "need at least 2 subintervals",
        ));
    }
    check_interval(a, b, "simpson_func")?;

    let n_intervals = if n.is_multiple_of(2) { n } else { n + 1 };

    let result = composite_simpson(&mut |x| Ok::<f64, Infallible>(f(x)), a, b, n_intervals);
    match result {
        Ok(value) => Ok(value),
        Err(never) => match never {},
    }
}

/// Composite Simpson kernel shared with the adaptive engine.
///
/// Performs no validation: callers guarantee `n >= 2`, `n` even and
/// `a < b`. Integrand errors abort the sum and are returned unchanged.
pub(crate) fn composite_simpson<F, E>(f: &mut F, a: f64, b: f64, n: usize) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let h = (b - a) / n as f64;

    let mut sum = f(a)? + f(b)?;
    for i in 1..n {
        let weight = if i.is_multiple_of(2) { 2.0 } else { 4.0 };
        sum += weight * f(a + i as f64 * h)?;
    }

    Ok(h * sum / 3.0)
}
