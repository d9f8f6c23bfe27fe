//! A-priori error bounds for the fixed-step Newton-Cotes rules.
//!
//! Each composite rule has a classical truncation bound of the form
//!
//! ```text
//! |E| <= (b - a) · h^p · M / C
//! ```
//!
//! where `M` bounds the p-th derivative of the integrand on `[a, b]`:
//!
//! | Rule | p | C |
//! |------|---|---|
//! | Midpoint  | 2 | 24  |
//! | Trapezoid | 2 | 12  |
//! | Simpson   | 4 | 180 |
//!
//! `M` is estimated by sampling the caller-supplied derivative on a uniform
//! grid, so the bound is only as good as that sampling.

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::{check_interval, midpoint_func, simpson_func, trapezoid_func};

/// Number of grid points used to estimate `max |f^(p)|` on `[a, b]`.
pub const DERIVATIVE_SAMPLES: usize = 1000;

/// Fixed-step Newton-Cotes rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NewtonCotesRule {
    /// Composite midpoint rule (needs `f''`).
    Midpoint,
    /// Composite trapezoidal rule (needs `f''`).
    Trapezoid,
    /// Composite Simpson's 1/3 rule (needs `f''''`).
    Simpson,
}

impl NewtonCotesRule {
    /// Order of the derivative that appears in the truncation bound.
    pub fn derivative_order(self) -> i32 {
        match self {
            Self::Midpoint | Self::Trapezoid => 2,
            Self::Simpson => 4,
        }
    }

    fn error_constant(self) -> f64 {
        match self {
            Self::Midpoint => 24.0,
            Self::Trapezoid => 12.0,
            Self::Simpson => 180.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Midpoint => "midpoint",
            Self::Trapezoid => "trapezoid",
            Self::Simpson => "simpson",
        }
    }

    /// Apply the rule with `n` subintervals.
    pub fn integrate<F>(self, f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Midpoint => midpoint_func(f, a, b, n),
            Self::Trapezoid => trapezoid_func(f, a, b, n),
            Self::Simpson => simpson_func(f, a, b, n),
        }
    }

    /// Upper bound on the truncation error of the rule with `n` subintervals.
    ///
    /// `derivative` must be the derivative of order
    /// [`derivative_order`](Self::derivative_order) of the integrand.
    ///
    /// # Example
    ///
    /// ```
    /// use numeth::integrate::NewtonCotesRule;
    ///
    /// // f(x) = x^2 has f'' = 2 everywhere
    /// let bound = NewtonCotesRule::Trapezoid.error_bound(|_| 2.0, 0.0, 1.0, 10).unwrap();
    /// assert!((bound - 1.0 / 600.0).abs() < 1e-15);
    /// ```
    pub fn error_bound<D>(self, derivative: D, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
    where
        D: Fn(f64) -> f64,
    {
        if n == 0 {
            return Err(IntegrateError::invalid_parameter(
                "n",
                "need at least 1 subinterval",
            ));
        }
        check_interval(a, b, self.name())?;

        let max_derivative = max_abs_sampled(&derivative, a, b)?;
        let width = b - a;
        let h = width / n as f64;

        Ok(width * h.powi(self.derivative_order()) * max_derivative / self.error_constant())
    }

    /// Smallest step count whose error bound is within `0.5 · 10^(-decimal_places)`,
    /// i.e. enough steps for the result to be correct to that many decimals.
    ///
    /// Simpson step counts are rounded up to the next even number.
    ///
    /// # Example
    ///
    /// ```
    /// use numeth::integrate::NewtonCotesRule;
    ///
    /// // ∫₀¹ x² dx to 5 decimals with the midpoint rule
    /// let n = NewtonCotesRule::Midpoint.required_steps(|_| 2.0, 0.0, 1.0, 5).unwrap();
    /// assert_eq!(n, 130);
    /// ```
    pub fn required_steps<D>(
        self,
        derivative: D,
        a: f64,
        b: f64,
        decimal_places: u32,
    ) -> IntegrateResult<usize>
    where
        D: Fn(f64) -> f64,
    {
        check_interval(a, b, self.name())?;

        let target = 0.5 * 10f64.powi(-(decimal_places as i32));
        if !(target.is_normal()) {
            return Err(IntegrateError::invalid_parameter(
                "decimal_places",
                format!("{} decimal places is beyond f64 resolution", decimal_places),
            ));
        }

        let max_derivative = max_abs_sampled(&derivative, a, b)?;
        let order = self.derivative_order();
        let width = b - a;

        // Solve (b - a)^(p+1) · M / (C · n^p) <= target for n
        let steps = (width.powi(order + 1) * max_derivative / (self.error_constant() * target))
            .powf(1.0 / order as f64)
            .ceil();

        let mut n = if steps.is_finite() && steps >= 1.0 {
            steps as usize
        } else {
            1
        };

        if self == Self::Simpson {
            n = n.max(2);
            if !n.is_multiple_of(2) {
                n += 1;
            }
        }

        Ok(n)
    }
}

/// Largest `|g(x)|` over [`DERIVATIVE_SAMPLES`] evenly spaced points of `[a, b]`,
/// endpoints included.
fn max_abs_sampled<D>(g: &D, a: f64, b: f64) -> IntegrateResult<f64>
where
    D: Fn(f64) -> f64,
{
    let step = (b - a) / (DERIVATIVE_SAMPLES - 1) as f64;

    let mut max = 0.0_f64;
    for i in 0..DERIVATIVE_SAMPLES {
        let x = if i == DERIVATIVE_SAMPLES - 1 {
            b
        } else {
            a + i as f64 * step
        };
        let value = g(x).abs();
        if !value.is_finite() {
            return Err(IntegrateError::invalid_parameter(
                "derivative",
                format!("non-finite value at x = {}", x),
            ));
        }
        max = max.max(value);
    }

    Ok(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_sin_x(x: f64) -> f64 {
        x * x.sin()
    }

    fn x_sin_x_d2(x: f64) -> f64 {
        2.0 * x.cos() - x * x.sin()
    }

    fn x_sin_x_d4(x: f64) -> f64 {
        x * x.sin() - 4.0 * x.cos()
    }

    #[test]
    fn test_fourth_derivative_helper() {
        // Central difference of the second derivative
        let h = 1e-3;
        for x in [0.0, 0.3, 0.8, 1.0] {
            let approx = (x_sin_x_d2(x + h) - 2.0 * x_sin_x_d2(x) + x_sin_x_d2(x - h)) / (h * h);
            assert!((approx - x_sin_x_d4(x)).abs() < 1e-5, "x = {}", x);
        }
    }

    #[test]
    fn test_required_steps_classic_examples() {
        assert_eq!(
            NewtonCotesRule::Midpoint
                .required_steps(|_| 2.0, 0.0, 1.0, 5)
                .unwrap(),
            130
        );
        assert_eq!(
            NewtonCotesRule::Trapezoid
                .required_steps(x_sin_x_d2, 0.0, 1.0, 5)
                .unwrap(),
            183
        );
        assert_eq!(
            NewtonCotesRule::Simpson
                .required_steps(x_sin_x_d4, 0.0, 1.0, 5)
                .unwrap(),
            10
        );
    }

    #[test]
    fn test_required_steps_meet_accuracy() {
        let exact = 1f64.sin() - 1f64.cos();
        let cases = [
            (NewtonCotesRule::Midpoint, x_sin_x_d2 as fn(f64) -> f64),
            (NewtonCotesRule::Trapezoid, x_sin_x_d2),
            (NewtonCotesRule::Simpson, x_sin_x_d4),
        ];

        for (rule, derivative) in cases {
            let n = rule.required_steps(derivative, 0.0, 1.0, 6).unwrap();
            let bound = rule.error_bound(derivative, 0.0, 1.0, n).unwrap();
            assert!(bound <= 0.5e-6, "{:?}: bound {} too large", rule, bound);

            let value = rule.integrate(x_sin_x, 0.0, 1.0, n).unwrap();
            assert!(
                (value - exact).abs() <= bound,
                "{:?}: error {} exceeds bound {}",
                rule,
                (value - exact).abs(),
                bound
            );
        }
    }

    #[test]
    fn test_zero_derivative_needs_minimal_steps() {
        // Linear integrand: f'' == 0
        assert_eq!(
            NewtonCotesRule::Trapezoid
                .required_steps(|_| 0.0, 0.0, 3.0, 8)
                .unwrap(),
            1
        );
        assert_eq!(
            NewtonCotesRule::Simpson
                .required_steps(|_| 0.0, 0.0, 3.0, 8)
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_error_bound_shrinks_with_order() {
        let coarse = NewtonCotesRule::Simpson
            .error_bound(x_sin_x_d4, 0.0, 1.0, 4)
            .unwrap();
        let fine = NewtonCotesRule::Simpson
            .error_bound(x_sin_x_d4, 0.0, 1.0, 8)
            .unwrap();
        assert!((coarse / fine - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(
            NewtonCotesRule::Midpoint
                .error_bound(|_| 1.0, 0.0, 1.0, 0)
                .is_err()
        );
        assert!(
            NewtonCotesRule::Midpoint
                .error_bound(|_| 1.0, 1.0, 0.0, 4)
                .is_err()
        );
        assert!(
            NewtonCotesRule::Trapezoid
                .required_steps(|x| 1.0 / x, 0.0, 1.0, 4)
                .is_err()
        );
        assert!(
            NewtonCotesRule::Simpson
                .required_steps(|_| 1.0, 0.0, 1.0, 400)
                .is_err()
        );
    }
}
