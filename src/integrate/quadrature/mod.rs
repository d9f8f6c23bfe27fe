//! Numerical quadrature (integration) methods.
//!
//! This module provides methods for numerically computing definite integrals
//! of scalar functions `f: ℝ → ℝ`.
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`midpoint_func`] | Fixed step count | O(h²) |
//! | [`trapezoid_func`] | Fixed step count | O(h²) |
//! | [`simpson_func`] | Fixed step count, smooth functions | O(h⁴) |
//! | [`adaptive_simpson`] | General functions | Adaptive to specified tolerance |
//!
//! # Choosing a Method
//!
//! - **Known derivative bounds**: pick a fixed-step rule and size it with
//!   [`NewtonCotesRule::required_steps`]
//! - **Unknown smoothness**: use [`adaptive_simpson`], which concentrates
//!   evaluations where the integrand varies most
//! - **Integrands that can fail**: use [`try_adaptive_simpson`]

mod adaptive;
mod error_bound;
mod midpoint;
mod simpson;
mod trapezoid;

use crate::integrate::error::{IntegrateError, IntegrateResult};

// Re-export all public items
pub use adaptive::{
    AdaptiveSimpsonOptions, AdaptiveSimpsonResult, Interval, adaptive_simpson,
    try_adaptive_simpson,
};
pub use error_bound::{DERIVATIVE_SAMPLES, NewtonCotesRule};
pub use midpoint::midpoint_func;
pub use simpson::simpson_func;
pub use trapezoid::trapezoid_func;

/// Fixed-step rules require finite bounds with `a < b`.
pub(crate) fn check_interval(a: f64, b: f64, context: &str) -> IntegrateResult<()> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(IntegrateError::invalid_interval(a, b, context));
    }
    Ok(())
}
