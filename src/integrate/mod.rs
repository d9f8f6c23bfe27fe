//! Numerical integration for numeth.
//!
//! This module provides quadrature of scalar functions over finite intervals:
//! - **Fixed-step rules**: midpoint, trapezoid and Simpson with `n` subintervals
//! - **Error bounds**: a-priori truncation bounds and the step counts they imply
//! - **Adaptive Simpson**: stack-driven subdivision with local error estimation
//!
//! # Example
//!
//! ```
//! use numeth::integrate::{adaptive_simpson, simpson_func, AdaptiveSimpsonOptions};
//!
//! let f = |x: f64| x * x.sin();
//!
//! let fixed = simpson_func(f, 0.0, 1.0, 8)?;
//! let adaptive = adaptive_simpson(f, 0.0, 1.0, &AdaptiveSimpsonOptions::default())?;
//!
//! assert!((fixed - adaptive.integral).abs() < 1e-5);
//! # Ok::<(), numeth::integrate::IntegrateError>(())
//! ```

pub mod error;
pub mod quadrature;

// Re-export error types
pub use error::{IntegrateError, IntegrateResult};

// Re-export quadrature
pub use quadrature::{
    AdaptiveSimpsonOptions, AdaptiveSimpsonResult, Interval, NewtonCotesRule, adaptive_simpson,
    midpoint_func, simpson_func, trapezoid_func, try_adaptive_simpson,
};
