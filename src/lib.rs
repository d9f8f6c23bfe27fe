//! # numeth
//!
//! Classical numerical methods for scalar functions.
//!
//! - [`integrate`] - Fixed-step Newton-Cotes rules, a-priori error bounds and
//!   adaptive Simpson quadrature
//! - [`optimize`] - Bisection, Newton, fixed-point iteration and Newton-Raphson
//!   for systems
//! - [`interpolate`] - Lagrange interpolating polynomials
//!
//! Every solver takes an options struct with sensible defaults and returns a
//! result struct; argument errors are reported through per-module error enums.
//!
//! # Example
//!
//! ```
//! use numeth::integrate::{adaptive_simpson, AdaptiveSimpsonOptions};
//!
//! let result = adaptive_simpson(|x| x * x, 0.0, 1.0, &AdaptiveSimpsonOptions::default())?;
//! assert!(result.converged);
//! assert!((result.integral - 1.0 / 3.0).abs() < 1e-12);
//! # Ok::<(), numeth::integrate::IntegrateError>(())
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for options and result types

pub mod integrate;
pub mod interpolate;
pub mod optimize;
