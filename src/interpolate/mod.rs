//! Polynomial interpolation for numeth.
//!
//! # Example
//!
//! ```
//! use numeth::interpolate::LagrangePolynomial;
//!
//! let p = LagrangePolynomial::new(&[(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)])?;
//! assert!((p.evaluate(3.0) - 13.0).abs() < 1e-12);
//! # Ok::<(), numeth::interpolate::InterpolateError>(())
//! ```

pub mod error;
pub mod lagrange;

pub use error::{InterpolateError, InterpolateResult};
pub use lagrange::LagrangePolynomial;
