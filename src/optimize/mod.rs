//! Root finding for numeth.
//!
//! # Modules
//!
//! - [`scalar`] - Univariate root finding and fixed-point iteration
//! - [`roots`] - Multivariate root finding (systems of nonlinear equations)
//! - [`utils`] - Dense linear-algebra helpers used by the multivariate solvers
//!
//! # Example
//!
//! ```
//! use numeth::optimize::{bisect, ScalarOptions};
//!
//! let result = bisect(|x| x * x - 4.0, 0.0, 3.0, &ScalarOptions::default())?;
//! assert!((result.root - 2.0).abs() < 1e-6);
//! # Ok::<(), numeth::optimize::OptimizeError>(())
//! ```

pub mod error;
pub mod roots;
pub mod scalar;
pub mod utils;

// Re-export error types
pub use error::{OptimizeError, OptimizeResult};

// Re-export scalar solvers
pub use scalar::{
    FixedPointOptions, FixedPointResult, RootResult, ScalarOptions, bisect, bisect_iterations,
    fixed_point, newton,
};

// Re-export multivariate solvers
pub use roots::{
    LinearSystem, MultiRootResult, RootOptions, newton_system, newton_system_with_jacobian,
};
