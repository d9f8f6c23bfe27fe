//! Error types for root finding operations.

use thiserror::Error;

/// Result type for root finding operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur during root finding.
///
/// Running out of iterations is not an error: solvers return their last
/// iterate with `converged = false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// Invalid bracket (e.g., a >= b, or non-finite endpoints).
    #[error("Invalid interval [{a}, {b}] in {context}: bounds must be finite and satisfy a < b")]
    InvalidInterval { a: f64, b: f64, context: String },

    /// Bracketing method requires f(a) and f(b) to have opposite signs.
    #[error("{context}: f(a) = {fa:.6e} and f(b) = {fb:.6e} have the same sign")]
    SameSignBracket { fa: f64, fb: f64, context: String },

    /// Invalid input (empty or mismatched dimensions).
    #[error("Invalid input: {context}")]
    InvalidInput { context: String },

    /// Invalid parameter value.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Numerical computation failed (e.g., vanishing derivative, singular Jacobian).
    #[error("Numerical error: {message}")]
    NumericalError { message: String },
}
