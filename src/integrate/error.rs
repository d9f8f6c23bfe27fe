//! Error types for numerical integration operations.

use thiserror::Error;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during numerical integration.
///
/// Non-convergence of the adaptive engine is reported through
/// `converged = false` on its result rather than through this type;
/// [`IntegrateError::DidNotConverge`] exists for callers that want to
/// escalate it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    /// The solver did not converge within the iteration ceiling.
    #[error("{context}: did not converge after {iterations} iterations (tolerance: {tolerance:.2e})")]
    DidNotConverge {
        iterations: usize,
        tolerance: f64,
        context: String,
    },

    /// Invalid interval provided (e.g., a > b, or non-finite bounds).
    #[error("Invalid interval [{a}, {b}] in {context}: bounds must be finite and satisfy a <= b")]
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },
}

impl IntegrateError {
    pub(crate) fn invalid_parameter(parameter: &str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_interval(a: f64, b: f64, context: &str) -> Self {
        Self::InvalidInterval {
            a,
            b,
            context: context.to_string(),
        }
    }
}
