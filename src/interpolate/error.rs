//! Error types for interpolation operations.

use thiserror::Error;

/// Result type for interpolation operations.
pub type InterpolateResult<T> = Result<T, InterpolateError>;

/// Errors that can occur during interpolation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolateError {
    /// No data points were supplied.
    #[error("Empty input: {context}")]
    EmptyInput { context: String },

    /// Two data points share the same abscissa.
    #[error("Duplicate node x = {x} in {context}: abscissae must be distinct")]
    DuplicateNode { x: f64, context: String },

    /// NaN or infinite value in the input data.
    #[error("Invalid value {value} in {context}: data must be finite")]
    InvalidNumericValue { value: f64, context: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InterpolateError::DuplicateNode {
            x: 1.5,
            context: "LagrangePolynomial::new".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate node x = 1.5 in LagrangePolynomial::new: abscissae must be distinct"
        );
    }
}
