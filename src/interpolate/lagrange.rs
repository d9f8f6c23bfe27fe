//! Lagrange interpolating polynomial.
//!
//! The polynomial through points `(x₀, y₀), …, (xₙ₋₁, yₙ₋₁)` is kept in
//! un-expanded form
//!
//! ```text
//! p(x) = Σᵢ cᵢ · Π_{j≠i} (x − xⱼ),   cᵢ = yᵢ / Π_{j≠i} (xᵢ − xⱼ)
//! ```
//!
//! which is exactly what [`std::fmt::Display`] prints.

use std::fmt;

use crate::interpolate::error::{InterpolateError, InterpolateResult};

/// Interpolating polynomial through a set of points with distinct abscissae.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LagrangePolynomial {
    nodes: Vec<f64>,
    coefficients: Vec<f64>,
}

impl LagrangePolynomial {
    /// Build the polynomial through `points`.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `points` is empty
    /// - `InvalidNumericValue` if any coordinate is NaN or infinite
    /// - `DuplicateNode` if two points share an abscissa
    pub fn new(points: &[(f64, f64)]) -> InterpolateResult<Self> {
        const CONTEXT: &str = "LagrangePolynomial::new";

        if points.is_empty() {
            return Err(InterpolateError::EmptyInput {
                context: format!("{}: at least one point is required", CONTEXT),
            });
        }

        if let Some(&value) = points
            .iter()
            .flat_map(|(x, y)| [x, y])
            .find(|v| !v.is_finite())
        {
            return Err(InterpolateError::InvalidNumericValue {
                value,
                context: CONTEXT.to_string(),
            });
        }

        let nodes: Vec<f64> = points.iter().map(|&(x, _)| x).collect();
        let mut coefficients = Vec::with_capacity(points.len());

        for (i, &(xi, yi)) in points.iter().enumerate() {
            let mut denominator = 1.0;
            for (j, &xj) in nodes.iter().enumerate() {
                if j == i {
                    continue;
                }
                if xi == xj {
                    return Err(InterpolateError::DuplicateNode {
                        x: xi,
                        context: CONTEXT.to_string(),
                    });
                }
                denominator *= xi - xj;
            }
            coefficients.push(yi / denominator);
        }

        Ok(Self {
            nodes,
            coefficients,
        })
    }

    /// Abscissae of the interpolation points, in input order.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Weights `cᵢ` of the un-expanded form.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Polynomial degree bound (number of points minus one).
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let product: f64 = self
                    .nodes
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &xj)| x - xj)
                    .product();
                c * product
            })
            .sum()
    }
}

impl fmt::Display for LagrangePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{:?}", c)?;
            for (j, xj) in self.nodes.iter().enumerate() {
                if j != i {
                    write!(f, "*(x - {:?})", xj)?;
                }
            }
        }
        Ok(())
    }
}
