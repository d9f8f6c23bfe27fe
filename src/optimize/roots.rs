//! Multivariate root finding algorithms.
//!
//! This module provides Newton-Raphson iteration for systems of equations.
//! Given F: R^n -> R^n, find x such that F(x) = 0.

// Indexed loops are clearer for matrix operations
#![allow(clippy::needless_range_loop)]

use tracing::{debug, warn};

use crate::optimize::error::{OptimizeError, OptimizeResult};
use crate::optimize::utils::{finite_difference_jacobian, norm, solve_linear_system};

/// Options for multivariate root finding.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Tolerance for convergence (norm of F(x))
    pub tol: f64,
    /// Tolerance for step size
    pub x_tol: f64,
    /// Step size for finite difference Jacobian approximation
    pub eps: f64,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-10,
            x_tol: 1e-12,
            eps: 1e-8,
        }
    }
}

/// Result from a multivariate root finding method.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiRootResult {
    /// The root found
    pub x: Vec<f64>,
    /// Function value at root (should be near zero)
    pub fun: Vec<f64>,
    /// Number of iterations used
    pub iterations: usize,
    /// Norm of the residual
    pub residual_norm: f64,
    /// Whether the method converged
    pub converged: bool,
}

/// Newton's method for systems of nonlinear equations.
///
/// # Arguments
/// * `f` - Function F: R^n -> R^n to find root of
/// * `x0` - Initial guess
/// * `options` - Solver options
///
/// # Returns
/// Root of `F` (where F(x) ≈ 0)
///
/// # Note
/// Uses forward finite differences to approximate the Jacobian.
/// Has quadratic convergence near the root but may diverge if x0 is far from root.
///
/// # Example
///
/// ```
/// use numeth::optimize::{newton_system, RootOptions};
///
/// // x^2 + y^2 = 4, x = y
/// let f = |v: &[f64]| vec![v[0] * v[0] + v[1] * v[1] - 4.0, v[0] - v[1]];
/// let result = newton_system(f, &[1.0, 0.5], &RootOptions::default()).unwrap();
/// assert!(result.converged);
/// assert!((result.x[0] - 2f64.sqrt()).abs() < 1e-8);
/// ```
pub fn newton_system<F>(f: F, x0: &[f64], options: &RootOptions) -> OptimizeResult<MultiRootResult>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let eps = options.eps;
    newton_iterate(
        &f,
        |x: &[f64], fx: &[f64]| finite_difference_jacobian(&f, x, fx, eps),
        x0,
        options,
        "newton_system",
    )
}

/// Newton's method with a caller-supplied Jacobian.
///
/// `jac(x)` must return the n×n matrix `J[i][j] = ∂Fᵢ/∂xⱼ`.
pub fn newton_system_with_jacobian<F, J>(
    f: F,
    jac: J,
    x0: &[f64],
    options: &RootOptions,
) -> OptimizeResult<MultiRootResult>
where
    F: Fn(&[f64]) -> Vec<f64>,
    J: Fn(&[f64]) -> Vec<Vec<f64>>,
{
    let n = x0.len();
    newton_iterate(
        &f,
        |x: &[f64], _fx: &[f64]| {
            let jacobian = jac(x);
            if jacobian.len() != n || jacobian.iter().any(|row| row.len() != n) {
                return Err(OptimizeError::InvalidInput {
                    context: format!(
                        "newton_system_with_jacobian: Jacobian must be {}x{}",
                        n, n
                    ),
                });
            }
            Ok(jacobian)
        },
        x0,
        options,
        "newton_system_with_jacobian",
    )
}

fn newton_iterate<F, J>(
    f: &F,
    jacobian_at: J,
    x0: &[f64],
    options: &RootOptions,
    context: &str,
) -> OptimizeResult<MultiRootResult>
where
    F: Fn(&[f64]) -> Vec<f64>,
    J: Fn(&[f64], &[f64]) -> OptimizeResult<Vec<Vec<f64>>>,
{
    let n = x0.len();
    if n == 0 {
        return Err(OptimizeError::InvalidInput {
            context: format!("{}: empty initial guess", context),
        });
    }

    let mut x = x0.to_vec();
    let mut fx = f(&x);

    if fx.len() != n {
        return Err(OptimizeError::InvalidInput {
            context: format!(
                "{}: function returns {} values but input has {} dimensions (equation count must equal variable count)",
                context,
                fx.len(),
                n
            ),
        });
    }

    for iter in 0..options.max_iter {
        let res_norm = norm(&fx);

        // Check convergence
        if res_norm < options.tol {
            debug!(iterations = iter, residual_norm = res_norm, "{} converged", context);
            return Ok(MultiRootResult {
                x,
                fun: fx,
                iterations: iter,
                residual_norm: res_norm,
                converged: true,
            });
        }

        let jacobian = jacobian_at(&x, &fx)?;

        // Solve J * dx = -F(x)
        let neg_fx: Vec<f64> = fx.iter().map(|v| -v).collect();
        let dx = solve_linear_system(&jacobian, &neg_fx).ok_or_else(|| {
            OptimizeError::NumericalError {
                message: format!("Singular Jacobian in {}", context),
            }
        })?;

        for i in 0..n {
            x[i] += dx[i];
        }
        fx = f(&x);
        if fx.len() != n {
            return Err(OptimizeError::InvalidInput {
                context: format!(
                    "{}: function returned {} values after step {}, expected {}",
                    context,
                    fx.len(),
                    iter + 1,
                    n
                ),
            });
        }

        // Check step size convergence
        if norm(&dx) < options.x_tol {
            let residual_norm = norm(&fx);
            debug!(iterations = iter + 1, residual_norm, "{} converged on step size", context);
            return Ok(MultiRootResult {
                x,
                fun: fx,
                iterations: iter + 1,
                residual_norm,
                converged: true,
            });
        }
    }

    let residual_norm = norm(&fx);
    if residual_norm < options.tol {
        return Ok(MultiRootResult {
            x,
            fun: fx,
            iterations: options.max_iter,
            residual_norm,
            converged: true,
        });
    }

    warn!(
        iterations = options.max_iter,
        residual_norm,
        tol = options.tol,
        "{} reached maximum iterations",
        context
    );

    Ok(MultiRootResult {
        x,
        fun: fx,
        iterations: options.max_iter,
        residual_norm,
        converged: false,
    })
}

/// A square linear system `A · x = b` posed as the root problem `A · x - b = 0`.
///
/// # Example
///
/// ```
/// use numeth::optimize::{LinearSystem, RootOptions};
///
/// let system = LinearSystem::new(
///     vec![
///         vec![1.0, -2.0, 3.0],
///         vec![2.0, 1.0, 1.0],
///         vec![-3.0, 2.0, -2.0],
///     ],
///     vec![7.0, 4.0, -10.0],
/// )
/// .unwrap();
///
/// let result = system.solve_newton(&[0.0, 0.0, 0.0], &RootOptions::default()).unwrap();
/// assert!((result.x[0] - 2.0).abs() < 1e-10);
/// assert!((result.x[1] + 1.0).abs() < 1e-10);
/// assert!((result.x[2] - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSystem {
    coefficients: Vec<Vec<f64>>,
    rhs: Vec<f64>,
}

impl LinearSystem {
    /// Create a system from its coefficient rows and right-hand side.
    ///
    /// # Errors
    /// `InvalidInput` if the system is empty, not square, or the
    /// right-hand side length differs from the number of equations.
    pub fn new(coefficients: Vec<Vec<f64>>, rhs: Vec<f64>) -> OptimizeResult<Self> {
        let equations = coefficients.len();
        if equations == 0 {
            return Err(OptimizeError::InvalidInput {
                context: "LinearSystem: no equations".to_string(),
            });
        }
        if let Some(row) = coefficients.iter().find(|row| row.len() != equations) {
            return Err(OptimizeError::InvalidInput {
                context: format!(
                    "LinearSystem: {} equations but a row has {} variables",
                    equations,
                    row.len()
                ),
            });
        }
        if rhs.len() != equations {
            return Err(OptimizeError::InvalidInput {
                context: format!(
                    "LinearSystem: right-hand side has {} entries for {} equations",
                    rhs.len(),
                    equations
                ),
            });
        }

        Ok(Self { coefficients, rhs })
    }

    /// Number of equations (and unknowns).
    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }

    /// Coefficient matrix `A`.
    pub fn coefficients(&self) -> &[Vec<f64>] {
        &self.coefficients
    }

    /// Right-hand side `b`.
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// Residual `A · x - b`.
    pub fn residual(&self, x: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(self.rhs.iter())
            .map(|(row, bi)| row.iter().zip(x.iter()).map(|(a, xi)| a * xi).sum::<f64>() - bi)
            .collect()
    }

    /// Jacobian of the residual, which is `A` everywhere.
    pub fn jacobian(&self) -> Vec<Vec<f64>> {
        self.coefficients.clone()
    }

    /// Solve by Newton-Raphson iteration from `x0` using the exact Jacobian.
    pub fn solve_newton(&self, x0: &[f64], options: &RootOptions) -> OptimizeResult<MultiRootResult> {
        if x0.len() != self.dimension() {
            return Err(OptimizeError::InvalidInput {
                context: format!(
                    "LinearSystem: initial guess has {} entries for {} unknowns",
                    x0.len(),
                    self.dimension()
                ),
            });
        }

        newton_system_with_jacobian(|x| self.residual(x), |_| self.jacobian(), x0, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom_system() -> LinearSystem {
        LinearSystem::new(
            vec![
                vec![1.0, -2.0, 3.0],
                vec![2.0, 1.0, 1.0],
                vec![-3.0, 2.0, -2.0],
            ],
            vec![7.0, 4.0, -10.0],
        )
        .unwrap()
    }

    #[test]
    fn test_linear_system_single_newton_step() {
        let result = classroom_system()
            .solve_newton(&[5.0, -3.0, 8.0], &RootOptions::default())
            .unwrap();

        assert!(result.converged);
        // Exact Jacobian: one step lands on the solution
        assert_eq!(result.iterations, 1);
        for (xi, expected) in result.x.iter().zip([2.0, -1.0, 1.0]) {
            assert!((xi - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_linear_system_residual() {
        let system = classroom_system();
        let r = system.residual(&[2.0, -1.0, 1.0]);
        assert!(norm(&r) < 1e-14);
        assert_eq!(system.residual(&[0.0, 0.0, 0.0]), vec![-7.0, -4.0, 10.0]);
    }

    #[test]
    fn test_linear_system_validation() {
        assert!(LinearSystem::new(vec![], vec![]).is_err());
        assert!(LinearSystem::new(vec![vec![1.0, 2.0]], vec![1.0]).is_err());
        assert!(LinearSystem::new(vec![vec![1.0]], vec![1.0, 2.0]).is_err());
        assert!(
            classroom_system()
                .solve_newton(&[0.0, 0.0], &RootOptions::default())
                .is_err()
        );
    }

    #[test]
    fn test_linear_system_singular() {
        let system = LinearSystem::new(vec![vec![1.0, 2.0], vec![2.0, 4.0]], vec![1.0, 2.0]).unwrap();
        let result = system.solve_newton(&[0.0, 0.0], &RootOptions::default());
        assert!(matches!(result, Err(OptimizeError::NumericalError { .. })));
    }

    #[test]
    fn test_newton_system_nonlinear() {
        // x^2 + y^2 = 4, x*y = 1
        let f = |v: &[f64]| vec![v[0] * v[0] + v[1] * v[1] - 4.0, v[0] * v[1] - 1.0];
        let result = newton_system(f, &[2.0, 0.5], &RootOptions::default()).unwrap();

        assert!(result.converged);
        assert!(result.residual_norm < 1e-8);
        let (x, y) = (result.x[0], result.x[1]);
        assert!((x * x + y * y - 4.0).abs() < 1e-8);
        assert!((x * y - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_newton_system_with_exact_jacobian() {
        let f = |v: &[f64]| vec![v[0] * v[0] - 2.0, v[1] - v[0]];
        let jac = |v: &[f64]| vec![vec![2.0 * v[0], 0.0], vec![-1.0, 1.0]];
        let result = newton_system_with_jacobian(f, jac, &[1.0, 0.0], &RootOptions::default()).unwrap();

        assert!(result.converged);
        assert!((result.x[0] - 2f64.sqrt()).abs() < 1e-10);
        assert!((result.x[1] - 2f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_newton_system_already_at_root() {
        let f = |v: &[f64]| vec![v[0] - 1.0];
        let result = newton_system(f, &[1.0], &RootOptions::default()).unwrap();
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_newton_system_iteration_limit() {
        // x^2 + 1 = 0 has no real root
        let f = |v: &[f64]| vec![v[0] * v[0] + 1.0];
        let options = RootOptions {
            max_iter: 8,
            ..Default::default()
        };
        let result = newton_system(f, &[0.5], &options).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 8);
    }

    #[test]
    fn test_newton_system_dimension_mismatch() {
        let f = |v: &[f64]| vec![v[0] + v[1]];
        assert!(matches!(
            newton_system(f, &[1.0, 2.0], &RootOptions::default()),
            Err(OptimizeError::InvalidInput { .. })
        ));
        assert!(newton_system(|_: &[f64]| vec![], &[], &RootOptions::default()).is_err());
    }

    #[test]
    fn test_newton_system_output_length_changes() {
        // Drops an equation once the iterate leaves the unit box
        let f = |v: &[f64]| {
            if v[0].abs() > 1.0 {
                vec![v[0] - 3.0]
            } else {
                vec![v[0] - 3.0, v[1] - 3.0]
            }
        };
        let jac = |_: &[f64]| vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let result = newton_system_with_jacobian(f, jac, &[0.0, 0.0], &RootOptions::default());
        assert!(matches!(result, Err(OptimizeError::InvalidInput { .. })));

        // Same failure surfaced from the finite-difference Jacobian
        let g = |v: &[f64]| {
            if v[0] > 0.5 {
                vec![v[0]]
            } else {
                vec![v[0] - 1.0, v[1]]
            }
        };
        let result = newton_system(g, &[0.5, 0.0], &RootOptions::default());
        assert!(matches!(result, Err(OptimizeError::InvalidInput { .. })));
    }

    #[test]
    fn test_bad_jacobian_shape() {
        let f = |v: &[f64]| vec![v[0], v[1]];
        let jac = |_: &[f64]| vec![vec![1.0, 0.0]];
        let result = newton_system_with_jacobian(f, jac, &[1.0, 1.0], &RootOptions::default());
        assert!(matches!(result, Err(OptimizeError::InvalidInput { .. })));
    }
}
