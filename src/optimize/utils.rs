//! Dense linear-algebra helpers shared by the root finders.

// Indexed loops are clearer for matrix operations
#![allow(clippy::needless_range_loop)]

use crate::optimize::error::{OptimizeError, OptimizeResult};

/// Pivots or derivatives below this magnitude are treated as zero.
pub const SINGULAR_THRESHOLD: f64 = 1e-14;

/// Euclidean norm of a vector.
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Forward-difference approximation of the Jacobian of `f` at `x`.
///
/// `fx` must equal `f(x)`. Row `i` holds the partial derivatives of
/// component `i`, so `J[i][j] ≈ ∂Fᵢ/∂xⱼ`.
///
/// # Errors
/// `InvalidInput` if `f` returns a different number of components at a
/// perturbed point than it did at `x`.
pub fn finite_difference_jacobian<F>(
    f: &F,
    x: &[f64],
    fx: &[f64],
    eps: f64,
) -> OptimizeResult<Vec<Vec<f64>>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let n = x.len();
    let m = fx.len();
    let mut jacobian = vec![vec![0.0; n]; m];
    let mut x_step = x.to_vec();

    for j in 0..n {
        let h = eps * x[j].abs().max(1.0);
        x_step[j] = x[j] + h;
        let f_step = f(&x_step);
        x_step[j] = x[j];

        if f_step.len() != m {
            return Err(OptimizeError::InvalidInput {
                context: format!(
                    "finite_difference_jacobian: function returned {} values at a perturbed point, expected {}",
                    f_step.len(),
                    m
                ),
            });
        }

        for i in 0..m {
            jacobian[i][j] = (f_step[i] - fx[i]) / h;
        }
    }

    Ok(jacobian)
}

/// Solve `A · x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` if `A` is not square, does not match `b`, or is singular.
pub fn solve_linear_system(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return None;
    }

    // Augmented matrix [A | b]
    let mut m: Vec<Vec<f64>> = a
        .iter()
        .zip(b.iter())
        .map(|(row, &bi)| {
            let mut r = row.clone();
            r.push(bi);
            r
        })
        .collect();

    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))?;
        if m[pivot][col].abs() < SINGULAR_THRESHOLD {
            return None;
        }
        m.swap(col, pivot);

        for row in col + 1..n {
            let factor = m[row][col] / m[col][col];
            for k in col..=n {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = m[i][n];
        for j in i + 1..n {
            sum -= m[i][j] * x[j];
        }
        x[i] = sum / m[i][i];
    }

    Some(x)
}
