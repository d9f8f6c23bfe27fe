//! Scalar (1D) root finding algorithms.
//!
//! This module provides methods for finding roots and fixed points of
//! univariate functions `f: (f64) -> f64`.
//!
//! Running out of iterations is a soft failure: the last iterate is returned
//! with `converged = false` and a warning is logged.

use tracing::{debug, warn};

use crate::optimize::error::{OptimizeError, OptimizeResult};

/// Options for scalar root finding.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Absolute tolerance (bracket width for bisection, step size for Newton)
    pub tol: f64,
    /// Newton steps are refused when `|f'(x)|` falls below this value
    pub min_derivative: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-10,
            min_derivative: 1e-20,
        }
    }
}

/// Options for fixed-point iteration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointOptions {
    /// Maximum number of applications of `g`
    pub max_iter: usize,
    /// Stop once successive iterates differ by at most this much
    pub tol: f64,
    /// Keep every iterate `x₀, x₁, ...` in the result
    pub record_iterates: bool,
}

impl Default for FixedPointOptions {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tol: 1e-10,
            record_iterates: false,
        }
    }
}

/// Result from a root finding method.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootResult {
    /// The root found
    pub root: f64,
    /// Function value at root
    pub function_value: f64,
    /// Number of iterations used
    pub iterations: usize,
    /// Whether the tolerance was met within `max_iter`
    pub converged: bool,
}

/// Result from fixed-point iteration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointResult {
    /// Final iterate
    pub x: f64,
    /// Number of applications of `g`
    pub iterations: usize,
    /// Whether successive iterates came within `tol`
    pub converged: bool,
    /// Iterates starting with the initial guess (only with `record_iterates`)
    pub iterates: Vec<f64>,
}

fn check_tolerance(tol: f64, max_iter: usize) -> OptimizeResult<()> {
    if !(tol > 0.0 && tol.is_finite()) {
        return Err(OptimizeError::InvalidParameter {
            parameter: "tol".to_string(),
            message: format!("must be positive and finite (got {})", tol),
        });
    }
    if max_iter == 0 {
        return Err(OptimizeError::InvalidParameter {
            parameter: "max_iter".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn same_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}

/// Bisection method for root finding.
///
/// Halves the bracket `[a, b]` until its width drops below `options.tol`,
/// keeping the half on which `f` changes sign. A midpoint where `f` is
/// exactly zero ends the search immediately.
///
/// # Arguments
/// * `f` - Function to find root of
/// * `a` - Left bracket endpoint
/// * `b` - Right bracket endpoint
/// * `options` - Solver options
///
/// # Errors
/// * `InvalidInterval` if a >= b or either endpoint is not finite
/// * `SameSignBracket` if f(a) and f(b) have same sign
/// * `InvalidParameter` if `tol` is not positive or `max_iter == 0`
///
/// # Example
///
/// ```
/// use numeth::optimize::{bisect, ScalarOptions};
///
/// let f = |x: f64| x.cos() - (x * x).sin();
/// let options = ScalarOptions { tol: 0.5e-10, ..Default::default() };
/// let result = bisect(f, 0.0, 1.0, &options).unwrap();
/// assert!(result.converged);
/// assert!(f(result.root).abs() < 1e-9);
/// ```
pub fn bisect<F>(f: F, a: f64, b: f64, options: &ScalarOptions) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(OptimizeError::InvalidInterval {
            a,
            b,
            context: "bisect".to_string(),
        });
    }
    check_tolerance(options.tol, options.max_iter)?;

    let fa = f(a);
    let fb = f(b);

    if same_sign(fa, fb) {
        return Err(OptimizeError::SameSignBracket {
            fa,
            fb,
            context: "bisect".to_string(),
        });
    }

    // Exact roots at the endpoints
    for (x, fx) in [(a, fa), (b, fb)] {
        if fx == 0.0 {
            return Ok(RootResult {
                root: x,
                function_value: fx,
                iterations: 0,
                converged: true,
            });
        }
    }

    let mut left = a;
    let mut right = b;
    let mut f_left = fa;
    let mut iterations = 0;
    // Last evaluated midpoint and its function value
    let mut last = None;

    while right - left >= options.tol {
        if iterations == options.max_iter {
            let (root, function_value) = last.unwrap_or_else(|| bracket_midpoint(&f, left, right));
            warn!(
                iterations,
                bracket_width = right - left,
                tol = options.tol,
                "bisect reached maximum iterations"
            );
            return Ok(RootResult {
                root,
                function_value,
                iterations,
                converged: false,
            });
        }

        let mid = 0.5 * (left + right);
        let f_mid = f(mid);
        iterations += 1;
        last = Some((mid, f_mid));

        if f_mid == 0.0 {
            return Ok(RootResult {
                root: mid,
                function_value: f_mid,
                iterations,
                converged: true,
            });
        }

        if same_sign(f_mid, f_left) {
            left = mid;
            f_left = f_mid;
        } else {
            right = mid;
        }
    }

    // A bracket already narrower than `tol` never evaluates a midpoint
    let (root, function_value) = last.unwrap_or_else(|| bracket_midpoint(&f, left, right));
    debug!(iterations, root, "bisect converged");

    Ok(RootResult {
        root,
        function_value,
        iterations,
        converged: true,
    })
}

fn bracket_midpoint<F: Fn(f64) -> f64>(f: &F, left: f64, right: f64) -> (f64, f64) {
    let mid = 0.5 * (left + right);
    (mid, f(mid))
}

/// Number of halvings bisection needs to shrink `[a, b]` below `10^(-decimal_places)`.
///
/// Computed as `⌈log₂((b - a) · 10^d)⌉`; zero when the bracket is already
/// narrow enough.
///
/// # Example
///
/// ```
/// use numeth::optimize::bisect_iterations;
///
/// assert_eq!(bisect_iterations(0.0, 1.0, 10).unwrap(), 34);
/// ```
pub fn bisect_iterations(a: f64, b: f64, decimal_places: u32) -> OptimizeResult<usize> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(OptimizeError::InvalidInterval {
            a,
            b,
            context: "bisect_iterations".to_string(),
        });
    }

    let halvings = ((b - a).log2() + decimal_places as f64 * 10f64.log2()).ceil();
    Ok(if halvings > 0.0 { halvings as usize } else { 0 })
}

/// Newton's method for root finding.
///
/// Iterates `x ← x - f(x) / f'(x)` until the step is at most `options.tol`.
///
/// # Arguments
/// * `f` - Function to find root of
/// * `df` - Derivative of f
/// * `x0` - Initial guess
/// * `options` - Solver options
///
/// # Errors
/// * `NumericalError` if `|f'(x)|` drops below `options.min_derivative`
/// * `InvalidParameter` if `tol` is not positive or `max_iter == 0`
///
/// # Note
/// Newton's method has quadratic convergence near a simple root but may
/// diverge if `x0` is far from it. A vanishing derivative usually signals
/// a root of high multiplicity or a stationary starting point.
///
/// # Example
///
/// ```
/// use numeth::optimize::{newton, ScalarOptions};
///
/// let result = newton(|x| x * x - 4.0, |x| 2.0 * x, 1.0, &ScalarOptions::default()).unwrap();
/// assert!((result.root - 2.0).abs() < 1e-12);
/// ```
pub fn newton<F, DF>(f: F, df: DF, x0: f64, options: &ScalarOptions) -> OptimizeResult<RootResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    check_tolerance(options.tol, options.max_iter)?;

    let mut x = x0;

    for iter in 0..options.max_iter {
        let dfx = df(x);

        if !(dfx.abs() >= options.min_derivative) {
            return Err(OptimizeError::NumericalError {
                message: format!(
                    "newton: derivative {:.2e} too close to zero at x = {} (root may have high multiplicity)",
                    dfx, x
                ),
            });
        }

        let x_new = x - f(x) / dfx;
        let dx = (x_new - x).abs();
        x = x_new;

        if dx <= options.tol {
            debug!(iterations = iter + 1, root = x, "newton converged");
            return Ok(RootResult {
                root: x,
                function_value: f(x),
                iterations: iter + 1,
                converged: true,
            });
        }
    }

    warn!(
        iterations = options.max_iter,
        x,
        tol = options.tol,
        "newton reached maximum iterations"
    );

    Ok(RootResult {
        root: x,
        function_value: f(x),
        iterations: options.max_iter,
        converged: false,
    })
}

/// Fixed-point iteration `x ← g(x)`.
///
/// Applies `g` once, then keeps applying it while successive iterates
/// differ by more than `options.tol`.
///
/// # Example
///
/// ```
/// use numeth::optimize::{fixed_point, FixedPointOptions};
///
/// // x + cos(x) - sin(x) is fixed where cos(x) = sin(x)
/// let g = |x: f64| x + x.cos() - x.sin();
/// let result = fixed_point(g, 0.0, &FixedPointOptions::default()).unwrap();
/// assert!((result.x - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
/// ```
pub fn fixed_point<G>(g: G, x0: f64, options: &FixedPointOptions) -> OptimizeResult<FixedPointResult>
where
    G: Fn(f64) -> f64,
{
    check_tolerance(options.tol, options.max_iter)?;

    let mut iterates = Vec::new();
    if options.record_iterates {
        iterates.push(x0);
    }

    let mut previous = x0;
    let mut current = g(previous);
    let mut iterations = 1;
    if options.record_iterates {
        iterates.push(current);
    }

    while !((current - previous).abs() <= options.tol) {
        if iterations == options.max_iter {
            warn!(
                iterations,
                x = current,
                tol = options.tol,
                "fixed_point reached maximum iterations"
            );
            return Ok(FixedPointResult {
                x: current,
                iterations,
                converged: false,
                iterates,
            });
        }

        previous = current;
        current = g(previous);
        iterations += 1;
        if options.record_iterates {
            iterates.push(current);
        }
    }

    debug!(iterations, x = current, "fixed_point converged");

    Ok(FixedPointResult {
        x: current,
        iterations,
        converged: true,
        iterates,
    })
}
