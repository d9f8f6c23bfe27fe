//! Adaptive Simpson quadrature.
//!
//! The integration interval is refined only where a local Richardson error
//! estimate is too large. Subdivision is driven by an explicit LIFO
//! worklist rather than recursion, so both the memory used by pending work
//! and the total number of refinement steps are bounded and observable.
//!
//! # Acceptance test
//!
//! For each interval `[a, b]` with midpoint `m`, the five-point Simpson
//! estimate `S(a, b)` is compared against `S(a, m) + S(m, b)`. The
//! difference is roughly 15 times the error of the refined estimate, and
//! the tolerance is scaled by the interval width, so `tol` acts as an error
//! budget per unit length:
//!
//! ```text
//! |S(a, m) + S(m, b) - S(a, b)| < 15 · tol · (b - a)
//! ```

use tracing::{debug, trace, warn};

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::quadrature::simpson::composite_simpson;

/// Subintervals used by every Simpson evaluation inside the engine.
const SIMPSON_STEPS: usize = 4;

/// Function evaluations per engine iteration (three five-point rules).
const EVALS_PER_ITERATION: usize = 3 * (SIMPSON_STEPS + 1);

/// Options for adaptive Simpson quadrature.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveSimpsonOptions {
    /// Error tolerance per unit length of the interval (default: 1e-6)
    pub tol: f64,
    /// Maximum number of intervals evaluated (default: 10000)
    pub max_iter: usize,
    /// Record every accepted interval in the result (default: false)
    pub record_intervals: bool,
}

impl Default for AdaptiveSimpsonOptions {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 10_000,
            record_intervals: false,
        }
    }
}

impl AdaptiveSimpsonOptions {
    /// Options with the given tolerance and default ceiling.
    pub fn with_tol(tol: f64) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }
}

/// A closed interval `[lo, hi]` handled by the adaptive engine.
///
/// Only the engine creates intervals, always with `lo < hi`; callers read
/// them back from [`AdaptiveSimpsonResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub(crate) fn new(lo: f64, hi: f64) -> Self {
        debug_assert!(lo <= hi, "interval bounds out of order: [{lo}, {hi}]");
        Self { lo, hi }
    }

    /// Lower bound.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Width `hi - lo`.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Midpoint `(lo + hi) / 2`.
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    /// Split at the midpoint into two abutting halves `(left, right)`.
    pub fn split(&self) -> (Interval, Interval) {
        let mid = self.midpoint();
        (Interval::new(self.lo, mid), Interval::new(mid, self.hi))
    }
}

/// Result of adaptive Simpson quadrature.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveSimpsonResult {
    /// Sum of all accepted sub-integrals
    pub integral: f64,
    /// Number of intervals popped and evaluated
    pub iterations: usize,
    /// Number of function evaluations
    pub neval: usize,
    /// Whether the worklist was drained before the iteration ceiling
    pub converged: bool,
    /// Intervals still pending when the ceiling was reached
    pub pending: Vec<Interval>,
    /// Accepted intervals in acceptance order (only with `record_intervals`)
    pub intervals: Vec<Interval>,
}

impl AdaptiveSimpsonResult {
    fn empty() -> Self {
        Self {
            integral: 0.0,
            iterations: 0,
            neval: 0,
            converged: true,
            pending: Vec::new(),
            intervals: Vec::new(),
        }
    }

    /// Turn a non-converged result into [`IntegrateError::DidNotConverge`].
    ///
    /// # Example
    ///
    /// ```
    /// use numeth::integrate::{adaptive_simpson, AdaptiveSimpsonOptions};
    ///
    /// let options = AdaptiveSimpsonOptions { max_iter: 2, ..Default::default() };
    /// let result = adaptive_simpson(|x: f64| x.sqrt(), 0.0, 1.0, &options).unwrap();
    /// assert!(result.into_converged(options.tol).is_err());
    /// ```
    pub fn into_converged(self, tolerance: f64) -> IntegrateResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(IntegrateError::DidNotConverge {
                iterations: self.iterations,
                tolerance,
                context: "adaptive_simpson".to_string(),
            })
        }
    }
}

/// Adaptive Simpson quadrature.
///
/// Integrates `f` over `[a, b]`, subdividing at midpoints until every
/// accepted interval passes the local error test or `options.max_iter`
/// intervals have been evaluated.
///
/// Reaching the ceiling is not an error: the partial sum is returned with
/// `converged == false` and a warning is logged.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound (`a == b` yields zero without evaluating `f`)
/// * `options` - Tolerance, iteration ceiling and instrumentation
///
/// # Errors
///
/// * `InvalidInterval` if a bound is not finite or `a > b`
/// * `InvalidParameter` if `tol` is not a positive finite number or `max_iter == 0`
///
/// # Example
///
/// ```
/// use numeth::integrate::{adaptive_simpson, AdaptiveSimpsonOptions};
///
/// let result = adaptive_simpson(
///     |x: f64| x * x.sin(),
///     0.0,
///     1.0,
///     &AdaptiveSimpsonOptions::with_tol(1e-6),
/// )
/// .unwrap();
///
/// let exact = 1f64.sin() - 1f64.cos();
/// assert!((result.integral - exact).abs() < 1e-5);
/// assert!(result.converged);
/// ```
pub fn adaptive_simpson<F>(
    f: F,
    a: f64,
    b: f64,
    options: &AdaptiveSimpsonOptions,
) -> IntegrateResult<AdaptiveSimpsonResult>
where
    F: Fn(f64) -> f64,
{
    try_adaptive_simpson(|x| Ok::<f64, IntegrateError>(f(x)), a, b, options)
}

/// Adaptive Simpson quadrature with a fallible integrand.
///
/// Identical to [`adaptive_simpson`], except that `f` may fail. The first
/// integrand error aborts the run and is returned unchanged; no partial
/// result is kept. Validation failures are converted into the caller's
/// error type through `From<IntegrateError>`.
///
/// # Example
///
/// ```
/// use numeth::integrate::{try_adaptive_simpson, AdaptiveSimpsonOptions, IntegrateError};
///
/// #[derive(Debug)]
/// enum MyError {
///     Domain(f64),
///     Integrate(IntegrateError),
/// }
///
/// impl From<IntegrateError> for MyError {
///     fn from(err: IntegrateError) -> Self {
///         MyError::Integrate(err)
///     }
/// }
///
/// let log = |x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(MyError::Domain(x)) };
/// let result = try_adaptive_simpson(log, 0.0, 1.0, &AdaptiveSimpsonOptions::default());
/// assert!(matches!(result, Err(MyError::Domain(x)) if x == 0.0));
/// ```
pub fn try_adaptive_simpson<F, E>(
    mut f: F,
    a: f64,
    b: f64,
    options: &AdaptiveSimpsonOptions,
) -> Result<AdaptiveSimpsonResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<IntegrateError>,
{
    validate(a, b, options)?;

    if a == b {
        return Ok(AdaptiveSimpsonResult::empty());
    }

    let tol = options.tol;
    let mut stack = vec![Interval::new(a, b)];
    let mut accepted = Vec::new();
    let mut total = 0.0;
    let mut iterations = 0;

    while iterations < options.max_iter {
        let Some(interval) = stack.pop() else {
            break;
        };

        let (left, right) = interval.split();
        let whole = composite_simpson(&mut f, interval.lo, interval.hi, SIMPSON_STEPS)?;
        let left_half = composite_simpson(&mut f, left.lo, left.hi, SIMPSON_STEPS)?;
        let right_half = composite_simpson(&mut f, right.lo, right.hi, SIMPSON_STEPS)?;

        iterations += 1;

        let refined = left_half + right_half;
        let difference = (refined - whole).abs();

        if difference < 15.0 * tol * interval.width() {
            trace!(
                lo = interval.lo,
                hi = interval.hi,
                difference,
                "interval accepted"
            );
            total += refined;
            if options.record_intervals {
                accepted.push(interval);
            }
        } else {
            trace!(
                lo = interval.lo,
                hi = interval.hi,
                difference,
                "interval refined"
            );
            stack.push(right);
            stack.push(left);
        }
    }

    let converged = stack.is_empty();
    if converged {
        debug!(
            iterations,
            neval = iterations * EVALS_PER_ITERATION,
            integral = total,
            "adaptive Simpson quadrature converged"
        );
    } else {
        warn!(
            iterations,
            pending = stack.len(),
            lower = a,
            upper = b,
            tol,
            "adaptive Simpson quadrature exceeded maximum iterations, returning partial integral"
        );
    }

    Ok(AdaptiveSimpsonResult {
        integral: total,
        iterations,
        neval: iterations * EVALS_PER_ITERATION,
        converged,
        pending: stack,
        intervals: accepted,
    })
}

fn validate(a: f64, b: f64, options: &AdaptiveSimpsonOptions) -> IntegrateResult<()> {
    if !a.is_finite() || !b.is_finite() || a > b {
        return Err(IntegrateError::invalid_interval(a, b, "adaptive_simpson"));
    }

    if !(options.tol > 0.0 && options.tol.is_finite()) {
        return Err(IntegrateError::invalid_parameter(
            "tol",
            format!("must be positive and finite (got {})", options.tol),
        ));
    }

    if options.max_iter == 0 {
        return Err(IntegrateError::invalid_parameter(
            "max_iter",
            "must be at least 1",
        ));
    }

    Ok(())
}
