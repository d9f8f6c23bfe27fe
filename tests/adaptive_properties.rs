//! Property tests for adaptive Simpson quadrature.

use std::cell::Cell;

use numeth::integrate::{AdaptiveSimpsonOptions, Interval, adaptive_simpson};
use proptest::prelude::*;

fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-10.0..10.0f64, 1e-3..10.0f64).prop_map(|(a, width)| (a, a + width))
}

fn tol_strategy() -> impl Strategy<Value = f64> {
    (2.0..10.0f64).prop_map(|exponent| 10f64.powf(-exponent))
}

/// Sort intervals by lower bound and check they tile `[a, b]` without gaps or overlap.
fn assert_tiles(mut intervals: Vec<Interval>, a: f64, b: f64) {
    intervals.sort_by(|x, y| x.lo().total_cmp(&y.lo()));

    assert_eq!(intervals.first().map(|i| i.lo()), Some(a));
    assert_eq!(intervals.last().map(|i| i.hi()), Some(b));
    for pair in intervals.windows(2) {
        assert_eq!(pair[0].hi(), pair[1].lo(), "gap or overlap between {:?}", pair);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn accepted_and_pending_intervals_tile_the_domain(
        (a, b) in bounds_strategy(),
        c0 in -5.0..5.0f64,
        c1 in -5.0..5.0f64,
        k in 0.1..5.0f64,
        tol in tol_strategy(),
        max_iter in 1usize..500,
    ) {
        let f = |x: f64| c0 + c1 * x + (k * x).sin();
        let options = AdaptiveSimpsonOptions { tol, max_iter, record_intervals: true };
        let result = adaptive_simpson(f, a, b, &options).unwrap();

        prop_assert!(result.iterations <= max_iter);
        prop_assert_eq!(result.neval, 15 * result.iterations);
        prop_assert_eq!(result.converged, result.pending.is_empty());

        let mut all = result.intervals.clone();
        all.extend(result.pending.iter().copied());
        assert_tiles(all, a, b);
    }

    #[test]
    fn accepted_intervals_arrive_left_to_right(
        (a, b) in bounds_strategy(),
        k in 0.1..5.0f64,
    ) {
        let options = AdaptiveSimpsonOptions { record_intervals: true, ..Default::default() };
        let result = adaptive_simpson(|x: f64| (k * x).cos(), a, b, &options).unwrap();

        prop_assert!(result.converged);
        for pair in result.intervals.windows(2) {
            prop_assert_eq!(pair[0].hi(), pair[1].lo());
        }
    }

    #[test]
    fn nan_integrand_stops_exactly_at_ceiling(
        (a, b) in bounds_strategy(),
        max_iter in 1usize..200,
    ) {
        let options = AdaptiveSimpsonOptions { max_iter, ..Default::default() };
        let result = adaptive_simpson(|_| f64::NAN, a, b, &options).unwrap();

        prop_assert!(!result.converged);
        prop_assert_eq!(result.iterations, max_iter);
        prop_assert_eq!(result.neval, 15 * max_iter);
        // Every iteration pops one interval and pushes two
        prop_assert_eq!(result.pending.len(), max_iter + 1);
        prop_assert_eq!(result.integral, 0.0);
    }

    #[test]
    fn zero_width_interval_never_evaluates(
        a in -1e6..1e6f64,
        tol in tol_strategy(),
    ) {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        let result = adaptive_simpson(f, a, a, &AdaptiveSimpsonOptions::with_tol(tol)).unwrap();

        prop_assert_eq!(result.integral, 0.0);
        prop_assert_eq!(result.iterations, 0);
        prop_assert!(result.converged);
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn reversed_bounds_are_rejected(
        (a, b) in bounds_strategy(),
    ) {
        prop_assert!(adaptive_simpson(|x| x, b, a, &AdaptiveSimpsonOptions::default()).is_err());
    }
}
