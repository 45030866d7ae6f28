//! Property tests for trace construction and error reporting.
//!
//! Seed replay: `PROPTEST_SEED=<seed> cargo test -p slope-growth --test properties`

use proptest::prelude::*;

use slope_growth::{ErrorReport, Parameters, compute_trace};

/// Valid parameters with at most a few thousand steps.
fn parameters() -> impl Strategy<Value = Parameters> {
    (-3.0f64..3.0, -10.0f64..10.0, -100.0f64..100.0, 0.01f64..20.0, 0.005f64..1.0).prop_map(
        |(k, x0, y0, span, h)| Parameters::new(k, x0, y0, x0 + span, h),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn record_count_is_whole_steps_plus_one(p in parameters()) {
        let trace = compute_trace(&p).unwrap();
        let ratio = (p.x_target - p.x0) / p.h;

        // Away from integer boundaries the snapping rule never applies.
        prop_assume!((ratio - ratio.round()).abs() > 1e-6);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = ratio.floor() as usize + 1;
        prop_assert_eq!(trace.len(), expected);
    }

    #[test]
    fn first_record_is_initial_point(p in parameters()) {
        let trace = compute_trace(&p).unwrap();
        let first = trace.first();

        prop_assert_eq!(first.step, 0);
        prop_assert_eq!(first.x, p.x0);
        prop_assert_eq!(first.y, p.y0);
        prop_assert_eq!(first.dy_dx, p.k * p.y0);
        prop_assert_eq!(first.delta_y, 0.0);
    }

    #[test]
    fn records_follow_the_euler_update(p in parameters()) {
        let trace = compute_trace(&p).unwrap();

        for pair in trace.records().windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            prop_assert_eq!(current.step, previous.step + 1);
            prop_assert_eq!(current.x, previous.x + p.h);
            prop_assert_eq!(current.dy_dx, p.k * previous.y);
            prop_assert_eq!(current.delta_y, p.h * current.dy_dx);
            prop_assert_eq!(current.y, previous.y + current.delta_y);
        }
    }

    #[test]
    fn repeated_runs_are_bitwise_identical(p in parameters()) {
        let first = compute_trace(&p).unwrap();
        let second = compute_trace(&p).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
            prop_assert_eq!(a.dy_dx.to_bits(), b.dy_dx.to_bits());
            prop_assert_eq!(a.delta_y.to_bits(), b.delta_y.to_bits());
        }
    }

    #[test]
    fn final_x_never_passes_target(p in parameters()) {
        let trace = compute_trace(&p).unwrap();

        // Rounding from accumulating x one step at a time.
        let scale = p.x0.abs().max(p.x_target.abs()) + p.h;
        #[allow(clippy::cast_precision_loss)]
        let slack = 4.0 * f64::EPSILON * trace.len() as f64 * scale;
        prop_assert!(trace.final_x() <= p.x_target + slack);
        prop_assert!(p.x_target - trace.final_x() < p.h + slack);
    }

    #[test]
    fn near_miss_targets_do_not_add_a_step(
        x0 in -10.0f64..10.0,
        whole in 1usize..200,
        h in 0.01f64..1.0,
        shortfall in 1e-7f64..1e-3,
    ) {
        #[allow(clippy::cast_precision_loss)]
        let x_target = x0 + (whole as f64 - shortfall) * h;
        let trace = compute_trace(&Parameters::new(0.1, x0, 1.0, x_target, h)).unwrap();

        prop_assert_eq!(trace.steps(), whole - 1);
        prop_assert!(trace.final_x() < x_target);
    }

    #[test]
    fn report_has_one_row_per_record(p in parameters()) {
        let trace = compute_trace(&p).unwrap();
        let report = ErrorReport::new(&trace);

        prop_assert_eq!(report.rows().len(), trace.len());
        for (row, record) in report.rows().iter().zip(&trace) {
            prop_assert_eq!(row.x, record.x);
            prop_assert_eq!(row.euler, record.y);
            prop_assert!(row.absolute >= 0.0);
            prop_assert!(row.absolute <= report.max_absolute());
        }
    }

    #[test]
    fn invalid_steps_are_always_rejected(h in -10.0f64..=0.0, span in 0.1f64..10.0) {
        prop_assert!(compute_trace(&Parameters::new(0.1, 0.0, 1.0, span, h)).is_err());
    }

    #[test]
    fn backward_ranges_are_always_rejected(x0 in -10.0f64..10.0, back in 0.0f64..10.0) {
        prop_assert!(compute_trace(&Parameters::new(0.1, x0, 1.0, x0 - back, 0.1)).is_err());
    }
}
