//! End-to-end runs with known answers.

use approx::assert_relative_eq;

use slope_growth::{
    Config, Error, ErrorReport, ErrorRow, Exponential, ParameterError, Parameters, Record,
    Summary, Trace, compute_trace, evaluate_analytical,
};

#[test]
fn modest_growth_over_twenty_steps() {
    let parameters = Parameters::new(0.1, 0.0, 1.0, 2.0, 0.1);
    let trace = compute_trace(&parameters).expect("valid parameters");

    assert_eq!(trace.steps(), 20);
    assert_eq!(trace.len(), 21);

    let first_step = trace.records()[1];
    assert_eq!(first_step.step, 1);
    assert_relative_eq!(first_step.x, 0.1, epsilon = 1e-12);
    assert_relative_eq!(first_step.y, 1.01, epsilon = 1e-12);
    assert_relative_eq!(first_step.dy_dx, 0.1, epsilon = 1e-12);
    assert_relative_eq!(first_step.delta_y, 0.01, epsilon = 1e-12);

    let last = trace.last();
    assert_eq!(last.step, 20);
    assert_relative_eq!(last.x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(last.y, 1.220_190, epsilon = 1e-6);

    let exact = evaluate_analytical(0.1, 0.0, 1.0, &[2.0]);
    assert_relative_eq!(exact[0], 1.221_403, epsilon = 1e-6);

    let report = ErrorReport::new(&trace);
    let max_relative = report.max_relative_percent().expect("non-degenerate");
    assert_relative_eq!(max_relative, 0.10, epsilon = 0.005);
}

#[test]
fn zero_rate_holds_initial_value() {
    let trace = compute_trace(&Parameters::new(0.0, -3.0, 42.5, 1.0, 0.3)).unwrap();

    assert_eq!(trace.steps(), 13);
    for record in &trace {
        assert_eq!(record.dy_dx, 0.0);
        assert_eq!(record.delta_y, 0.0);
        assert_eq!(record.y, 42.5);
    }
}

#[test]
fn rejects_non_positive_step_and_backward_range() {
    for parameters in [
        Parameters::new(0.1, 0.0, 1.0, 2.0, 0.0),
        Parameters::new(0.1, 0.0, 1.0, 2.0, -0.1),
        Parameters::new(0.1, 2.0, 1.0, 2.0, 0.1),
        Parameters::new(0.1, 3.0, 1.0, 2.0, 0.1),
    ] {
        let error = compute_trace(&parameters).expect_err("should be rejected");
        assert!(
            matches!(error, Error::InvalidParameters(_)),
            "unexpected error for {parameters:?}: {error}"
        );
    }
}

#[test]
fn invalid_parameters_name_the_cause() {
    let error = compute_trace(&Parameters::new(0.1, 0.0, 1.0, 2.0, -0.5)).unwrap_err();
    assert!(matches!(
        error,
        Error::InvalidParameters(ParameterError::NonPositiveStep { h }) if h == -0.5
    ));
    assert_eq!(
        error.to_string(),
        "invalid parameters: step size must be positive, got -0.5"
    );
}

#[test]
fn overflow_and_nan_are_returned_not_raised() {
    for parameters in [
        Parameters::new(1e300, 0.0, 1e300, 3.0, 1.0),
        Parameters::new(-1e300, 0.0, 1e300, 3.0, 1.0),
        Parameters::new(-800.0, 0.0, 1.0, 1.0, 0.5),
    ] {
        let trace = compute_trace(&parameters)
            .unwrap_or_else(|error| panic!("{parameters:?} failed: {error}"));
        assert_eq!(trace.first().y, parameters.y0);
    }

    let trace = compute_trace(&Parameters::new(-1e300, 0.0, 1e300, 3.0, 1.0)).unwrap();
    assert!(trace.records()[2].y.is_nan());
}

#[test]
fn decay_decreases_every_step() {
    let trace = compute_trace(&Parameters::new(-0.5, 0.0, 10.0, 1.0, 0.25)).unwrap();

    assert_eq!(trace.steps(), 4);
    for pair in trace.records().windows(2) {
        assert!(pair[1].y < pair[0].y, "{:?} !< {:?}", pair[1], pair[0]);
    }
    // Each step multiplies by 1 - 0.5 * 0.25.
    assert_relative_eq!(trace.final_y(), 10.0 * 0.875_f64.powi(4), epsilon = 1e-12);
}

#[test]
fn exact_multiple_reaches_target() {
    for (x0, x_target, h) in [(0.0, 0.3, 0.1), (0.0, 1.0, 0.1), (-1.0, 2.5, 0.05), (2.0, 3.2, 0.4)] {
        let trace = compute_trace(&Parameters::new(0.2, x0, 1.0, x_target, h)).unwrap();
        assert_relative_eq!(trace.final_x(), x_target, epsilon = 1e-9);
    }
}

#[test]
fn partial_step_is_not_taken() {
    let trace = compute_trace(&Parameters::new(0.2, 0.0, 1.0, 1.05, 0.1)).unwrap();

    assert_eq!(trace.steps(), 10);
    assert_relative_eq!(trace.final_x(), 1.0, epsilon = 1e-12);
    assert!(trace.final_x() < 1.05);
}

#[test]
fn target_just_short_of_a_multiple_stops_before_it() {
    let parameters = Parameters::new(0.1, 0.0, 1.0, 2.999_999_998, 1.0);
    let trace = compute_trace(&parameters).unwrap();

    assert_eq!(trace.steps(), 2);
    assert_eq!(trace.final_x(), 2.0);
    assert!(trace.final_x() <= parameters.x_target);
}

#[test]
fn small_steps_converge_to_exact_solution() {
    let parameters = Parameters::new(0.7, 0.0, 2.0, 2.0, 0.0001);
    let trace = compute_trace(&parameters).unwrap();
    let exact = evaluate_analytical(0.7, 0.0, 2.0, &[2.0])[0];

    assert_eq!(trace.steps(), 20_000);
    assert_relative_eq!(trace.final_y(), exact, max_relative = 1e-3);
}

#[test]
fn summary_reports_final_point() {
    let trace = compute_trace(&Parameters::default()).unwrap();
    let report = ErrorReport::new(&trace);
    let summary = Summary::new(&trace, &report);

    assert_eq!(summary.steps, 20);
    assert_eq!(summary.final_x, trace.final_x());
    assert_eq!(summary.final_y, trace.final_y());
    assert_eq!(summary.max_absolute_error, report.max_absolute());
}

#[test]
fn record_zero_is_unstepped() {
    let trace = compute_trace(&Parameters::new(-2.0, 0.5, 3.0, 1.5, 0.1)).unwrap();

    assert_eq!(
        *trace.first(),
        Record {
            step: 0,
            x: 0.5,
            y: 3.0,
            dy_dx: -6.0,
            delta_y: 0.0,
        }
    );
}

#[test]
fn results_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Parameters>();
    assert_send_sync::<Config>();
    assert_send_sync::<Record>();
    assert_send_sync::<Trace>();
    assert_send_sync::<ErrorRow>();
    assert_send_sync::<ErrorReport>();
    assert_send_sync::<Summary>();
    assert_send_sync::<Exponential>();
    assert_send_sync::<Error>();

    let trace = std::thread::spawn(|| compute_trace(&Parameters::default()))
        .join()
        .unwrap()
        .unwrap();
    assert_eq!(trace, compute_trace(&Parameters::default()).unwrap());
}
