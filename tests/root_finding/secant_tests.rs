//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use rootrace::root_finding::config::SolverCfg;
use rootrace::root_finding::errors::{ConfigError, Failure};
use rootrace::root_finding::record::{IterationRecord, SecantRecord};
use rootrace::root_finding::report::{Termination, ToleranceReason};
use rootrace::root_finding::secant::secant;

type TestResult = Result<(), ConfigError>;

const CUBIC_ROOT: f64 = 2.094_551_481_542_326_5;

fn cubic(x: f64) -> f64 {
    x * x * x - 2.0 * x - 5.0
}

#[test]
fn finds_cubic_root() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-6)?;
    let res = secant(cubic, 2.0, 3.0, cfg);

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_eq!(res.tolerance, ToleranceReason::StepSizeReached);
    assert_abs_diff_eq!(res.root.unwrap(), CUBIC_ROOT, epsilon = 1e-6);
    Ok(())
}

#[test]
fn linear_function_takes_two_iterations() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let cfg = SolverCfg::new().set_tol(1e-10)?;
    let res = secant(f, 0.0, 10.0, cfg);

    assert_eq!(
        res.trace[0],
        SecantRecord::Step { iter: 1, x0: 0.0, x1: 10.0, fx0: -6.0, fx1: 14.0, x2: 3.0, error: 7.0 }
    );
    assert_eq!(res.iterations(), 2);
    assert_eq!(res.root, Some(3.0));
    assert_eq!(res.evaluations, 3);
    Ok(())
}

#[test]
fn window_shifts_each_iteration() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-12)?;
    let res = secant(cubic, 2.0, 3.0, cfg);

    for pair in res.trace.windows(2) {
        match (pair[0], pair[1]) {
            (
                SecantRecord::Step { x1, fx1, x2, .. },
                SecantRecord::Step { x0: next_x0, fx0: next_fx0, x1: next_x1, .. },
            ) => {
                assert_eq!(next_x0, x1);
                assert_eq!(next_fx0, fx1);
                assert_eq!(next_x1, x2);
            }
            other => panic!("unexpected records {other:?}"),
        }
    }
    Ok(())
}

#[test]
fn flat_function_trips_guard() {
    let f   = |_x: f64| 1.0;
    let res = secant(f, 0.0, 1.0, SolverCfg::new());

    assert_eq!(res.root, None);
    assert_eq!(res.termination, Termination::GuardFailure);
    assert_eq!(res.trace.len(), 1);
    assert!(matches!(
        res.trace[0],
        SecantRecord::Failed { iter: 1, failure: Failure::SecantDenominatorCollapse { denom, .. }, .. }
        if denom == 0.0
    ));
    assert_eq!(res.trace[0].error(), None);
}

#[test]
fn symmetric_guesses_trip_guard() {
    let f   = |x: f64| x * x - 4.0;
    let res = secant(f, -1.0, 1.0, SolverCfg::new());

    assert!(matches!(res.failure(), Some(Failure::SecantDenominatorCollapse { .. })));
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SolverCfg::new().set_tol(1e-14)?.set_max_iter(3)?;
    let res = secant(f, 1.0, 2.0, cfg);

    assert!(res.exhausted());
    assert_eq!(res.trace.len(), 3);
    match res.trace.last() {
        Some(SecantRecord::Step { x2, .. }) => assert_eq!(res.root, Some(*x2)),
        other => panic!("unexpected record {other:?}"),
    }
    // two starting values plus one per shift
    assert_eq!(res.evaluations, 4);
    Ok(())
}

#[test]
fn non_finite_start_fails() {
    let f   = |x: f64| x.ln();
    let res = secant(f, -1.0, 2.0, SolverCfg::new());

    assert_eq!(res.root, None);
    assert!(matches!(
        res.failure(),
        Some(Failure::NonFiniteEvaluation { x, .. }) if *x == -1.0
    ));
}
