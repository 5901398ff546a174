use approx::assert_abs_diff_eq;
use rootrace::root_finding::config::SolverCfg;
use rootrace::root_finding::errors::{ConfigError, Failure};
use rootrace::root_finding::newton::{newton, newton_numeric};
use rootrace::root_finding::record::{IterationRecord, NewtonRecord};
use rootrace::root_finding::report::{Termination, ToleranceReason};

type TestResult = Result<(), ConfigError>;

const CUBIC_ROOT: f64 = 2.094_551_481_542_326_5;

fn cubic(x: f64) -> f64 {
    x * x * x - 2.0 * x - 5.0
}

fn cubic_prime(x: f64) -> f64 {
    3.0 * x * x - 2.0
}

#[test]
fn finds_cubic_root() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-6)?;
    let res = newton(cubic, cubic_prime, 2.5, cfg);

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert_eq!(res.tolerance, ToleranceReason::StepSizeReached);
    assert_abs_diff_eq!(res.root.unwrap(), CUBIC_ROOT, epsilon = 1e-6);
    Ok(())
}

#[test]
fn error_decreases_near_simple_root() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-12)?;
    let res = newton(cubic, cubic_prime, 2.5, cfg);

    let errors: Vec<f64> = res.trace.iter().filter_map(IterationRecord::error).collect();
    assert!(errors.len() >= 3);
    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "error grew: {pair:?}");
    }
    Ok(())
}

#[test]
fn zero_derivative_at_start() {
    let f   = |x: f64| x * x;
    let df  = |x: f64| 2.0 * x;
    let res = newton(f, df, 0.0, SolverCfg::new());

    assert_eq!(res.root, None);
    assert_eq!(res.termination, Termination::GuardFailure);
    assert_eq!(res.trace.len(), 1);
    assert!(matches!(
        res.trace[0],
        NewtonRecord::Failed { iter: 1, x, fx, failure: Failure::DerivativeCollapse { dfx, .. } }
        if x == 0.0 && fx == 0.0 && dfx == 0.0
    ));
    assert_eq!(res.trace[0].error(), None);
}

#[test]
fn tiny_derivative_trips_guard() {
    let f   = |x: f64| x.cos();
    let df  = |x: f64| -x.sin();
    let res = newton(f, df, 1e-15, SolverCfg::new());

    assert!(matches!(res.failure(), Some(Failure::DerivativeCollapse { .. })));
}

#[test]
fn records_iterate_and_step() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = SolverCfg::new().set_tol(1e-12)?;
    let res = newton(f, df, 1.0, cfg);

    assert_eq!(res.trace[0], NewtonRecord::Step { iter: 1, x: 1.0, fx: -1.0, error: 0.5 });
    assert_eq!(res.iterates()[1], 1.5);
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = SolverCfg::new().set_tol(1e-12)?.set_max_iter(2)?;
    let res = newton(f, df, 1.0, cfg);

    assert_eq!(res.termination, Termination::IterationLimit);
    assert_eq!(res.tolerance, ToleranceReason::ToleranceNotReached);
    assert_eq!(res.trace.len(), 2);
    assert_abs_diff_eq!(res.root.unwrap(), 17.0 / 12.0, epsilon = 1e-15);
    Ok(())
}

#[test]
fn non_finite_evaluation_fails() {
    let f   = |x: f64| x.sqrt() - 2.0;
    let df  = |x: f64| 0.5 / x.sqrt();
    let res = newton(f, df, -1.0, SolverCfg::new());

    assert_eq!(res.root, None);
    assert!(matches!(
        res.failure(),
        Some(Failure::NonFiniteEvaluation { x, value }) if *x == -1.0 && value.is_nan()
    ));
}

#[test]
fn counts_both_evaluations() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let df  = |_x: f64| 2.0;
    let cfg = SolverCfg::new().set_tol(1e-9)?;
    let res = newton(f, df, 10.0, cfg);

    // one exact step, then a zero step
    assert_eq!(res.iterations(), 2);
    assert_eq!(res.evaluations, 4);
    assert_eq!(res.root, Some(3.0));
    Ok(())
}

#[test]
fn numeric_derivative_finds_cubic_root() -> TestResult {
    let cfg      = SolverCfg::new().set_tol(1e-8)?;
    let numeric  = newton_numeric(cubic, 2.5, cfg);
    let analytic = newton(cubic, cubic_prime, 2.5, cfg);

    assert!(numeric.converged());
    assert_abs_diff_eq!(numeric.root.unwrap(), CUBIC_ROOT, epsilon = 1e-6);
    assert!(numeric.iterations() <= analytic.iterations() + 1);
    Ok(())
}

#[test]
fn numeric_derivative_of_flat_function_collapses() {
    let res = newton_numeric(|_x: f64| 3.0, 1.0, SolverCfg::new());

    assert_eq!(res.root, None);
    assert!(matches!(res.failure(), Some(Failure::DerivativeCollapse { .. })));
}
