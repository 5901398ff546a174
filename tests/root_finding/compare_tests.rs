use approx::assert_abs_diff_eq;
use rootrace::problems::{catalog, CATALOG_TOL};
use rootrace::root_finding::algorithms::Algorithm;
use rootrace::root_finding::compare::{compare, Problem};
use rootrace::root_finding::config::SolverCfg;
use rootrace::root_finding::errors::ConfigError;
use rootrace::root_finding::report::Termination;

type TestResult = Result<(), ConfigError>;

const CUBIC_ROOT: f64 = 2.094_551_481_542_326_5;

fn cubic_problem() -> Problem<fn(f64) -> f64, fn(f64) -> f64> {
    Problem {
        name      : "cubic".to_string(),
        func      : |x| x * x * x - 2.0 * x - 5.0,
        dfunc     : |x| 3.0 * x * x - 2.0,
        bracket   : (2.0, 3.0),
        newton_x0 : 2.5,
        secant_x0 : 2.0,
        secant_x1 : 3.0,
    }
}

#[test]
fn all_methods_agree_on_cubic() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-6)?;
    let cmp = compare(&cubic_problem(), cfg);

    let methods: Vec<Algorithm> = cmp.summaries.iter().map(|s| s.algorithm).collect();
    assert_eq!(methods, Algorithm::ALL.to_vec());

    for summary in &cmp.summaries {
        assert_eq!(summary.termination, Termination::ToleranceReached);
        assert_abs_diff_eq!(summary.root.unwrap(), CUBIC_ROOT, epsilon = 1e-6);
    }
    assert_eq!(cmp.summaries[0].iterations, cmp.bisection.trace.len());
    assert_eq!(cmp.summaries[1].iterations, cmp.newton.trace.len());
    assert_eq!(cmp.summaries[2].iterations, cmp.secant.trace.len());
    Ok(())
}

#[test]
fn bisection_failure_does_not_affect_others() -> TestResult {
    let mut problem = cubic_problem();
    problem.bracket = (3.0, 4.0);

    let cmp = compare(&problem, SolverCfg::new());

    assert_eq!(cmp.summaries[0].termination, Termination::GuardFailure);
    assert_eq!(cmp.summaries[0].root, None);
    assert!(cmp.newton.converged());
    assert!(cmp.secant.converged());
    Ok(())
}

#[test]
fn newton_needs_fewer_iterations_than_bisection() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-10)?;
    let cmp = compare(&cubic_problem(), cfg);

    assert!(cmp.newton.iterations() < cmp.bisection.iterations());
    assert!(cmp.secant.iterations() < cmp.bisection.iterations());
    Ok(())
}

#[test]
fn catalog_problems_converge() -> TestResult {
    let cfg = SolverCfg::new().set_tol(CATALOG_TOL)?;
    let problems = catalog();
    assert_eq!(problems.len(), 4);

    for problem in &problems {
        let cmp = compare(problem, cfg);
        let (a, b) = problem.bracket;

        for summary in &cmp.summaries {
            assert_eq!(
                summary.termination,
                Termination::ToleranceReached,
                "{} did not converge on {}", summary.method(), cmp.name
            );
            let root = summary.root.unwrap();
            assert!(a <= root && root <= b, "{} left the bracket on {}", summary.method(), cmp.name);
        }

        let newton_root = cmp.newton.root.unwrap();
        assert_abs_diff_eq!(cmp.bisection.root.unwrap(), newton_root, epsilon = 1e-3);
        assert_abs_diff_eq!(cmp.secant.root.unwrap(), newton_root, epsilon = 1e-3);
    }
    Ok(())
}

#[test]
fn sample_spans_bracket() {
    let problem = cubic_problem();
    let points = problem.sample(5);

    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![2.0, 2.25, 2.5, 2.75, 3.0]);
    assert_eq!(points[0].1, -1.0);
    assert!(problem.sample(0).is_empty());
    assert_eq!(problem.sample(1), vec![(2.0, -1.0)]);
}
