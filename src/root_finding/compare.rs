//! Runs all three methods on one problem and collects the comparison.

use super::bisection::bisection;
use super::config::SolverCfg;
use super::newton::newton;
use super::record::{BisectionRecord, NewtonRecord, SecantRecord};
use super::report::{RootRun, Summary};
use super::secant::secant;
use tracing::info;


/// A scalar equation `f(x) = 0` with its derivative and starting data.
///
/// [`Problem`]
/// ├ `name`    : label used in logs and reports
/// ├ `func`    : `f`
/// ├ `dfunc`   : `f'`, used by Newton only
/// ├ `bracket` : bisection interval, also the sampling range for plots
/// ├ `newton_x0`
/// └ `secant_x0`, `secant_x1`
#[derive(Debug, Clone)]
pub struct Problem<F, G> {
    pub name      : String,
    pub func      : F,
    pub dfunc     : G,
    pub bracket   : (f64, f64),
    pub newton_x0 : f64,
    pub secant_x0 : f64,
    pub secant_x1 : f64,
}

impl<F, G> Problem<F, G>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    /// `n` evenly spaced `(x, f(x))` pairs across the bracket, endpoints included.
    pub fn sample(&self, n: usize) -> Vec<(f64, f64)> {
        let (a, b) = self.bracket;
        match n {
            0 => Vec::new(),
            1 => vec![(a, (self.func)(a))],
            _ => {
                let dx = (b - a) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let x = if i == n - 1 { b } else { a + dx * i as f64 };
                        (x, (self.func)(x))
                    })
                    .collect()
            }
        }
    }
}


/// Results of running bisection, Newton and secant on one [`Problem`].
///
/// `summaries` holds one [`Summary`] per method in that same order.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub name      : String,
    pub bisection : RootRun<BisectionRecord>,
    pub newton    : RootRun<NewtonRecord>,
    pub secant    : RootRun<SecantRecord>,
    pub summaries : Vec<Summary>,
}


/// Solves `problem` with all three methods under the same `cfg`.
///
/// Each method runs independently; nothing is shared between them except
/// the function handles, which are only called.
pub fn compare<F, G>(problem: &Problem<F, G>, cfg: SolverCfg) -> Comparison
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let f  = &problem.func;
    let df = &problem.dfunc;
    let (a, b) = problem.bracket;

    info!(problem = %problem.name, tol = cfg.tol(), max_iter = cfg.max_iter(), "comparing methods");

    let bisection = bisection(f, a, b, cfg);
    let newton    = newton(f, df, problem.newton_x0, cfg);
    let secant    = secant(f, problem.secant_x0, problem.secant_x1, cfg);

    let summaries = vec![
        Summary::from_run(&bisection, f),
        Summary::from_run(&newton, f),
        Summary::from_run(&secant, f),
    ];

    Comparison {
        name: problem.name.clone(),
        bisection,
        newton,
        secant,
        summaries,
    }
}
