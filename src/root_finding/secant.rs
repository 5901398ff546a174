use super::algorithms::{Algorithm, GUARD_THRESHOLD};
use super::config::SolverCfg;
use super::errors::Failure;
use super::record::SecantRecord;
use super::report::{RootRun, Termination, ToleranceReason};
use tracing::{debug, trace, warn};

const ALGORITHM: Algorithm = Algorithm::Secant;


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Ok(x2)` if the denominator `fx1 - fx0` is at least [`GUARD_THRESHOLD`]
/// - `Err(Failure::SecantDenominatorCollapse)` otherwise
#[inline]
pub(crate) fn secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Result<f64, Failure> {
    let denom = fx1 - fx0;
    if denom.abs() < GUARD_THRESHOLD {
        return Err(Failure::SecantDenominatorCollapse { x0, x1, denom });
    }

    Ok(x1 - fx1 * (x1 - x0) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootRun`] of [`SecantRecord`]s.
/// - converged : `root = Some(x2)` once `|x2 - x1| < tol`
/// - exhausted : `root = Some(x2)` of the last iteration
/// - guard     : `root = None`, terminal [`SecantRecord::Failed`]
///
/// # Behavior
/// - Update:
///     x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
/// - The step size is the only stopping test; `|f(x2)|` is not checked.
/// - The window shifts `(x0, x1) <- (x1, x2)` and `f(x1)` is reused as the
///   next `f(x0)`, so each iteration after the first costs one evaluation.
///
/// # Guards
/// - [`Failure::SecantDenominatorCollapse`] : `|f(x1) - f(x0)| <` [`GUARD_THRESHOLD`]
/// - [`Failure::NonFiniteEvaluation`]       : `f(x)` is NaN/inf
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SolverCfg
) -> RootRun<SecantRecord>
where F: FnMut(f64) -> f64 {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let mut evals = 0;
    let mut eval  = |x: f64| -> f64 { evals += 1; func(x) };

    let mut trace = Vec::with_capacity(max_iter);
    let (mut x0, mut x1) = (x0, x1);
    let mut fx0 = eval(x0);
    let mut fx1 = eval(x1);
    let mut x2  = x1;

    for iter in 1..=max_iter {
        // on the first pass either starting value may be bad,
        // afterwards only fx1 is new
        let step = [(x0, fx0), (x1, fx1)]
            .into_iter()
            .find(|(_, fx)| !fx.is_finite())
            .map_or_else(
                || secant_x_intercept((x0, fx0), (x1, fx1)),
                |(x, value)| Err(Failure::NonFiniteEvaluation { x, value }),
            );

        x2 = match step {
            Ok(x2) => x2,
            Err(failure) => {
                warn!(algorithm = %ALGORITHM, iter, x0, x1, "{failure}");
                trace.push(SecantRecord::Failed { iter, x0, x1, fx0, fx1, failure });
                return RootRun {
                    root        : None,
                    trace,
                    termination : Termination::GuardFailure,
                    tolerance   : ToleranceReason::ToleranceNotReached,
                    evaluations : evals,
                    algorithm   : ALGORITHM,
                };
            }
        };
        let error = (x2 - x1).abs();

        trace!(iter, x0, x1, fx0, fx1, x2, error, "secant step");
        trace.push(SecantRecord::Step { iter, x0, x1, fx0, fx1, x2, error });

        if error < tol {
            debug!(algorithm = %ALGORITHM, iter, root = x2, "converged");
            return RootRun {
                root        : Some(x2),
                trace,
                termination : Termination::ToleranceReached,
                tolerance   : ToleranceReason::StepSizeReached,
                evaluations : evals,
                algorithm   : ALGORITHM,
            };
        }

        // no evaluation after the final iteration
        if iter < max_iter {
            (x0, fx0) = (x1, fx1);
            x1  = x2;
            fx1 = eval(x1);
        }
    }

    warn!(algorithm = %ALGORITHM, max_iter, last = x2, "iteration limit reached");
    RootRun {
        root        : Some(x2),
        trace,
        termination : Termination::IterationLimit,
        tolerance   : ToleranceReason::ToleranceNotReached,
        evaluations : evals,
        algorithm   : ALGORITHM,
    }
}
