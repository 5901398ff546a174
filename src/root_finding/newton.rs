//! Newton-Raphson method

use super::algorithms::{Algorithm, GUARD_THRESHOLD};
use super::config::SolverCfg;
use super::errors::Failure;
use super::record::NewtonRecord;
use super::report::{RootRun, Termination, ToleranceReason};
use tracing::{debug, trace, warn};

const ALGORITHM: Algorithm = Algorithm::Newton;

/// Step of the central difference in [`numerical_derivative`].
pub const FD_STEP: f64 = 1e-5;


/// Helpers
/// - `check_finite` : maps a non-finite evaluation to [`Failure::NonFiniteEvaluation`]
#[inline]
fn check_finite(x: f64, value: f64) -> Result<f64, Failure> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Failure::NonFiniteEvaluation { x, value })
    }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with an analytic derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : derivative of `func`
/// - `x0`    : initial guess
/// - `cfg`   : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootRun`] of [`NewtonRecord`]s. Each iteration evaluates `f(x)` and
/// `f'(x)`, records `|x_new - x|` and stops once it is below `tol`.
/// - converged : `root = Some(x_new)`
/// - exhausted : `root = Some(x)`, the last computed iterate
/// - guard     : `root = None`, terminal [`NewtonRecord::Failed`]
///
/// # Guards
/// - [`Failure::DerivativeCollapse`]  : `|f'(x)| <` [`GUARD_THRESHOLD`]
/// - [`Failure::NonFiniteEvaluation`] : `f(x)` or `f'(x)` is NaN/inf
///
/// # Notes
/// - Convergence is *local only* and depends on a good initial guess `x0`.
///   Poor guesses or ill-behaved functions can diverge or cycle.
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: SolverCfg,
) -> RootRun<NewtonRecord>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let mut evals = 0;
    let mut trace = Vec::with_capacity(max_iter);
    let mut x     = x0;

    for iter in 1..=max_iter {
        let fx  = { evals += 1; func(x) };
        let dfx = { evals += 1; dfunc(x) };

        let guard = check_finite(x, fx)
            .and_then(|_| check_finite(x, dfx))
            .and_then(|dfx| {
                if dfx.abs() < GUARD_THRESHOLD {
                    Err(Failure::DerivativeCollapse { x, dfx })
                } else {
                    Ok(dfx)
                }
            });

        let dfx = match guard {
            Ok(dfx) => dfx,
            Err(failure) => {
                warn!(algorithm = %ALGORITHM, iter, x, "{failure}");
                trace.push(NewtonRecord::Failed { iter, x, fx, failure });
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

        let x_new = x - fx / dfx;
        let error = (x_new - x).abs();

        trace!(iter, x, fx, dfx, error, "newton step");
        trace.push(NewtonRecord::Step { iter, x, fx, error });

        if error < tol {
            debug!(algorithm = %ALGORITHM, iter, root = x_new, "converged");
            return RootRun {
                root        : Some(x_new),
                trace,
                termination : Termination::ToleranceReached,
                tolerance   : ToleranceReason::StepSizeReached,
                evaluations : evals,
                algorithm   : ALGORITHM,
            };
        }

        x = x_new;
    }

    warn!(algorithm = %ALGORITHM, max_iter, last = x, "iteration limit reached");
    RootRun {
        root        : Some(x),
        trace,
        termination : Termination::IterationLimit,
        tolerance   : ToleranceReason::ToleranceNotReached,
        evaluations : evals,
        algorithm   : ALGORITHM,
    }
}


/// Central-difference estimate `(f(x + h) - f(x - h)) / 2h` with `h =` [`FD_STEP`].
#[inline]
pub fn numerical_derivative<F>(func: &F, x: f64) -> f64
where F: Fn(f64) -> f64 + ?Sized {
    (func(x + FD_STEP) - func(x - FD_STEP)) / (2.0 * FD_STEP)
}


/// [`newton`] with `f'` replaced by [`numerical_derivative`].
///
/// Each iteration costs three calls of `func`, but
/// [`RootRun::evaluations`] counts the derivative estimate as one.
pub fn newton_numeric<F>(func: F, x0: f64, cfg: SolverCfg) -> RootRun<NewtonRecord>
where F: Fn(f64) -> f64 {
    newton(&func, |x| numerical_derivative(&func, x), x0, cfg)
}
