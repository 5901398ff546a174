//! Bisection method

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::Failure;
use super::record::BisectionRecord;
use super::report::{RootRun, Termination, ToleranceReason};
use super::signs::{brackets, opposite_sign};
use tracing::{debug, trace, warn};

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Current bracket with cached endpoint values.
///
/// Invariant: `fa` and `fb` have opposite signs.
#[derive(Debug, Copy, Clone)]
struct Bracket {
    a:  f64,
    b:  f64,
    fa: f64,
    fb: f64,
}

impl Bracket {
    /// Calculates midpoint of [a, b]
    #[inline]
    fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    #[inline]
    fn half_width(&self) -> f64 {
        (self.b - self.a).abs() / 2.0
    }

    /// Keeps the half that still brackets the root, using the sign of the
    /// cached `f(a)`. Signs are compared directly since `f(a) * f(c)` can
    /// underflow to zero.
    #[inline]
    fn narrow(&mut self, c: f64, fc: f64) {
        if opposite_sign(self.fa, fc) {
            self.b  = c;
            self.fb = fc;
        } else {
            self.a  = c;
            self.fa = fc;
        }
        debug_assert!(opposite_sign(self.fa, self.fb));
    }
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval.
/// ├ `b`    - Other end of the search interval.
/// └ `cfg`  - [`SolverCfg`] with `tol` and `max_iter`.
///
/// # Returns
///
/// A [`RootRun`] of [`BisectionRecord`]s:
/// ├ converged : `root = Some(c)` once `|f(c)| < tol` or `|b - a| / 2 < tol`
/// ├ exhausted : `root = Some(c)` of the last iteration, [`Termination::IterationLimit`]
/// └ no bracket: `root = None` and a single [`BisectionRecord::NoBracket`] when
///               `f(a) * f(b) >= 0`
///
/// # Notes
/// ├ `f(a)` and `f(b)` are evaluated once. The sign of the cached `f(a)`
/// │   decides which half is kept.
/// └ A non-finite `f(c)` ends the run with [`Failure::NonFiniteEvaluation`].
pub fn bisection<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: SolverCfg,
) -> RootRun<BisectionRecord>
where F: FnMut(f64) -> f64 {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    // number of function evaluations
    let mut evals = 0;
    let mut eval  = |x: f64| -> f64 { evals += 1; func(x) };

    let fa = eval(a);
    let fb = eval(b);

    if !brackets(fa, fb) {
        let failure = Failure::NonBracketingInterval { a, b, fa, fb };
        warn!(algorithm = %ALGORITHM, a, b, fa, fb, "{failure}");
        return RootRun {
            root        : None,
            trace       : vec![BisectionRecord::NoBracket { a, b, failure }],
            termination : Termination::GuardFailure,
            tolerance   : ToleranceReason::ToleranceNotReached,
            evaluations : evals,
            algorithm   : ALGORITHM,
        };
    }

    let mut bracket = Bracket { a, b, fa, fb };
    let mut trace   = Vec::with_capacity(max_iter);
    let mut c       = bracket.midpoint();

    for iter in 1..=max_iter {
        c = bracket.midpoint();
        let fc    = eval(c);
        let error = bracket.half_width();

        if !fc.is_finite() {
            let failure = Failure::NonFiniteEvaluation { x: c, value: fc };
            warn!(algorithm = %ALGORITHM, iter, "{failure}");
            trace.push(BisectionRecord::Failed { iter, a: bracket.a, b: bracket.b, c, failure });
            return RootRun {
                root        : None,
                trace,
                termination : Termination::GuardFailure,
                tolerance   : ToleranceReason::ToleranceNotReached,
                evaluations : evals,
                algorithm   : ALGORITHM,
            };
        }

        trace!(iter, a = bracket.a, b = bracket.b, c, fc, error, "bisection step");
        trace.push(BisectionRecord::Step { iter, a: bracket.a, b: bracket.b, c, fc, error });

        // residual is checked before width
        let reason = if fc.abs() < tol {
            Some(ToleranceReason::AbsFxReached)
        } else if error < tol {
            Some(ToleranceReason::WidthTolReached)
        } else {
            None
        };

        if let Some(tolerance) = reason {
            debug!(algorithm = %ALGORITHM, iter, root = c, ?tolerance, "converged");
            return RootRun {
                root        : Some(c),
                trace,
                termination : Termination::ToleranceReached,
                tolerance,
                evaluations : evals,
                algorithm   : ALGORITHM,
            };
        }

        bracket.narrow(c, fc);
    }

    warn!(algorithm = %ALGORITHM, max_iter, last = c, "iteration limit reached");
    RootRun {
        root        : Some(c),
        trace,
        termination : Termination::IterationLimit,
        tolerance   : ToleranceReason::ToleranceNotReached,
        evaluations : evals,
        algorithm   : ALGORITHM,
    }
}
