//! Defines the [`RootRun`] struct returned by all root-finding algorithms
//! and the [`Summary`] row derived from it.

use super::algorithms::Algorithm;
use super::errors::Failure;
use super::record::IterationRecord;


/// Reasons a root-finding algorithm may terminate.
/// ├ [`Termination::ToleranceReached`] : converged, root returned
/// ├ [`Termination::IterationLimit`]   : `max_iter` spent, last estimate returned
/// └ [`Termination::GuardFailure`]     : a numerical guard tripped, no root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Termination {
    ToleranceReached,
    IterationLimit,
    GuardFailure,
}

impl Termination {
    pub const fn label(self) -> &'static str {
        match self {
            Termination::ToleranceReached => "converged",
            Termination::IterationLimit   => "max_iter",
            Termination::GuardFailure     => "failed",
        }
    }
}


/// Which tolerance condition was satisfied (or not).
/// ├ [`ToleranceReason::AbsFxReached`]
/// │   ├ [`Algorithm::Bisection`]
/// │   └ |f(c)| < tol
/// │
/// ├ [`ToleranceReason::WidthTolReached`]
/// │   ├ [`Algorithm::Bisection`]
/// │   └ |b - a| / 2 < tol
/// │
/// ├ [`ToleranceReason::StepSizeReached`]
/// │   ├ [`Algorithm::Newton`], [`Algorithm::Secant`]
/// │   └ |x_{n+1} - x_n| < tol
/// │
/// └ [`ToleranceReason::ToleranceNotReached`]
///     └ alongside [`Termination::IterationLimit`] or [`Termination::GuardFailure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ToleranceReason {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Outcome of one algorithm invocation.
///
/// [`RootRun`]
/// ├ `root`        : root estimate, `None` when a guard tripped
/// ├ `trace`       : every record produced, in iteration order
/// ├ `termination` : why the run stopped ([`Termination`])
/// ├ `tolerance`   : which tolerance was met ([`ToleranceReason`])
/// ├ `evaluations` : calls made to `f` (and `f'` for Newton)
/// └ `algorithm`   : method that produced the run
///
/// An exhausted iteration budget still yields `Some(root)`; check
/// [`RootRun::exhausted`] to tell it apart from convergence.
#[derive(Debug, Clone, PartialEq)]
pub struct RootRun<R> {
    pub root        : Option<f64>,
    pub trace       : Vec<R>,
    pub termination : Termination,
    pub tolerance   : ToleranceReason,
    pub evaluations : usize,
    pub algorithm   : Algorithm,
}

impl<R: IterationRecord> RootRun<R> {
    /// Number of records in the trace.
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::ToleranceReached
    }

    pub fn exhausted(&self) -> bool {
        self.termination == Termination::IterationLimit
    }

    /// Guard that ended the run, read from the terminal record.
    pub fn failure(&self) -> Option<&Failure> {
        self.trace.last().and_then(IterationRecord::failure)
    }

    /// Error estimate of the last record.
    pub fn last_error(&self) -> Option<f64> {
        self.trace.last().and_then(IterationRecord::error)
    }

    /// Iterate sequence for plotting (`c`, `x` or `x1` of each record).
    pub fn iterates(&self) -> Vec<f64> {
        self.trace.iter().filter_map(IterationRecord::iterate).collect()
    }
}


/// One row of the method comparison.
///
/// [`Summary`]
/// ├ `algorithm`    : method
/// ├ `iterations`   : trace length
/// ├ `root`         : root estimate
/// ├ `f_root`       : `f(root)`, re-evaluated
/// ├ `approx_error` : `error` of the last trace record
/// └ `termination`  : see [`Termination`]
///
/// All numeric fields are `None` when the run produced no root.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub algorithm    : Algorithm,
    pub iterations   : usize,
    pub root         : Option<f64>,
    pub f_root       : Option<f64>,
    pub approx_error : Option<f64>,
    pub termination  : Termination,
}

impl Summary {
    /// Summarizes `run`, evaluating `func` once at the root.
    pub fn from_run<R, F>(run: &RootRun<R>, mut func: F) -> Self
    where
        R: IterationRecord,
        F: FnMut(f64) -> f64,
    {
        let (root, f_root, approx_error) = match run.root {
            Some(root) => (Some(root), Some(func(root)), run.last_error()),
            None       => (None, None, None),
        };

        Self {
            algorithm   : run.algorithm,
            iterations  : run.iterations(),
            root,
            f_root,
            approx_error,
            termination : run.termination,
        }
    }

    pub fn method(&self) -> &'static str {
        self.algorithm.label()
    }
}
