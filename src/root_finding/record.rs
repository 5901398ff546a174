//! Per-iteration trace records.
//!
//! Each algorithm has its own record type with one variant per outcome:
//! ┌ [`BisectionRecord`] : `Step` or `NoBracket`
//! ├ [`NewtonRecord`]    : `Step` or `Failed`
//! └ [`SecantRecord`]    : `Step` or `Failed`
//!
//! Records are produced in increasing iteration order and never mutated.
//! The shared view over them is the [`IterationRecord`] trait.

use super::errors::Failure;


/// Read-only view shared by every record type.
pub trait IterationRecord {
    /// 1-based iteration index (`0` for a bisection `NoBracket` record,
    /// which is produced before any iteration runs).
    fn iter(&self) -> usize;

    /// Error estimate of this iteration, absent on failure records.
    fn error(&self) -> Option<f64>;

    /// Point to draw for this iteration (`c`, `x` or `x1`).
    fn iterate(&self) -> Option<f64>;

    /// Guard that terminated the run, if this is a failure record.
    fn failure(&self) -> Option<&Failure>;
}


/// One bisection iteration.
///
/// `Step`
/// ├ `a`, `b` : bracket at the start of the iteration
/// ├ `c`      : midpoint `(a + b) / 2`
/// ├ `fc`     : `f(c)`
/// └ `error`  : half-width `|b - a| / 2`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BisectionRecord {
    Step {
        iter:  usize,
        a:     f64,
        b:     f64,
        c:     f64,
        fc:    f64,
        error: f64,
    },
    NoBracket {
        a:       f64,
        b:       f64,
        failure: Failure,
    },
    /// `f(c)` was non-finite; bracket and midpoint are kept for reporting.
    Failed {
        iter:    usize,
        a:       f64,
        b:       f64,
        c:       f64,
        failure: Failure,
    },
}

impl IterationRecord for BisectionRecord {
    fn iter(&self) -> usize {
        match self {
            BisectionRecord::Step { iter, .. }   => *iter,
            BisectionRecord::NoBracket { .. }    => 0,
            BisectionRecord::Failed { iter, .. } => *iter,
        }
    }

    fn error(&self) -> Option<f64> {
        match self {
            BisectionRecord::Step { error, .. } => Some(*error),
            _ => None,
        }
    }

    fn iterate(&self) -> Option<f64> {
        match self {
            BisectionRecord::Step { c, .. } | BisectionRecord::Failed { c, .. } => Some(*c),
            BisectionRecord::NoBracket { .. } => None,
        }
    }

    fn failure(&self) -> Option<&Failure> {
        match self {
            BisectionRecord::Step { .. } => None,
            BisectionRecord::NoBracket { failure, .. }
            | BisectionRecord::Failed { failure, .. } => Some(failure),
        }
    }
}


/// One Newton-Raphson iteration.
///
/// `Step`
/// ├ `x`     : current iterate
/// ├ `fx`    : `f(x)`
/// └ `error` : step size `|x_new - x|`
///
/// `Failed` keeps `x` and `f(x)` (NaN when `f` itself blew up).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NewtonRecord {
    Step {
        iter:  usize,
        x:     f64,
        fx:    f64,
        error: f64,
    },
    Failed {
        iter:    usize,
        x:       f64,
        fx:      f64,
        failure: Failure,
    },
}

impl IterationRecord for NewtonRecord {
    fn iter(&self) -> usize {
        match self {
            NewtonRecord::Step { iter, .. } | NewtonRecord::Failed { iter, .. } => *iter,
        }
    }

    fn error(&self) -> Option<f64> {
        match self {
            NewtonRecord::Step { error, .. } => Some(*error),
            NewtonRecord::Failed { .. }      => None,
        }
    }

    fn iterate(&self) -> Option<f64> {
        match self {
            NewtonRecord::Step { x, .. } | NewtonRecord::Failed { x, .. } => Some(*x),
        }
    }

    fn failure(&self) -> Option<&Failure> {
        match self {
            NewtonRecord::Step { .. }            => None,
            NewtonRecord::Failed { failure, .. } => Some(failure),
        }
    }
}


/// One secant iteration.
///
/// `Step`
/// ├ `x0`, `x1`   : current window
/// ├ `fx0`, `fx1` : residuals at the window
/// ├ `x2`         : new iterate
/// └ `error`      : step size `|x2 - x1|`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SecantRecord {
    Step {
        iter:  usize,
        x0:    f64,
        x1:    f64,
        fx0:   f64,
        fx1:   f64,
        x2:    f64,
        error: f64,
    },
    Failed {
        iter:    usize,
        x0:      f64,
        x1:      f64,
        fx0:     f64,
        fx1:     f64,
        failure: Failure,
    },
}

impl IterationRecord for SecantRecord {
    fn iter(&self) -> usize {
        match self {
            SecantRecord::Step { iter, .. } | SecantRecord::Failed { iter, .. } => *iter,
        }
    }

    fn error(&self) -> Option<f64> {
        match self {
            SecantRecord::Step { error, .. } => Some(*error),
            SecantRecord::Failed { .. }      => None,
        }
    }

    fn iterate(&self) -> Option<f64> {
        match self {
            SecantRecord::Step { x1, .. } | SecantRecord::Failed { x1, .. } => Some(*x1),
        }
    }

    fn failure(&self) -> Option<&Failure> {
        match self {
            SecantRecord::Step { .. }            => None,
            SecantRecord::Failed { failure, .. } => Some(failure),
        }
    }
}
