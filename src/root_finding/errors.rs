//! Root-finding error types.
//!
//! ┌ [`ConfigError`] : invalid solver configuration
//! │  ├ non-positive or non-finite tolerance
//! │  └ zero iteration cap
//! │
//! └ [`Failure`]     : numerical guards tripped during a run
//!     ├ initial interval does not bracket a sign change
//!     ├ vanishing Newton derivative
//!     ├ vanishing secant denominator
//!     └ non-finite function evaluation
//!
//! A [`Failure`] is never returned as `Err`. It is stored in the terminal
//! record of the trace and the run reports no root.

use thiserror::Error;


/// Configuration errors raised by the [`SolverCfg`] setters.
///
/// [`SolverCfg`]: super::config::SolverCfg
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Guard failures recorded in-band by the algorithms.
///
/// The `Display` output is the message shown next to the failure record
/// when a trace is rendered.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Failure {
    #[error("f(a)*f(b) >= 0 on [{a}, {b}]: the interval does not bracket a root")]
    NonBracketingInterval { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("derivative near zero at x={x}, f'(x)={dfx}: the method fails")]
    DerivativeCollapse { x: f64, dfx: f64 },

    #[error("secant denominator near zero between x0={x0} and x1={x1}: f(x1)-f(x0)={denom}")]
    SecantDenominatorCollapse { x0: f64, x1: f64, denom: f64 },

    #[error("evaluation non-finite at x={x}, value={value}")]
    NonFiniteEvaluation { x: f64, value: f64 },
}
