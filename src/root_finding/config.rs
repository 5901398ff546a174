//! Shared configuration for root-finding algorithms.
//!
//! [`SolverCfg`] — universal fields
//! ├ `tol`      : convergence tolerance (residual, width or step)
//! └ `max_iter` : iteration cap
//!
//! Validation happens in the setters, so a [`SolverCfg`] that exists is
//! always usable and the algorithms themselves never fail on configuration.

use super::algorithms::{DEFAULT_MAX_ITER, DEFAULT_TOL};
use super::errors::ConfigError;


/// Solver configuration shared by [`bisection`], [`newton`] and [`secant`].
///
/// # Defaults
/// ┌ `tol`      = [`DEFAULT_TOL`]
/// └ `max_iter` = [`DEFAULT_MAX_ITER`]
///
/// # Validation
/// ├ `tol` must be finite and > 0
/// └ `max_iter` must be >= 1
///
/// [`bisection`]: super::bisection::bisection
/// [`newton`]: super::newton::newton
/// [`secant`]: super::secant::secant
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tol:      f64,
    max_iter: usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    // getters
    #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.tol }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_tol(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            tol:      DEFAULT_TOL,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}
