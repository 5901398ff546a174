//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared defaults used when a [`SolverCfg`] is left untouched.
//!
//! [`SolverCfg`]: super::config::SolverCfg


/// Default convergence tolerance applied to residuals, widths and steps.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Default iteration cap shared by all methods.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Magnitude below which a Newton derivative or a secant denominator
/// is treated as zero and the run is aborted.
pub const GUARD_THRESHOLD: f64 = 1e-14;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`] : bracketing, needs a sign change on `[a, b]`
/// - [`Algorithm::Newton`]    : open, needs `f'(x)`
/// - [`Algorithm::Secant`]    : open, two starting points, derivative-free
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Algorithm {
    Bisection,
    Newton,
    Secant,
}

impl Algorithm {
    /// All methods, in the order a comparison runs them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bisection, Algorithm::Newton, Algorithm::Secant];

    /// Machine name (e.g. `"bisection"`), used in logs.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Newton    => "newton",
            Algorithm::Secant    => "secant",
        }
    }

    /// Human-readable label used in summary tables.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Bisection => "Bisection",
            Algorithm::Newton    => "Newton",
            Algorithm::Secant    => "Secant",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
