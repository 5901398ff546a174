//! Bisection, Newton-Raphson and secant root finding for scalar functions.
//!
//! Every method returns a [`RootRun`](root_finding::report::RootRun): an
//! optional root together with the full per-iteration trace. Guard failures
//! (no sign change, vanishing derivative, vanishing secant denominator) are
//! reported in the trace rather than as errors.
//!
//! ```
//! use rootrace::root_finding::bisection::bisection;
//! use rootrace::root_finding::config::SolverCfg;
//!
//! let cfg = SolverCfg::new().set_tol(1e-8).unwrap();
//! let run = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, cfg);
//! assert!((run.root.unwrap() - 2.0_f64.sqrt()).abs() < 1e-8);
//! ```

pub mod custom;
pub mod problems;
pub mod root_finding;
