//! Runs bisection, Newton and secant and prints each trace followed by the
//! method comparison.
//!
//! ```text
//! rootrace                              # the sample problems
//! rootrace custom "<f(x)>" <a> <b> [tol]  # a user equation on [a, b]
//! ```
//!
//! Log verbosity is read from `RUST_LOG` (default `info`).

use rootrace::custom::custom_problem;
use rootrace::problems::{catalog, CATALOG_TOL};
use rootrace::root_finding::compare::{compare, Comparison, Problem};
use rootrace::root_finding::config::SolverCfg;
use rootrace::root_finding::table::{render_summaries, render_trace};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: rootrace [custom <f(x)> <a> <b> [tol]]";

/// Tolerance for user equations when none is given.
const CUSTOM_TOL: f64 = 1e-5;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            let cfg = SolverCfg::new().set_tol(CATALOG_TOL)?;
            for problem in catalog() {
                print_comparison(&problem, cfg);
            }
        }
        Some("custom") => {
            let [_, expr, a, b, rest @ ..] = args.as_slice() else {
                return Err(USAGE.into());
            };
            let tol = match rest {
                []    => CUSTOM_TOL,
                [tol] => tol.parse()?,
                _     => return Err(USAGE.into()),
            };
            let problem = custom_problem(expr, (a.parse()?, b.parse()?))?;
            print_comparison(&problem, SolverCfg::new().set_tol(tol)?);
        }
        Some(_) => return Err(USAGE.into()),
    }

    Ok(())
}

fn print_comparison<F, G>(problem: &Problem<F, G>, cfg: SolverCfg)
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let cmp: Comparison = compare(problem, cfg);
    info!(problem = %cmp.name, "solved");

    println!("\n{}", "=".repeat(70));
    println!("   {}", cmp.name);
    println!("{}", "=".repeat(70));

    println!("\n--- Bisection ---");
    print!("{}", render_trace(&cmp.bisection.trace));
    println!("\n--- Newton-Raphson ---");
    print!("{}", render_trace(&cmp.newton.trace));
    println!("\n--- Secant ---");
    print!("{}", render_trace(&cmp.secant.trace));

    println!("\n=== Method comparison ===");
    print!("{}", render_summaries(&cmp.summaries));
}
