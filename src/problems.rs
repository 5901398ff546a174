//! The four sample equations solved by the `rootrace` binary.
//!
//! Each entry pairs `f` with its analytic derivative and the starting data
//! (bisection bracket, Newton guess, secant pair) used for the comparison.

use crate::root_finding::compare::Problem;

/// Plain function pointer, so the catalog can live in one `Vec`.
pub type ScalarFn = fn(f64) -> f64;

/// Tolerance the binary compares the methods at.
pub const CATALOG_TOL: f64 = 0.0005;


/// `x^3 - e^{0.8x} - 20`
pub fn f1(x: f64) -> f64 {
    x.powi(3) - (0.8 * x).exp() - 20.0
}

pub fn f1_prime(x: f64) -> f64 {
    3.0 * x * x - 0.8 * (0.8 * x).exp()
}

/// `3 sin(0.5x) - 0.5x + 2`
pub fn f2(x: f64) -> f64 {
    3.0 * (0.5 * x).sin() - 0.5 * x + 2.0
}

pub fn f2_prime(x: f64) -> f64 {
    1.5 * (0.5 * x).cos() - 0.5
}

/// `x^3 - x^2 e^{-0.5x} - 3x + 1`
pub fn f3(x: f64) -> f64 {
    x.powi(3) - x * x * (-0.5 * x).exp() - 3.0 * x + 1.0
}

pub fn f3_prime(x: f64) -> f64 {
    let e = (-0.5 * x).exp();
    3.0 * x * x - (2.0 * x * e - 0.5 * x * x * e) - 3.0
}

/// `cos^2(x) - 0.5 x e^{0.3x} + 5`
pub fn f4(x: f64) -> f64 {
    x.cos().powi(2) - 0.5 * x * (0.3 * x).exp() + 5.0
}

pub fn f4_prime(x: f64) -> f64 {
    let e = (0.3 * x).exp();
    -2.0 * x.cos() * x.sin() - 0.5 * e - 0.15 * x * e
}


fn problem(
    name: &str,
    func: ScalarFn,
    dfunc: ScalarFn,
    bracket: (f64, f64),
    newton_x0: f64,
    (secant_x0, secant_x1): (f64, f64),
) -> Problem<ScalarFn, ScalarFn> {
    Problem {
        name: name.to_string(),
        func,
        dfunc,
        bracket,
        newton_x0,
        secant_x0,
        secant_x1,
    }
}

/// All four problems, in order.
pub fn catalog() -> Vec<Problem<ScalarFn, ScalarFn>> {
    vec![
        problem("Problem 1: x^3 - e^{0.8x} - 20 = 0",           f1, f1_prime, (0.0, 5.0), 3.0, (3.0, 3.1)),
        problem("Problem 2: 3 sin(0.5x) - 0.5x + 2 = 0",        f2, f2_prime, (4.0, 6.0), 5.0, (4.8, 5.0)),
        problem("Problem 3: x^3 - x^2 e^{-0.5x} - 3x + 1 = 0",  f3, f3_prime, (0.0, 1.0), 0.5, (0.4, 0.5)),
        problem("Problem 4: cos^2(x) - 0.5 x e^{0.3x} + 5 = 0", f4, f4_prime, (3.0, 4.0), 3.5, (3.0, 4.0)),
    ]
}
