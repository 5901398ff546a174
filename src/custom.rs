//! User-supplied equations `f(x) = 0`, parsed at runtime.
//!
//! Expressions are evaluated by [`meval`] in `f64`. The single free variable
//! is `x`; `^` is power. Besides the `meval` builtins (`sin`, `cos`, `tan`,
//! `exp`, `sqrt`, `ln`, `pi`, `e`, ...) the name `log` is bound to the
//! natural logarithm. Input is lower-cased before parsing, so `SIN(X)` and
//! `sin(x)` are the same equation.

use crate::root_finding::compare::Problem;
use crate::root_finding::newton::numerical_derivative;
use std::rc::Rc;
use thiserror::Error;

/// Boxed scalar function built from an expression.
pub type CustomFn = Box<dyn Fn(f64) -> f64>;

/// Point at which a parsed equation must evaluate to a finite value.
pub const CHECK_POINT: f64 = 1.0;


/// Rejections of a user equation.
///
/// [`CustomError`]
/// ├ `Parse`     : the text is not a valid expression in `x`
/// └ `NonFinite` : the expression parses but is NaN/inf at [`CHECK_POINT`]
#[derive(Debug, Error)]
pub enum CustomError {
    #[error("cannot parse `{expr}`: {reason}")]
    Parse { expr: String, reason: String },

    #[error("`{expr}` is not finite at x = {x} (got {value})")]
    NonFinite { expr: String, x: f64, value: f64 },
}


/// Parses `expr` into a function of `x`.
///
/// # Errors
/// ├ [`CustomError::Parse`]     : syntax error, unknown name or empty input
/// └ [`CustomError::NonFinite`] : `f(1)` is NaN or infinite
pub fn parse_equation(expr: &str) -> Result<CustomFn, CustomError> {
    let source = expr.trim().to_lowercase();
    let parse_err = |reason: String| CustomError::Parse { expr: expr.to_string(), reason };

    let parsed: meval::Expr = source.parse().map_err(|e: meval::Error| parse_err(e.to_string()))?;

    let mut ctx = meval::Context::new();
    ctx.func("log", f64::ln);

    let func = parsed
        .bind_with_context(ctx, "x")
        .map_err(|e| parse_err(e.to_string()))?;

    let value = func(CHECK_POINT);
    if !value.is_finite() {
        return Err(CustomError::NonFinite { expr: expr.to_string(), x: CHECK_POINT, value });
    }

    Ok(Box::new(func))
}


/// Builds a [`Problem`] from `expr` and a bisection bracket `(a, b)`.
///
/// `f'` is the central difference of `f`. Newton starts from the midpoint
/// of the bracket and secant from its two ends.
pub fn custom_problem(expr: &str, bracket: (f64, f64)) -> Result<Problem<CustomFn, CustomFn>, CustomError> {
    let func: Rc<dyn Fn(f64) -> f64> = Rc::from(parse_equation(expr)?);
    let shared = Rc::clone(&func);
    let (a, b) = bracket;

    Ok(Problem {
        name      : format!("f(x) = {}", expr.trim()),
        func      : Box::new(move |x| func(x)),
        dfunc     : Box::new(move |x| numerical_derivative(&*shared, x)),
        bracket,
        newton_x0 : (a + b) / 2.0,
        secant_x0 : a,
        secant_x1 : b,
    })
}
