//! Sign utilities for root-finding algorithms.
//! - `brackets`      : `true` if `f(a)` and `f(b)` strictly bracket a root
//! - `opposite_sign` : `true` if values have opposite sign

/// Returns `true` if `fa * fb < 0` in exact arithmetic.
///
/// A zero or NaN endpoint value is treated as non-bracketing. Signs are
/// compared instead of the product, which underflows for tiny values.
#[inline]
pub(crate) fn brackets(fa: f64, fb: f64) -> bool {
    fa != 0.0 && fb != 0.0 && !fa.is_nan() && !fb.is_nan() && opposite_sign(fa, fb)
}


/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}
