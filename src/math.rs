//! Mathematical utilities for solar position calculations.
//!
//! The trigonometric wrappers in this module take their arguments in degrees, which is the
//! unit every stage of the SPA pipeline works in. Inverse functions return radians; convert
//! them with [`rad_to_degrees`].

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians as `degrees * π / 180`.
#[inline]
#[must_use]
pub fn deg_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees as `radians * 180 / π`.
#[inline]
#[must_use]
pub fn rad_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Reduces an angle in degrees into the range [0, 360).
///
/// Uses the fractional part of `degrees / 360`. Negative inputs are reflected from 360,
/// so a negative exact multiple of 360 (or a negative value too small to register against
/// 360) maps to `360.0` rather than `0.0`.
///
/// # Example
/// ```
/// use spa_topocentric::math::limit_degrees;
///
/// assert_eq!(limit_degrees(450.0), 90.0);
/// assert_eq!(limit_degrees(-90.0), 270.0);
/// ```
#[must_use]
pub fn limit_degrees(degrees: f64) -> f64 {
    let turns = degrees / 360.0;
    let fraction = abs(turns - trunc(turns));
    if degrees >= 0.0 {
        360.0 * fraction
    } else {
        360.0 - 360.0 * fraction
    }
}

/// Computes a polynomial using Horner's method for numerical stability.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
#[must_use]
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

/// Sine of an angle given in degrees.
#[inline]
#[must_use]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(deg_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
#[must_use]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(deg_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
///
/// Not guarded at ±90° + 180°k: the result is whatever the native tangent returns there.
#[inline]
#[must_use]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(deg_to_radians(degrees))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub(crate) fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub(crate) fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub(crate) fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub(crate) fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Truncates toward zero using the appropriate function for the compilation target.
#[inline]
pub(crate) fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}

/// Computes |x| using the appropriate function for the compilation target.
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

/// Computes x^n for integer n.
#[inline]
pub(crate) fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}
