//! Mathematical utilities for the solar event calculations.

#![allow(clippy::many_single_char_names)]

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps any real number into a time-of-day fraction in `[0, 1)`.
///
/// Negative inputs wrap to the previous day and values past 1 wrap to the next, the same
/// mapping as `((x mod 1) + 1) mod 1`. The shift by one is only applied to a negative
/// remainder, so a value already in `[0, 1)` is returned unchanged and the function is
/// idempotent bit for bit. Non-finite input yields NaN.
///
/// # Example
/// ```
/// # use solar_zmanim::normalize_day_fraction;
/// assert_eq!(normalize_day_fraction(1.25), 0.25);
/// assert_eq!(normalize_day_fraction(-0.25), 0.75);
/// ```
#[must_use]
pub fn normalize_day_fraction(fraction: f64) -> f64 {
    let remainder = fraction % 1.0;
    if remainder < 0.0 {
        let shifted = remainder + 1.0;
        // a remainder within half an ulp of zero rounds up to a full day
        if shifted >= 1.0 { 0.0 } else { shifted }
    } else {
        remainder
    }
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
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

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes |x| without relying on `std`.
#[inline]
pub fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}
