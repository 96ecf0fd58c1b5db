// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar precision and tolerance helpers.
//!
//! Kinema collapses all numeric code onto one floating-point type chosen at
//! build time:
//! - default: [`Scalar`] is `f64`;
//! - `f32` feature: [`Scalar`] is `f32`.
//!
//! The two are never mixed inside one build. Constants such as `PI` come from
//! [`consts`], which always matches [`Scalar`].

/// The floating-point type used by every math primitive.
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// The floating-point type used by every math primitive.
#[cfg(feature = "f32")]
pub type Scalar = f32;

/// Mathematical constants at [`Scalar`] precision.
#[cfg(not(feature = "f32"))]
pub use core::f64::consts;

/// Mathematical constants at [`Scalar`] precision.
#[cfg(feature = "f32")]
pub use core::f32::consts;

/// Absolute tolerance used by every approximate comparison in the crate.
///
/// Transform chains accumulate rounding error, so equality of vectors,
/// quaternions, and matrices is defined component-wise as
/// `|a - b| < TOLERANCE`.
pub const TOLERANCE: Scalar = 1e-4;

/// Returns `true` when `a` and `b` differ by less than [`TOLERANCE`].
///
/// NaN never compares equal to anything, including itself.
#[inline]
pub fn approx_eq(a: Scalar, b: Scalar) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Snaps `value` onto the nearest integer when it lies within [`TOLERANCE`]
/// of it; otherwise returns `value` unchanged.
///
/// ```
/// use kinema_math::snap;
/// assert_eq!(snap(2.00001), 2.0);
/// assert_eq!(snap(2.1), 2.1);
/// ```
pub fn snap(value: Scalar) -> Scalar {
    let rounded = value.round();
    if (value - rounded).abs() < TOLERANCE {
        rounded
    } else {
        value
    }
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics if `min > max`.
pub fn clamp(value: Scalar, min: Scalar, max: Scalar) -> Scalar {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(value: Scalar) -> Scalar {
    value * (consts::TAU / 360.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(value: Scalar) -> Scalar {
    value * (360.0 / consts::TAU)
}
