// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! kinema-math: immutable 3D math primitives.
//!
//! Vectors, quaternions, and 3×3/4×4 matrices built as plain `Copy` values.
//! Every operation returns a fresh value; nothing is mutated after
//! construction. Numeric degeneracies (zero-length normalisation, division by
//! zero, out-of-domain inverse trig) propagate as NaN/Infinity rather than
//! errors so downstream code can detect them.
//!
//! Precision is chosen at build time: [`Scalar`] is `f64` unless the `f32`
//! feature is enabled.
#![forbid(unsafe_code)]

pub mod math;

pub use math::{
    approx_eq, clamp, consts, deg_to_rad, rad_to_deg, snap, Mat3, Mat4, Quat, Scalar, Vec3, Vec4,
    GIMBAL_EPSILON, TOLERANCE,
};
