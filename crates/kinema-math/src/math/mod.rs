// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar utilities, linear algebra primitives, and quaternions.
//!
//! Conventions shared by every type in this module:
//! - Matrices store their basis as columns (`F`, `U`, `R`, `W`) and multiply
//!   column vectors: `M * v`.
//! - Rotations are right-handed and active; a matrix built from a quaternion
//!   rotates vectors exactly like [`Quat::rotate`].
//! - Angles passed to rotation constructors are in degrees.
//! - `==` is tolerance-based (see [`TOLERANCE`]).

mod fmt;
mod mat3;
mod mat4;
mod quat;
pub mod scalar;
mod vec3;
mod vec4;

pub use mat3::Mat3;
pub use mat4::{Mat4, GIMBAL_EPSILON};
pub use quat::Quat;
pub use scalar::{approx_eq, clamp, consts, deg_to_rad, rad_to_deg, snap, Scalar, TOLERANCE};
pub use vec3::Vec3;
pub use vec4::Vec4;
