// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use tracing::trace;

use crate::math::fmt::write_scalar;
use crate::math::{approx_eq, deg_to_rad, rad_to_deg, Mat4, Scalar, Vec3};

/// Quaternion `w + xi + yj + zk` stored as `(w, x, y, z)`.
///
/// * Rotation angles at the API boundary are in degrees.
/// * Construction from raw components does not normalise; quaternions built
///   from unnormalised input or accumulated through long multiplication chains
///   must be passed through [`Quat::normalize`] before use as a rotation.
/// * `==` compares component-wise within [`TOLERANCE`](crate::TOLERANCE);
///   `q` and `-q` encode the same rotation but do not compare equal.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Quat {
    data: [Scalar; 4],
}

impl Quat {
    /// The identity rotation `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from components, taken verbatim.
    ///
    /// Use [`Quat::from_angle_axis`] for axis/angle construction.
    pub const fn new(w: Scalar, x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { data: [w, x, y, z] }
    }

    /// Creates a quaternion from a scalar part and a vector part.
    pub fn from_parts(w: Scalar, v: Vec3) -> Self {
        let [x, y, z] = v.to_array();
        Self::new(w, x, y, z)
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the components as `[w, x, y, z]`.
    pub const fn to_array(self) -> [Scalar; 4] {
        self.data
    }

    /// Scalar (real) part.
    pub fn w(&self) -> Scalar {
        self.data[0]
    }

    /// Coefficient of `i`.
    pub fn x(&self) -> Scalar {
        self.data[1]
    }

    /// Coefficient of `j`.
    pub fn y(&self) -> Scalar {
        self.data[2]
    }

    /// Coefficient of `k`.
    pub fn z(&self) -> Scalar {
        self.data[3]
    }

    /// Vector (imaginary) part `(x, y, z)`.
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.data[1], self.data[2], self.data[3])
    }

    /// Constructs a rotation of `degrees` about `axis`.
    ///
    /// The axis is normalised internally and need not be unit length. A zero
    /// axis has no direction and produces NaN components.
    ///
    /// ```
    /// use kinema_math::{Quat, Vec3};
    /// let q = Quat::from_angle_axis(90.0, Vec3::UNIT_Z);
    /// assert_eq!(q.rotate(&Vec3::UNIT_X), Vec3::UNIT_Y);
    /// ```
    pub fn from_angle_axis(degrees: Scalar, axis: Vec3) -> Self {
        let axis = axis.normalize();
        let half = deg_to_rad(degrees) * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        Self::from_parts(cos_half, axis.scale(sin_half))
    }

    /// Constructs a rotation from a rotation vector whose components are
    /// angles in degrees.
    ///
    /// The vector's magnitude is the total rotation and its direction the
    /// axis, so `from_euler(v)` equals `from_angle_axis(|v|, v)`. This is not
    /// an ordered X/Y/Z Euler sequence; use [`Mat4::rotation_euler`] for that.
    /// The zero vector has no axis and produces NaN components.
    pub fn from_euler(angles: Vec3) -> Self {
        let radians = angles.scale(deg_to_rad(1.0));
        let half = radians.magnitude() * 0.5;
        let (sin_half, cos_half) = half.sin_cos();
        Self::from_parts(cos_half, radians.normalize().scale(sin_half))
    }

    /// Extracts the rotation encoded in the upper 3×3 block of `m`.
    ///
    /// Uses the trace when the diagonal sum is positive (`|w| > 0.5`,
    /// rotations under 120°); otherwise solves for the component belonging
    /// to the largest diagonal term first so no branch divides by a value
    /// near zero. The result reproduces
    /// [`Quat::to_mat4`]'s input up to sign.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let [f, u, r, _] = m.columns();
        let (m00, m10, m20) = (f.x(), f.y(), f.z());
        let (m01, m11, m21) = (u.x(), u.y(), u.z());
        let (m02, m12, m22) = (r.x(), r.y(), r.z());

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = (1.0 + trace).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m21 - m12) / s,
                (m02 - m20) / s,
                (m10 - m01) / s,
            )
        } else if m00 > m11 && m00 > m22 {
            trace!(trace, "quat from matrix: x-dominant branch");
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(
                (m21 - m12) / s,
                0.25 * s,
                (m01 + m10) / s,
                (m02 + m20) / s,
            )
        } else if m11 > m22 {
            trace!(trace, "quat from matrix: y-dominant branch");
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new(
                (m02 - m20) / s,
                (m01 + m10) / s,
                0.25 * s,
                (m12 + m21) / s,
            )
        } else {
            trace!(trace, "quat from matrix: z-dominant branch");
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new(
                (m10 - m01) / s,
                (m02 + m20) / s,
                (m12 + m21) / s,
                0.25 * s,
            )
        }
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// With `a = self` and `b = other`:
    /// `w = bw·aw − b⃗·a⃗`, `v⃗ = bw·a⃗ + aw·b⃗ + a⃗ × b⃗`.
    ///
    /// Operand order matters: applied to a vector, `a * b` rotates by `b`
    /// first and then by `a`. Quaternion multiplication is non-commutative.
    ///
    /// ```
    /// use kinema_math::{Quat, Vec3};
    /// let yaw = Quat::from_angle_axis(90.0, Vec3::UNIT_Y);
    /// let pitch = Quat::from_angle_axis(90.0, Vec3::UNIT_X);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let (aw, av) = (self.w(), self.vector());
        let (bw, bv) = (other.w(), other.vector());
        let w = bw * aw - bv.dot(&av);
        let v = av * bw + bv * aw + av.cross(&bv);
        Self::from_parts(w, v)
    }

    /// Inverse of a unit quaternion (the conjugate).
    ///
    /// Non-unit input needs an extra division by the squared magnitude, which
    /// this method does not perform.
    pub fn inverse(&self) -> Self {
        Self::new(self.w(), -self.x(), -self.y(), -self.z())
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> Scalar {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Quaternion magnitude.
    pub fn magnitude(&self) -> Scalar {
        self.dot(self).sqrt()
    }

    /// Divides every component by the magnitude; NaN for the zero quaternion.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        Self {
            data: self.data.map(|c| c / len),
        }
    }

    /// Returns `(degrees, axis)` for a unit quaternion.
    ///
    /// The half angle is `acos(w)` with `w` clamped to `[-1, 1]`, and the axis
    /// is the vector part divided by `sin(half)`. At the identity rotation
    /// `sin(half)` is zero and the axis comes back NaN; callers special-case
    /// that rotation.
    pub fn axis_angle(&self) -> (Scalar, Vec3) {
        let half = self.w().clamp(-1.0, 1.0).acos();
        let axis = self.vector() / half.sin();
        (rad_to_deg(half) * 2.0, axis)
    }

    /// Rotates `v` with the sandwich product `q * (0, v) * q⁻¹`.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let p = Self::from_parts(0.0, *v);
        self.multiply(&p).multiply(&self.inverse()).vector()
    }

    /// Spherical interpolation from `a` (`t = 0`) to `b` (`t = 1`).
    ///
    /// Computes the relative rotation `d = b * a⁻¹`, scales its angle by `t`,
    /// and composes the partial rotation with `a`. `t` is not clamped.
    ///
    /// No hemisphere correction is applied: when `a.dot(b) < 0` the path goes
    /// the long way round. When `a` and `b` encode the same rotation the
    /// relative rotation has no axis and `a` is returned.
    pub fn slerp(a: &Self, b: &Self, t: Scalar) -> Self {
        let d = b.multiply(&a.inverse());
        if d.vector().magnitude_squared() <= Scalar::EPSILON {
            trace!(w = d.w(), "slerp: relative rotation has no axis");
            return *a;
        }
        let (degrees, axis) = d.axis_angle();
        Self::from_angle_axis(degrees * t, axis).multiply(a)
    }

    /// Converts the quaternion to a rotation matrix.
    ///
    /// The quaternion is used as-is; normalise first if it may have drifted.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

/// Converts a 4-element `[w, x, y, z]` array into a `Quat`, verbatim.
impl From<[Scalar; 4]> for Quat {
    fn from(value: [Scalar; 4]) -> Self {
        Self { data: value }
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Formats as `w + xi + yj + zk`, honouring the formatter precision.
impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scalar(f, self.w())?;
        for (value, unit) in [(self.x(), 'i'), (self.y(), 'j'), (self.z(), 'k')] {
            let sign = if value.is_sign_negative() { '-' } else { '+' };
            write!(f, " {sign} ")?;
            write_scalar(f, value.abs())?;
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}
