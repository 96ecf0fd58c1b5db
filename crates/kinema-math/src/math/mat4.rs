// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use tracing::trace;

use crate::math::{approx_eq, deg_to_rad, rad_to_deg, Mat3, Quat, Scalar, Vec3, Vec4};

/// `|cos(pitch)|` at or below which [`Mat4::euler_angles`] treats the matrix
/// as gimbal-locked.
pub const GIMBAL_EPSILON: Scalar = 0.005;

/// Column-major homogeneous 4×4 matrix.
///
/// The four columns are the forward (`F`), up (`U`) and right (`R`) basis
/// vectors plus `W`, which carries translation. Matrices multiply column
/// vectors, so `M * v = F·x + U·y + R·z + W·w`.
///
/// # Examples
/// Basic transformations:
/// ```
/// use kinema_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Rotations
/// Every rotation builder is right-handed and active: a positive angle about
/// `+Z` carries `+X` towards `+Y`, and [`Mat4::from_quat`] rotates vectors
/// exactly like [`Quat::rotate`].
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mat4 {
    data: [Scalar; 16],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new(Vec4::UNIT_X, Vec4::UNIT_Y, Vec4::UNIT_Z, Vec4::UNIT_W);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from its four columns.
    pub const fn new(forward: Vec4, up: Vec4, right: Vec4, w: Vec4) -> Self {
        let [f0, f1, f2, f3] = forward.to_array();
        let [u0, u1, u2, u3] = up.to_array();
        let [r0, r1, r2, r3] = right.to_array();
        let [w0, w1, w2, w3] = w.to_array();
        Self {
            data: [
                f0, f1, f2, f3, // col 0 (F)
                u0, u1, u2, u3, // col 1 (U)
                r0, r1, r2, r3, // col 2 (R)
                w0, w1, w2, w3, // col 3 (W)
            ],
        }
    }

    /// Builds a pure basis matrix from three direction columns.
    pub const fn from_basis(forward: Vec3, up: Vec3, right: Vec3) -> Self {
        Self::new(
            Vec4::from_direction(forward),
            Vec4::from_direction(up),
            Vec4::from_direction(right),
            Vec4::UNIT_W,
        )
    }

    /// Widens a 3×3 frame; `W` becomes `(0, 0, 0, 1)`.
    pub fn from_mat3(m: &Mat3) -> Self {
        let [f, u, r] = m.columns();
        Self::from_basis(f, u, r)
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: Scalar, ty: Scalar, tz: Scalar) -> Self {
        Self::new(
            Vec4::UNIT_X,
            Vec4::UNIT_Y,
            Vec4::UNIT_Z,
            Vec4::new(tx, ty, tz, 1.0),
        )
    }

    /// Builds a translation matrix from a vector.
    pub const fn from_translation(t: Vec3) -> Self {
        Self::new(Vec4::UNIT_X, Vec4::UNIT_Y, Vec4::UNIT_Z, Vec4::from_point(t))
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: Scalar, sy: Scalar, sz: Scalar) -> Self {
        Self::new(
            Vec4::new(sx, 0.0, 0.0, 0.0),
            Vec4::new(0.0, sy, 0.0, 0.0),
            Vec4::new(0.0, 0.0, sz, 0.0),
            Vec4::UNIT_W,
        )
    }

    /// Builds a uniform scale matrix.
    pub const fn scale_uniform(s: Scalar) -> Self {
        Self::scale(s, s, s)
    }

    /// Builds a scale matrix from per-axis factors.
    pub const fn from_scale(s: Vec3) -> Self {
        let [sx, sy, sz] = s.to_array();
        Self::scale(sx, sy, sz)
    }

    /// Rotation about `+X` by `degrees`.
    pub fn rotation_x(degrees: Scalar) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        #[rustfmt::skip]
        let data = [
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self::from(data)
    }

    /// Rotation about `+Y` by `degrees`.
    pub fn rotation_y(degrees: Scalar) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        #[rustfmt::skip]
        let data = [
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self::from(data)
    }

    /// Rotation about `+Z` by `degrees`.
    pub fn rotation_z(degrees: Scalar) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        #[rustfmt::skip]
        let data = [
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self::from(data)
    }

    /// Builds a rotation from per-axis angles in degrees.
    ///
    /// Ordering: `R = Rx(x) * Ry(y) * Rz(z)`, so a vector is rotated about Z
    /// first and about X last. [`Mat4::euler_angles`] inverts this.
    ///
    /// # Examples
    /// ```
    /// use kinema_math::{Mat4, Vec3};
    /// // 90° about Y carries +Z onto +X.
    /// let r = Mat4::rotation_euler(Vec3::new(0.0, 90.0, 0.0));
    /// assert_eq!(r.transform_direction(&Vec3::UNIT_Z), Vec3::UNIT_X);
    /// ```
    pub fn rotation_euler(angles: Vec3) -> Self {
        Self::rotation_x(angles.x())
            .multiply(&Self::rotation_y(angles.y()))
            .multiply(&Self::rotation_z(angles.z()))
    }

    /// Rotation of `degrees` about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalised internally; a zero axis yields NaN. Agrees with
    /// `Mat4::from_quat(&Quat::from_angle_axis(degrees, axis))`.
    pub fn rotation_axis_angle(degrees: Scalar, axis: Vec3) -> Self {
        let axis = axis.normalize();
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let t = 1.0 - c;
        Self::from_basis(
            Vec3::new(c + x * x * t, x * y * t + z * s, x * z * t - y * s),
            Vec3::new(x * y * t - z * s, c + y * y * t, y * z * t + x * s),
            Vec3::new(x * z * t + y * s, y * z * t - x * s, c + z * z * t),
        )
    }

    /// Rotation matrix for a quaternion.
    ///
    /// The quaternion is used as-is; a non-unit input produces a matrix that
    /// also scales.
    pub fn from_quat(q: &Quat) -> Self {
        let [w, x, y, z] = q.to_array();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Self::from_basis(
            Vec3::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy)),
            Vec3::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx)),
            Vec3::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy)),
        )
    }

    /// Composes `translation * (rotation * scale)`.
    pub fn trs(translation: &Self, rotation: &Self, scale: &Self) -> Self {
        translation.multiply(&rotation.multiply(scale))
    }

    /// Builds the TRS matrix directly without two full matrix products.
    ///
    /// Columns are the rotated basis scaled per axis, with the translation in
    /// `W`. Equal to `trs` of the three individual matrices.
    ///
    /// ```
    /// use kinema_math::{Mat4, Quat, Vec3};
    /// let m = Mat4::from_trs(Vec3::UNIT_X, &Quat::IDENTITY, Vec3::new(2.0, 2.0, 2.0));
    /// assert_eq!(m * Vec3::UNIT_X, Vec3::new(3.0, 0.0, 0.0));
    /// ```
    pub fn from_trs(translation: Vec3, rotation: &Quat, scale: Vec3) -> Self {
        let [f, u, r] = Mat3::from_mat4(&Self::from_quat(rotation)).columns();
        Self::new(
            Vec4::from_direction(f * scale.x()),
            Vec4::from_direction(u * scale.y()),
            Vec4::from_direction(r * scale.z()),
            Vec4::from_point(translation),
        )
    }

    /// Composes `scale * (rotation * translation)`.
    ///
    /// Passing the inverses of a TRS triple yields the inverse TRS matrix.
    pub fn srt(scale: &Self, rotation: &Self, translation: &Self) -> Self {
        scale.multiply(&rotation.multiply(translation))
    }

    /// Builds the inverse of [`Mat4::from_trs`] from the forward, non-inverted
    /// inputs.
    ///
    /// Rows are `(F, -F·t) / sx`, `(U, -U·t) / sy`, `(R, -R·t) / sz` and
    /// `(0, 0, 0, 1)`, where `F`, `U`, `R` are the columns of the rotation.
    /// Zero scale components divide by zero.
    pub fn from_srt(scale: Vec3, rotation: &Quat, translation: Vec3) -> Self {
        let [f, u, r] = Mat3::from_mat4(&Self::from_quat(rotation)).columns();
        let row = |axis: Vec3, s: Scalar| Vec4::extend(axis, -axis.dot(&translation)) / s;
        Self::new(
            row(f, scale.x()),
            row(u, scale.y()),
            row(r, scale.z()),
            Vec4::UNIT_W,
        )
        .transpose()
    }

    /// Inverse of a pure translation matrix: `W` negated.
    pub fn inverse_translation(&self) -> Self {
        let t = self.column(3).truncate();
        Self::from_translation(-t)
    }

    /// Inverse of a pure rotation matrix (its transpose).
    ///
    /// Only valid for orthonormal input.
    pub fn inverse_rotation(&self) -> Self {
        self.transpose()
    }

    /// Inverse of a pure scale matrix: reciprocal diagonal.
    ///
    /// Only valid for diagonal input; zero factors divide by zero.
    pub fn inverse_scale(&self) -> Self {
        Self::scale(
            1.0 / self.at(0, 0),
            1.0 / self.at(1, 1),
            1.0 / self.at(2, 2),
        )
    }

    /// Returns the matrix as a column-major array.
    pub const fn to_array(self) -> [Scalar; 16] {
        self.data
    }

    fn at(&self, row: usize, col: usize) -> Scalar {
        self.data[col * 4 + row]
    }

    /// Column `idx` (0 = `F`, 1 = `U`, 2 = `R`, 3 = `W`).
    ///
    /// # Panics
    /// Panics if `idx > 3`.
    pub fn column(&self, idx: usize) -> Vec4 {
        assert!(idx < 4, "column index out of range: {idx}");
        Vec4::new(
            self.at(0, idx),
            self.at(1, idx),
            self.at(2, idx),
            self.at(3, idx),
        )
    }

    /// All four columns in `F`, `U`, `R`, `W` order.
    pub fn columns(&self) -> [Vec4; 4] {
        [self.column(0), self.column(1), self.column(2), self.column(3)]
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::from(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// `self` is applied to every column of `rhs`, so the product applies
    /// `rhs` first.
    ///
    /// # Examples
    /// ```
    /// use kinema_math::Mat4;
    /// let a = Mat4::IDENTITY;
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::from(out)
    }

    /// Full homogeneous product `M * v`.
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|k| self.at(row, k) * v.component(k)).sum();
        }
        Vec4::from(out)
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform(&Vec4::from_point(*point)).truncate()
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform(&Vec4::from_direction(*direction)).truncate()
    }

    /// Recovers the `Rx * Ry * Rz` angles of [`Mat4::rotation_euler`], in
    /// degrees wrapped to `[0, 360)`.
    ///
    /// When `|cos(y)| <= GIMBAL_EPSILON` the X and Z axes coincide and only
    /// their combination is observable: `x` is reported as zero and the whole
    /// roll is folded into `z`.
    pub fn euler_angles(&self) -> Vec3 {
        let [f, u, r, _] = self.columns();
        let y = r.x().clamp(-1.0, 1.0).asin();
        let (x, z) = if y.cos().abs() > GIMBAL_EPSILON {
            ((-r.y()).atan2(r.z()), (-u.x()).atan2(f.x()))
        } else {
            trace!(pitch = rad_to_deg(y), "euler extraction: gimbal lock");
            (0.0, f.y().atan2(u.y()))
        };
        Vec3::new(wrap_degrees(x), wrap_degrees(y), wrap_degrees(z))
    }
}

/// Radians to degrees in `[0, 360)`; values within tolerance of 360 fold to 0.
fn wrap_degrees(radians: Scalar) -> Scalar {
    let degrees = rad_to_deg(radians).rem_euclid(360.0);
    if approx_eq(degrees, 360.0) {
        0.0
    } else {
        degrees
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

/// Interprets the array as column-major data.
impl From<[Scalar; 16]> for Mat4 {
    fn from(value: [Scalar; 16]) -> Self {
        Self { data: value }
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(&rhs)
    }
}

/// Treats the vector as a point; see [`Mat4::transform_point`].
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point(&rhs)
    }
}

/// One row per line.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.transpose().columns();
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            fmt::Display::fmt(row, f)?;
        }
        Ok(())
    }
}
