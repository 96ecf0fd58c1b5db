// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use crate::math::{Mat4, Vec3};

/// Orthonormal 3×3 frame stored as the columns forward (`F`), up (`U`) and
/// right (`R`).
///
/// `Mat3` carries pure rotation. Widen it with [`Mat4::from_mat3`] to combine
/// it with translation or scale.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    forward: Vec3,
    up: Vec3,
    right: Vec3,
}

impl Mat3 {
    /// The identity frame: forward `+X`, up `+Y`, right `+Z`.
    pub const IDENTITY: Self = Self::new(Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z);

    /// Builds a frame from three column vectors, taken verbatim.
    pub const fn new(forward: Vec3, up: Vec3, right: Vec3) -> Self {
        Self { forward, up, right }
    }

    /// Builds a right-handed frame looking along `forward`.
    ///
    /// World `+Y` serves as the provisional up vector:
    /// `R = F × Y`, then `U = R × F`, each normalised. `forward` must not be
    /// parallel to `+Y`; in that case the cross product vanishes and the
    /// frame comes back NaN.
    ///
    /// ```
    /// use kinema_math::{Mat3, Vec3};
    /// assert_eq!(Mat3::from_forward(Vec3::UNIT_X), Mat3::IDENTITY);
    /// ```
    pub fn from_forward(forward: Vec3) -> Self {
        let forward = forward.normalize();
        let right = forward.cross(&Vec3::UNIT_Y).normalize();
        let up = right.cross(&forward).normalize();
        Self::new(forward, up, right)
    }

    /// Upper-left 3×3 block of `m`; translation is dropped.
    pub fn from_mat4(m: &Mat4) -> Self {
        let [f, u, r, _] = m.columns();
        Self::new(f.truncate(), u.truncate(), r.truncate())
    }

    /// Forward column.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Up column.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Right column.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Columns in `F`, `U`, `R` order.
    pub fn columns(&self) -> [Vec3; 3] {
        [self.forward, self.up, self.right]
    }

    /// Swaps rows and columns. For an orthonormal frame this is the inverse.
    pub fn transpose(&self) -> Self {
        let [f, u, r] = self.columns();
        Self::new(
            Vec3::new(f.x(), u.x(), r.x()),
            Vec3::new(f.y(), u.y(), r.y()),
            Vec3::new(f.z(), u.z(), r.z()),
        )
    }

    /// Matrix × column vector: `F·x + U·y + R·z`.
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        self.forward * v.x() + self.up * v.y() + self.right * v.z()
    }

    /// `self * rhs`: `self` applied to every column of `rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::new(
            self.transform(&rhs.forward),
            self.transform(&rhs.up),
            self.transform(&rhs.right),
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(&rhs)
    }
}

/// One column per line, `F`, `U`, `R`.
impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.columns().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            fmt::Display::fmt(column, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_inverts_an_orthonormal_frame() {
        let m = Mat3::from_forward(Vec3::new(1.0, 0.5, -2.0));
        assert_eq!(m.multiply(&m.transpose()), Mat3::IDENTITY);
    }

    #[test]
    fn from_forward_is_right_handed() {
        let m = Mat3::from_forward(Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(m.forward(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(m.up(), Vec3::UNIT_Y);
        assert_eq!(m.right(), Vec3::UNIT_X);
        assert_eq!(m.forward().cross(&m.up()), m.right());
    }
}
