// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kinema_math::{Mat4, Quat, Vec3};

/// Position, rotation and non-uniform scale of a placed shape.
///
/// Conventions:
/// - `rotation` is normalised when converting to a matrix, so accumulated
///   drift in the stored quaternion never leaks into the result.
/// - `scale` is applied first, then rotation, then translation by `position`:
///   `M = T * R * S`.
/// - Negative scales are accepted and flip handedness.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const IDENTITY: Self = Self::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE);

    /// Returns [`Transform::IDENTITY`].
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Translation component.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation component, as stored.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Copy with `position` replaced.
    #[must_use]
    pub fn with_position(self, position: Vec3) -> Self {
        Self { position, ..self }
    }

    /// Copy with `rotation` replaced.
    #[must_use]
    pub fn with_rotation(self, rotation: Quat) -> Self {
        Self { rotation, ..self }
    }

    /// Copy with `scale` replaced.
    #[must_use]
    pub fn with_scale(self, scale: Vec3) -> Self {
        Self { scale, ..self }
    }

    /// Returns the column-major `Mat4` corresponding to this transform.
    ///
    /// ```
    /// use kinema_geom::Transform;
    /// use kinema_math::Vec3;
    /// let t = Transform::IDENTITY
    ///     .with_position(Vec3::UNIT_X)
    ///     .with_scale(Vec3::new(2.0, 2.0, 2.0));
    /// assert_eq!(t.to_mat4().transform_point(&Vec3::UNIT_X), Vec3::new(3.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_trs(self.position, &self.rotation.normalize(), self.scale)
    }

    /// Returns the inverse of [`Transform::to_mat4`], mapping world space back
    /// into local space.
    ///
    /// Zero scale components have no inverse and yield non-finite entries.
    #[must_use]
    pub fn inverse_mat4(&self) -> Mat4 {
        Mat4::from_srt(self.scale, &self.rotation.normalize(), self.position)
    }

    /// Maps a local-space point into world space.
    #[must_use]
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        self.to_mat4().transform_point(p)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
