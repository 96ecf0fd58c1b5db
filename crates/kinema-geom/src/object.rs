// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vertex sets placed in the world by a [`Transform`].

use kinema_math::{Mat4, Quat, Vec3};
use tracing::debug;

use crate::{Aabb, GeomError, Transform};

/// A fixed local-space vertex set with a pose and a cached world-space box.
///
/// The box is computed at construction and is NOT refreshed when the pose
/// changes: after `set_position`, `set_rotation` or `set_scale`, [`Object::aabb`]
/// still describes the old pose until [`Object::recompute_aabb`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    vertices: Vec<Vec3>,
    transform: Transform,
    aabb: Aabb,
}

impl Object {
    /// Creates an object at the identity pose.
    ///
    /// # Errors
    /// [`GeomError::EmptyVertexSet`] when `vertices` is empty.
    pub fn new(vertices: Vec<Vec3>) -> Result<Self, GeomError> {
        let aabb = Aabb::from_vertices(&vertices)?;
        Ok(Self {
            vertices,
            transform: Transform::IDENTITY,
            aabb,
        })
    }

    /// Local-space vertices, as supplied.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Cached world-space box; may be stale, see [`Object::recompute_aabb`].
    #[must_use]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Current pose.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    /// Current rotation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.transform.rotation()
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.transform.scale()
    }

    /// Moves the object. The cached box is left untouched.
    pub fn set_position(&mut self, position: Vec3) {
        self.transform = self.transform.with_position(position);
    }

    /// Rotates the object. The cached box is left untouched.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform = self.transform.with_rotation(rotation);
    }

    /// Rescales the object. The cached box is left untouched.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform = self.transform.with_scale(scale);
    }

    /// Local-to-world matrix for the current pose.
    #[must_use]
    pub fn transform_matrix(&self) -> Mat4 {
        self.transform.to_mat4()
    }

    /// Vertices mapped through the current pose.
    #[must_use]
    pub fn world_vertices(&self) -> Vec<Vec3> {
        let m = self.transform_matrix();
        self.vertices.iter().map(|v| m.transform_point(v)).collect()
    }

    /// Refits the cached box around the world-space vertices and returns it.
    pub fn recompute_aabb(&mut self) -> Aabb {
        // `new` rejected empty vertex sets, so the fold sees at least one point.
        self.aabb = Aabb::enclosing(self.world_vertices());
        debug!(
            vertices = self.vertices.len(),
            min = %self.aabb.min(),
            max = %self.aabb.max(),
            "object aabb recomputed"
        );
        self.aabb
    }
}
