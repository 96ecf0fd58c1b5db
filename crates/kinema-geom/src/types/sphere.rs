// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kinema_math::{Scalar, Vec3};
use tracing::debug;

use crate::{Aabb, GeomError};

/// Sphere given by a centre and a non-negative radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSphere"))]
pub struct BoundingSphere {
    center: Vec3,
    radius: Scalar,
}

impl BoundingSphere {
    /// Constructs a sphere from centre and radius.
    ///
    /// # Panics
    /// Panics if `radius` is negative or NaN.
    #[must_use]
    pub fn new(center: Vec3, radius: Scalar) -> Self {
        assert!(radius >= 0.0, "invalid sphere radius: {radius}");
        Self { center, radius }
    }

    /// Fallible form of [`BoundingSphere::new`].
    ///
    /// # Errors
    /// [`GeomError::NegativeRadius`] if `radius` is negative or NaN.
    pub fn try_new(center: Vec3, radius: Scalar) -> Result<Self, GeomError> {
        if radius >= 0.0 {
            Ok(Self { center, radius })
        } else {
            Err(GeomError::NegativeRadius(radius))
        }
    }

    /// Fits a sphere around the two most distant vertices.
    ///
    /// Every pair is compared (quadratic in the vertex count); the centre is
    /// the midpoint of the farthest pair and the radius half their distance.
    /// Vertices off that axis may still poke out, so the result is an
    /// approximation rather than the minimal enclosing sphere. A single
    /// vertex yields a zero-radius sphere.
    ///
    /// # Errors
    /// [`GeomError::EmptyVertexSet`] when `vertices` is empty.
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, GeomError> {
        let first = vertices.first().ok_or(GeomError::EmptyVertexSet)?;
        let mut best = (*first, *first, 0.0);
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                let d2 = a.distance_squared(b);
                if d2 > best.2 {
                    best = (*a, *b, d2);
                }
            }
        }
        let (a, b, d2) = best;
        let sphere = Self {
            center: a.midpoint(&b),
            radius: d2.sqrt() * 0.5,
        };
        debug!(
            vertices = vertices.len(),
            center = %sphere.center,
            radius = sphere.radius,
            "bounding sphere fitted to vertex set"
        );
        Ok(sphere)
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius.
    #[must_use]
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    /// Returns `true` when the spheres touch or overlap.
    ///
    /// ```
    /// use kinema_geom::BoundingSphere;
    /// use kinema_math::Vec3;
    /// let a = BoundingSphere::new(Vec3::ZERO, 1.0);
    /// let b = BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0);
    /// assert!(!a.intersects(&b));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(&other.center) <= reach * reach
    }

    /// Returns `true` if `p` lies inside or on the sphere.
    #[must_use]
    pub fn contains_point(&self, p: &Vec3) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }

    /// Returns `true` when the sphere touches or overlaps `aabb`.
    ///
    /// Clamps the centre into the box to find the closest point, then
    /// compares its distance with the radius.
    #[must_use]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        let closest = self.center.max(&aabb.min()).min(&aabb.max());
        self.contains_point(&closest)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSphere {
    center: Vec3,
    radius: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSphere> for BoundingSphere {
    type Error = GeomError;
    fn try_from(raw: RawSphere) -> Result<Self, Self::Error> {
        Self::try_new(raw.center, raw.radius)
    }
}
