// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kinema_math::{Scalar, Vec3};
use tracing::trace;

use crate::{BoundingSphere, GeomError};

/// Sphere of `radius` swept along the segment `start → end`.
///
/// Capsule-capsule tests come in two restricted forms and the caller picks
/// the one matching the geometry:
/// - [`BoundingCapsule::intersects_parallel_capsule`] when the axes are
///   parallel;
/// - [`BoundingCapsule::intersects_crossing_capsule`] when they are not.
///
/// Neither is a general segment-segment distance test.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCapsule"))]
pub struct BoundingCapsule {
    start: Vec3,
    end: Vec3,
    radius: Scalar,
}

impl BoundingCapsule {
    /// Constructs a capsule from its segment endpoints and radius.
    ///
    /// # Panics
    /// Panics if `radius` is negative or NaN.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3, radius: Scalar) -> Self {
        assert!(radius >= 0.0, "invalid capsule radius: {radius}");
        Self { start, end, radius }
    }

    /// Fallible form of [`BoundingCapsule::new`].
    ///
    /// # Errors
    /// [`GeomError::NegativeRadius`] if `radius` is negative or NaN.
    pub fn try_new(start: Vec3, end: Vec3, radius: Scalar) -> Result<Self, GeomError> {
        if radius >= 0.0 {
            Ok(Self { start, end, radius })
        } else {
            Err(GeomError::NegativeRadius(radius))
        }
    }

    /// First segment endpoint.
    #[must_use]
    pub fn start(&self) -> Vec3 {
        self.start
    }

    /// Second segment endpoint.
    #[must_use]
    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Radius of the swept sphere.
    #[must_use]
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    /// Segment direction `end - start`, not normalised.
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.end - self.start
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        self.start.midpoint(&self.end)
    }

    /// Tip-to-tip length: segment length plus both hemispherical caps.
    #[must_use]
    pub fn height(&self) -> Scalar {
        self.axis().magnitude() + 2.0 * self.radius
    }

    /// Squared distance from `p` to the closest point of the segment.
    fn segment_distance_squared(&self, p: &Vec3) -> Scalar {
        let ab = self.axis();
        let ac = *p - self.start;
        let t = ac.dot(&ab);
        if t <= 0.0 {
            return ac.magnitude_squared();
        }
        let len2 = ab.magnitude_squared();
        if t >= len2 {
            return p.distance_squared(&self.end);
        }
        ac.magnitude_squared() - t * t / len2
    }

    /// Returns `true` when `sphere` touches or overlaps the capsule.
    ///
    /// The sphere centre is projected onto the capsule segment: before
    /// `start` the distance is measured to `start`, past `end` to `end`, and
    /// in between perpendicular to the axis.
    ///
    /// ```
    /// use kinema_geom::{BoundingCapsule, BoundingSphere};
    /// use kinema_math::Vec3;
    /// let rod = BoundingCapsule::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0);
    /// assert!(rod.intersects_sphere(&BoundingSphere::new(Vec3::new(5.0, 1.5, 0.0), 0.5)));
    /// assert!(!rod.intersects_sphere(&BoundingSphere::new(Vec3::new(12.0, 0.0, 0.0), 0.5)));
    /// ```
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let reach = self.radius + sphere.radius();
        self.segment_distance_squared(&sphere.center()) <= reach * reach
    }

    /// Capsule test valid only when both axes are parallel.
    ///
    /// Takes whichever endpoint of `other` lies farther from this capsule's
    /// midpoint and runs the sphere test against a sphere of `other`'s
    /// radius there. The result is meaningless for non-parallel axes.
    ///
    /// Probing the farther endpoint misses collinear capsules that overlap
    /// only near `other`'s closer end; probing the nearer endpoint would
    /// catch those. Which endpoint is correct is an open question and the
    /// farther one is kept until it is settled.
    #[must_use]
    pub fn intersects_parallel_capsule(&self, other: &Self) -> bool {
        let mid = self.midpoint();
        let endpoint = if mid.distance_squared(&other.start) >= mid.distance_squared(&other.end) {
            other.start
        } else {
            other.end
        };
        trace!(endpoint = %endpoint, "parallel capsule test");
        self.intersects_sphere(&BoundingSphere::new(endpoint, other.radius))
    }

    /// Capsule test valid only when the axes are not parallel.
    ///
    /// Compares the distance between the two infinite carrier lines,
    /// `|a·(d1×d2)| / |d1×d2|`, strictly against the summed radii. Segment
    /// extents are ignored. Parallel axes make the denominator zero, the
    /// distance NaN, and the result `false`.
    #[must_use]
    pub fn intersects_crossing_capsule(&self, other: &Self) -> bool {
        let normal = self.axis().cross(&other.axis());
        let between = other.start - self.start;
        let distance = between.dot(&normal).abs() / normal.magnitude();
        trace!(distance, "crossing capsule test");
        distance < self.radius + other.radius
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCapsule {
    start: Vec3,
    end: Vec3,
    radius: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCapsule> for BoundingCapsule {
    type Error = GeomError;
    fn try_from(raw: RawCapsule) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end, raw.radius)
    }
}
