// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;

use kinema_math::{Mat4, Scalar, Vec3};
use tracing::debug;

use crate::GeomError;

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - A box may be flat or a single point (`min == max` on some axes).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAabb"))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

/// First hit of a segment against an [`Aabb`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentHit {
    /// Parameter along the segment in `[0, 1]`; `0` when the start is inside.
    pub t: Scalar,
    /// World-space entry point, `lerp(start, end, t)`.
    pub point: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(Self::try_new(min, max).is_ok(), "invalid AABB: min ({min}) > max ({max})");
        Self { min, max }
    }

    /// Fallible form of [`Aabb::new`].
    ///
    /// # Errors
    /// [`GeomError::InvertedExtents`] for the first axis whose `min` exceeds
    /// `max`. NaN extents are rejected along with inverted ones.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self, GeomError> {
        let (lo, hi) = (min.to_array(), max.to_array());
        for (axis, (&a, &b)) in AXES.iter().zip(lo.iter().zip(hi.iter())) {
            if !matches!(a.partial_cmp(&b), Some(Ordering::Less | Ordering::Equal)) {
                return Err(GeomError::InvertedExtents {
                    axis: *axis,
                    min: a,
                    max: b,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Builds the minimal AABB that contains all `vertices`.
    ///
    /// # Errors
    /// [`GeomError::EmptyVertexSet`] when `vertices` is empty.
    ///
    /// ```
    /// use kinema_geom::Aabb;
    /// use kinema_math::Vec3;
    /// let b = Aabb::from_vertices(&[Vec3::new(1.0, -2.0, 0.0), Vec3::new(-1.0, 3.0, 0.5)])?;
    /// assert_eq!(b.min(), Vec3::new(-1.0, -2.0, 0.0));
    /// assert_eq!(b.max(), Vec3::new(1.0, 3.0, 0.5));
    /// # Ok::<(), kinema_geom::GeomError>(())
    /// ```
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, GeomError> {
        let (first, rest) = vertices.split_first().ok_or(GeomError::EmptyVertexSet)?;
        let bounds = rest.iter().fold(Self::point(*first), |acc, v| acc.grow(v));
        debug!(
            vertices = vertices.len(),
            min = %bounds.min,
            max = %bounds.max,
            "aabb fitted to vertex set"
        );
        Ok(bounds)
    }

    /// Builds an AABB centred at `center` extending `half_extents` along
    /// each axis.
    ///
    /// # Panics
    /// Panics if any half extent is negative.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    fn grow(&self, p: &Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Box around `points`, folded from an inverted infinite box.
    ///
    /// Callers guarantee at least one point; an empty iterator returns the
    /// inverted seed unchanged.
    pub(crate) fn enclosing(points: impl IntoIterator<Item = Vec3>) -> Self {
        let seed = Self {
            min: Vec3::new(Scalar::INFINITY, Scalar::INFINITY, Scalar::INFINITY),
            max: Vec3::new(Scalar::NEG_INFINITY, Scalar::NEG_INFINITY, Scalar::NEG_INFINITY),
        };
        points.into_iter().fold(seed, |acc, p| acc.grow(&p))
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Minimum x.
    #[must_use]
    pub fn left(&self) -> Scalar {
        self.min.x()
    }

    /// Maximum x.
    #[must_use]
    pub fn right(&self) -> Scalar {
        self.max.x()
    }

    /// Minimum y.
    #[must_use]
    pub fn bottom(&self) -> Scalar {
        self.min.y()
    }

    /// Maximum y.
    #[must_use]
    pub fn top(&self) -> Scalar {
        self.max.y()
    }

    /// Minimum z.
    #[must_use]
    pub fn back(&self) -> Scalar {
        self.min.z()
    }

    /// Maximum z.
    #[must_use]
    pub fn front(&self) -> Scalar {
        self.max.z()
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.midpoint(&self.max)
    }

    /// Half the size along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// The eight corners, `min` first and `max` last.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ]
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    ///
    /// Symmetric: `a.intersects(&b) == b.intersects(&a)`.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        !(a_max[0] < b_min[0]
            || a_min[0] > b_max[0]
            || a_max[1] < b_min[1]
            || a_min[1] > b_max[1]
            || a_max[2] < b_min[2]
            || a_min[2] > b_max[2])
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Vec3) -> bool {
        let (lo, hi, p) = (self.min.to_array(), self.max.to_array(), p.to_array());
        (0..3).all(|i| lo[i] <= p[i] && p[i] <= hi[i])
    }

    /// Returns `true` if `other` lies entirely inside this box.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// First intersection of the segment `start → end` with this box.
    ///
    /// Slab method: each axis narrows the parameter interval, which starts
    /// as `[0, 1]`, to the range where the segment lies between that axis'
    /// planes. An axis along which the segment does not move keeps the
    /// interval when `start` is within the slab and misses otherwise.
    ///
    /// ```
    /// use kinema_geom::Aabb;
    /// use kinema_math::Vec3;
    /// let unit = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::ONE);
    /// let hit = unit
    ///     .segment_intersection(&Vec3::new(-2.0, 0.0, 0.0), &Vec3::new(2.0, 0.0, 0.0))
    ///     .unwrap();
    /// assert_eq!(hit.t, 0.25);
    /// assert_eq!(hit.point, Vec3::new(-1.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn segment_intersection(&self, start: &Vec3, end: &Vec3) -> Option<SegmentHit> {
        let (lo, hi) = (self.min.to_array(), self.max.to_array());
        let origin = start.to_array();
        let dir = start.vector_to(end).to_array();

        let mut lowest: Scalar = 0.0;
        let mut highest: Scalar = 1.0;
        for axis in 0..3 {
            if dir[axis] == 0.0 {
                if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                    return None;
                }
                continue;
            }
            let mut near = (lo[axis] - origin[axis]) / dir[axis];
            let mut far = (hi[axis] - origin[axis]) / dir[axis];
            if near > far {
                core::mem::swap(&mut near, &mut far);
            }
            lowest = lowest.max(near);
            highest = highest.min(far);
            if lowest > highest {
                return None;
            }
        }
        Some(SegmentHit {
            t: lowest,
            point: start.lerp(end, lowest),
        })
    }

    /// Boolean form of [`Aabb::segment_intersection`].
    #[must_use]
    pub fn intersects_segment(&self, start: &Vec3, end: &Vec3) -> bool {
        self.segment_intersection(start, end).is_some()
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    ///
    /// # Panics
    /// Panics if a negative margin collapses the box past a point.
    #[must_use]
    pub fn inflate(&self, m: Scalar) -> Self {
        let delta = Vec3::new(m, m, m);
        Self::new(self.min - delta, self.max + delta)
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    ///
    /// This evaluates the eight corners under the affine transform and builds a
    /// new axis-aligned box containing them.
    #[must_use]
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let [first, rest @ ..] = self.corners().map(|c| mat.transform_point(&c));
        rest.iter().fold(Self::point(first), |acc, p| acc.grow(p))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAabb {
    min: Vec3,
    max: Vec3,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAabb> for Aabb {
    type Error = GeomError;
    fn try_from(raw: RawAabb) -> Result<Self, Self::Error> {
        Self::try_new(raw.min, raw.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_replaces_infinite_seed() {
        let b = Aabb::enclosing([Vec3::new(2.0, -1.0, 0.0), Vec3::new(-1.0, 3.0, 0.5)]);
        assert_eq!(b.min(), Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max(), Vec3::new(2.0, 3.0, 0.5));
        let single = Aabb::enclosing([Vec3::ONE]);
        assert_eq!(single, Aabb::point(Vec3::ONE));
    }

    #[test]
    fn try_new_reports_offending_axis() {
        assert_eq!(
            Aabb::try_new(Vec3::new(0.0, 2.0, 0.0), Vec3::ONE),
            Err(GeomError::InvertedExtents {
                axis: 'y',
                min: 2.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn try_new_rejects_nan() {
        let nan = Vec3::new(Scalar::NAN, 0.0, 0.0);
        assert!(Aabb::try_new(nan, Vec3::ONE).is_err());
    }

    #[test]
    fn transformed_rotation_grows_box() {
        let unit = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::ONE);
        let spun = unit.transformed(&Mat4::rotation_z(45.0));
        let r = (2.0 as Scalar).sqrt();
        assert_eq!(spun.max(), Vec3::new(r, r, 1.0));
        assert_eq!(spun.min(), Vec3::new(-r, -r, -1.0));
    }
}
