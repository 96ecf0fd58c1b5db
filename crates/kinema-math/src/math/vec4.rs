// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::fmt::write_list;
use crate::math::{approx_eq, Scalar, Vec3};

/// Immutable homogeneous 4D vector `(x, y, z, w)`.
///
/// Widening from [`Vec3`] is always explicit so the homogeneous intent stays
/// visible at the call site:
/// - [`Vec4::from_direction`] sets `w = 0` (unaffected by translation);
/// - [`Vec4::from_point`] sets `w = 1` (picks up translation);
/// - [`Vec4::extend`] takes an explicit `w`.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec4 {
    data: [Scalar; 4],
}

impl Vec4 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit vector along X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit vector along Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit vector along Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit vector along W; the homogeneous origin.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Widens `v` with an explicit `w`.
    pub const fn extend(v: Vec3, w: Scalar) -> Self {
        let [x, y, z] = v.to_array();
        Self::new(x, y, z, w)
    }

    /// Widens `v` as a direction (`w = 0`).
    pub const fn from_direction(v: Vec3) -> Self {
        Self::extend(v, 0.0)
    }

    /// Widens `v` as a position (`w = 1`).
    pub const fn from_point(v: Vec3) -> Self {
        Self::extend(v, 1.0)
    }

    /// Drops `w`, keeping `(x, y, z)`. No perspective divide is applied.
    pub fn truncate(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Scalar; 4] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> Scalar {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> Scalar {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> Scalar {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> Scalar {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> Scalar {
        self.data[3]
    }

    fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    fn map2(&self, other: &Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
            f(self.data[3], other.data[3]),
        )
    }

    /// Adds two vectors.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a + b)
    }

    /// Subtracts another vector.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a - b)
    }

    /// Scales every component, including `w`.
    pub fn scale(&self, scalar: Scalar) -> Self {
        self.map(|c| c * scalar)
    }

    /// Component-wise product.
    pub fn component_mul(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a * b)
    }

    /// Component-wise quotient.
    pub fn component_div(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a / b)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> Scalar {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Vector magnitude over all four components.
    pub fn magnitude(&self) -> Scalar {
        self.dot(self).sqrt()
    }

    /// Squared magnitude.
    pub fn magnitude_squared(&self) -> Scalar {
        self.dot(self)
    }

    /// Divides by the magnitude; NaN for the zero vector.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Distance between two vectors.
    pub fn distance(&self, other: &Self) -> Scalar {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance between two vectors.
    pub fn distance_squared(&self, other: &Self) -> Scalar {
        self.sub(other).magnitude_squared()
    }

    /// Linear interpolation `self + (other - self) * t`, `t` unclamped.
    pub fn lerp(&self, other: &Self, t: Scalar) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// Halfway point.
    pub fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }

    /// Per-component minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.map2(other, Scalar::min)
    }

    /// Per-component maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.map2(other, Scalar::max)
    }

    /// Shortens the vector to `max_magnitude` when it is longer.
    pub fn clamp_magnitude(&self, max_magnitude: Scalar) -> Self {
        if self.magnitude() > max_magnitude {
            self.normalize().scale(max_magnitude)
        } else {
            *self
        }
    }

    /// `onto * dot(self, onto)`; see [`Vec3::project`] for why this is not
    /// divided by `|onto|²`.
    pub fn project(&self, onto: &Self) -> Self {
        onto.scale(self.dot(onto))
    }

    /// Angle in radians; the cosine ratio is clamped to `[-1, 1]`.
    pub fn angle(&self, other: &Self) -> Scalar {
        let ratio = self.dot(other) / (self.magnitude() * other.magnitude());
        ratio.clamp(-1.0, 1.0).acos()
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        (0..4).all(|i| approx_eq(self.component(i), other.component(i)))
    }
}

impl From<[Scalar; 4]> for Vec4 {
    fn from(value: [Scalar; 4]) -> Self {
        Self { data: value }
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.data)
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec4::add(&self, &rhs)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec4::sub(&self, &rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul<Scalar> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Scalar) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec4> for Scalar {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.scale(self)
    }
}

impl Mul for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.component_mul(&rhs)
    }
}

impl Div<Scalar> for Vec4 {
    type Output = Self;
    fn div(self, rhs: Scalar) -> Self {
        self.map(|c| c / rhs)
    }
}

impl Div for Vec4 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.component_div(&rhs)
    }
}
