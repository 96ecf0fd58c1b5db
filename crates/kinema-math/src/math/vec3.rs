// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::fmt::write_list;
use crate::math::{approx_eq, Scalar};

/// Immutable 3D vector.
///
/// * Components may represent either points or directions depending on the
///   calling context; [`crate::math::Mat4::transform_point`] and
///   [`crate::math::Mat4::transform_direction`] make the distinction explicit.
/// * `==` compares component-wise within [`crate::math::TOLERANCE`].
/// * Magnitude-dependent operations ([`Vec3::normalize`], [`Vec3::angle`]) are
///   undefined on the zero vector and yield NaN/Inf components; callers guard.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec3 {
    data: [Scalar; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { data: [x, y, z] }
    }

    /// Unit direction for a pitch/yaw pair given in radians.
    ///
    /// `pitch` lifts the direction towards +Y, `yaw` swings it from +X towards
    /// +Z: `(cos yaw · cos pitch, sin pitch, cos pitch · sin yaw)`.
    pub fn from_angles(pitch: Scalar, yaw: Scalar) -> Self {
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();
        Self::new(cy * cp, sp, cp * sy)
    }

    /// Unit direction in the XY plane for `roll` radians measured from +X.
    pub fn from_angle_2d(roll: Scalar) -> Self {
        let (s, c) = roll.sin_cos();
        Self::new(c, s, 0.0)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [Scalar; 3] {
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

    fn map2(&self, other: &Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Self {
        Self::new(
            f(self.component(0), other.component(0)),
            f(self.component(1), other.component(1)),
            f(self.component(2), other.component(2)),
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

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: Scalar) -> Self {
        Self::new(
            self.component(0) * scalar,
            self.component(1) * scalar,
            self.component(2) * scalar,
        )
    }

    /// Component-wise (Hadamard) product.
    pub fn component_mul(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a * b)
    }

    /// Component-wise quotient; zero components of `other` yield Inf/NaN.
    pub fn component_div(&self, other: &Self) -> Self {
        self.map2(other, |a, b| a / b)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> Scalar {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector magnitude (Euclidean length).
    pub fn magnitude(&self) -> Scalar {
        self.dot(self).sqrt()
    }

    /// Squared magnitude; avoids the square root for comparisons.
    pub fn magnitude_squared(&self) -> Scalar {
        self.dot(self)
    }

    /// Divides the vector by its magnitude.
    ///
    /// The zero vector has no direction: the result is NaN in every
    /// component. Callers that may see zero vectors must check first.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> Scalar {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance between two points.
    pub fn distance_squared(&self, other: &Self) -> Scalar {
        self.sub(other).magnitude_squared()
    }

    /// Vector pointing from `self` to `other` (`other - self`).
    pub fn vector_to(&self, other: &Self) -> Self {
        other.sub(self)
    }

    /// Linear interpolation `self + (other - self) * t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
    ///
    /// ```
    /// use kinema_math::Vec3;
    /// let p = Vec3::ZERO.lerp(&Vec3::new(10.0, 0.0, 0.0), 0.5);
    /// assert_eq!(p, Vec3::new(5.0, 0.0, 0.0));
    /// ```
    pub fn lerp(&self, other: &Self, t: Scalar) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    /// Point halfway between `self` and `other`.
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

    /// Shortens the vector to `max_magnitude` when it is longer; otherwise
    /// returns it unchanged.
    pub fn clamp_magnitude(&self, max_magnitude: Scalar) -> Self {
        if self.magnitude() > max_magnitude {
            self.normalize().scale(max_magnitude)
        } else {
            *self
        }
    }

    /// Projects `self` onto `onto` as `onto * dot(self, onto)`.
    ///
    /// This does NOT divide by `|onto|²`, so it only matches the textbook
    /// vector projection when `onto` is a unit vector. Existing callers rely
    /// on the undivided form; normalise `onto` first for a true projection.
    pub fn project(&self, onto: &Self) -> Self {
        onto.scale(self.dot(onto))
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// The cosine ratio is clamped to `[-1, 1]` so rounding cannot push it out
    /// of `acos`'s domain. Zero-magnitude input still yields NaN.
    pub fn angle(&self, other: &Self) -> Scalar {
        let ratio = self.dot(other) / (self.magnitude() * other.magnitude());
        ratio.clamp(-1.0, 1.0).acos()
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        (0..3).all(|i| approx_eq(self.component(i), other.component(i)))
    }
}

/// Converts a 3-element array into a `Vec3` interpreted as `(x, y, z)`.
///
/// ```
/// use kinema_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[Scalar; 3]> for Vec3 {
    fn from(value: [Scalar; 3]) -> Self {
        Self { data: value }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.data)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul<Scalar> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Scalar) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for Scalar {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.component_mul(&rhs)
    }
}

impl Div<Scalar> for Vec3 {
    type Output = Self;
    fn div(self, rhs: Scalar) -> Self {
        Self::new(
            self.component(0) / rhs,
            self.component(1) / rhs,
            self.component(2) / rhs,
        )
    }
}

impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.component_div(&rhs)
    }
}
