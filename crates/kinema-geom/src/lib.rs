// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![forbid(unsafe_code)]
#![doc = r"Geometry primitives for Kinema.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) with a slab-method segment query.
- Bounding spheres (`BoundingSphere`) and capsules (`BoundingCapsule`).
- Position/rotation/scale transforms (`Transform`).
- Transformable vertex sets with a cached world-space box (`Object`).

Design notes:
- Overlap semantics are inclusive on faces and edges.
- Construction validates extents and radii; queries never fail and report
  degenerate input as `false` or NaN.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Construction errors.
pub mod error;
/// Transformable vertex sets.
pub mod object;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use object::Object;
pub use types::aabb::{Aabb, SegmentHit};
pub use types::capsule::BoundingCapsule;
pub use types::sphere::BoundingSphere;
pub use types::transform::Transform;
