// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounding volumes and transforms.
//!
//! Conventions:
//! - Overlap and containment tests are inclusive on the boundary so touching
//!   volumes count as intersecting.
//! - Squared distances are compared wherever possible; square roots appear
//!   only when a length is the actual result.
//! - Volumes validate their invariants at construction (`new` panics,
//!   `try_new` returns [`crate::GeomError`]) and are immutable afterwards.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Swept-sphere capsules around a segment."]
pub mod capsule;
#[doc = "Bounding spheres."]
pub mod sphere;
#[doc = "Position/rotation/scale transforms."]
pub mod transform;
