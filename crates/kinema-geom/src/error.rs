// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Construction errors for bounding volumes and objects.

use kinema_math::Scalar;
use thiserror::Error;

/// Error type for geometry construction.
///
/// Numeric degeneracies inside queries (zero-length segments, parallel
/// capsule axes) are not errors; they surface as NaN or `false` results.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A bounding volume was requested for zero vertices.
    #[error("vertex set is empty")]
    EmptyVertexSet,
    /// `min` exceeds `max` (or either is NaN) on one axis.
    #[error("inverted extents on {axis} axis: min {min} > max {max}")]
    InvertedExtents {
        /// Offending axis, `'x'`, `'y'` or `'z'`.
        axis: char,
        /// Minimum supplied for that axis.
        min: Scalar,
        /// Maximum supplied for that axis.
        max: Scalar,
    },
    /// Radius below zero or NaN.
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(Scalar),
}
