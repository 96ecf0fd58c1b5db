// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::math::Scalar;

/// Writes one scalar, honouring the formatter's precision when present.
pub(crate) fn write_scalar(f: &mut fmt::Formatter<'_>, value: Scalar) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{value:.p$}"),
        None => write!(f, "{value}"),
    }
}

/// Writes `values` separated by `", "`.
pub(crate) fn write_list(f: &mut fmt::Formatter<'_>, values: &[Scalar]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_scalar(f, *v)?;
    }
    Ok(())
}
