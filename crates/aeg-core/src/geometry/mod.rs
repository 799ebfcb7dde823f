//! Geometry kernel
//!
//! Points, rectangles and ellipses plus the two predicates the graph tree is
//! built on: `shapes_overlap` and `shape_contains`.
//!
//! Ellipse boundaries are approximated by `ELLIPSE_SAMPLE_POINTS` points. Two
//! shapes whose boundaries cross only between sample points are reported as
//! disjoint; proof rule legality depends on exactly this behavior, so the
//! approximation is part of the contract.

pub mod ellipse;
pub mod point;
pub mod rectangle;
pub mod shape;

pub use ellipse::{Ellipse, ELLIPSE_SAMPLE_POINTS};
pub use point::Point;
pub use rectangle::Rectangle;
pub use shape::{shape_contains, shapes_overlap, Shape};

use crate::errors::{AegError, Result};

/// Reject NaN and infinities
pub(crate) fn require_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AegError::InvalidGeometry {
            field: field.to_string(),
            value,
        })
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn require_dimension(field: &str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(AegError::InvalidGeometry {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}
