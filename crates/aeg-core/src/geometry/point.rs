use std::fmt;

use super::require_finite;
use crate::errors::Result;

/// A point in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from raw input, rejecting non-finite coordinates
    ///
    /// # Errors
    /// * `InvalidGeometry` - If either coordinate is NaN or infinite
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: require_finite("point.x", x)?,
            y: require_finite("point.y", y)?,
        })
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// This point translated by `(dx, dy)`
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
