use std::fmt;

use super::{require_dimension, require_finite, Point};
use crate::errors::Result;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    origin: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle with top-left corner `origin`
    ///
    /// # Errors
    /// * `InvalidGeometry` - If the origin is not finite, or a dimension is
    ///   negative or not finite
    pub fn new(origin: Point, width: f64, height: f64) -> Result<Self> {
        require_finite("rectangle.origin.x", origin.x)?;
        require_finite("rectangle.origin.y", origin.y)?;
        Ok(Self {
            origin,
            width: require_dimension("rectangle.width", width)?,
            height: require_dimension("rectangle.height", height)?,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.origin.offset(self.width / 2.0, self.height / 2.0)
    }

    /// Corners clockwise from the top-left
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.origin;
        [
            Point::new(x, y),
            Point::new(x + self.width, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ]
    }

    /// Strict interior test; points on an edge are outside
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x > self.origin.x
            && point.x < self.origin.x + self.width
            && point.y > self.origin.y
            && point.y < self.origin.y + self.height
    }

    /// Closed-interval intersection: touching edges count as overlap
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.origin.x <= other.origin.x + other.width
            && other.origin.x <= self.origin.x + self.width
            && self.origin.y <= other.origin.y + other.height
            && other.origin.y <= self.origin.y + self.height
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Rectangle {
        Rectangle {
            origin: self.origin.offset(dx, dy),
            ..*self
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle {} w: {} h: {}",
            self.origin, self.width, self.height
        )
    }
}
