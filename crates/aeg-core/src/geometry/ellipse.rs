use std::f64::consts::TAU;
use std::fmt;

use super::{require_dimension, require_finite, Point, Rectangle};
use crate::errors::Result;

/// Number of boundary points used to approximate an ellipse outline
pub const ELLIPSE_SAMPLE_POINTS: usize = 64;

/// Axis-aligned ellipse with an eagerly computed bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point,
    radius_x: f64,
    radius_y: f64,
    bounding_box: Rectangle,
}

impl Ellipse {
    /// # Errors
    /// * `InvalidGeometry` - If the center is not finite, or a radius is
    ///   negative or not finite
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Result<Self> {
        require_finite("ellipse.center.x", center.x)?;
        require_finite("ellipse.center.y", center.y)?;
        let radius_x = require_dimension("ellipse.radius_x", radius_x)?;
        let radius_y = require_dimension("ellipse.radius_y", radius_y)?;
        let bounding_box = Rectangle::new(
            Point::new(center.x - radius_x, center.y - radius_y),
            radius_x * 2.0,
            radius_y * 2.0,
        )?;

        Ok(Self {
            center,
            radius_x,
            radius_y,
            bounding_box,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }

    pub fn bounding_box(&self) -> &Rectangle {
        &self.bounding_box
    }

    /// Strict interior test on the normalized distance from the center
    pub fn contains_point(&self, point: &Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        (dx * dx) / (self.radius_x * self.radius_x) + (dy * dy) / (self.radius_y * self.radius_y)
            < 1.0
    }

    /// `ELLIPSE_SAMPLE_POINTS` points on the outline at equal angular steps,
    /// starting from the rightmost point
    pub fn boundary_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..ELLIPSE_SAMPLE_POINTS).map(move |i| {
            let theta = TAU * i as f64 / ELLIPSE_SAMPLE_POINTS as f64;
            Point::new(
                self.center.x + self.radius_x * theta.cos(),
                self.center.y + self.radius_y * theta.sin(),
            )
        })
    }

    /// The four widest points: left, top, right, bottom
    pub fn axis_points(&self) -> [Point; 4] {
        let Point { x, y } = self.center;
        [
            Point::new(x - self.radius_x, y),
            Point::new(x, y - self.radius_y),
            Point::new(x + self.radius_x, y),
            Point::new(x, y + self.radius_y),
        ]
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Ellipse {
        Ellipse {
            center: self.center.offset(dx, dy),
            bounding_box: self.bounding_box.translated(dx, dy),
            ..*self
        }
    }

    /// Concentric ellipse with both radii multiplied by `ratio`
    ///
    /// # Errors
    /// * `InvalidGeometry` - If `ratio` is negative or not finite
    pub fn scaled(&self, ratio: f64) -> Result<Ellipse> {
        Ellipse::new(self.center, self.radius_x * ratio, self.radius_y * ratio)
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ellipse center: {} rx: {} ry: {}",
            self.center, self.radius_x, self.radius_y
        )
    }
}
