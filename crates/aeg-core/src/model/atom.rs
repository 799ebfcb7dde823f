use std::fmt;

use crate::errors::{AegError, Result};
use crate::geometry::{require_dimension, require_finite, Point, Rectangle};

/// Atomic proposition: a single Latin letter drawn at a baseline origin
///
/// The bounding rectangle sits above the baseline, spanning
/// `(origin.x, origin.y - height)` to `(origin.x + width, origin.y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    identifier: char,
    origin: Point,
    width: f64,
    height: f64,
    rect: Rectangle,
}

impl Atom {
    /// # Errors
    /// * `InvalidIdentifier` - If `identifier` is not an ASCII letter
    /// * `InvalidGeometry` - If the origin is not finite, or a dimension is
    ///   negative or not finite
    pub fn new(identifier: char, origin: Point, width: f64, height: f64) -> Result<Self> {
        if !identifier.is_ascii_alphabetic() {
            return Err(AegError::InvalidIdentifier { identifier });
        }
        require_finite("atom.origin.x", origin.x)?;
        require_finite("atom.origin.y", origin.y)?;
        let width = require_dimension("atom.width", width)?;
        let height = require_dimension("atom.height", height)?;
        let rect = Rectangle::new(Point::new(origin.x, origin.y - height), width, height)?;

        Ok(Self {
            identifier,
            origin,
            width,
            height,
            rect,
        })
    }

    pub fn identifier(&self) -> char {
        self.identifier
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

    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Atom {
        Atom {
            origin: self.origin.offset(dx, dy),
            rect: self.rect.translated(dx, dy),
            ..*self
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom {} {}", self.identifier, self.rect)
    }
}
