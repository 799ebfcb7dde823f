use std::fmt;

use super::{Ellipse, Point, Rectangle};

/// The bounding shape of a non-sheet node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl Shape {
    pub fn contains_point(&self, point: &Point) -> bool {
        match self {
            Shape::Rectangle(r) => r.contains_point(point),
            Shape::Ellipse(e) => e.contains_point(point),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle(r) => fmt::Display::fmt(r, f),
            Shape::Ellipse(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Whether `candidate` overlaps `other`
///
/// - rectangle/rectangle: closed edge intersection, touching counts
/// - rectangle/ellipse (either order): a sampled point of the ellipse outline
///   lies strictly inside the rectangle
/// - ellipse/ellipse: the bounding boxes meet and a sampled point of the
///   *candidate's* outline lies strictly inside `other`
///
/// The ellipse/ellipse case is asymmetric: a candidate that encloses `other`
/// does not overlap it, which is what lets a newly drawn cut adopt content.
pub fn shapes_overlap(candidate: &Shape, other: &Shape) -> bool {
    match (candidate, other) {
        (Shape::Rectangle(a), Shape::Rectangle(b)) => a.overlaps(b),
        (Shape::Rectangle(r), Shape::Ellipse(e)) | (Shape::Ellipse(e), Shape::Rectangle(r)) => {
            e.boundary_points().any(|p| r.contains_point(&p))
        }
        (Shape::Ellipse(a), Shape::Ellipse(b)) => {
            a.bounding_box().overlaps(b.bounding_box())
                && a.boundary_points().any(|p| b.contains_point(&p))
        }
    }
}

/// Whether `outer` strictly contains `inner`
pub fn shape_contains(outer: &Shape, inner: &Shape) -> bool {
    match (outer, inner) {
        (Shape::Rectangle(o), Shape::Rectangle(i)) => {
            i.corners().iter().all(|c| o.contains_point(c))
        }
        (Shape::Rectangle(o), Shape::Ellipse(i)) => {
            i.axis_points().iter().all(|p| o.contains_point(p))
        }
        (Shape::Ellipse(o), Shape::Rectangle(i)) => {
            i.corners().iter().all(|c| o.contains_point(c))
        }
        (Shape::Ellipse(o), Shape::Ellipse(i)) => i.boundary_points().all(|p| o.contains_point(&p)),
    }
}
