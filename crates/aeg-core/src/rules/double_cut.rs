//! Double cut insertion and deletion

use tracing::trace;

use crate::config::ProofConfig;
use crate::geometry::{Ellipse, Point};
use crate::model::Node;
use crate::ops::AegTree;

/// Draw an outer cut with the given ellipse and a concentric inner cut scaled
/// by `config.inner_cut_ratio`
///
/// Anything the pair encloses ends up inside the inner cut; nothing may end up
/// between the two.
pub fn double_cut_insertion(
    tree: &AegTree,
    center: Point,
    radius_x: f64,
    radius_y: f64,
    config: &ProofConfig,
) -> Option<AegTree> {
    let outer = Ellipse::new(center, radius_x, radius_y).ok()?;
    let inner = outer.scaled(config.inner_cut_ratio).ok()?;

    let radii = [
        outer.radius_x(),
        outer.radius_y(),
        inner.radius_x(),
        inner.radius_y(),
    ];
    if radii.iter().any(|r| *r <= config.min_cut_radius) {
        trace!(min = config.min_cut_radius, "double cut too small");
        return None;
    }

    let mut next = tree.clone();
    let outer_path = next.insert(Node::cut(outer)).ok()?;
    let inner_path = next.insert(Node::cut(inner)).ok()?;

    if inner_path.parent().as_ref() != Some(&outer_path) {
        return None;
    }
    if next.node_at(&outer_path)?.children().len() != 1 {
        trace!("double cut would leave nodes between the cuts");
        return None;
    }
    Some(next)
}

/// Remove the cut at `point` and its only child cut, promoting the inner
/// cut's children to the outer cut's parent
pub fn double_cut_deletion(tree: &AegTree, point: &Point) -> Option<AegTree> {
    let path = tree.lowest_node_path(point)?;
    match tree.node_at(&path)? {
        Node::Cut { children, .. } if children.len() == 1 && children[0].is_cut() => {}
        _ => return None,
    }

    let mut next = tree.clone();
    // the inner cut takes the outer one's place, then its own children take its place
    next.take_single_at(&path)?;
    next.take_single_at(&path)?;
    Some(next)
}
