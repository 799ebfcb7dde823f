//! Structure-preserving moves

use crate::geometry::Point;
use crate::ops::AegTree;

/// Move the node at `selected` with its subtree by `destination - selected`
pub fn move_subtree(tree: &AegTree, selected: &Point, destination: &Point) -> Option<AegTree> {
    let path = tree.lowest_node_path(selected)?;
    let mut scratch = tree.clone();
    let moved = scratch
        .take_at(&path)?
        .translated(destination.x - selected.x, destination.y - selected.y);

    if !scratch.can_insert(&moved) {
        return None;
    }
    scratch.insert(moved).ok()?;
    scratch.is_equal_to(tree).then_some(scratch)
}

/// Move only the node at `selected`
///
/// A cut's children stay where they are: they are promoted into its parent,
/// then the moved cut adopts whatever it encloses at its new position.
pub fn move_single(tree: &AegTree, selected: &Point, destination: &Point) -> Option<AegTree> {
    let path = tree.lowest_node_path(selected)?;
    let mut scratch = tree.clone();
    let moved = scratch
        .take_single_at(&path)?
        .translated(destination.x - selected.x, destination.y - selected.y);

    scratch.insert(moved).ok()?;
    (scratch.verify() && scratch.is_equal_to(tree)).then_some(scratch)
}
