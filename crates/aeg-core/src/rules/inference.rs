//! Erasure, insertion, iteration and deiteration

use tracing::trace;

use crate::geometry::Point;
use crate::model::Node;
use crate::ops::AegTree;

fn is_even(level: usize) -> bool {
    level % 2 == 0
}

/// Remove the node at `point` if it sits at an even level
pub fn erasure(tree: &AegTree, point: &Point) -> Option<AegTree> {
    let path = tree.lowest_node_path(point)?;
    if !is_even(path.level()) {
        trace!(path = %path, level = path.level(), "erasure at odd level");
        return None;
    }

    let mut next = tree.clone();
    next.take_at(&path)?;
    Some(next)
}

/// Insert `node` into a cut at an even level, i.e. into a negative context
pub fn insertion(tree: &AegTree, node: &Node) -> Option<AegTree> {
    if node.is_sheet() {
        return None;
    }

    let target_path = tree.current_cut_path(node);
    if target_path.is_root() || !is_even(target_path.level()) {
        trace!(target = %target_path, "insertion outside a negative context");
        return None;
    }

    let target = tree.node_at(&target_path)?;
    if target.children().iter().any(|child| node.contains_node(child)) {
        trace!(target = %target_path, "insertion would enclose existing nodes");
        return None;
    }
    if !tree.can_insert(node) {
        return None;
    }

    let mut next = tree.clone();
    next.insert(node.clone()).ok()?;
    Some(next)
}

/// Copy the node at `selected` to `destination`
///
/// The copy must land in the node's own context or one nested inside it, but
/// never inside the node itself, and may not enclose anything.
pub fn iteration(tree: &AegTree, selected: &Point, destination: &Point) -> Option<AegTree> {
    let source_path = tree.lowest_node_path(selected)?;
    let context = source_path.parent()?;
    let source = tree.node_at(&source_path)?;
    let copy = source.translated(destination.x - selected.x, destination.y - selected.y);

    let target_path = tree.current_cut_path(&copy);
    if !target_path.starts_with(&context) || target_path.starts_with(&source_path) {
        trace!(
            source = %source_path,
            target = %target_path,
            "iteration target outside the source context"
        );
        return None;
    }

    let target = tree.node_at(&target_path)?;
    if target.children().iter().any(|child| copy.contains_node(child)) {
        return None;
    }
    if !tree.can_insert(&copy) {
        return None;
    }

    let mut next = tree.clone();
    next.insert(copy).ok()?;
    Some(next)
}

/// Remove the node at `point` when an equal node exists as a direct child of
/// one of its enclosing contexts
pub fn deiteration(tree: &AegTree, point: &Point) -> Option<AegTree> {
    let path = tree.lowest_node_path(point)?;
    let node = tree.node_at(&path)?;

    let has_original = path.ancestors().any(|context| {
        tree.node_at(&context).is_some_and(|ancestor| {
            ancestor.children().iter().enumerate().any(|(index, other)| {
                !path.starts_with(&context.child(index)) && other.is_equal_to(node)
            })
        })
    });
    if !has_original {
        trace!(path = %path, "no equal node in an enclosing context");
        return None;
    }

    let mut next = tree.clone();
    next.take_at(&path)?;
    Some(next)
}
