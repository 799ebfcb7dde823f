//! Functional-boundary apply for edit commands
//!
//! ## Atomicity Contract
//!
//! `apply_edit()` guarantees:
//! - **All-or-nothing**: either the command succeeds and a verified new tree
//!   is returned, or an error is returned and the caller's snapshot (cloned
//!   before the call) is the state to keep
//! - **No panics**: invalid input returns typed errors
//! - **Verified output**: every returned tree passes `AegTree::validate`
//!
//! ## Example
//!
//! ```
//! use aeg_core::{apply_edit, AegTree, EditCommand, Point};
//!
//! let tree = AegTree::new();
//! let cmd = EditCommand::InsertCut {
//!     center: Point::new(50.0, 50.0),
//!     radius_x: 30.0,
//!     radius_y: 20.0,
//! };
//!
//! let tree = apply_edit(tree, cmd).unwrap();
//! assert_eq!(tree.to_formula_string(), "[()]");
//! ```

use std::time::Instant;

use crate::commands::EditCommand;
use crate::errors::{AegError, Result};
use crate::geometry::{Ellipse, Point};
use crate::model::{Atom, Node, NodePath};
use crate::ops::AegTree;
use crate::{log_op_end, log_op_error, log_op_start};

/// Apply an edit command to a tree, returning the new tree
///
/// # Errors
/// * `InvalidGeometry` / `InvalidIdentifier` - If the command describes an invalid shape
/// * `NoNodeAtPoint` - If a selecting command points at empty space
/// * `InsertConflict` / `SheetNotInsertable` - If the result cannot be placed
/// * `InvalidGraph` - If the edited tree fails verification
pub fn apply_edit(tree: AegTree, cmd: EditCommand) -> Result<AegTree> {
    let op = cmd.name();
    log_op_start!("apply_edit", command = op);
    let start = Instant::now();

    let result = apply_edit_impl(tree, cmd).and_then(|tree| {
        tree.validate()?;
        Ok(tree)
    });

    match result {
        Ok(tree) => {
            log_op_end!(
                "apply_edit",
                duration_ms = start.elapsed().as_millis() as u64,
                command = op,
                node_count = tree.node_count()
            );
            Ok(tree)
        }
        Err(e) => {
            log_op_error!(
                "apply_edit",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                command = op
            );
            Err(e)
        }
    }
}

fn apply_edit_impl(mut tree: AegTree, cmd: EditCommand) -> Result<AegTree> {
    match cmd {
        EditCommand::InsertAtom {
            identifier,
            origin,
            width,
            height,
        } => {
            let atom = Atom::new(identifier, origin, width, height)?;
            tree.insert(Node::Atom(atom))?;
        }

        EditCommand::InsertCut {
            center,
            radius_x,
            radius_y,
        } => {
            let ellipse = Ellipse::new(center, radius_x, radius_y)?;
            tree.insert(Node::cut(ellipse))?;
        }

        EditCommand::InsertNode { node } => {
            tree.insert(node)?;
        }

        EditCommand::Delete { point } => {
            let path = selected_path(&tree, &point)?;
            tree.take_at(&path);
        }

        EditCommand::DeleteSingle { point } => {
            let path = selected_path(&tree, &point)?;
            tree.take_single_at(&path);
        }

        EditCommand::Move {
            selected,
            destination,
        } => {
            let path = selected_path(&tree, &selected)?;
            let node = take(&mut tree, &path)?;
            tree.insert(offset_between(&node, &selected, &destination))?;
        }

        EditCommand::MoveSingle {
            selected,
            destination,
        } => {
            let path = selected_path(&tree, &selected)?;
            let node = tree
                .take_single_at(&path)
                .ok_or_else(|| AegError::InvalidPath {
                    path: path.to_string(),
                })?;
            tree.insert(offset_between(&node, &selected, &destination))?;
        }

        EditCommand::Copy {
            selected,
            destination,
        } => {
            let path = selected_path(&tree, &selected)?;
            let copy = tree
                .node_at(&path)
                .map(|node| offset_between(node, &selected, &destination))
                .ok_or_else(|| AegError::InvalidPath {
                    path: path.to_string(),
                })?;
            tree.insert(copy)?;
        }

        EditCommand::Clear => tree.clear(),
    }

    Ok(tree)
}

fn selected_path(tree: &AegTree, point: &Point) -> Result<NodePath> {
    tree.lowest_node_path(point)
        .ok_or(AegError::NoNodeAtPoint {
            x: point.x,
            y: point.y,
        })
}

fn take(tree: &mut AegTree, path: &NodePath) -> Result<Node> {
    tree.take_at(path).ok_or_else(|| AegError::InvalidPath {
        path: path.to_string(),
    })
}

fn offset_between(node: &Node, from: &Point, to: &Point) -> Node {
    node.translated(to.x - from.x, to.y - from.y)
}
