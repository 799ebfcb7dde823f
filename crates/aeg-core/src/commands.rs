//! Draw-mode edit commands
//!
//! Commands are processed by [`crate::apply::apply_edit`], which takes the
//! current tree, executes the command, and returns a new valid tree. Unlike
//! proof rules, edits may change the logical content of the graph.

use crate::geometry::Point;
use crate::model::Node;

/// Edit command inventory
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Draw an atom with its baseline at `origin`
    InsertAtom {
        identifier: char,
        origin: Point,
        width: f64,
        height: f64,
    },

    /// Draw a cut; it adopts whatever it encloses
    InsertCut {
        center: Point,
        radius_x: f64,
        radius_y: f64,
    },

    /// Insert a prepared node (with its children)
    InsertNode { node: Node },

    /// Delete the node at `point` with everything inside it
    Delete { point: Point },

    /// Delete only the node at `point`; its children move to its parent
    DeleteSingle { point: Point },

    /// Move the node at `selected` with its subtree by `destination - selected`
    Move { selected: Point, destination: Point },

    /// Move only the node at `selected`, leaving its children in place
    MoveSingle { selected: Point, destination: Point },

    /// Insert a translated copy of the node at `selected`
    Copy { selected: Point, destination: Point },

    /// Remove everything from the sheet
    Clear,
}

impl EditCommand {
    /// Operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            EditCommand::InsertAtom { .. } => "insert_atom",
            EditCommand::InsertCut { .. } => "insert_cut",
            EditCommand::InsertNode { .. } => "insert_node",
            EditCommand::Delete { .. } => "delete",
            EditCommand::DeleteSingle { .. } => "delete_single",
            EditCommand::Move { .. } => "move",
            EditCommand::MoveSingle { .. } => "move_single",
            EditCommand::Copy { .. } => "copy",
            EditCommand::Clear => "clear",
        }
    }
}
