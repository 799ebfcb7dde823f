use crate::errors::{AegError, Result};
use crate::model::Node;

use super::invariants;

/// Validate a subtree against the structural invariants
///
/// 1. Only the root may be a Sheet
/// 2. Every child lies strictly inside its parent's shape
/// 3. No two siblings overlap or enclose one another
///
/// Atoms cannot hold children, so that invariant needs no check here.
///
/// # Errors
/// Returns `InvalidGraph` describing the first violation found.
pub fn validate_subtree(root: &Node) -> Result<()> {
    if let Some(path) = invariants::find_nested_sheet(root) {
        return Err(AegError::InvalidGraph {
            reason: format!("sheet nested at {}", path),
        });
    }

    if let Some(path) = invariants::find_containment_violation(root) {
        return Err(AegError::InvalidGraph {
            reason: format!("node at {} is not inside its parent", path),
        });
    }

    if let Some((a, b)) = invariants::find_sibling_conflict(root) {
        return Err(AegError::InvalidGraph {
            reason: format!("siblings at {} and {} overlap", a, b),
        });
    }

    Ok(())
}

/// Validate a whole tree: the root must be the Sheet, then
/// [`validate_subtree`] applies
///
/// # Errors
/// Returns `InvalidGraph` describing the first violation found.
pub fn validate_tree(sheet: &Node) -> Result<()> {
    if !sheet.is_sheet() {
        return Err(AegError::InvalidGraph {
            reason: format!("root is a {}, not the sheet", sheet.kind()),
        });
    }
    validate_subtree(sheet)
}
