use std::fmt;

use tracing::{debug, trace};

use crate::errors::{AegError, Result};
use crate::geometry::Point;
use crate::model::{conflicts_with, Node, NodePath};
use crate::rules::validation;

/// A graph tree rooted at the sheet of assertion
///
/// All mutations that can break the structural invariants go through
/// [`AegTree::insert`]; removal can never break them. `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AegTree {
    sheet: Node,
}

impl AegTree {
    /// An empty tree
    pub fn new() -> Self {
        Self {
            sheet: Node::sheet(),
        }
    }

    /// Wrap an existing sheet, checking every invariant
    ///
    /// # Errors
    /// * `InvalidGraph` - If `sheet` is not a Sheet or the tree is ill-formed
    pub fn from_sheet(sheet: Node) -> Result<Self> {
        validation::validate_tree(&sheet)?;
        Ok(Self { sheet })
    }

    pub fn sheet(&self) -> &Node {
        &self.sheet
    }

    pub fn is_empty(&self) -> bool {
        self.sheet.children().is_empty()
    }

    /// Whether every node lies strictly inside its parent and no siblings
    /// overlap
    pub fn verify(&self) -> bool {
        self.validate().is_ok()
    }

    /// Like [`AegTree::verify`], reporting the first violation
    ///
    /// # Errors
    /// * `InvalidGraph` - Describing the first violation found
    pub fn validate(&self) -> Result<()> {
        validation::validate_tree(&self.sheet)
    }

    /// Whether `node` can be inserted without breaking the invariants
    ///
    /// The target is the deepest Cut containing `node`; `node` must not
    /// conflict with any of the target's children. A Cut that already has
    /// children may still enclose siblings, as long as none of them clashes
    /// with those children once adopted.
    pub fn can_insert(&self, node: &Node) -> bool {
        if node.is_sheet() || validation::validate_subtree(node).is_err() {
            return false;
        }

        let siblings = self.sheet.get_current_cut(node).children();
        if siblings.iter().any(|sibling| conflicts_with(node, sibling)) {
            return false;
        }

        let own = node.children();
        !siblings
            .iter()
            .filter(|sibling| node.is_cut() && node.contains_node(sibling))
            .any(|adopted| {
                own.iter().any(|child| {
                    conflicts_with(adopted, child) || conflicts_with(child, adopted)
                })
            })
    }

    /// Insert `node` under its current Cut and return its path
    ///
    /// When `node` is a Cut, every sibling its ellipse encloses is moved into
    /// it, in order, after its own children.
    ///
    /// # Errors
    /// * `SheetNotInsertable` - If `node` is a Sheet
    /// * `InsertConflict` - If [`AegTree::can_insert`] is false
    pub fn insert(&mut self, mut node: Node) -> Result<NodePath> {
        if node.is_sheet() {
            return Err(AegError::SheetNotInsertable);
        }

        let target_path = self.sheet.current_cut_path(&node);
        if !self.can_insert(&node) {
            return Err(AegError::InsertConflict {
                kind: node.kind().to_string(),
                target: target_path.to_string(),
            });
        }

        let siblings = self
            .sheet
            .node_at_mut(&target_path)
            .and_then(Node::children_mut)
            .ok_or_else(|| AegError::InvalidPath {
                path: target_path.to_string(),
            })?;

        if node.is_cut() {
            let (adopted, kept): (Vec<Node>, Vec<Node>) = std::mem::take(siblings)
                .into_iter()
                .partition(|sibling| node.contains_node(sibling));
            *siblings = kept;
            if !adopted.is_empty() {
                debug!(
                    target = %target_path,
                    adopted = adopted.len(),
                    "cut adopts enclosed siblings"
                );
            }
            if let Some(children) = node.children_mut() {
                children.extend(adopted);
            }
        }

        trace!(kind = %node.kind(), target = %target_path, "insert");
        siblings.push(node);
        Ok(target_path.child(siblings.len() - 1))
    }

    /// Remove the innermost node covering `point` with its subtree
    pub fn remove(&mut self, point: &Point) -> bool {
        self.take(point).is_some()
    }

    /// Detach and return the innermost node covering `point`
    pub fn take(&mut self, point: &Point) -> Option<Node> {
        let taken = self.sheet.take(point);
        if let Some(node) = &taken {
            trace!(kind = %node.kind(), "take");
        }
        taken
    }

    pub fn take_at(&mut self, path: &NodePath) -> Option<Node> {
        self.sheet.take_at(path)
    }

    /// Remove the node at `path` and splice its children into its parent at
    /// the same position; returns the emptied node
    pub fn take_single_at(&mut self, path: &NodePath) -> Option<Node> {
        let index = path.last()?;
        let siblings = self
            .sheet
            .node_at_mut(&path.parent()?)?
            .children_mut()?;
        if index >= siblings.len() {
            return None;
        }
        let mut node = siblings.remove(index);
        let promoted = node.children_mut().map(std::mem::take).unwrap_or_default();
        for (offset, child) in promoted.into_iter().enumerate() {
            siblings.insert(index + offset, child);
        }
        Some(node)
    }

    pub fn clear(&mut self) {
        self.sheet = Node::sheet();
    }

    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        self.sheet.node_at(path)
    }

    pub fn find_path(&self, node: &Node) -> Option<NodePath> {
        self.sheet.find_path(node)
    }

    /// Level of the node at `path`, if it exists
    pub fn path_level(&self, path: &NodePath) -> Option<usize> {
        self.node_at(path).map(|_| path.level())
    }

    /// Level of `node` located by identity
    pub fn get_level(&self, node: &Node) -> Option<usize> {
        self.sheet.get_level(node, 0)
    }

    pub fn lowest_node_path(&self, point: &Point) -> Option<NodePath> {
        self.sheet.lowest_node_path(point)
    }

    pub fn get_lowest_node(&self, point: &Point) -> Option<&Node> {
        self.sheet.get_lowest_node(point)
    }

    /// # Errors
    /// Never fails in practice: the Sheet covers every point.
    pub fn get_lowest_parent(&self, point: &Point) -> Result<Option<&Node>> {
        self.sheet.get_lowest_parent(point)
    }

    pub fn current_cut_path(&self, node: &Node) -> NodePath {
        self.sheet.current_cut_path(node)
    }

    pub fn get_current_cut(&self, node: &Node) -> &Node {
        self.sheet.get_current_cut(node)
    }

    pub fn is_equal_to(&self, other: &AegTree) -> bool {
        self.sheet.is_equal_to(&other.sheet)
    }

    pub fn to_formula_string(&self) -> String {
        self.sheet.to_formula_string()
    }

    pub fn node_count(&self) -> usize {
        self.sheet.node_count() - 1
    }
}

impl fmt::Display for AegTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sheet, f)
    }
}
