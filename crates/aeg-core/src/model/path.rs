use std::fmt;

/// Address of a node inside a tree: child indices walked down from the Sheet
///
/// The empty path addresses the Sheet itself. Paths are recomputed from the
/// root and are only valid until the next structural edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges from the Sheet
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Nesting level of the addressed node: the number of Cuts enclosing it.
    ///
    /// Every ancestor below the Sheet is a Cut (Atoms have no children), so the
    /// level is one less than the depth. The Sheet and its direct children are
    /// both at level 0.
    pub fn level(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn child(&self, index: usize) -> NodePath {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<NodePath> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Index of the addressed node within its parent's children
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Whether `prefix` addresses this node or one of its ancestors
    pub fn starts_with(&self, prefix: &NodePath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Ancestor paths from the parent up to the Sheet, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = NodePath> + '_ {
        (0..self.0.len()).rev().map(|len| Self(self.0[..len].to_vec()))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}
