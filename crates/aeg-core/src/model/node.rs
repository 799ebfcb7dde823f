use std::fmt;
use std::ptr;

use super::{Atom, NodePath};
use crate::errors::{AegError, Result};
use crate::geometry::{shape_contains, shapes_overlap, Ellipse, Point, Shape};

/// Variant tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Sheet,
    Cut,
    Atom,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Sheet => "Sheet",
            NodeKind::Cut => "Cut",
            NodeKind::Atom => "Atom",
        };
        f.write_str(name)
    }
}

/// A node of an existential graph
///
/// The tree is a pure ownership graph: children are owned by their parent and
/// no node refers back to its parent. `PartialEq` compares geometry exactly;
/// use [`Node::is_equal_to`] for logical equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The unbounded sheet of assertion
    Sheet { children: Vec<Node> },
    /// A negation boundary
    Cut { ellipse: Ellipse, children: Vec<Node> },
    Atom(Atom),
}

impl Default for Node {
    fn default() -> Self {
        Node::sheet()
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Node::Atom(atom)
    }
}

impl Node {
    pub fn sheet() -> Self {
        Node::Sheet {
            children: Vec::new(),
        }
    }

    /// An empty cut bounded by `ellipse`
    pub fn cut(ellipse: Ellipse) -> Self {
        Node::Cut {
            ellipse,
            children: Vec::new(),
        }
    }

    pub fn cut_with_children(ellipse: Ellipse, children: Vec<Node>) -> Self {
        Node::Cut { ellipse, children }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Sheet { .. } => NodeKind::Sheet,
            Node::Cut { .. } => NodeKind::Cut,
            Node::Atom(_) => NodeKind::Atom,
        }
    }

    pub fn is_sheet(&self) -> bool {
        matches!(self, Node::Sheet { .. })
    }

    pub fn is_cut(&self) -> bool {
        matches!(self, Node::Cut { .. })
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Node::Atom(_))
    }

    /// Bounding shape; the Sheet has none
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Node::Sheet { .. } => None,
            Node::Cut { ellipse, .. } => Some(Shape::Ellipse(*ellipse)),
            Node::Atom(atom) => Some(Shape::Rectangle(*atom.rect())),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Sheet { children } | Node::Cut { children, .. } => children,
            Node::Atom(_) => &[],
        }
    }

    /// Mutable child list; `None` for Atoms, which never have children
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Sheet { children } | Node::Cut { children, .. } => Some(children),
            Node::Atom(_) => None,
        }
    }

    pub fn covers_point(&self, point: &Point) -> bool {
        match self.shape() {
            Some(shape) => shape.contains_point(point),
            None => true,
        }
    }

    /// Sheet contains everything, a Cut contains what its ellipse contains,
    /// an Atom contains nothing.
    pub fn contains_node(&self, other: &Node) -> bool {
        match (self, other.shape()) {
            (Node::Sheet { .. }, _) => true,
            (Node::Cut { ellipse, .. }, Some(inner)) => {
                shape_contains(&Shape::Ellipse(*ellipse), &inner)
            }
            _ => false,
        }
    }

    /// Path (relative to `self`) of the deepest Cut whose shape contains
    /// `candidate`, or the root path when no Cut does
    pub fn current_cut_path(&self, candidate: &Node) -> NodePath {
        let mut path = NodePath::root();
        let mut current = self;
        while let Some((index, child)) = current
            .children()
            .iter()
            .enumerate()
            .find(|(_, child)| child.is_cut() && child.contains_node(candidate))
        {
            path = path.child(index);
            current = child;
        }
        path
    }

    /// The insertion target for `candidate`
    pub fn get_current_cut(&self, candidate: &Node) -> &Node {
        let mut current = self;
        while let Some(child) = current
            .children()
            .iter()
            .find(|child| child.is_cut() && child.contains_node(candidate))
        {
            current = child;
        }
        current
    }

    /// Path of the innermost descendant covering `point`
    pub fn lowest_node_path(&self, point: &Point) -> Option<NodePath> {
        let mut path = NodePath::root();
        let mut current = self;
        while let Some((index, child)) = current
            .children()
            .iter()
            .enumerate()
            .find(|(_, child)| child.covers_point(point))
        {
            path = path.child(index);
            current = child;
        }
        if path.is_root() {
            None
        } else {
            Some(path)
        }
    }

    /// Innermost descendant covering `point`; never `self`
    pub fn get_lowest_node(&self, point: &Point) -> Option<&Node> {
        self.lowest_node_path(point)
            .and_then(|path| self.node_at(&path))
    }

    /// Parent of the innermost descendant covering `point`
    ///
    /// Returns `Ok(None)` when no descendant covers the point.
    ///
    /// # Errors
    /// * `PointNotCovered` - If `self` does not cover `point`
    pub fn get_lowest_parent(&self, point: &Point) -> Result<Option<&Node>> {
        if !self.covers_point(point) {
            return Err(AegError::PointNotCovered {
                x: point.x,
                y: point.y,
            });
        }
        Ok(self
            .lowest_node_path(point)
            .and_then(|path| path.parent())
            .and_then(|parent| self.node_at(&parent)))
    }

    /// Nesting level of `target`, located by identity
    ///
    /// Direct children of `self` are at `base_level`; each enclosing Cut below
    /// `self` adds one. Returns `None` when `target` is not a descendant.
    pub fn get_level(&self, target: &Node, base_level: usize) -> Option<usize> {
        self.children().iter().find_map(|child| {
            if ptr::eq(child, target) {
                Some(base_level)
            } else {
                child.get_level(target, base_level + 1)
            }
        })
    }

    /// Path of `target` (located by identity) relative to `self`
    pub fn find_path(&self, target: &Node) -> Option<NodePath> {
        if ptr::eq(self, target) {
            return Some(NodePath::root());
        }
        self.children()
            .iter()
            .enumerate()
            .find_map(|(index, child)| {
                child.find_path(target).map(|sub| {
                    let mut indices = vec![index];
                    indices.extend_from_slice(sub.indices());
                    NodePath::from_indices(indices)
                })
            })
    }

    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut current = self;
        for &index in path.indices() {
            current = current.children_mut()?.get_mut(index)?;
        }
        Some(current)
    }

    /// Detach the node at `path` together with its subtree
    pub fn take_at(&mut self, path: &NodePath) -> Option<Node> {
        let index = path.last()?;
        let children = self.node_at_mut(&path.parent()?)?.children_mut()?;
        if index < children.len() {
            Some(children.remove(index))
        } else {
            None
        }
    }

    /// Detach the innermost node covering `point`, children included
    pub fn take(&mut self, point: &Point) -> Option<Node> {
        let path = self.lowest_node_path(point)?;
        self.take_at(&path)
    }

    /// Remove the innermost node covering `point`; its children go with it
    pub fn remove(&mut self, point: &Point) -> bool {
        self.take(point).is_some()
    }

    /// Logical equality: same variant and, recursively, the same multiset of
    /// children. Atoms compare by identifier; geometry is ignored.
    pub fn is_equal_to(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Atom(a), Node::Atom(b)) => a.identifier() == b.identifier(),
            (Node::Sheet { children: a }, Node::Sheet { children: b })
            | (Node::Cut { children: a, .. }, Node::Cut { children: b, .. }) => {
                children_match(a, b)
            }
            _ => false,
        }
    }

    pub fn to_formula_string(&self) -> String {
        match self {
            Node::Atom(atom) => atom.identifier().to_string(),
            Node::Cut { children, .. } => format!("({})", join_formulas(children)),
            Node::Sheet { children } => format!("[{}]", join_formulas(children)),
        }
    }

    /// Copy of the subtree shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Node {
        match self {
            Node::Atom(atom) => Node::Atom(atom.translated(dx, dy)),
            Node::Cut { ellipse, children } => Node::Cut {
                ellipse: ellipse.translated(dx, dy),
                children: children.iter().map(|c| c.translated(dx, dy)).collect(),
            },
            Node::Sheet { children } => Node::Sheet {
                children: children.iter().map(|c| c.translated(dx, dy)).collect(),
            },
        }
    }

    /// Total number of nodes in the subtree, `self` included
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Node::Sheet { .. } => writeln!(f, "{}Sheet", indent)?,
            Node::Cut { ellipse, .. } => writeln!(f, "{}Cut {}", indent, ellipse)?,
            Node::Atom(atom) => writeln!(f, "{}{}", indent, atom)?,
        }
        for child in self.children() {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Whether inserting `candidate` next to `existing` would break sibling
/// non-overlap, or nest one inside the other by drawing order alone
///
/// A Cut may enclose an existing sibling (it adopts it on insert); nothing may
/// be drawn inside an existing sibling's shape, and an Atom never encloses.
/// The overlap test is run from both outlines since the ellipse test samples
/// the first shape only.
pub fn conflicts_with(candidate: &Node, existing: &Node) -> bool {
    let (Some(c), Some(e)) = (candidate.shape(), existing.shape()) else {
        return true;
    };
    let encloses = shape_contains(&c, &e);
    shapes_overlap(&c, &e)
        || (shapes_overlap(&e, &c) && !encloses)
        || shape_contains(&e, &c)
        || (candidate.is_atom() && encloses)
}

fn children_match(a: &[Node], b: &[Node]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|child| {
        let found = b
            .iter()
            .enumerate()
            .position(|(i, other)| !used[i] && child.is_equal_to(other));
        match found {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

fn join_formulas(children: &[Node]) -> String {
    children
        .iter()
        .map(Node::to_formula_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(id: char, x: f64, y: f64) -> Node {
        Atom::new(id, Point::new(x, y), 2.0, 2.0).unwrap().into()
    }

    fn cut(x: f64, y: f64, r: f64, children: Vec<Node>) -> Node {
        Node::cut_with_children(Ellipse::new(Point::new(x, y), r, r).unwrap(), children)
    }

    fn sample() -> Node {
        // [ (A (B)) C ]
        Node::Sheet {
            children: vec![
                cut(
                    50.0,
                    50.0,
                    40.0,
                    vec![atom('A', 30.0, 50.0), cut(60.0, 50.0, 15.0, vec![atom('B', 59.0, 51.0)])],
                ),
                atom('C', 200.0, 200.0),
            ],
        }
    }

    #[test]
    fn test_formula_string() {
        assert_eq!(Node::sheet().to_formula_string(), "[]");
        assert_eq!(sample().to_formula_string(), "[(A (B)) C]");
    }

    #[test]
    fn test_lowest_node_and_parent() {
        let sheet = sample();
        let b = sheet.get_lowest_node(&Point::new(60.0, 50.0)).unwrap();
        assert!(b.is_atom());
        let parent = sheet.get_lowest_parent(&Point::new(60.0, 50.0)).unwrap().unwrap();
        assert!(parent.is_cut());
        assert_eq!(parent.to_formula_string(), "(B)");

        assert!(sheet.get_lowest_node(&Point::new(500.0, 500.0)).is_none());
        assert!(sheet
            .get_lowest_parent(&Point::new(500.0, 500.0))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_lowest_parent_requires_cover() {
        let inner = cut(0.0, 0.0, 5.0, vec![]);
        assert_eq!(
            inner.get_lowest_parent(&Point::new(10.0, 10.0)),
            Err(AegError::PointNotCovered { x: 10.0, y: 10.0 })
        );
    }

    #[test]
    fn test_level_by_identity() {
        let sheet = sample();
        let path = sheet.lowest_node_path(&Point::new(60.0, 50.0)).unwrap();
        let b = sheet.node_at(&path).unwrap();
        assert_eq!(sheet.get_level(b, 0), Some(2));
        assert_eq!(path.level(), 2);

        let c = sheet.get_lowest_node(&Point::new(201.0, 199.0)).unwrap();
        assert_eq!(sheet.get_level(c, 0), Some(0));

        // an equal but distinct node is not found
        let stray = atom('C', 200.0, 200.0);
        assert_eq!(sheet.get_level(&stray, 0), None);
    }

    #[test]
    fn test_find_path_round_trips_node_at() {
        let sheet = sample();
        let path = NodePath::from_indices(vec![0, 1, 0]);
        let node = sheet.node_at(&path).unwrap();
        assert_eq!(sheet.find_path(node), Some(path));
        assert!(sheet.node_at(&NodePath::from_indices(vec![5])).is_none());
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let mut sheet = sample();
        assert!(sheet.remove(&Point::new(20.0, 50.0)));
        assert_eq!(sheet.to_formula_string(), "[C]");
        assert!(!sheet.remove(&Point::new(500.0, 500.0)));
    }

    #[test]
    fn test_current_cut_path() {
        let sheet = sample();
        let probe = atom('X', 58.0, 52.0);
        assert_eq!(
            sheet.current_cut_path(&probe),
            NodePath::from_indices(vec![0, 1])
        );
        let outside = atom('X', 300.0, 300.0);
        assert!(sheet.current_cut_path(&outside).is_root());
        assert!(sheet.get_current_cut(&outside).is_sheet());
    }

    #[test]
    fn test_equality_ignores_geometry_and_order() {
        let a = Node::Sheet {
            children: vec![atom('P', 0.0, 0.0), cut(50.0, 50.0, 10.0, vec![atom('Q', 49.0, 51.0)])],
        };
        let b = Node::Sheet {
            children: vec![cut(0.0, 0.0, 30.0, vec![atom('Q', 0.0, 0.0)]), atom('P', 90.0, 90.0)],
        };
        assert!(a.is_equal_to(&b));
        assert!(b.is_equal_to(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_respects_multiplicity() {
        let a = cut(0.0, 0.0, 30.0, vec![atom('P', 0.0, 0.0), atom('P', 10.0, 0.0)]);
        let b = cut(0.0, 0.0, 30.0, vec![atom('P', 0.0, 0.0), atom('Q', 10.0, 0.0)]);
        assert!(!a.is_equal_to(&b));
        assert!(cut(0.0, 0.0, 1.0, vec![]).is_equal_to(&cut(9.0, 9.0, 4.0, vec![])));
        assert!(!Node::sheet().is_equal_to(&cut(0.0, 0.0, 1.0, vec![])));
    }

    #[test]
    fn test_translated_moves_whole_subtree() {
        let moved = cut(10.0, 10.0, 5.0, vec![atom('A', 9.0, 11.0)]).translated(5.0, 0.0);
        let Node::Cut { ellipse, children } = &moved else {
            panic!("expected cut");
        };
        assert_eq!(ellipse.center(), Point::new(15.0, 10.0));
        let Node::Atom(a) = &children[0] else {
            panic!("expected atom");
        };
        assert_eq!(a.origin(), Point::new(14.0, 11.0));
    }

    #[test]
    fn test_conflicts() {
        let big = cut(0.0, 0.0, 20.0, vec![]);
        let small = atom('A', -1.0, 1.0);
        // a cut drawn around an atom adopts it
        assert!(!conflicts_with(&big, &small));
        // an atom drawn inside a sibling cut conflicts
        assert!(conflicts_with(&small, &big));
        assert_eq!(NodeKind::Cut.to_string(), "Cut");
    }
}
