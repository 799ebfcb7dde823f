use crate::model::{conflicts_with, Node, NodePath};

/// Find a node whose shape is not strictly inside its parent's shape
///
/// Returns the path (relative to `root`) of the first offending child. The
/// Sheet bounds nothing, so its direct children never violate containment.
pub fn find_containment_violation(root: &Node) -> Option<NodePath> {
    find_containment_violation_at(root, NodePath::root())
}

fn find_containment_violation_at(node: &Node, path: NodePath) -> Option<NodePath> {
    node.children().iter().enumerate().find_map(|(index, child)| {
        let child_path = path.child(index);
        if !node.contains_node(child) {
            Some(child_path)
        } else {
            find_containment_violation_at(child, child_path)
        }
    })
}

/// Find two siblings that overlap, or where one encloses the other
///
/// Each pair is checked in both orders, so a sibling drawn inside another one
/// counts as a conflict.
pub fn find_sibling_conflict(root: &Node) -> Option<(NodePath, NodePath)> {
    find_sibling_conflict_at(root, NodePath::root())
}

fn find_sibling_conflict_at(node: &Node, path: NodePath) -> Option<(NodePath, NodePath)> {
    let children = node.children();
    for (i, a) in children.iter().enumerate() {
        for (j, b) in children.iter().enumerate().skip(i + 1) {
            if conflicts_with(a, b) || conflicts_with(b, a) {
                return Some((path.child(i), path.child(j)));
            }
        }
    }
    children
        .iter()
        .enumerate()
        .find_map(|(index, child)| find_sibling_conflict_at(child, path.child(index)))
}

/// Find a Sheet anywhere below the root
pub fn find_nested_sheet(root: &Node) -> Option<NodePath> {
    find_nested_sheet_at(root, NodePath::root())
}

fn find_nested_sheet_at(node: &Node, path: NodePath) -> Option<NodePath> {
    node.children().iter().enumerate().find_map(|(index, child)| {
        let child_path = path.child(index);
        if child.is_sheet() {
            Some(child_path)
        } else {
            find_nested_sheet_at(child, child_path)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Ellipse, Point};
    use crate::model::Atom;

    fn atom(id: char, x: f64, y: f64) -> Node {
        Atom::new(id, Point::new(x, y), 2.0, 2.0).unwrap().into()
    }

    fn cut(x: f64, y: f64, r: f64, children: Vec<Node>) -> Node {
        Node::cut_with_children(Ellipse::new(Point::new(x, y), r, r).unwrap(), children)
    }

    #[test]
    fn test_well_formed_tree_has_no_violations() {
        let sheet = Node::Sheet {
            children: vec![cut(10.0, 10.0, 8.0, vec![atom('A', 9.0, 11.0)]), atom('B', 50.0, 50.0)],
        };
        assert!(find_containment_violation(&sheet).is_none());
        assert!(find_sibling_conflict(&sheet).is_none());
        assert!(find_nested_sheet(&sheet).is_none());
    }

    #[test]
    fn test_child_outside_parent() {
        let sheet = Node::Sheet {
            children: vec![cut(10.0, 10.0, 8.0, vec![atom('A', 40.0, 40.0)])],
        };
        assert_eq!(
            find_containment_violation(&sheet),
            Some(NodePath::from_indices(vec![0, 0]))
        );
    }

    #[test]
    fn test_enclosed_sibling_is_a_conflict() {
        let sheet = Node::Sheet {
            children: vec![cut(10.0, 10.0, 8.0, vec![]), atom('A', 9.0, 11.0)],
        };
        assert_eq!(
            find_sibling_conflict(&sheet),
            Some((NodePath::from_indices(vec![0]), NodePath::from_indices(vec![1])))
        );
    }

    #[test]
    fn test_crossing_cuts_conflict_in_either_order() {
        let a = cut(0.0, 0.0, 10.0, vec![]);
        let b = cut(12.0, 0.0, 10.0, vec![]);
        let forward = Node::Sheet {
            children: vec![a.clone(), b.clone()],
        };
        let backward = Node::Sheet {
            children: vec![b, a],
        };
        assert!(find_sibling_conflict(&forward).is_some());
        assert!(find_sibling_conflict(&backward).is_some());
    }

    #[test]
    fn test_nested_sheet_detected() {
        let sheet = Node::Sheet {
            children: vec![Node::sheet()],
        };
        assert_eq!(find_nested_sheet(&sheet), Some(NodePath::from_indices(vec![0])));
    }
}
