use aeg_core::{AegTree, Atom, Ellipse, Node, Point};

pub const ATOM_SIZE: f64 = 10.0;

/// An atom whose rectangle is centred on `(x, y)`
#[allow(dead_code)]
pub fn atom_at(identifier: char, x: f64, y: f64) -> Node {
    let half = ATOM_SIZE / 2.0;
    Atom::new(identifier, Point::new(x - half, y + half), ATOM_SIZE, ATOM_SIZE)
        .unwrap()
        .into()
}

/// An empty circular cut
#[allow(dead_code)]
pub fn cut_at(x: f64, y: f64, radius: f64) -> Node {
    Node::cut(Ellipse::new(Point::new(x, y), radius, radius).unwrap())
}

/// Insert `nodes` in order into an empty tree
///
/// Cuts adopt what they enclose, so list inner content before the cuts drawn
/// around it.
#[allow(dead_code)]
pub fn tree_of(nodes: Vec<Node>) -> AegTree {
    let mut tree = AegTree::new();
    for node in nodes {
        tree.insert(node).unwrap();
    }
    tree
}

#[allow(dead_code)]
pub fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// `[A ((C) B)]` with known coordinates:
/// - `A` centred on (20, 20), level 0
/// - outer cut centred on (200, 200), radius 120, ring hit at (200, 100)
/// - `B` centred on (120, 200), level 1
/// - inner cut centred on (230, 200), radius 60, ring hit at (230, 160)
/// - `C` centred on (230, 200), level 2
#[allow(dead_code)]
pub fn nested_sample() -> AegTree {
    tree_of(vec![
        atom_at('A', 20.0, 20.0),
        atom_at('C', 230.0, 200.0),
        cut_at(230.0, 200.0, 60.0),
        atom_at('B', 120.0, 200.0),
        cut_at(200.0, 200.0, 120.0),
    ])
}
