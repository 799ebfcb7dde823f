#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Tree operation tests: insertion targets, adoption, verification and
//! point queries.

mod common;

use aeg_core::model::NodePath;
use aeg_core::{AegError, AegTree, Atom, Ellipse, Node, Point};
use common::{atom_at, cut_at, nested_sample, p, tree_of};
use proptest::prelude::*;

#[test]
fn test_nested_sample_shape() {
    let tree = nested_sample();
    assert_eq!(tree.to_formula_string(), "[A ((C) B)]");
    assert!(tree.verify());
    assert_eq!(tree.node_count(), 5);
}

#[test]
fn test_levels_by_point() {
    let tree = nested_sample();
    let level_at = |x, y| {
        let path = tree.lowest_node_path(&p(x, y)).unwrap();
        tree.path_level(&path).unwrap()
    };

    assert_eq!(level_at(20.0, 20.0), 0); // A
    assert_eq!(level_at(200.0, 100.0), 0); // outer cut
    assert_eq!(level_at(120.0, 200.0), 1); // B
    assert_eq!(level_at(230.0, 160.0), 1); // inner cut
    assert_eq!(level_at(230.0, 200.0), 2); // C
}

#[test]
fn test_get_level_matches_path_level() {
    let tree = nested_sample();
    let c = tree.get_lowest_node(&p(230.0, 200.0)).unwrap();
    assert_eq!(tree.get_level(c), Some(2));

    let detached = atom_at('C', 230.0, 200.0);
    assert_eq!(tree.get_level(&detached), None);
}

#[test]
fn test_lowest_parent() {
    let tree = nested_sample();

    let parent = tree.get_lowest_parent(&p(230.0, 200.0)).unwrap().unwrap();
    assert_eq!(parent.to_formula_string(), "(C)");

    let sheet = tree.get_lowest_parent(&p(20.0, 20.0)).unwrap().unwrap();
    assert!(sheet.is_sheet());

    assert!(tree.get_lowest_parent(&p(900.0, 900.0)).unwrap().is_none());
}

#[test]
fn test_insert_lands_in_deepest_enclosing_cut() {
    let mut tree = nested_sample();
    let path = tree.insert(atom_at('D', 250.0, 220.0)).unwrap();

    assert_eq!(path.depth(), 3);
    assert_eq!(tree.path_level(&path), Some(2));
    assert_eq!(tree.to_formula_string(), "[A ((C D) B)]");
}

#[test]
fn test_cut_adopts_exactly_the_enclosed_siblings() {
    // GIVEN three atoms on the sheet
    let mut tree = tree_of(vec![
        atom_at('P', 100.0, 100.0),
        atom_at('Q', 130.0, 100.0),
        atom_at('R', 400.0, 100.0),
    ]);

    // WHEN a cut is drawn around P and Q
    let path = tree.insert(cut_at(115.0, 100.0, 50.0)).unwrap();

    // THEN P and Q move into the cut and R stays on the sheet
    let cut = tree.node_at(&path).unwrap();
    let ids: Vec<_> = cut.children().iter().map(Node::to_formula_string).collect();
    assert_eq!(ids, vec!["P", "Q"]);
    assert_eq!(tree.sheet().children().len(), 2);
    assert_eq!(tree.to_formula_string(), "[R (P Q)]");
    assert!(tree.verify());
}

#[test]
fn test_cut_around_cut_adopts_whole_subtree() {
    let mut tree = nested_sample();
    tree.insert(cut_at(200.0, 200.0, 150.0)).unwrap();
    assert_eq!(tree.to_formula_string(), "[A (((C) B))]");
    assert!(tree.verify());
}

#[test]
fn test_filled_cut_adopts_sibling_beside_its_content() {
    // GIVEN A on the sheet and a prepared cut that already holds B
    let mut tree = tree_of(vec![atom_at('A', 30.0, 50.0)]);
    let filled = Node::cut_with_children(
        Ellipse::new(p(50.0, 50.0), 40.0, 40.0).unwrap(),
        vec![atom_at('B', 65.0, 50.0)],
    );

    // WHEN the cut is dropped around A
    assert!(tree.can_insert(&filled));
    let path = tree.insert(filled).unwrap();

    // THEN A joins B inside the cut
    assert_eq!(path, NodePath::from_indices(vec![0]));
    assert_eq!(tree.to_formula_string(), "[(B A)]");
    assert_eq!(tree.sheet().children().len(), 1);
    assert!(tree.verify());
}

#[test]
fn test_filled_cut_rejected_when_adoption_would_clash() {
    // GIVEN A on the sheet and a prepared cut whose B would overlap A
    let mut tree = tree_of(vec![atom_at('A', 30.0, 50.0)]);
    let filled = Node::cut_with_children(
        Ellipse::new(p(50.0, 50.0), 40.0, 40.0).unwrap(),
        vec![atom_at('B', 36.0, 50.0)],
    );

    // WHEN / THEN the insert is refused and the tree is untouched
    assert!(!tree.can_insert(&filled));
    assert!(matches!(
        tree.insert(filled),
        Err(AegError::InsertConflict { .. })
    ));
    assert_eq!(tree.to_formula_string(), "[A]");
}

#[test]
fn test_filled_cut_may_not_adopt_into_its_own_cut() {
    // GIVEN A on the sheet and a prepared cut with an inner cut drawn where A is
    let mut tree = tree_of(vec![atom_at('A', 30.0, 50.0)]);
    let filled = Node::cut_with_children(
        Ellipse::new(p(50.0, 50.0), 40.0, 40.0).unwrap(),
        vec![cut_at(35.0, 50.0, 15.0)],
    );

    // THEN adopting A would leave it beside the cut that encloses it
    assert!(!tree.can_insert(&filled));
}

#[test]
fn test_atom_may_not_enclose_or_sit_inside_a_sibling() {
    let tree = tree_of(vec![atom_at('P', 100.0, 100.0)]);

    let big = Atom::new('Z', p(50.0, 150.0), 100.0, 100.0).unwrap();
    assert!(!tree.can_insert(&Node::from(big)));

    let tiny = Atom::new('Z', p(99.0, 101.0), 1.0, 1.0).unwrap();
    assert!(!tree.can_insert(&Node::from(tiny)));
}

#[test]
fn test_cut_crossing_its_would_be_parent_is_rejected() {
    let mut tree = tree_of(vec![cut_at(100.0, 100.0, 50.0)]);
    let crossing = cut_at(140.0, 100.0, 30.0);

    assert!(!tree.can_insert(&crossing));
    let err = tree.insert(crossing).unwrap_err();
    assert_eq!(
        err,
        AegError::InsertConflict {
            kind: "Cut".to_string(),
            target: "/".to_string(),
        }
    );
}

#[test]
fn test_take_detaches_subtree_and_keeps_rest() {
    let mut tree = nested_sample();
    let outer = tree.take(&p(200.0, 100.0)).unwrap();

    assert_eq!(outer.to_formula_string(), "((C) B)");
    assert_eq!(tree.to_formula_string(), "[A]");
    assert!(tree.take(&p(200.0, 100.0)).is_none());
}

#[test]
fn test_take_at_invalid_path() {
    let mut tree = nested_sample();
    assert!(tree.take_at(&NodePath::from_indices(vec![7])).is_none());
    assert!(tree.take_at(&NodePath::root()).is_none());
}

#[test]
fn test_clone_is_deep() {
    let tree = nested_sample();
    let mut copy = tree.clone();
    copy.remove(&p(230.0, 200.0));

    assert_eq!(tree.to_formula_string(), "[A ((C) B)]");
    assert_eq!(copy.to_formula_string(), "[A (() B)]");
}

#[test]
fn test_display_dumps_geometry() {
    let tree = tree_of(vec![atom_at('A', 20.0, 20.0)]);
    let dump = tree.to_string();
    assert!(dump.starts_with("Sheet\n"));
    assert!(dump.contains("  Atom A Rectangle (15, 15) w: 10 h: 10"));
}

#[test]
fn test_from_sheet_validates() {
    let ellipse = Ellipse::new(Point::new(0.0, 0.0), 10.0, 10.0).unwrap();
    let stray = Node::cut_with_children(ellipse, vec![atom_at('A', 50.0, 50.0)]);
    let sheet = Node::Sheet {
        children: vec![stray],
    };
    assert!(matches!(
        AegTree::from_sheet(sheet),
        Err(AegError::InvalidGraph { .. })
    ));
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let atom = (
        proptest::char::range('A', 'E'),
        0.0f64..400.0,
        0.0f64..400.0,
    )
        .prop_map(|(id, x, y)| atom_at(id, x, y));
    let cut = (0.0f64..400.0, 0.0f64..400.0, 8.0f64..150.0, 8.0f64..150.0).prop_map(
        |(x, y, rx, ry)| Node::cut(Ellipse::new(Point::new(x, y), rx, ry).unwrap()),
    );
    let filled = (
        0.0f64..400.0,
        0.0f64..400.0,
        20.0f64..150.0,
        20.0f64..150.0,
        proptest::char::range('A', 'E'),
        -10.0f64..10.0,
    )
        .prop_map(|(x, y, rx, ry, id, dx)| {
            Node::cut_with_children(
                Ellipse::new(Point::new(x, y), rx, ry).unwrap(),
                vec![atom_at(id, x + dx, y)],
            )
        });
    prop_oneof![atom, cut, filled]
}

proptest! {
    #[test]
    fn insert_fails_iff_cannot_insert_and_keeps_tree_valid(
        nodes in proptest::collection::vec(node_strategy(), 1..25)
    ) {
        let mut tree = AegTree::new();
        for node in nodes {
            let allowed = tree.can_insert(&node);
            let before = tree.clone();
            let result = tree.insert(node);

            prop_assert_eq!(allowed, result.is_ok());
            if !allowed {
                prop_assert_eq!(&tree, &before);
            }
            prop_assert!(tree.verify(), "tree stopped verifying:\n{}", tree);
        }
    }
}
