#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end scenarios for the graph tree and the proof engine

mod common;

use aeg_core::rules::{self, ProofCommand};
use aeg_core::{AegTree, Atom, Ellipse, Node, Point, ProofConfig, ProofEngine, ProofRule};
use common::{atom_at, cut_at, p, tree_of};

#[test]
fn test_scenario_01_empty_tree_formula() {
    // GIVEN an empty tree
    let tree = AegTree::new();

    // THEN it renders as the bare sheet
    assert_eq!(tree.to_formula_string(), "[]");
    assert!(tree.verify());
}

#[test]
fn test_scenario_02_cut_then_atom_beside_it() {
    // GIVEN an empty tree
    let mut tree = AegTree::new();

    // WHEN a cut and then an atom outside it are inserted
    let ellipse = Ellipse::new(Point::new(5.0, 5.0), 5.0, 5.0).unwrap();
    tree.insert(Node::cut(ellipse)).unwrap();
    let atom = Atom::new('B', Point::new(0.0, 0.0), 1.0, 1.0).unwrap();
    tree.insert(Node::from(atom)).unwrap();

    // THEN both sit on the sheet
    assert_eq!(tree.to_formula_string(), "[() B]");
    assert!(tree.verify());
}

#[test]
fn test_scenario_03_remove_atom_by_point() {
    // GIVEN a tree holding one atom
    let mut tree = AegTree::new();
    let atom = Atom::new('A', Point::new(0.0, 4.0), 3.0, 3.0).unwrap();
    tree.insert(Node::from(atom)).unwrap();
    assert_eq!(tree.to_formula_string(), "[A]");

    // WHEN removing at a point inside it
    let removed = tree.remove(&Point::new(2.0, 2.0));

    // THEN it is gone
    assert!(removed);
    assert_eq!(tree.to_formula_string(), "[]");
}

#[test]
fn test_scenario_04_deiteration_of_nested_copy() {
    // GIVEN A on the sheet and another A two cuts deep
    let tree = tree_of(vec![
        atom_at('A', 20.0, 20.0),
        atom_at('A', 200.0, 200.0),
        cut_at(200.0, 200.0, 40.0),
        cut_at(200.0, 200.0, 80.0),
    ]);
    assert_eq!(tree.to_formula_string(), "[A ((A))]");

    // WHEN deiterating the deeper A
    let mut engine = ProofEngine::new(tree, ProofConfig::default());
    let command = ProofCommand::Deiteration {
        point: p(200.0, 200.0),
    };

    // THEN the rule is legal and removes it
    assert!(engine.is_legal(&command));
    assert!(engine.apply(&command));
    assert_eq!(engine.current_tree().to_formula_string(), "[A (())]");
    assert_eq!(engine.current().rule(), ProofRule::Deiteration);
}

#[test]
fn test_scenario_05_double_cut_deletion() {
    // GIVEN a cut whose only child is an empty cut, beside an atom
    let tree = tree_of(vec![
        atom_at('Q', 20.0, 20.0),
        cut_at(200.0, 200.0, 40.0),
        cut_at(200.0, 200.0, 80.0),
    ]);
    assert_eq!(tree.to_formula_string(), "[Q (())]");

    // WHEN deleting the double cut by its ring
    let command = ProofCommand::DoubleCutDeletion {
        point: p(200.0, 130.0),
    };
    let next = rules::rewrite(&tree, &command, &ProofConfig::default()).unwrap();

    // THEN neither cut remains
    assert_eq!(next.to_formula_string(), "[Q]");
    assert!(next.sheet().children().iter().all(|child| !child.is_cut()));
}
