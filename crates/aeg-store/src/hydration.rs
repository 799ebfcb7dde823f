//! Hydration layer - converts between core graphs and JSON records
//!
//! Loading rebuilds geometry from raw numbers, so every record passes the
//! same validation as a freshly drawn shape; the finished tree must verify.

use aeg_core::{AegTree, Atom, Ellipse, Node, Point, ProofHistory, ProofRule};

use crate::errors::{format_error, from_core, Result};
use crate::records::{
    AtomRecord, CutRecord, EllipseRecord, NodeRecord, PointRecord, ProofRecord, StepRecord,
    TreeRecord,
};

const OP_HYDRATE_TREE: &str = "hydrate_tree";
const OP_HYDRATE_PROOF: &str = "hydrate_proof";

pub fn tree_to_record(tree: &AegTree) -> TreeRecord {
    TreeRecord {
        sheet: CutRecord {
            ellipse: None,
            children: tree.sheet().children().iter().map(node_to_record).collect(),
        },
    }
}

fn node_to_record(node: &Node) -> NodeRecord {
    match node {
        Node::Atom(atom) => NodeRecord::Atom(AtomRecord {
            identifier: atom.identifier().to_string(),
            origin: point_to_record(atom.origin()),
            width: atom.width(),
            height: atom.height(),
        }),
        Node::Cut { ellipse, children } => NodeRecord::Cut(CutRecord {
            ellipse: Some(EllipseRecord {
                center: point_to_record(ellipse.center()),
                radius_x: ellipse.radius_x(),
                radius_y: ellipse.radius_y(),
            }),
            children: children.iter().map(node_to_record).collect(),
        }),
        // a sheet never sits below the root of a verified tree
        Node::Sheet { children } => NodeRecord::Cut(CutRecord {
            ellipse: None,
            children: children.iter().map(node_to_record).collect(),
        }),
    }
}

fn point_to_record(point: Point) -> PointRecord {
    PointRecord {
        x: point.x,
        y: point.y,
    }
}

/// Rebuild a tree from its record
///
/// # Errors
/// * `InvalidInput` - If the sheet has an ellipse, a nested record has none,
///   or an identifier is not a single character
/// * `InvalidGeometry` / `InvalidIdentifier` - If a shape is invalid
/// * `InvariantViolation` - If the rebuilt tree does not verify
pub fn tree_from_record(record: TreeRecord) -> Result<AegTree> {
    if record.sheet.ellipse.is_some() {
        return Err(format_error(OP_HYDRATE_TREE, "the sheet record must have a null ellipse"));
    }
    let children = record
        .sheet
        .children
        .into_iter()
        .map(node_from_record)
        .collect::<Result<Vec<_>>>()?;

    let mut sheet = Node::sheet();
    if let Some(slot) = sheet.children_mut() {
        *slot = children;
    }
    AegTree::from_sheet(sheet).map_err(|e| from_core(OP_HYDRATE_TREE, e))
}

fn node_from_record(record: NodeRecord) -> Result<Node> {
    match record {
        NodeRecord::Atom(atom) => {
            let mut chars = atom.identifier.chars();
            let identifier = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(format_error(
                        OP_HYDRATE_TREE,
                        format!("atom identifier {:?} is not a single letter", atom.identifier),
                    ))
                }
            };
            let origin = point_from_record(atom.origin)?;
            Atom::new(identifier, origin, atom.width, atom.height)
                .map(Node::from)
                .map_err(|e| from_core(OP_HYDRATE_TREE, e))
        }
        NodeRecord::Cut(CutRecord {
            ellipse: Some(ellipse),
            children,
        }) => {
            let center = point_from_record(ellipse.center)?;
            let ellipse = Ellipse::new(center, ellipse.radius_x, ellipse.radius_y)
                .map_err(|e| from_core(OP_HYDRATE_TREE, e))?;
            let children = children
                .into_iter()
                .map(node_from_record)
                .collect::<Result<Vec<_>>>()?;
            Ok(Node::cut_with_children(ellipse, children))
        }
        NodeRecord::Cut(CutRecord { ellipse: None, .. }) => Err(format_error(
            OP_HYDRATE_TREE,
            "a nested cut record has no ellipse",
        )),
    }
}

fn point_from_record(record: PointRecord) -> Result<Point> {
    Point::try_new(record.x, record.y).map_err(|e| from_core(OP_HYDRATE_TREE, e))
}

pub fn proof_to_record(history: &ProofHistory) -> ProofRecord {
    ProofRecord {
        steps: history
            .steps()
            .iter()
            .map(|step| StepRecord {
                rule: step.rule().name().to_string(),
                tree: tree_to_record(step.tree()),
            })
            .collect(),
    }
}

/// Rebuild a proof history from its record; the cursor lands on the last step
///
/// # Errors
/// * `InvalidInput` - If a rule name is unknown
/// * Any error of [`tree_from_record`] for a step's tree
/// * `InvariantViolation` - If the steps are empty or do not start with a premise
pub fn proof_from_record(record: ProofRecord) -> Result<ProofHistory> {
    let steps = record
        .steps
        .into_iter()
        .map(|step| {
            let rule = ProofRule::from_name(&step.rule).ok_or_else(|| {
                format_error(OP_HYDRATE_PROOF, format!("unknown proof rule {:?}", step.rule))
            })?;
            Ok((rule, tree_from_record(step.tree)?))
        })
        .collect::<Result<Vec<_>>>()?;

    ProofHistory::from_steps(steps).map_err(|e| from_core(OP_HYDRATE_PROOF, e))
}
