use std::fmt;

use crate::geometry::Point;
use crate::model::Node;

/// A requested proof rewrite
///
/// Nodes are selected by point: the selected node is the innermost node
/// covering the point.
#[derive(Debug, Clone, PartialEq)]
pub enum ProofCommand {
    /// Remove a node from an even level
    Erasure { point: Point },

    /// Add a node inside a cut at an even level
    Insertion { node: Node },

    /// Copy a node to `destination` (offset from `selected`) in the same
    /// context or a context nested within it
    Iteration { selected: Point, destination: Point },

    /// Remove a node that has an equal copy in an enclosing context
    Deiteration { point: Point },

    /// Draw two nested cuts with nothing between them
    DoubleCutInsertion {
        center: Point,
        radius_x: f64,
        radius_y: f64,
    },

    /// Remove a cut whose only child is a cut, keeping the inner contents
    DoubleCutDeletion { point: Point },

    /// Reposition a node with its subtree without changing the graph
    Move { selected: Point, destination: Point },

    /// Reposition a single node, leaving its contents in place
    MoveSingle { selected: Point, destination: Point },
}

impl ProofCommand {
    pub fn rule(&self) -> ProofRule {
        match self {
            ProofCommand::Erasure { .. } => ProofRule::Erasure,
            ProofCommand::Insertion { .. } => ProofRule::Insertion,
            ProofCommand::Iteration { .. } => ProofRule::Iteration,
            ProofCommand::Deiteration { .. } => ProofRule::Deiteration,
            ProofCommand::DoubleCutInsertion { .. } => ProofRule::DoubleCutInsertion,
            ProofCommand::DoubleCutDeletion { .. } => ProofRule::DoubleCutDeletion,
            ProofCommand::Move { .. } => ProofRule::Move,
            ProofCommand::MoveSingle { .. } => ProofRule::MoveSingle,
        }
    }
}

/// The rule that produced a proof step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofRule {
    Premise,
    Erasure,
    Insertion,
    Iteration,
    Deiteration,
    DoubleCutInsertion,
    DoubleCutDeletion,
    Move,
    MoveSingle,
}

impl ProofRule {
    pub const ALL: [ProofRule; 9] = [
        ProofRule::Premise,
        ProofRule::Erasure,
        ProofRule::Insertion,
        ProofRule::Iteration,
        ProofRule::Deiteration,
        ProofRule::DoubleCutInsertion,
        ProofRule::DoubleCutDeletion,
        ProofRule::Move,
        ProofRule::MoveSingle,
    ];

    /// Display name, also used in proof files
    pub fn name(&self) -> &'static str {
        match self {
            ProofRule::Premise => "Premise",
            ProofRule::Erasure => "Erasure",
            ProofRule::Insertion => "Insertion",
            ProofRule::Iteration => "Iteration",
            ProofRule::Deiteration => "Deiteration",
            ProofRule::DoubleCutInsertion => "Double Cut Insertion",
            ProofRule::DoubleCutDeletion => "Double Cut Deletion",
            ProofRule::Move => "Move",
            ProofRule::MoveSingle => "Move Single",
        }
    }

    pub fn from_name(name: &str) -> Option<ProofRule> {
        ProofRule::ALL.into_iter().find(|rule| rule.name() == name)
    }
}

impl fmt::Display for ProofRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_round_trip() {
        for rule in ProofRule::ALL {
            assert_eq!(ProofRule::from_name(rule.name()), Some(rule));
        }
        assert_eq!(ProofRule::from_name("double cut insertion"), None);
    }

    #[test]
    fn test_command_rule() {
        let cmd = ProofCommand::DoubleCutDeletion {
            point: Point::new(1.0, 1.0),
        };
        assert_eq!(cmd.rule(), ProofRule::DoubleCutDeletion);
        assert_eq!(cmd.rule().to_string(), "Double Cut Deletion");
    }
}
