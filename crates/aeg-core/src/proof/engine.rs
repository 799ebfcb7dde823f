use std::time::Instant;

use tracing::debug;

use super::history::{ProofHistory, ProofNode};
use crate::config::ProofConfig;
use crate::errors::Result;
use crate::ops::AegTree;
use crate::rules::{self, ProofCommand};
use crate::{log_op_end, log_op_rejected, log_op_start};

/// Runs proof rules against the tree under the history cursor
#[derive(Debug, Clone, PartialEq)]
pub struct ProofEngine {
    history: ProofHistory,
    config: ProofConfig,
}

impl ProofEngine {
    pub fn new(premise: AegTree, config: ProofConfig) -> Self {
        Self {
            history: ProofHistory::new(premise),
            config,
        }
    }

    pub fn from_history(history: ProofHistory, config: ProofConfig) -> Self {
        Self { history, config }
    }

    pub fn config(&self) -> &ProofConfig {
        &self.config
    }

    pub fn history(&self) -> &ProofHistory {
        &self.history
    }

    pub fn current(&self) -> &ProofNode {
        self.history.current()
    }

    pub fn current_tree(&self) -> &AegTree {
        self.history.current().tree()
    }

    pub fn is_legal(&self, command: &ProofCommand) -> bool {
        rules::is_legal(self.current_tree(), command, &self.config)
    }

    /// Apply `command` to the current step
    ///
    /// On success exactly one step is appended (truncating any steps after
    /// the cursor) and true is returned. An illegal command changes nothing.
    pub fn apply(&mut self, command: &ProofCommand) -> bool {
        let rule = command.rule();
        log_op_start!("proof_apply", rule = rule.name(), step = self.history.cursor());
        let start = Instant::now();

        match rules::rewrite(self.current_tree(), command, &self.config) {
            Some(next) => {
                let index = self.history.push(rule, next).index();
                log_op_end!(
                    "proof_apply",
                    duration_ms = start.elapsed().as_millis() as u64,
                    rule = rule.name(),
                    step = index
                );
                true
            }
            None => {
                log_op_rejected!("proof_apply", rule = rule.name());
                false
            }
        }
    }

    /// # Errors
    /// * `StepOutOfRange` - If no step has that index
    pub fn go_to(&mut self, index: usize) -> Result<&ProofNode> {
        debug!(step = index, "proof go_to");
        self.history.go_to(index)
    }

    pub fn step_back(&mut self) -> bool {
        self.history.step_back()
    }

    pub fn step_forward(&mut self) -> bool {
        self.history.step_forward()
    }

    /// Discard the proof and start over from `premise`
    pub fn reset(&mut self, premise: AegTree) {
        self.history = ProofHistory::new(premise);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::{Atom, Node};
    use crate::rules::ProofRule;

    fn premise() -> AegTree {
        let mut tree = AegTree::new();
        let atom = Atom::new('A', Point::new(0.0, 10.0), 5.0, 5.0).unwrap();
        tree.insert(Node::from(atom)).unwrap();
        tree
    }

    #[test]
    fn test_legal_command_appends_one_step() {
        let mut engine = ProofEngine::new(premise(), ProofConfig::default());
        let erase = ProofCommand::Erasure {
            point: Point::new(2.0, 8.0),
        };

        assert!(engine.is_legal(&erase));
        assert!(engine.apply(&erase));
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.current().rule(), ProofRule::Erasure);
        assert_eq!(engine.current_tree().to_formula_string(), "[]");
    }

    #[test]
    fn test_illegal_command_is_a_no_op() {
        let mut engine = ProofEngine::new(premise(), ProofConfig::default());
        let before = engine.clone();
        let erase_nothing = ProofCommand::Erasure {
            point: Point::new(100.0, 100.0),
        };

        assert!(!engine.apply(&erase_nothing));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_reset_discards_history() {
        let mut engine = ProofEngine::new(premise(), ProofConfig::default());
        engine.apply(&ProofCommand::Erasure {
            point: Point::new(2.0, 8.0),
        });
        engine.reset(AegTree::new());
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_tree().to_formula_string(), "[]");
    }
}
