use crate::errors::{AegError, Result};
use crate::ops::AegTree;
use crate::rules::ProofRule;

/// One step of a proof: the tree after applying `rule`
#[derive(Debug, Clone, PartialEq)]
pub struct ProofNode {
    index: usize,
    rule: ProofRule,
    tree: AegTree,
}

impl ProofNode {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn rule(&self) -> ProofRule {
        self.rule
    }

    pub fn tree(&self) -> &AegTree {
        &self.tree
    }
}

/// Linear proof history with a cursor
///
/// Always holds at least the premise. Pushing while the cursor is behind the
/// tail discards every step after the cursor first.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofHistory {
    steps: Vec<ProofNode>,
    cursor: usize,
}

impl ProofHistory {
    pub fn new(premise: AegTree) -> Self {
        Self {
            steps: vec![ProofNode {
                index: 0,
                rule: ProofRule::Premise,
                tree: premise,
            }],
            cursor: 0,
        }
    }

    /// Rebuild a history from `(rule, tree)` pairs, cursor at the tail
    ///
    /// # Errors
    /// * `InvalidGraph` - If `steps` is empty or does not start with a premise
    pub fn from_steps(steps: impl IntoIterator<Item = (ProofRule, AegTree)>) -> Result<Self> {
        let mut steps = steps.into_iter();
        let history = match steps.next() {
            Some((ProofRule::Premise, premise)) => {
                let mut history = ProofHistory::new(premise);
                for (rule, tree) in steps {
                    history.push(rule, tree);
                }
                history
            }
            Some((rule, _)) => {
                return Err(AegError::InvalidGraph {
                    reason: format!("proof starts with {} instead of a premise", rule),
                })
            }
            None => {
                return Err(AegError::InvalidGraph {
                    reason: "proof has no steps".to_string(),
                })
            }
        };
        Ok(history)
    }

    /// Append a step after the cursor, truncating any steps beyond it
    pub fn push(&mut self, rule: ProofRule, tree: AegTree) -> &ProofNode {
        self.steps.truncate(self.cursor + 1);
        let index = self.steps.len();
        self.steps.push(ProofNode { index, rule, tree });
        self.cursor = index;
        &self.steps[index]
    }

    pub fn current(&self) -> &ProofNode {
        &self.steps[self.cursor]
    }

    pub fn steps(&self) -> &[ProofNode] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the premise is never removed
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_tail(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    /// Move the cursor to `index` without discarding anything
    ///
    /// # Errors
    /// * `StepOutOfRange` - If no step has that index
    pub fn go_to(&mut self, index: usize) -> Result<&ProofNode> {
        if index >= self.steps.len() {
            return Err(AegError::StepOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.cursor = index;
        Ok(&self.steps[index])
    }

    /// Returns false when already at the premise
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns false when already at the tail
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_tail() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::{Atom, Node};

    fn tree_with(ids: &str) -> AegTree {
        let mut tree = AegTree::new();
        for (i, id) in ids.chars().enumerate() {
            let atom = Atom::new(id, Point::new(10.0 * i as f64, 0.0), 5.0, 5.0).unwrap();
            tree.insert(Node::from(atom)).unwrap();
        }
        tree
    }

    #[test]
    fn test_new_history_holds_premise() {
        let history = ProofHistory::new(tree_with("A"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().rule(), ProofRule::Premise);
        assert_eq!(history.current().index(), 0);
        assert!(history.is_at_tail());
    }

    #[test]
    fn test_push_after_rewind_truncates() {
        let mut history = ProofHistory::new(tree_with(""));
        history.push(ProofRule::Insertion, tree_with("A"));
        history.push(ProofRule::Insertion, tree_with("AB"));
        history.push(ProofRule::Insertion, tree_with("ABC"));

        history.go_to(1).unwrap();
        let node = history.push(ProofRule::Erasure, tree_with(""));
        assert_eq!(node.index(), 2);

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.steps()[2].rule(), ProofRule::Erasure);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut history = ProofHistory::new(tree_with(""));
        history.push(ProofRule::Insertion, tree_with("A"));

        assert!(!history.step_forward());
        assert!(history.step_back());
        assert!(!history.step_back());
        assert!(history.step_forward());
        assert_eq!(
            history.go_to(2).unwrap_err(),
            AegError::StepOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_from_steps_requires_premise() {
        assert!(ProofHistory::from_steps(Vec::new()).is_err());
        assert!(ProofHistory::from_steps(vec![(ProofRule::Erasure, tree_with(""))]).is_err());

        let history = ProofHistory::from_steps(vec![
            (ProofRule::Premise, tree_with("A")),
            (ProofRule::Erasure, tree_with("")),
        ])
        .unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.is_at_tail());
    }
}
