//! Explicit application state
//!
//! One `AppState` owns the draw tree, the proof in progress and any live
//! preview. Every speculative edit works on a scratch copy: `begin_preview`
//! snapshots the active tree, the caller mutates the scratch copy, then the
//! edit is committed or `cancel_preview` drops the copy and the snapshot stays.

use tracing::{debug, info};

use crate::apply::apply_edit;
use crate::commands::EditCommand;
use crate::config::ProofConfig;
use crate::errors::{AegError, Result};
use crate::ops::AegTree;
use crate::proof::ProofEngine;
use crate::rules::ProofCommand;

/// Editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Draw,
    Proof,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Draw => "draw",
            Mode::Proof => "proof",
        }
    }
}

/// A speculative edit in progress
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    mode: Mode,
    scratch: AegTree,
}

impl Preview {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scratch(&self) -> &AegTree {
        &self.scratch
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    config: ProofConfig,
    mode: Mode,
    draw_tree: AegTree,
    proof: Option<ProofEngine>,
    preview: Option<Preview>,
}

impl AppState {
    pub fn new(config: ProofConfig) -> Self {
        Self {
            config,
            mode: Mode::Draw,
            draw_tree: AegTree::new(),
            proof: None,
            preview: None,
        }
    }

    /// Back to an empty draw tree with no proof
    pub fn reset(&mut self) {
        info!("app state reset");
        *self = AppState::new(self.config);
    }

    pub fn config(&self) -> &ProofConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draw_tree(&self) -> &AegTree {
        &self.draw_tree
    }

    /// Replace the draw tree, dropping any preview
    ///
    /// # Errors
    /// * `InvalidGraph` - If `tree` does not verify
    pub fn set_draw_tree(&mut self, tree: AegTree) -> Result<()> {
        tree.validate()?;
        self.preview = None;
        self.draw_tree = tree;
        Ok(())
    }

    pub fn proof(&self) -> Option<&ProofEngine> {
        self.proof.as_ref()
    }

    pub fn proof_mut(&mut self) -> Option<&mut ProofEngine> {
        self.proof.as_mut()
    }

    /// Install a loaded proof and switch to proof mode
    pub fn set_proof(&mut self, engine: ProofEngine) {
        self.preview = None;
        self.proof = Some(engine);
        self.mode = Mode::Proof;
    }

    /// The tree edits apply to: the draw tree, or the current proof step
    pub fn active_tree(&self) -> &AegTree {
        match (self.mode, &self.proof) {
            (Mode::Proof, Some(engine)) => engine.current_tree(),
            _ => &self.draw_tree,
        }
    }

    pub fn enter_draw_mode(&mut self) {
        self.preview = None;
        self.mode = Mode::Draw;
    }

    /// Switch to proof mode, starting a proof from the draw tree if none is
    /// in progress
    ///
    /// # Errors
    /// * `InvalidGraph` - If a new proof would start from a tree that does not verify
    pub fn enter_proof_mode(&mut self) -> Result<()> {
        if self.proof.is_none() {
            self.start_proof()?;
        }
        self.preview = None;
        self.mode = Mode::Proof;
        Ok(())
    }

    /// Start a new proof whose premise is the draw tree, replacing any
    /// proof in progress
    ///
    /// # Errors
    /// * `InvalidGraph` - If the draw tree does not verify
    pub fn start_proof(&mut self) -> Result<()> {
        self.draw_tree.validate()?;
        debug!(nodes = self.draw_tree.node_count(), "proof started");
        self.proof = Some(ProofEngine::new(self.draw_tree.clone(), self.config));
        self.mode = Mode::Proof;
        self.preview = None;
        Ok(())
    }

    /// Snapshot the active tree and hand out a scratch copy to mutate
    ///
    /// # Errors
    /// * `PreviewActive` - If a preview is already in progress
    pub fn begin_preview(&mut self) -> Result<&mut AegTree> {
        if self.preview.is_some() {
            return Err(AegError::PreviewActive);
        }
        let scratch = self.active_tree().clone();
        let preview = self.preview.insert(Preview {
            mode: self.mode,
            scratch,
        });
        Ok(&mut preview.scratch)
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut AegTree> {
        self.preview.as_mut().map(|p| &mut p.scratch)
    }

    /// Drop the scratch copy; the snapshot was never touched
    ///
    /// # Errors
    /// * `NoPreview` - If no preview is active
    pub fn cancel_preview(&mut self) -> Result<()> {
        self.preview.take().map(|_| ()).ok_or(AegError::NoPreview)
    }

    /// Make the scratch copy the draw tree
    ///
    /// # Errors
    /// * `NoPreview` - If no preview is active
    /// * `WrongMode` - If the preview was started in proof mode, where only
    ///   rules may change the tree
    /// * `InvalidGraph` - If the scratch copy does not verify; the preview is
    ///   discarded
    pub fn commit_preview(&mut self) -> Result<()> {
        let started_in = self.preview.as_ref().ok_or(AegError::NoPreview)?.mode;
        if started_in != Mode::Draw || self.mode != Mode::Draw {
            return Err(AegError::WrongMode {
                op: "commit_preview".to_string(),
                expected: Mode::Draw.name().to_string(),
            });
        }
        let preview = self.preview.take().ok_or(AegError::NoPreview)?;
        preview.scratch.validate()?;
        self.draw_tree = preview.scratch;
        Ok(())
    }

    /// Apply an edit to the draw tree, ending any preview
    ///
    /// # Errors
    /// * `WrongMode` - Outside draw mode
    /// * Any error of [`apply_edit`]; the draw tree is left unchanged
    pub fn commit_edit(&mut self, cmd: EditCommand) -> Result<()> {
        self.require_mode(Mode::Draw, "commit_edit")?;
        self.preview = None;
        self.draw_tree = apply_edit(self.draw_tree.clone(), cmd)?;
        Ok(())
    }

    /// Apply a proof rule to the current step, ending any preview
    ///
    /// Returns whether a step was appended.
    ///
    /// # Errors
    /// * `WrongMode` - Outside proof mode
    pub fn commit_proof(&mut self, cmd: &ProofCommand) -> Result<bool> {
        self.require_mode(Mode::Proof, "commit_proof")?;
        self.preview = None;
        let engine = self.proof.as_mut().ok_or_else(|| AegError::WrongMode {
            op: "commit_proof".to_string(),
            expected: Mode::Proof.name().to_string(),
        })?;
        Ok(engine.apply(cmd))
    }

    fn require_mode(&self, expected: Mode, op: &str) -> Result<()> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(AegError::WrongMode {
                op: op.to_string(),
                expected: expected.name().to_string(),
            })
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(ProofConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::{Atom, Node};

    fn atom(id: char, x: f64, y: f64) -> Node {
        Atom::new(id, Point::new(x, y), 5.0, 5.0).unwrap().into()
    }

    #[test]
    fn test_cancelled_preview_leaves_tree_untouched() {
        let mut state = AppState::default();
        state.begin_preview().unwrap().insert(atom('A', 0.0, 10.0)).unwrap();
        assert_eq!(state.preview().unwrap().scratch().to_formula_string(), "[A]");

        state.cancel_preview().unwrap();
        assert_eq!(state.draw_tree().to_formula_string(), "[]");
        assert_eq!(state.cancel_preview(), Err(AegError::NoPreview));
    }

    #[test]
    fn test_committed_preview_replaces_tree() {
        let mut state = AppState::default();
        state.begin_preview().unwrap().insert(atom('A', 0.0, 10.0)).unwrap();
        assert_eq!(state.begin_preview().unwrap_err(), AegError::PreviewActive);

        state.commit_preview().unwrap();
        assert_eq!(state.draw_tree().to_formula_string(), "[A]");
        assert!(state.preview().is_none());
    }

    #[test]
    fn test_edits_and_rules_are_mode_bound() {
        let mut state = AppState::default();
        let erase = ProofCommand::Erasure {
            point: Point::new(1.0, 1.0),
        };
        assert!(matches!(
            state.commit_proof(&erase),
            Err(AegError::WrongMode { .. })
        ));

        state.enter_proof_mode().unwrap();
        assert!(matches!(
            state.commit_edit(EditCommand::Clear),
            Err(AegError::WrongMode { .. })
        ));
        assert_eq!(state.commit_proof(&erase), Ok(false));
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = ProofConfig {
            inner_cut_ratio: 0.5,
            min_cut_radius: 1.0,
        };
        let mut state = AppState::new(config);
        state.commit_edit(EditCommand::Clear).unwrap();
        state.enter_proof_mode().unwrap();
        state.reset();
        assert_eq!(state.mode(), Mode::Draw);
        assert!(state.proof().is_none());
        assert_eq!(state.config(), &config);
    }
}
