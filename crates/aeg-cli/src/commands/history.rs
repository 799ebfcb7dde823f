//! History command
//!
//! Usage: aeg history <PROOF>

use clap::Args;
use std::path::PathBuf;

use aeg_store::load_proof;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Proof file (JSON)
    pub proof: PathBuf,
}

pub fn execute(args: HistoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let history = load_proof(&args.proof)?;
    for step in history.steps() {
        let marker = if step.index() == history.cursor() { "*" } else { " " };
        println!(
            "{} {:>3}  {:<20}  {}",
            marker,
            step.index(),
            step.rule().name(),
            step.tree().to_formula_string()
        );
    }
    Ok(())
}
