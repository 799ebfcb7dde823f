//! Read-only commands over a tree or proof file
//!
//! Usage: aeg formula|show|verify <FILE>

use clap::Args;
use std::path::PathBuf;

use aeg_store::load_document;

#[derive(Debug, Args)]
pub struct FileArgs {
    /// Tree or proof file (JSON)
    pub file: PathBuf,
}

pub fn execute_formula(args: FileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(&args.file)?;
    println!("{}", document.current_tree().to_formula_string());
    Ok(())
}

pub fn execute_show(args: FileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(&args.file)?;
    print!("{}", document.current_tree());
    Ok(())
}

/// Loading already rejects graphs that do not verify, so reaching the end
/// means the file is valid
pub fn execute_verify(args: FileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(&args.file)?;
    document.current_tree().validate()?;
    println!("valid: {}", document.current_tree().to_formula_string());
    Ok(())
}
