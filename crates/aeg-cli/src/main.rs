//! AEG CLI
//!
//! Command-line interface for inspecting Alpha graphs and stepping proofs

use std::path::{Path, PathBuf};

use aeg_core::logging_facility::{init, Profile};
use aeg_core::ProofConfig;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "aeg")]
#[command(about = "AEG - Peirce Alpha existential graphs", long_about = None)]
struct Cli {
    /// Proof configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the formula of a tree, or of a proof's current step
    Formula(commands::inspect::FileArgs),
    /// Print the node hierarchy with geometry
    Show(commands::inspect::FileArgs),
    /// Check containment and sibling non-overlap
    Verify(commands::inspect::FileArgs),
    /// Apply one proof rule and write the extended proof
    Prove(commands::prove::ProveArgs),
    /// List the steps of a proof
    History(commands::history::HistoryArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Formula(args) => commands::inspect::execute_formula(args),
        Commands::Show(args) => commands::inspect::execute_show(args),
        Commands::Verify(args) => commands::inspect::execute_verify(args),
        Commands::Prove(args) => commands::prove::execute(args, config),
        Commands::History(args) => commands::history::execute(args),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<ProofConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ProofConfig::from_toml_str(&std::fs::read_to_string(path)?)?),
        None => Ok(ProofConfig::default()),
    }
}
