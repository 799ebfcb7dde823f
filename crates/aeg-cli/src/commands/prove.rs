//! Prove command
//!
//! Usage: aeg prove <INPUT> <RULE> [RULE ARGS] [--output <FILE>]
//!
//! INPUT is a tree (which becomes the premise) or a proof. The rule applies to
//! the proof's current step; without `--output` the extended proof is printed.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use aeg_core::{Atom, Ellipse, Node, Point, ProofCommand, ProofConfig, ProofEngine};
use aeg_store::{load_document, proof_to_json_string, save_proof};

#[derive(Debug, Args)]
pub struct ProveArgs {
    /// Tree or proof file (JSON)
    pub input: PathBuf,

    #[command(subcommand)]
    pub rule: RuleCommand,

    /// Proof file to write
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum RuleCommand {
    /// Erase the node at a point in a positive context
    Erasure(AtArgs),
    /// Insert an atom into a negative context
    InsertAtom(AtomArgs),
    /// Insert an empty cut into a negative context
    InsertCut(CutArgs),
    /// Copy a subgraph into its own or a nested context
    Iteration(FromToArgs),
    /// Remove a subgraph that has a copy in an enclosing context
    Deiteration(AtArgs),
    /// Draw two nested cuts with nothing between them
    DoubleCutInsertion(CutArgs),
    /// Remove a cut and its single cut child
    DoubleCutDeletion(AtArgs),
    /// Move a subgraph without changing its nesting
    Move(FromToArgs),
    /// Move a node without its children
    MoveSingle(FromToArgs),
}

#[derive(Debug, Args)]
pub struct AtArgs {
    /// Point as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: Point,
}

#[derive(Debug, Args)]
pub struct FromToArgs {
    /// Selected point as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: Point,

    /// Destination point as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub to: Point,
}

#[derive(Debug, Args)]
pub struct AtomArgs {
    #[arg(long)]
    pub identifier: char,

    /// Bottom-left corner as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub origin: Point,

    #[arg(long, default_value_t = 10.0)]
    pub width: f64,

    #[arg(long, default_value_t = 10.0)]
    pub height: f64,
}

#[derive(Debug, Args)]
pub struct CutArgs {
    /// Center as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub center: Point,

    #[arg(long)]
    pub radius_x: f64,

    #[arg(long)]
    pub radius_y: f64,
}

impl RuleCommand {
    fn into_command(self) -> Result<ProofCommand, Box<dyn std::error::Error>> {
        let command = match self {
            RuleCommand::Erasure(a) => ProofCommand::Erasure { point: a.at },
            RuleCommand::InsertAtom(a) => ProofCommand::Insertion {
                node: Node::from(Atom::new(a.identifier, a.origin, a.width, a.height)?),
            },
            RuleCommand::InsertCut(c) => ProofCommand::Insertion {
                node: Node::cut(Ellipse::new(c.center, c.radius_x, c.radius_y)?),
            },
            RuleCommand::Iteration(m) => ProofCommand::Iteration {
                selected: m.from,
                destination: m.to,
            },
            RuleCommand::Deiteration(a) => ProofCommand::Deiteration { point: a.at },
            RuleCommand::DoubleCutInsertion(c) => ProofCommand::DoubleCutInsertion {
                center: c.center,
                radius_x: c.radius_x,
                radius_y: c.radius_y,
            },
            RuleCommand::DoubleCutDeletion(a) => ProofCommand::DoubleCutDeletion { point: a.at },
            RuleCommand::Move(m) => ProofCommand::Move {
                selected: m.from,
                destination: m.to,
            },
            RuleCommand::MoveSingle(m) => ProofCommand::MoveSingle {
                selected: m.from,
                destination: m.to,
            },
        };
        Ok(command)
    }
}

pub fn execute(args: ProveArgs, config: ProofConfig) -> Result<(), Box<dyn std::error::Error>> {
    let history = load_document(&args.input)?.into_history();
    let command = args.rule.into_command()?;
    let mut engine = ProofEngine::from_history(history, config);

    if !engine.apply(&command) {
        return Err(format!(
            "{} is not legal at step {}",
            command.rule(),
            engine.history().cursor()
        )
        .into());
    }

    match args.output {
        Some(path) => {
            save_proof(&path, engine.history())?;
            let step = engine.current();
            println!(
                "step {}: {} {}",
                step.index(),
                step.rule(),
                step.tree().to_formula_string()
            );
        }
        None => println!("{}", proof_to_json_string(engine.history())?),
    }

    Ok(())
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", value))?;
    let coordinate = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {:?}: {}", s, e))
    };
    Point::try_new(coordinate(x)?, coordinate(y)?).map_err(|e| e.to_string())
}
