//! Dendrite CLI - Command-line interface for Dendrite flows
//!
//! # Commands
//! - `dendrite demo` - Build the reference flow and print its schematic
//! - `dendrite build <script>` - Build a flow from a TOML flow script

mod demo;
mod observe;
mod script;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dendrite_core::{Flow, Schematic, Transition};
use std::path::PathBuf;

/// Dendrite Flow CLI
#[derive(Parser)]
#[command(name = "dendrite")]
#[command(author, version, about = "Build branching flows and print their schematic")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the reference flow
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a flow from a TOML flow script
    Build {
        /// Flow script path
        script: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the schematic on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    observe::init_stderr_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { output } => {
            let flow = traced("demo", || Ok(demo::build_demo()))?;
            emit(&flow.snapshot(), &output)
        }
        Commands::Build { script, output } => {
            let script = script::FlowScript::load(&script)?;
            let flow = traced(&script.name, || script.build())?;
            emit(&flow.snapshot(), &output)
        }
    }
}

/// Build a flow inside a `Flow` span.
fn traced(name: &str, build: impl FnOnce() -> Result<Flow>) -> Result<Flow> {
    let span = tracing::info_span!("Flow", dendrite.flow = %name);
    let _enter = span.enter();
    build()
}

/// Write the schematic as JSON to the requested destination.
fn emit(schematic: &Schematic<String, Transition>, args: &OutputArgs) -> Result<()> {
    let json = if args.compact {
        serde_json::to_string(schematic)
    } else {
        schematic.to_json_pretty()
    }
    .context("Failed to serialize schematic")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "schematic saved");
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
