//! Turn-resolution debugging CLI.
//!
//! Loads a battle position from JSON, then either resolves one pair of
//! actions into the weighted branch set or lists the legal actions.
//!
//! Usage:
//!   cargo run -p scenario_runner -- run position.json --one move:earthquake --two switch:skarmory
//!   cargo run -p scenario_runner -- run position.json --one move:rockslide --two pass --rolls minmaxaverage
//!   cargo run -p scenario_runner -- options position.json

mod cmd;
mod models;
mod utils;

use clap::{Parser, Subcommand};
use cmd::{options, run};

#[derive(Parser)]
#[command(name = "scenario_runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one pair of actions into the weighted branch set
    Run(run::RunArgs),

    /// List the legal actions for both sides
    Options(options::OptionsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => run::execute(args),
        Some(Commands::Options(args)) => options::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            Ok(())
        }
    }
}
