//! Noughts CLI - play against the heuristic engine or analyze positions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe engine with heuristic lookahead", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round against the engine in the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Score every legal move of a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
    }
}
