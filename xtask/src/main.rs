//! xtask - Development task runner for seqmap
//!
//! Usage:
//!   cargo xtask feature-matrix [--config <yaml>] [options]

mod feature_matrix;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for seqmap")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo over every feature combination listed in a YAML matrix
    FeatureMatrix(feature_matrix::FeatureMatrixArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::FeatureMatrix(args) => feature_matrix::run(args),
    }
}
