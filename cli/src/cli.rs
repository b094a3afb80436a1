use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a parsed program in its textual form
    Print {
        /// Path to the node-graph file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Evaluate a program and report its module
    Run {
        /// Path to the node-graph file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Step budget; falls back to the configured default, then unbounded
        #[arg(long)]
        fuel: Option<u64>,
    },
}
