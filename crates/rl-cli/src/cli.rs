//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Rowlift - batch migration of person-record extracts into a relational store
#[derive(Parser, Debug)]
#[command(name = "rl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "rowlift.yml")]
    pub config: String,

    /// Override store path from the configuration
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the source extract and write partitioned batch artifacts
    Build(BuildArgs),

    /// Submit written batches to the target store
    Load(LoadArgs),

    /// Inspect batch artifacts without submitting anything
    Report(ReportArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Override the source extract path
    #[arg(short, long)]
    pub source: Option<String>,

    /// Override the configured batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Override the artifact output directory
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// First batch ordinal to submit (1-based, default: first)
    #[arg(long)]
    pub from: Option<usize>,

    /// Last batch ordinal to submit (inclusive, default: last)
    #[arg(long)]
    pub to: Option<usize>,

    /// Report batch sizes without submitting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report on a raw SQL file instead of the artifact directory
    #[arg(short, long)]
    pub file: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
