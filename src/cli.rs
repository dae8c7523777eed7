use crate::catalog::CleanCategory;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Devsweep - A cross-platform developer tool cache cleanup utility
#[derive(Parser, Debug)]
#[command(name = "devsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan for cleanable caches and show what was found
    Scan(ScanArgs),

    /// Scan and delete cleanable caches
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Categories to include (comma-separated; default all)
    #[arg(short = 't', long, value_delimiter = ',', value_name = "CATEGORIES")]
    pub categories: Option<Vec<CleanCategory>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Categories to clean (comma-separated; overrides the configured set)
    #[arg(short = 't', long, value_delimiter = ',', value_name = "CATEGORIES")]
    pub categories: Option<Vec<CleanCategory>>,

    /// Show what would be cleaned without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,
}
