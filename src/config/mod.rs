pub mod settings;
pub mod toml_config;

pub use settings::Settings;

#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, Strategy};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Reads a sequence line and a target line from stdin and prints whether
/// some subset of the sequence sums to the target.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "group-sum")]
#[command(about = "Decide whether a subset of integers sums to a target")]
pub struct CliConfig {
    /// Path to a TOML configuration file; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search strategy
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Maximum sequence length for the call-stack strategies
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Also print the values of one satisfying subset
    #[arg(long)]
    pub witness: bool,

    /// Also print every satisfying subset, one per line
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log memory and timing for each phase")]
    pub monitor: bool,
}
