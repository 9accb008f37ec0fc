use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Mode selectors owned by the project tooling rather than the scoring core.
pub const TOOLING_MODES: [&str; 2] = ["install", "test"];

#[derive(Parser)]
#[command(
    name = "modelscore",
    version,
    about = "Score the trustworthiness of model URLs from registry metadata"
)]
pub struct Cli {
    /// Path to a newline-delimited URL file, or a tooling mode (install, test)
    pub target: String,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./modelscore.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the metadata registry; every metric uses its unconfigured fallback
    #[arg(long)]
    pub offline: bool,

    /// Maximum number of models evaluated at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    #[arg(short, long, value_enum, default_value = "ndjson")]
    pub format: RecordFormat,
}

impl Cli {
    pub fn tooling_mode(&self) -> Option<&str> {
        TOOLING_MODES
            .iter()
            .copied()
            .find(|mode| *mode == self.target)
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecordFormat {
    Ndjson,
    Md,
}
