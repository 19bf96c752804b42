use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "skyscore",
    version,
    about = "Score tonight's stargazing conditions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score one set of signals.
    Score(ScoreArgs),
    /// Score a JSON array of named signal sets, best first.
    Batch(BatchArgs),
    /// Write a default skyscore.toml to the current directory.
    Init(InitArgs),
    /// Print the active weights, Bortle lookup, and thresholds.
    Tables(CommonArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    /// Illuminated fraction of the moon, 0-100.
    #[arg(long, allow_negative_numbers = true)]
    pub moon: Option<f64>,
    /// Bortle class, 1-9.
    #[arg(long, allow_negative_numbers = true)]
    pub bortle: Option<i64>,
    /// Cloud cover, 0-100.
    #[arg(long, allow_negative_numbers = true)]
    pub cloud: Option<f64>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    #[arg(long)]
    pub input: PathBuf,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
