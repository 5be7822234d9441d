use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillassess",
    version,
    about = "Employability scoring and explainability for skill assessments"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory searched for skillassess.toml and .skillassess/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one assessment and print the report
    Score(ScoreCommand),
    /// Write the text report and its manifest to a directory
    Export(ExportCommand),
    /// Score every session document under a directory
    Batch(BatchCommand),
}

#[derive(Args)]
pub struct StageInputs {
    /// Session document holding quiz, coding and audit records
    #[arg(long)]
    pub session: Option<PathBuf>,
    /// Quiz stage record; overrides the session's quiz
    #[arg(long)]
    pub quiz: Option<PathBuf>,
    /// Coding stage record; overrides the session's coding
    #[arg(long)]
    pub coding: Option<PathBuf>,
    /// Audit stage record; overrides the session's audit
    #[arg(long)]
    pub audit: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub inputs: StageInputs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub inputs: StageInputs,
    /// Output directory; defaults to [export] dir from config, else "."
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Overrides the sessionId from the session document
    #[arg(long)]
    pub session_id: Option<String>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub path: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}
