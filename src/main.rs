mod cli;

use clap::Parser;
use skillassess::error::{Result, SkillAssessError};
use skillassess::session::{self, StageRecords};
use skillassess::types::config::SkillAssessConfig;
use skillassess::{batch, config, export, report, telemetry};
use std::path::PathBuf;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    let loaded = config::load_config(&cli.config_dir)?.unwrap_or_default();
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        loaded.log_level(),
    ))?;
    let policy = loaded.scoring_policy();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let records = load_inputs(&cmd.inputs)?;
            let report = records.compute(&policy);
            let format = match cmd.format {
                Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                None => loaded.output_format(),
            };
            println!("{}", report::render(&report, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Export(cmd) => {
            let records = load_inputs(&cmd.inputs)?;
            let report = records.compute(&policy);
            let out_dir = export_dir(cmd.out, &loaded);
            let session_id = cmd.session_id.or(records.session_id);
            let exported = export::export_report(&out_dir, session_id.as_deref(), &report)?;
            if !cli.quiet {
                println!("report: {}", exported.report_path.display());
                println!("manifest: {}", exported.manifest_path.display());
                println!("sha256: {}", exported.manifest.sha256);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.path.is_dir() {
                return Err(SkillAssessError::SessionNotFound(cmd.path.display().to_string()));
            }
            let summary = batch::score_directory(&cmd.path, &policy);
            if summary.entries.is_empty() && summary.failures.is_empty() {
                println!("batch: no session documents");
                return Ok(exit_code::SUCCESS);
            }
            for entry in &summary.entries {
                println!(
                    "{}\t{}\t{}",
                    entry.path.display(),
                    entry.score,
                    entry.category
                );
            }
            for (path, reason) in &summary.failures {
                eprintln!("skipped {}: {}", path.display(), reason);
            }
            println!(
                "scored: {}, skipped: {}",
                summary.entries.len(),
                summary.failures.len()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn load_inputs(inputs: &cli::StageInputs) -> Result<StageRecords> {
    let mut records = match &inputs.session {
        Some(path) => session::load_session(path)?,
        None => StageRecords::default(),
    };
    if let Some(path) = &inputs.quiz {
        records.quiz = Some(session::load_stage(path)?);
    }
    if let Some(path) = &inputs.coding {
        records.coding = Some(session::load_stage(path)?);
    }
    if let Some(path) = &inputs.audit {
        records.audit = Some(session::load_stage(path)?);
    }
    Ok(records)
}

fn export_dir(flag: Option<PathBuf>, cfg: &SkillAssessConfig) -> PathBuf {
    flag.or_else(|| cfg.export_dir().cloned())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    match run() {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
