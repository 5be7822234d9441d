use crate::error::{Result, SkillAssessError};
use crate::report::render_report_as_text;
use crate::types::report::{Category, Report};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SESSION_ID: &str = "local";

/// Sidecar written next to an exported report. The timestamp lives here so the
/// report text itself stays reproducible.
#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub version: String,
    pub generated_at: String,
    pub session_id: String,
    pub score: u32,
    pub category: Category,
    pub sha256: String,
}

#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub report_path: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: ExportManifest,
}

pub fn export_report(
    dir: &Path,
    session_id: Option<&str>,
    report: &Report,
) -> Result<ExportedReport> {
    let session_id = sanitize_session_id(session_id.unwrap_or(DEFAULT_SESSION_ID));
    fs::create_dir_all(dir).map_err(SkillAssessError::Io)?;

    let text = render_report_as_text(report);
    let report_path = dir.join(format!("skillassess_report_{session_id}.txt"));
    fs::write(&report_path, &text).map_err(SkillAssessError::Io)?;

    let manifest = ExportManifest {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Utc::now().to_rfc3339(),
        session_id: session_id.clone(),
        score: report.score,
        category: report.category,
        sha256: sha256_hex(text.as_bytes()),
    };
    let manifest_path = dir.join(format!("skillassess_report_{session_id}.manifest.json"));
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .map_err(SkillAssessError::Io)?;

    tracing::info!(path = %report_path.display(), score = report.score, "exported report");
    Ok(ExportedReport {
        report_path,
        manifest_path,
        manifest,
    })
}

/// Keeps ASCII alphanumerics, `-` and `_`; everything else becomes `_`.
pub fn sanitize_session_id(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        DEFAULT_SESSION_ID.to_string()
    } else {
        cleaned
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
