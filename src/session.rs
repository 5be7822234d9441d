//! Reading stage result records from disk.
//!
//! A session document mirrors the session store's `stageData`:
//! `{ "sessionId": "...", "quiz": {...}, "coding": {...}, "audit": {...} }`.
//! Any stage key may be missing or `null`.

use crate::engine::{compute_report_with, scoring::ScoringPolicy};
use crate::error::{Result, SkillAssessError};
use crate::types::report::Report;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageRecords {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub quiz: Option<Value>,
    #[serde(default)]
    pub coding: Option<Value>,
    #[serde(default)]
    pub audit: Option<Value>,
}

impl StageRecords {
    pub fn compute(&self, policy: &ScoringPolicy) -> Report {
        compute_report_with(
            policy,
            self.quiz.as_ref(),
            self.coding.as_ref(),
            self.audit.as_ref(),
        )
    }
}

pub fn load_session(path: &Path) -> Result<StageRecords> {
    let value = read_json(path)?;
    if !value.is_object() {
        return Err(SkillAssessError::SessionParse(format!(
            "{}: session document must be a JSON object",
            path.display()
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| SkillAssessError::SessionParse(format!("{}: {}", path.display(), e)))
}

/// Reads a single stage record, e.g. the quiz result on its own.
pub fn load_stage(path: &Path) -> Result<Value> {
    read_json(path)
}

fn read_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(SkillAssessError::SessionNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)
        .map_err(|e| SkillAssessError::SessionParse(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loaded stage json");
    Ok(value)
}
