use crate::engine::scoring::ScoringPolicy;
use crate::error::SkillAssessError;
use crate::report::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillAssessConfig {
    pub scoring: Option<ScoringConfig>,
    pub report: Option<ReportConfig>,
    pub logging: Option<LoggingConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub quiz_weight: Option<f64>,
    pub coding_weight: Option<f64>,
    pub audit_weight: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub dir: Option<PathBuf>,
}

impl SkillAssessConfig {
    pub fn scoring_policy(&self) -> ScoringPolicy {
        let defaults = ScoringPolicy::default();
        match &self.scoring {
            Some(scoring) => ScoringPolicy {
                quiz_weight: scoring.quiz_weight.unwrap_or(defaults.quiz_weight),
                coding_weight: scoring.coding_weight.unwrap_or(defaults.coding_weight),
                audit_weight: scoring.audit_weight.unwrap_or(defaults.audit_weight),
            },
            None => defaults,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.report
            .as_ref()
            .and_then(|report| report.format)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn export_dir(&self) -> Option<&PathBuf> {
        self.export.as_ref().and_then(|export| export.dir.as_ref())
    }

    pub fn validate(&self) -> Result<(), SkillAssessError> {
        let policy = self.scoring_policy();
        let weights = [
            ("quiz_weight", policy.quiz_weight),
            ("coding_weight", policy.coding_weight),
            ("audit_weight", policy.audit_weight),
        ];
        if let Some((key, value)) = weights
            .iter()
            .find(|(_, weight)| !(0.0..=1.0).contains(weight))
        {
            return Err(SkillAssessError::InvalidWeights(format!(
                "scoring.{key} must be between 0.0 and 1.0 (found {value})"
            )));
        }

        let weight_sum: f64 = weights.iter().map(|(_, weight)| weight).sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(SkillAssessError::InvalidWeights(format!(
                "scoring weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if let Some(level) = self.log_level() {
            if level.trim().is_empty() {
                return Err(SkillAssessError::ConfigParse(
                    "logging.level must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
