pub mod json;
pub mod md;
pub mod text;

pub use text::render_report_as_text;

use crate::error::SkillAssessError;
use crate::types::report::Report;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Md,
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, SkillAssessError> {
    match format {
        OutputFormat::Text => Ok(text::render_report_as_text(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(SkillAssessError::Json),
    }
}
