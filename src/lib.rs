//! Scoring and explainability engine for three-stage developer assessments.
//!
//! [`compute_report`] reduces quiz, coding and code-audit results into an
//! employability score, ranked feature contributions and template feedback.
//! [`render_report_as_text`] turns the result into a flat export document.
//! The remaining modules are the file-based shell used by the CLI.

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod report;
pub mod session;
pub mod telemetry;
pub mod types;

pub use engine::{compute_report, compute_report_with};
pub use report::render_report_as_text;
pub use types::report::{Category, Feature, FeatureContribution, Report};
