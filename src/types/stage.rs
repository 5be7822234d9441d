//! Flat numeric views of the three stage results.
//!
//! Every field has already been coerced: a missing or non-numeric value is `0.0`.
//! Whether a stage was attempted at all is carried one level up, as the
//! `Option` around each struct in [`StageMetrics`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QuizMetrics {
    /// Percentage, 0-100.
    pub score: f64,
    pub correct: f64,
    pub total_questions: f64,
    /// Seconds.
    pub total_time: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CodingMetrics {
    /// `testResults.percentage`, 0-100.
    pub pass_percentage: f64,
    pub tests_passed: f64,
    pub tests_total: f64,
    pub run_count: f64,
    pub lines_of_code: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AuditMetrics {
    /// Feeds the employability score.
    pub overall_score: f64,
    /// Feeds attribution.
    pub bug_fix_rate: f64,
    pub edit_efficiency: f64,
    pub bugs_fixed: f64,
    pub bugs_total: f64,
    pub lines_modified: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StageMetrics {
    pub quiz: Option<QuizMetrics>,
    pub coding: Option<CodingMetrics>,
    pub audit: Option<AuditMetrics>,
}

impl StageMetrics {
    pub fn present_count(&self) -> usize {
        [
            self.quiz.is_some(),
            self.coding.is_some(),
            self.audit.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
