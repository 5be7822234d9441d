use crate::types::stage::StageMetrics;

/// Weight of the quiz percentage in the employability score.
pub const QUIZ_WEIGHT: f64 = 0.30;
/// Weight of the coding test-pass percentage; the most direct signal of applied ability.
pub const CODING_WEIGHT: f64 = 0.40;
/// Weight of the audit overall score.
pub const AUDIT_WEIGHT: f64 = 0.30;

pub const MIN_SCORE: u32 = 0;
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub quiz_weight: f64,
    pub coding_weight: f64,
    pub audit_weight: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            quiz_weight: QUIZ_WEIGHT,
            coding_weight: CODING_WEIGHT,
            audit_weight: AUDIT_WEIGHT,
        }
    }
}

impl ScoringPolicy {
    /// Weighted sum of the three stage percentages, rounded and clamped to 0-100.
    /// An absent stage contributes 0 to its term.
    pub fn score(&self, metrics: &StageMetrics) -> u32 {
        let quiz = metrics.quiz.map(|quiz| quiz.score).unwrap_or(0.0);
        let coding = metrics
            .coding
            .map(|coding| coding.pass_percentage)
            .unwrap_or(0.0);
        let audit = metrics
            .audit
            .map(|audit| audit.overall_score)
            .unwrap_or(0.0);

        let weighted =
            quiz * self.quiz_weight + coding * self.coding_weight + audit * self.audit_weight;
        let score = round_half_up(weighted).clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
        tracing::debug!(quiz, coding, audit, score, "employability score");
        score as u32
    }
}

pub fn employability_score(metrics: &StageMetrics) -> u32 {
    ScoringPolicy::default().score(metrics)
}

/// Rounds halves toward positive infinity: `2.5 -> 3`, `-2.5 -> -2`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
