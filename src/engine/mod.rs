pub mod attribution;
pub mod feedback;
pub mod normalize;
pub mod scoring;

use crate::types::report::{Category, Report, ScoreBand, StageBreakdown};
use crate::types::stage::StageMetrics;
use scoring::{round_half_up, ScoringPolicy};
use serde_json::Value;

/// Highest percentile a report can show.
pub const MAX_PERCENTILE: u32 = 95;
/// Offset added to the score to derive the displayed percentile.
pub const PERCENTILE_OFFSET: u32 = 5;

/// Scores one completed assessment with the default weighting policy.
///
/// Each argument is the stage's JSON record as held by the session store;
/// `None` or `null` means the stage was not attempted. Never fails, and the
/// same inputs always yield the same report.
pub fn compute_report(
    quiz: Option<&Value>,
    coding: Option<&Value>,
    audit: Option<&Value>,
) -> Report {
    compute_report_with(&ScoringPolicy::default(), quiz, coding, audit)
}

pub fn compute_report_with(
    policy: &ScoringPolicy,
    quiz: Option<&Value>,
    coding: Option<&Value>,
    audit: Option<&Value>,
) -> Report {
    let metrics = normalize::normalize(quiz, coding, audit);
    assemble(policy, &metrics)
}

pub fn assemble(policy: &ScoringPolicy, metrics: &StageMetrics) -> Report {
    let score = policy.score(metrics);
    let contributions = attribution::attribute(metrics);
    let feedback = feedback::generate(score, &contributions);

    Report {
        score,
        percentile: percentile(score),
        category: Category::from_score(score),
        band: ScoreBand::from_score(score),
        contributions,
        summary: feedback.summary,
        strengths: feedback.strengths,
        improvements: feedback.improvements,
        recommendation: feedback.recommendation,
        breakdown: breakdown(metrics),
    }
}

pub fn percentile(score: u32) -> u32 {
    MAX_PERCENTILE.min(score.saturating_add(PERCENTILE_OFFSET))
}

fn breakdown(metrics: &StageMetrics) -> Vec<StageBreakdown> {
    let mut stages = Vec::with_capacity(metrics.present_count());

    if let Some(quiz) = &metrics.quiz {
        let avg_secs_per_question = if quiz.total_questions > 0.0 {
            whole(quiz.total_time / quiz.total_questions)
        } else {
            0
        };
        stages.push(StageBreakdown::Quiz {
            percentage: whole(quiz.score),
            correct: whole(quiz.correct),
            total_questions: whole(quiz.total_questions),
            total_time_secs: whole(quiz.total_time),
            avg_secs_per_question,
        });
    }

    if let Some(coding) = &metrics.coding {
        stages.push(StageBreakdown::Coding {
            percentage: whole(coding.pass_percentage),
            tests_passed: whole(coding.tests_passed),
            tests_total: whole(coding.tests_total),
            run_count: whole(coding.run_count),
            lines_of_code: whole(coding.lines_of_code),
        });
    }

    if let Some(audit) = &metrics.audit {
        stages.push(StageBreakdown::Audit {
            percentage: whole(audit.overall_score),
            bugs_fixed: whole(audit.bugs_fixed),
            bugs_total: whole(audit.bugs_total),
            edit_efficiency: whole(audit.edit_efficiency),
            lines_modified: whole(audit.lines_modified),
        });
    }

    stages
}

fn whole(value: f64) -> i64 {
    round_half_up(value) as i64
}
