//! Rule-based feature attribution.
//!
//! Each ratio metric is centered on 50 and divided by a per-feature divisor so
//! a perfect stage lands near +25 and an empty one near -25. This is a fixed,
//! auditable heuristic; no model or Shapley computation is involved.

use crate::engine::scoring::round_half_up;
use crate::types::report::{Feature, FeatureContribution};
use crate::types::stage::StageMetrics;

/// Assumed population midpoint for every ratio metric.
pub const NEUTRAL_MIDPOINT: f64 = 50.0;

pub const QUIZ_ACCURACY_DIVISOR: f64 = 2.0;
pub const CODE_CORRECTNESS_DIVISOR: f64 = 2.0;
pub const BUG_DETECTION_DIVISOR: f64 = 2.0;
pub const EDIT_PRECISION_DIVISOR: f64 = 3.0;

/// Below this many lines the solution counts as simple.
pub const SIMPLE_LINES_OF_CODE: f64 = 30.0;
/// Above this many lines the solution counts as bloated.
pub const BLOATED_LINES_OF_CODE: f64 = 60.0;
pub const SIMPLICITY_CONTRIBUTION: i32 = 8;

/// Contributions for every present stage, sorted by descending magnitude.
/// Absent stages produce no entries at all.
pub fn attribute(metrics: &StageMetrics) -> Vec<FeatureContribution> {
    let mut contributions = Vec::new();

    if let Some(quiz) = &metrics.quiz {
        contributions.push(FeatureContribution::new(
            Feature::QuizAccuracy,
            centered(quiz.score, QUIZ_ACCURACY_DIVISOR),
        ));
    }

    if let Some(coding) = &metrics.coding {
        contributions.push(FeatureContribution::new(
            Feature::CodeCorrectness,
            centered(coding.pass_percentage, CODE_CORRECTNESS_DIVISOR),
        ));
        contributions.push(FeatureContribution::new(
            Feature::CodeSimplicity,
            simplicity(coding.lines_of_code),
        ));
    }

    if let Some(audit) = &metrics.audit {
        contributions.push(FeatureContribution::new(
            Feature::BugDetection,
            centered(audit.bug_fix_rate, BUG_DETECTION_DIVISOR),
        ));
        contributions.push(FeatureContribution::new(
            Feature::EditPrecision,
            centered(audit.edit_efficiency, EDIT_PRECISION_DIVISOR),
        ));
    }

    rank(&mut contributions);
    tracing::debug!(count = contributions.len(), "ranked feature contributions");
    contributions
}

/// Stable sort by descending absolute contribution; ties keep generation order.
pub fn rank(contributions: &mut [FeatureContribution]) {
    contributions.sort_by_key(|entry| std::cmp::Reverse(entry.contribution.unsigned_abs()));
}

fn centered(value: f64, divisor: f64) -> i32 {
    round_half_up((value - NEUTRAL_MIDPOINT) / divisor) as i32
}

fn simplicity(lines_of_code: f64) -> i32 {
    if lines_of_code < SIMPLE_LINES_OF_CODE {
        SIMPLICITY_CONTRIBUTION
    } else if lines_of_code > BLOATED_LINES_OF_CODE {
        -SIMPLICITY_CONTRIBUTION
    } else {
        0
    }
}
