use serde::Serialize;
use std::fmt;

/// A measured behavior that can push the employability score up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    #[serde(rename = "Quiz Accuracy")]
    QuizAccuracy,
    #[serde(rename = "Code Correctness")]
    CodeCorrectness,
    #[serde(rename = "Code Simplicity")]
    CodeSimplicity,
    #[serde(rename = "Bug Detection")]
    BugDetection,
    #[serde(rename = "Edit Precision")]
    EditPrecision,
}

impl Feature {
    pub fn name(self) -> &'static str {
        match self {
            Self::QuizAccuracy => "Quiz Accuracy",
            Self::CodeCorrectness => "Code Correctness",
            Self::CodeSimplicity => "Code Simplicity",
            Self::BugDetection => "Bug Detection",
            Self::EditPrecision => "Edit Precision",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureContribution {
    pub feature: Feature,
    pub contribution: i32,
    pub is_positive: bool,
}

impl FeatureContribution {
    pub fn new(feature: Feature, contribution: i32) -> Self {
        Self {
            feature,
            contribution,
            is_positive: contribution >= 0,
        }
    }

    /// `+12%`, `-5%`, `0%`.
    pub fn signed_percent(&self) -> String {
        if self.contribution > 0 {
            format!("+{}%", self.contribution)
        } else {
            format!("{}%", self.contribution)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Hire,
    Consider,
    Develop,
}

impl Category {
    pub fn from_score(score: u32) -> Self {
        if score >= 75 {
            Self::Hire
        } else if score >= 60 {
            Self::Consider
        } else {
            Self::Develop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hire => "Hire",
            Self::Consider => "Consider",
            Self::Develop => "Develop",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline band shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 65 {
            Self::Good
        } else if score >= 50 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - Above Entry-Level Benchmark",
            Self::Good => "Good - Meets Entry-Level Standards",
            Self::Fair => "Fair - Below Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub summary: String,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
    pub recommendation: String,
}

/// Per-stage display numbers, already rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "camelCase")]
pub enum StageBreakdown {
    #[serde(rename_all = "camelCase")]
    Quiz {
        percentage: i64,
        correct: i64,
        total_questions: i64,
        total_time_secs: i64,
        avg_secs_per_question: i64,
    },
    #[serde(rename_all = "camelCase")]
    Coding {
        percentage: i64,
        tests_passed: i64,
        tests_total: i64,
        run_count: i64,
        lines_of_code: i64,
    },
    #[serde(rename_all = "camelCase")]
    Audit {
        percentage: i64,
        bugs_fixed: i64,
        bugs_total: i64,
        edit_efficiency: i64,
        lines_modified: i64,
    },
}

impl StageBreakdown {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Quiz { .. } => "Stage A: Quiz",
            Self::Coding { .. } => "Stage B: Coding",
            Self::Audit { .. } => "Stage C: Audit",
        }
    }

    pub fn percentage(&self) -> i64 {
        match self {
            Self::Quiz { percentage, .. }
            | Self::Coding { percentage, .. }
            | Self::Audit { percentage, .. } => *percentage,
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Quiz {
                correct,
                total_questions,
                total_time_secs,
                avg_secs_per_question,
                ..
            } => vec![
                ("Correct Answers", format!("{correct}/{total_questions}")),
                (
                    "Total Time",
                    format!(
                        "{}m {}s",
                        total_time_secs.div_euclid(60),
                        total_time_secs.rem_euclid(60)
                    ),
                ),
                ("Avg Time/Question", format!("{avg_secs_per_question}s")),
            ],
            Self::Coding {
                tests_passed,
                tests_total,
                run_count,
                lines_of_code,
                ..
            } => vec![
                ("Tests Passed", format!("{tests_passed}/{tests_total}")),
                ("Run Attempts", run_count.to_string()),
                ("Lines of Code", lines_of_code.to_string()),
            ],
            Self::Audit {
                bugs_fixed,
                bugs_total,
                edit_efficiency,
                lines_modified,
                ..
            } => vec![
                ("Bugs Fixed", format!("{bugs_fixed}/{bugs_total}")),
                ("Edit Efficiency", format!("{edit_efficiency}%")),
                ("Lines Modified", lines_modified.to_string()),
            ],
        }
    }
}

/// Outcome of one engine run. Built once by [`crate::engine::compute_report`]
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub score: u32,
    pub percentile: u32,
    pub category: Category,
    pub band: ScoreBand,
    /// Sorted by descending absolute contribution, stable.
    pub contributions: Vec<FeatureContribution>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvements: Option<String>,
    pub recommendation: String,
    pub breakdown: Vec<StageBreakdown>,
}
