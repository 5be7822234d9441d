//! Fixed-template feedback selection.
//!
//! Summary and recommendation depend on the score alone. Strength and
//! improvement pick the first qualifying entry of the ranked contributions and
//! phrase it through a closed per-feature table with one fallback sentence.

use crate::types::report::{Feature, FeatureContribution, Feedback};

/// A contribution must exceed this to be reported as a strength.
pub const STRENGTH_THRESHOLD: i32 = 5;
/// A contribution must fall below this to be reported as an improvement area.
pub const IMPROVEMENT_THRESHOLD: i32 = -3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTemplate {
    TopTier,
    Solid,
    Moderate,
    SignificantGaps,
}

impl SummaryTemplate {
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            Self::TopTier
        } else if score >= 65 {
            Self::Solid
        } else if score >= 50 {
            Self::Moderate
        } else {
            Self::SignificantGaps
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::TopTier => "Excellent performance! Your assessment places you in the top tier of entry-level candidates. You demonstrate strong problem-solving abilities and code comprehension skills that align well with industry requirements.",
            Self::Solid => "Good performance overall. Your results indicate solid foundational skills with room for targeted improvement. You show promise as an entry-level developer with the right mentorship.",
            Self::Moderate => "Moderate performance. While you demonstrate basic competency, there are several areas requiring focused development before you meet typical entry-level expectations.",
            Self::SignificantGaps => "Your results suggest significant gaps in core competencies. We recommend focused learning in algorithm design, debugging practices, and code quality before pursuing entry-level positions.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationTemplate {
    ReadyNow,
    TargetedPractice,
    Fundamentals,
}

impl RecommendationTemplate {
    pub fn for_score(score: u32) -> Self {
        if score >= 75 {
            Self::ReadyNow
        } else if score >= 60 {
            Self::TargetedPractice
        } else {
            Self::Fundamentals
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::ReadyNow => "You're ready for entry-level positions. Focus on building portfolio projects and practicing technical interviews. Consider contributing to open-source projects to gain real-world experience.",
            Self::TargetedPractice => "Spend 2-3 months on targeted practice. Work through LeetCode problems (Easy to Medium), take online courses on clean code principles, and build 2-3 complete projects to strengthen your portfolio.",
            Self::Fundamentals => "We recommend a structured learning path: Complete a comprehensive algorithms course, practice daily coding challenges, and focus on understanding fundamental data structures before attempting complex projects.",
        }
    }
}

/// Feature-keyed sentences with a mandatory fallback.
#[derive(Debug, Clone, Copy)]
pub struct PhraseTable {
    pub entries: &'static [(Feature, &'static str)],
    pub fallback: &'static str,
}

impl PhraseTable {
    pub fn phrase(&self, feature: Feature) -> &'static str {
        self.entries
            .iter()
            .find(|(key, _)| *key == feature)
            .map(|(_, phrase)| *phrase)
            .unwrap_or(self.fallback)
    }
}

pub const STRENGTH_PHRASES: PhraseTable = PhraseTable {
    entries: &[
        (
            Feature::CodeCorrectness,
            "Your solutions demonstrate logical correctness and algorithmic thinking.",
        ),
        (
            Feature::BugDetection,
            "You excel at identifying flaws in existing code, a critical skill for code review and maintenance.",
        ),
        (
            Feature::QuizAccuracy,
            "Your theoretical knowledge of computer science fundamentals is solid.",
        ),
        (
            Feature::EditPrecision,
            "Your modifications are targeted and deliberate, changing only what the fix requires.",
        ),
        (
            Feature::CodeSimplicity,
            "You write concise solutions that stay readable without unnecessary scaffolding.",
        ),
    ],
    fallback: "You show efficiency in your problem-solving approach.",
};

pub const IMPROVEMENT_PHRASES: PhraseTable = PhraseTable {
    entries: &[
        (
            Feature::CodeSimplicity,
            "Focus on writing cleaner, more modular code. Practice refactoring exercises and study design patterns.",
        ),
        (
            Feature::EditPrecision,
            "Be more surgical with code modifications. Each edit should address a specific issue rather than making broad changes.",
        ),
        (
            Feature::CodeCorrectness,
            "Work on systematic debugging approaches. Test your solution against edge cases before submitting it.",
        ),
        (
            Feature::BugDetection,
            "Practice reading unfamiliar code line by line and questioning every condition and boundary before editing it.",
        ),
        (
            Feature::QuizAccuracy,
            "Revisit core computer science concepts, especially data structures and complexity analysis.",
        ),
    ],
    fallback: "Consider improving your time management and problem-solving speed through regular practice.",
};

/// `contributions` must already be ranked.
pub fn generate(score: u32, contributions: &[FeatureContribution]) -> Feedback {
    Feedback {
        summary: SummaryTemplate::for_score(score).text().to_string(),
        strengths: strength(contributions),
        improvements: improvement(contributions),
        recommendation: RecommendationTemplate::for_score(score).text().to_string(),
    }
}

fn strength(contributions: &[FeatureContribution]) -> Option<String> {
    let top = contributions
        .iter()
        .find(|entry| entry.contribution > STRENGTH_THRESHOLD)?;
    Some(format!(
        "Your strongest asset is {}, contributing +{}% to your overall score. {}",
        top.feature.name().to_lowercase(),
        top.contribution.unsigned_abs(),
        STRENGTH_PHRASES.phrase(top.feature)
    ))
}

fn improvement(contributions: &[FeatureContribution]) -> Option<String> {
    let top = contributions
        .iter()
        .find(|entry| entry.contribution < IMPROVEMENT_THRESHOLD)?;
    Some(format!(
        "The primary area for improvement is {}, which reduced your score by {}%. {}",
        top.feature.name().to_lowercase(),
        top.contribution.unsigned_abs(),
        IMPROVEMENT_PHRASES.phrase(top.feature)
    ))
}
