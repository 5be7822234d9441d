//! Tolerant extraction of stage result records into [`StageMetrics`].
//!
//! Field names and nesting follow the session store's JSON. Anything missing,
//! `null`, or non-numeric reads as `0.0`; a stage record that is itself
//! missing or `null` is treated as "not attempted" and stays `None`.

use crate::types::stage::{AuditMetrics, CodingMetrics, QuizMetrics, StageMetrics};
use serde_json::Value;

pub fn normalize(
    quiz: Option<&Value>,
    coding: Option<&Value>,
    audit: Option<&Value>,
) -> StageMetrics {
    let metrics = StageMetrics {
        quiz: present(quiz).map(quiz_metrics),
        coding: present(coding).map(coding_metrics),
        audit: present(audit).map(audit_metrics),
    };
    tracing::debug!(
        quiz = metrics.quiz.is_some(),
        coding = metrics.coding.is_some(),
        audit = metrics.audit.is_some(),
        "normalized stage metrics"
    );
    metrics
}

fn present(record: Option<&Value>) -> Option<&Value> {
    record.filter(|value| !value.is_null())
}

fn quiz_metrics(record: &Value) -> QuizMetrics {
    QuizMetrics {
        score: number_at(record, "/score"),
        correct: number_at(record, "/correct"),
        total_questions: number_at(record, "/totalQuestions"),
        total_time: number_at(record, "/totalTime"),
    }
}

fn coding_metrics(record: &Value) -> CodingMetrics {
    let lines_of_code = first_number(
        record,
        &["/codeMetrics/linesOfCode", "/codeMetrics/lines_of_code"],
    );
    CodingMetrics {
        pass_percentage: number_at(record, "/testResults/percentage"),
        tests_passed: number_at(record, "/testResults/passed"),
        tests_total: number_at(record, "/testResults/total"),
        run_count: number_at(record, "/runCount"),
        lines_of_code,
    }
}

fn audit_metrics(record: &Value) -> AuditMetrics {
    AuditMetrics {
        overall_score: number_at(record, "/metrics/overallScore"),
        bug_fix_rate: number_at(record, "/metrics/bugFixRate"),
        edit_efficiency: number_at(record, "/metrics/editEfficiency"),
        bugs_fixed: number_at(record, "/metrics/bugsFixed"),
        bugs_total: number_at(record, "/metrics/bugsTotal"),
        lines_modified: number_at(record, "/metrics/linesModified"),
    }
}

fn number(record: &Value, pointer: &str) -> Option<f64> {
    record
        .pointer(pointer)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
}

fn number_at(record: &Value, pointer: &str) -> f64 {
    number(record, pointer).unwrap_or(0.0)
}

fn first_number(record: &Value, pointers: &[&str]) -> f64 {
    pointers
        .iter()
        .find_map(|pointer| number(record, pointer))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_records_stay_absent() {
        let metrics = normalize(None, Some(&Value::Null), None);
        assert_eq!(metrics, StageMetrics::default());
        assert_eq!(metrics.present_count(), 0);
    }

    #[test]
    fn empty_record_is_present_with_zeroes() {
        let empty = json!({});
        let metrics = normalize(Some(&empty), Some(&empty), Some(&empty));
        assert_eq!(metrics.quiz, Some(QuizMetrics::default()));
        assert_eq!(metrics.coding, Some(CodingMetrics::default()));
        assert_eq!(metrics.audit, Some(AuditMetrics::default()));
    }

    #[test]
    fn reads_nested_fields() {
        let quiz = json!({ "score": 80, "correct": 8, "totalQuestions": 10, "totalTime": 312 });
        let coding = json!({
            "runCount": 4,
            "testResults": { "passed": 9, "total": 10, "percentage": 90.0 },
            "codeMetrics": { "linesOfCode": 24 }
        });
        let audit = json!({
            "metrics": {
                "overallScore": 70,
                "bugFixRate": 66.7,
                "editEfficiency": 55,
                "bugsFixed": 2,
                "bugsTotal": 3,
                "linesModified": 6
            }
        });

        let metrics = normalize(Some(&quiz), Some(&coding), Some(&audit));
        let quiz = metrics.quiz.expect("quiz should be present");
        assert_eq!(quiz.score, 80.0);
        assert_eq!(quiz.total_time, 312.0);

        let coding = metrics.coding.expect("coding should be present");
        assert_eq!(coding.pass_percentage, 90.0);
        assert_eq!(coding.run_count, 4.0);
        assert_eq!(coding.lines_of_code, 24.0);

        let audit = metrics.audit.expect("audit should be present");
        assert_eq!(audit.overall_score, 70.0);
        assert_eq!(audit.bug_fix_rate, 66.7);
        assert_eq!(audit.lines_modified, 6.0);
    }

    #[test]
    fn non_numeric_and_null_fields_read_as_zero() {
        let coding = json!({
            "testResults": { "percentage": "90" },
            "codeMetrics": null,
            "runCount": [1, 2]
        });
        let metrics = normalize(None, Some(&coding), None);
        assert_eq!(metrics.coding, Some(CodingMetrics::default()));
    }

    #[test]
    fn non_object_record_is_present_with_zeroes() {
        let audit = json!(42);
        let metrics = normalize(None, None, Some(&audit));
        assert_eq!(metrics.audit, Some(AuditMetrics::default()));
    }

    #[test]
    fn snake_case_lines_of_code_is_accepted_as_fallback() {
        let coding = json!({ "codeMetrics": { "lines_of_code": 75 } });
        let metrics = normalize(None, Some(&coding), None);
        assert_eq!(metrics.coding.map(|c| c.lines_of_code), Some(75.0));

        let both = json!({ "codeMetrics": { "linesOfCode": 12, "lines_of_code": 75 } });
        let metrics = normalize(None, Some(&both), None);
        assert_eq!(metrics.coding.map(|c| c.lines_of_code), Some(12.0));
    }
}
