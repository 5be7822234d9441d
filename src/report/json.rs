use crate::types::report::Report;

pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_report;
    use serde_json::{json, Value};

    #[test]
    fn json_report_uses_camel_case_contributions() {
        let coding = json!({ "testResults": { "percentage": 40 }, "codeMetrics": { "linesOfCode": 70 } });
        let report = compute_report(None, Some(&coding), None);

        let rendered = to_json(&report).expect("json should serialize");
        let parsed: Value = serde_json::from_str(&rendered).expect("json should parse back");
        assert_eq!(parsed["score"], 16);
        assert_eq!(parsed["category"], "Develop");
        assert_eq!(parsed["contributions"][0]["feature"], "Code Simplicity");
        assert_eq!(parsed["contributions"][0]["isPositive"], false);
        assert_eq!(parsed["breakdown"][0]["stage"], "coding");
        assert_eq!(parsed["breakdown"][0]["linesOfCode"], 70);
    }

    #[test]
    fn absent_feedback_sections_are_not_serialized() {
        let rendered = to_json(&compute_report(None, None, None)).expect("json should serialize");
        let parsed: Value = serde_json::from_str(&rendered).expect("json should parse back");
        assert!(parsed.get("strengths").is_none());
        assert!(parsed.get("improvements").is_none());
        assert!(parsed["summary"].is_string());
    }
}
