//! Flat text export of a [`Report`].
//!
//! Section order is fixed: score block, contributions, stage breakdown, then
//! feedback as summary / strengths / improvements / recommendation. Absent
//! strengths or improvements drop their whole block.

use crate::types::report::Report;

const TITLE: &str = "SKILL ASSESSMENT REPORT";

pub fn render_report_as_text(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(TITLE);
    output.push('\n');
    output.push_str(&"=".repeat(TITLE.len()));
    output.push_str("\n\n");

    output.push_str(&format!("Employability Score: {}%\n", report.score));
    output.push_str(&format!("Benchmark: {}\n", report.band.label()));
    output.push_str(&format!("Percentile Rank: {}\n", report.percentile));
    output.push_str(&format!("Category: {}\n\n", report.category));

    heading(&mut output, "FEATURE CONTRIBUTIONS");
    if report.contributions.is_empty() {
        output.push_str("none\n");
    } else {
        for entry in &report.contributions {
            output.push_str(&format!("{}: {}\n", entry.feature, entry.signed_percent()));
        }
    }
    output.push('\n');

    if !report.breakdown.is_empty() {
        heading(&mut output, "STAGE PERFORMANCE");
        for stage in &report.breakdown {
            output.push_str(&format!("{}: {}%\n", stage.title(), stage.percentage()));
            for (label, value) in stage.rows() {
                output.push_str(&format!("  {label}: {value}\n"));
            }
        }
        output.push('\n');
    }

    heading(&mut output, "FEEDBACK");
    block(&mut output, "Overall Assessment", &report.summary);
    if let Some(strengths) = &report.strengths {
        block(&mut output, "Key Strengths", strengths);
    }
    if let Some(improvements) = &report.improvements {
        block(&mut output, "Areas for Improvement", improvements);
    }
    block(&mut output, "Next Steps", &report.recommendation);

    output
}

fn heading(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.len()));
    output.push('\n');
}

fn block(output: &mut String, label: &str, body: &str) {
    output.push_str(label);
    output.push_str(":\n");
    output.push_str(body);
    output.push_str("\n\n");
}
