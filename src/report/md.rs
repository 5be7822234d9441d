use crate::types::report::Report;

pub fn to_markdown(report: &Report) -> String {
    let mut output = String::new();
    output.push_str("# Skill Assessment Report\n\n");
    output.push_str(&format!(
        "Employability score: {}% ({})\n\n",
        report.score,
        report.band.label()
    ));
    output.push_str(&format!(
        "- percentile: {}\n- category: {}\n\n",
        report.percentile, report.category
    ));

    output.push_str("## Feature Contributions\n\n");
    if report.contributions.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Feature | Impact |\n|---|---|\n");
        for entry in &report.contributions {
            output.push_str(&format!(
                "| {} | {} |\n",
                entry.feature,
                entry.signed_percent()
            ));
        }
        output.push('\n');
    }

    if !report.breakdown.is_empty() {
        output.push_str("## Stage Performance\n\n");
        for stage in &report.breakdown {
            output.push_str(&format!("### {} ({}%)\n\n", stage.title(), stage.percentage()));
            for (label, value) in stage.rows() {
                output.push_str(&format!("- {label}: {value}\n"));
            }
            output.push('\n');
        }
    }

    output.push_str("## Feedback\n\n");
    output.push_str(&format!("**Overall Assessment.** {}\n\n", report.summary));
    if let Some(strengths) = &report.strengths {
        output.push_str(&format!("**Key Strengths.** {strengths}\n\n"));
    }
    if let Some(improvements) = &report.improvements {
        output.push_str(&format!("**Areas for Improvement.** {improvements}\n\n"));
    }
    output.push_str(&format!("**Next Steps.** {}\n", report.recommendation));

    output
}
