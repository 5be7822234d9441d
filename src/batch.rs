use crate::engine::scoring::ScoringPolicy;
use crate::session::load_session;
use crate::types::report::Category;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub session_id: Option<String>,
    pub score: u32,
    pub category: Category,
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
    pub failures: Vec<(PathBuf, String)>,
}

pub fn list_session_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

/// Scores every `*.json` session document under `root`. Files that fail to
/// load are collected in `failures` and do not stop the run.
pub fn score_directory(root: &Path, policy: &ScoringPolicy) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for path in list_session_files(root) {
        match load_session(&path) {
            Ok(records) => {
                let report = records.compute(policy);
                summary.entries.push(BatchEntry {
                    path,
                    session_id: records.session_id,
                    score: report.score,
                    category: report.category,
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping session");
                summary.failures.push((path, e.to_string()));
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scores_nested_sessions_in_path_order_and_skips_bad_files() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(root.path().join("cohort")).expect("nested dir should create");
        fs::write(
            root.path().join("a.json"),
            r#"{ "sessionId": "a", "coding": { "testResults": { "percentage": 40 } } }"#,
        )
        .expect("session a should write");
        fs::write(
            root.path().join("cohort/b.json"),
            r#"{ "quiz": { "score": 100 }, "coding": { "testResults": { "percentage": 100 } }, "audit": { "metrics": { "overallScore": 100 } } }"#,
        )
        .expect("session b should write");
        fs::write(root.path().join("broken.json"), "{").expect("broken file should write");
        fs::write(root.path().join("notes.txt"), "ignored").expect("notes should write");

        let summary = score_directory(root.path(), &ScoringPolicy::default());

        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.entries[0].session_id.as_deref(), Some("a"));
        assert_eq!(summary.entries[0].score, 16);
        assert_eq!(summary.entries[0].category, Category::Develop);
        assert_eq!(summary.entries[1].score, 100);
        assert_eq!(summary.entries[1].category, Category::Hire);

        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].0.ends_with("broken.json"));
    }

    #[test]
    fn empty_directory_yields_empty_summary() {
        let root = TempDir::new().expect("temp dir should be created");
        let summary = score_directory(root.path(), &ScoringPolicy::default());
        assert!(summary.entries.is_empty());
        assert!(summary.failures.is_empty());
    }
}
