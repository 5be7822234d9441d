#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FULL_SESSION: &str = r#"{
  "sessionId": "cand-42",
  "quiz": { "score": 80, "correct": 8, "totalQuestions": 10, "totalTime": 245 },
  "coding": {
    "runCount": 3,
    "testResults": { "passed": 9, "total": 10, "percentage": 90 },
    "codeMetrics": { "linesOfCode": 25 }
  },
  "audit": {
    "metrics": {
      "overallScore": 70,
      "bugFixRate": 100,
      "editEfficiency": 20,
      "bugsFixed": 3,
      "bugsTotal": 3,
      "linesModified": 9
    }
  }
}"#;

fn skillassess(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("skillassess").expect("binary should compile");
    cmd.env("HOME", home).env_remove("RUST_LOG").current_dir(home);
    cmd
}

fn write_session(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("session should write");
    path
}

#[test]
fn score_session_prints_text_report() {
    let home = TempDir::new().expect("temp dir should be created");
    let session = write_session(home.path(), "session.json", FULL_SESSION);

    skillassess(home.path())
        .arg("score")
        .arg("--session")
        .arg(&session)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Employability Score: 81%"))
        .stdout(predicate::str::contains("Percentile Rank: 86"))
        .stdout(predicate::str::contains("Category: Hire"))
        .stdout(predicate::str::contains("Bug Detection: +25%"))
        .stdout(predicate::str::contains("Edit Precision: -10%"))
        .stdout(predicate::str::contains("Total Time: 4m 5s"))
        .stdout(predicate::str::contains(
            "Your strongest asset is bug detection, contributing +25%",
        ))
        .stdout(predicate::str::contains(
            "The primary area for improvement is edit precision, which reduced your score by 10%",
        ));
}

#[test]
fn stage_flag_overrides_session_stage() {
    let home = TempDir::new().expect("temp dir should be created");
    let session = write_session(home.path(), "session.json", FULL_SESSION);
    let quiz = write_session(home.path(), "quiz.json", r#"{ "score": 0 }"#);

    // 0*0.3 + 90*0.4 + 70*0.3 = 57
    skillassess(home.path())
        .arg("score")
        .arg("--session")
        .arg(&session)
        .arg("--quiz")
        .arg(&quiz)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Employability Score: 57%"))
        .stdout(predicate::str::contains("Quiz Accuracy: -25%"));
}

#[test]
fn score_json_format_is_machine_readable() {
    let home = TempDir::new().expect("temp dir should be created");
    let coding = write_session(
        home.path(),
        "coding.json",
        r#"{ "testResults": { "percentage": 40 }, "codeMetrics": { "linesOfCode": 70 } }"#,
    );

    let output = skillassess(home.path())
        .arg("score")
        .arg("--coding")
        .arg(&coding)
        .args(["--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(parsed["score"], 16);
    assert_eq!(parsed["category"], "Develop");
    assert_eq!(parsed["contributions"][0]["feature"], "Code Simplicity");
    assert_eq!(parsed["contributions"][0]["contribution"], -8);
    assert_eq!(parsed["contributions"][1]["contribution"], -5);
}

#[test]
fn config_selects_default_format_and_weights() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("skillassess.toml"),
        r#"
[scoring]
quiz_weight = 0.0
coding_weight = 1.0
audit_weight = 0.0

[report]
format = "md"
"#,
    )
    .expect("config should write");
    let session = write_session(home.path(), "session.json", FULL_SESSION);

    skillassess(home.path())
        .arg("score")
        .arg("--session")
        .arg(&session)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Skill Assessment Report"))
        .stdout(predicate::str::contains("Employability score: 90%"));
}

#[test]
fn invalid_config_weights_exit_with_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("skillassess.toml"),
        "[scoring]\ncoding_weight = 0.9\n",
    )
    .expect("config should write");

    skillassess(home.path())
        .arg("score")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid scoring weights"));
}

#[test]
fn export_writes_report_and_manifest() {
    let home = TempDir::new().expect("temp dir should be created");
    let session = write_session(home.path(), "session.json", FULL_SESSION);
    let out = home.path().join("exports");

    skillassess(home.path())
        .arg("export")
        .arg("--session")
        .arg(&session)
        .arg("--out")
        .arg(&out)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("skillassess_report_cand-42.txt"))
        .stdout(predicate::str::contains("sha256:"));

    let text = fs::read_to_string(out.join("skillassess_report_cand-42.txt"))
        .expect("report file should exist");
    assert!(text.contains("Employability Score: 81%"));

    let manifest: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out.join("skillassess_report_cand-42.manifest.json"))
            .expect("manifest should exist"),
    )
    .expect("manifest should be json");
    assert_eq!(manifest["session_id"], "cand-42");
    assert_eq!(manifest["score"], 81);
    assert_eq!(manifest["category"], "Hire");
}

#[test]
fn batch_scores_directory_and_reports_skips() {
    let home = TempDir::new().expect("temp dir should be created");
    let sessions = home.path().join("sessions");
    fs::create_dir_all(&sessions).expect("sessions dir should create");
    write_session(&sessions, "a.json", FULL_SESSION);
    write_session(&sessions, "b.json", "{}");
    write_session(&sessions, "c.json", "not json");

    skillassess(home.path())
        .arg("batch")
        .arg(&sessions)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("a.json\t81\tHire"))
        .stdout(predicate::str::contains("b.json\t0\tDevelop"))
        .stdout(predicate::str::contains("scored: 2, skipped: 1"))
        .stderr(predicate::str::contains("skipped"));
}

#[test]
fn batch_rejects_missing_directory() {
    let home = TempDir::new().expect("temp dir should be created");
    skillassess(home.path())
        .args(["batch", "no-such-dir"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}
