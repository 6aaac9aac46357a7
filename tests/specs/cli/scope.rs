// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scope pipeline specs over a mixed fixture.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

fn scope_json(extra: &[&str]) -> serde_json::Value {
    let (_temp, path) = write_issues(FIXTURE_Q1);
    let mut args = vec![
        "scope".to_string(),
        "-i".to_string(),
        path.display().to_string(),
        "--from".to_string(),
        "2025-04-01".to_string(),
        "--to".to_string(),
        "2025-06-30".to_string(),
        "--format".to_string(),
        "json".to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    let output = bc().args(&args).output().unwrap();
    assert!(output.status.success(), "scope failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("json output parses")
}

#[test]
fn every_issue_lands_in_exactly_one_list() {
    let parsed = scope_json(&[]);
    let filtered = parsed["filtered"].as_array().unwrap();
    let excluded = parsed["excluded"].as_array().unwrap();
    assert_eq!(filtered.len() + excluded.len(), 6);
    assert!(parsed["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn exclusion_reasons_match_the_defects() {
    let parsed = scope_json(&[]);
    let excluded = parsed["excluded"].as_array().unwrap();

    let reason_of = |iid: i64| -> &str {
        excluded
            .iter()
            .find(|r| r["issue"]["iid"] == iid)
            .unwrap_or_else(|| panic!("iid {iid} not excluded"))["reason"]
            .as_str()
            .unwrap()
    };

    assert_eq!(reason_of(3), "template");
    assert_eq!(reason_of(4), "quarter");
    assert_eq!(reason_of(5), "pre-period");
    assert_eq!(reason_of(6), "no-due-date");
}

#[test]
fn survivors_are_the_clean_issues() {
    let parsed = scope_json(&[]);
    let ids: Vec<i64> = parsed["filtered"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["iid"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn include_missing_due_date_moves_flag_to_warnings() {
    let parsed = scope_json(&["--include-missing-due-date"]);
    let filtered = parsed["filtered"].as_array().unwrap();
    let warnings = parsed["warnings"].as_array().unwrap();

    assert_eq!(filtered.len(), 3);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["issue"]["iid"], 6);
    assert_eq!(warnings[0]["reason"], "no-due-date");
}

#[test]
fn text_output_lists_sections_with_reason_codes() {
    let (_temp, path) = write_issues(FIXTURE_Q1);
    bc().args([
        "scope",
        "-i",
        path.to_str().unwrap(),
        "--from",
        "2025-04-01",
        "--to",
        "2025-06-30",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Scoped issues (2):"))
    .stdout(predicate::str::contains("Excluded (4):"))
    .stdout(predicate::str::contains("(template)"))
    .stdout(predicate::str::contains("(pre-period)"));
}

#[test]
fn narrowing_by_state_runs_before_the_pipeline() {
    let (_temp, path) = write_issues(FIXTURE_Q1);
    let output = bc()
        .args([
            "scope",
            "-i",
            path.to_str().unwrap(),
            "--from",
            "2025-04-01",
            "--to",
            "2025-06-30",
            "--state",
            "closed",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Only the three closed issues enter the pipeline.
    let filtered = parsed["filtered"].as_array().unwrap();
    let excluded = parsed["excluded"].as_array().unwrap();
    assert_eq!(filtered.len() + excluded.len(), 3);
}

#[test]
fn invalid_state_value_fails_with_hint() {
    let (_temp, path) = write_issues(FIXTURE_Q1);
    bc().args([
        "scope",
        "-i",
        path.to_str().unwrap(),
        "--from",
        "2025-04-01",
        "--to",
        "2025-06-30",
        "--state",
        "open",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid issue state"));
}

#[test]
fn missing_input_file_fails_with_path() {
    bc().args([
        "scope",
        "-i",
        "/nonexistent/issues.json",
        "--from",
        "2025-04-01",
        "--to",
        "2025-06-30",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("/nonexistent/issues.json"));
}
