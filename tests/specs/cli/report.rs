// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Burn chart report specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

fn report_json(extra: &[&str]) -> serde_json::Value {
    let (_temp, path) = write_issues(FIXTURE_Q1);
    let mut args = vec![
        "report".to_string(),
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
    assert!(output.status.success(), "report failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("json output parses")
}

#[test]
fn burn_down_has_one_row_per_calendar_date() {
    let parsed = report_json(&[]);
    assert_eq!(parsed["mode"], "burn-down");
    assert_eq!(parsed["period"]["start"], "2025-04-01");
    assert_eq!(parsed["period"]["end"], "2025-06-30");
    // April (30) + May (31) + June (30) calendar days.
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 91);
}

#[test]
fn burn_down_totals_come_from_the_scoped_set() {
    let parsed = report_json(&[]);
    let rows = parsed["rows"].as_array().unwrap();

    // Scoped set is issues 1 (2pt, open) and 2 (3pt, done 2025-05-20).
    let first = &rows[0];
    assert_eq!(first["total"], 5.0);
    assert_eq!(first["completed"], 0.0);
    assert_eq!(first["remaining"], 5.0);

    let last = rows.last().unwrap();
    assert_eq!(last["completed"], 3.0);
    assert_eq!(last["remaining"], 2.0);
    assert_eq!(last["completed_issues"], 1);
    assert_eq!(last["total_issues"], 2);
}

#[test]
fn burn_down_planned_is_monotone_non_increasing() {
    let parsed = report_json(&[]);
    let planned: Vec<f64> = parsed["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["planned"].as_f64().unwrap())
        .collect();
    for pair in planned.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-9);
    }
    assert!(planned.last().unwrap().abs() < 1e-9);
}

#[test]
fn burn_up_planned_is_monotone_non_decreasing() {
    let parsed = report_json(&["--mode", "burn-up"]);
    assert_eq!(parsed["mode"], "burn-up");
    let planned: Vec<f64> = parsed["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["planned"].as_f64().unwrap())
        .collect();
    for pair in planned.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-9);
    }
}

#[test]
fn include_missing_due_date_raises_the_total() {
    let parsed = report_json(&["--include-missing-due-date"]);
    let rows = parsed["rows"].as_array().unwrap();
    // Issue 6 (8pt) joins the scoped set.
    assert_eq!(rows[0]["total"], 13.0);
}

#[test]
fn text_output_prints_a_table_and_scope_note() {
    let (_temp, path) = write_issues(FIXTURE_Q1);
    bc().args([
        "report",
        "-i",
        path.to_str().unwrap(),
        "--from",
        "2025-04-01",
        "--to",
        "2025-06-30",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("DATE"))
    .stdout(predicate::str::contains("PLANNED"))
    .stdout(predicate::str::contains("2025-04-01"))
    .stderr(predicate::str::contains("4 issue(s) excluded"));
}

#[test]
fn empty_issue_file_still_produces_rows() {
    let (_temp, path) = write_issues("[]");
    let output = bc()
        .args([
            "report",
            "-i",
            path.to_str().unwrap(),
            "--from",
            "2025-04-01",
            "--to",
            "2025-04-07",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = parsed["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|r| r["total"] == 0.0));
}
