// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fiscal-quarter lookup specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn period_crossing_quarter_boundary_lists_both_quarters() {
    bc().args(["quarters", "--from", "2025-06-30", "--to", "2025-07-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FY25Q1"))
        .stdout(predicate::str::contains("FY25Q2"));
}

#[test]
fn single_month_period_lists_one_quarter() {
    let output = bc()
        .args(["quarters", "--from", "2025-06-29", "--to", "2025-06-30"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "FY25Q1");
}

#[test]
fn json_output_is_sorted() {
    let output = bc()
        .args([
            "quarters",
            "--from",
            "2025-03-01",
            "--to",
            "2025-08-15",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output parses");
    let quarters: Vec<&str> = parsed["quarters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(quarters, ["FY24Q4", "FY25Q1", "FY25Q2"]);
}

#[test]
fn range_expands_label_to_dates() {
    bc().args(["quarters", "--range", "FY25Q2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-07-01"))
        .stdout(predicate::str::contains("2025-09-30"));
}

#[test]
fn range_accepts_marker_prefix() {
    bc().args(["quarters", "--range", "@FY25Q4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-01-01"))
        .stdout(predicate::str::contains("2026-03-31"));
}

#[test]
fn malformed_label_fails_with_hint() {
    bc().args(["quarters", "--range", "FY2025Q2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid quarter label"))
        .stderr(predicate::str::contains("hint"));
}

#[test]
fn missing_period_fails() {
    bc().args(["quarters", "--from", "2025-06-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("period is required"));
}

#[test]
fn inverted_period_fails() {
    bc().args(["quarters", "--from", "2025-07-02", "--to", "2025-07-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid period"));
}
