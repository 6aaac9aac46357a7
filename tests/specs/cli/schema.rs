// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[parameterized(
    report = { "report" },
    scope = { "scope" },
    velocity = { "velocity" },
)]
fn schema_outputs_are_valid_json_schema(target: &str) {
    let output = bc().args(["schema", target]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("schema parses as json");
    assert!(parsed["$schema"].is_string());
}

#[test]
fn scope_schema_names_every_reason_code() {
    let output = bc().args(["schema", "scope"]).output().unwrap();
    let text = String::from_utf8_lossy(&output.stdout);
    for reason in [
        "quarter",
        "template",
        "goal",
        "unnecessary",
        "pre-period",
        "post-period",
        "no-due-date",
    ] {
        assert!(text.contains(reason), "missing reason code {reason}");
    }
}
