// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn help_lists_command_sections() {
    bc().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reporting:"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("scope"))
        .stdout(predicate::str::contains("quarters"))
        .stdout(predicate::str::contains("velocity"));
}

#[test]
fn help_shows_quickstart_examples() {
    bc().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Get started:"))
        .stdout(predicate::str::contains("burnchart report"));
}

#[parameterized(
    report = { "report" },
    scope = { "scope" },
    quarters = { "quarters" },
    velocity = { "velocity" },
    schema = { "schema" },
    completion = { "completion" },
)]
fn subcommand_help_succeeds(command: &str) {
    bc().args([command, "--help"]).assert().success();
}

#[test]
fn no_arguments_shows_usage_error() {
    bc().assert().failure();
}

#[test]
fn unknown_subcommand_fails() {
    bc().arg("bogus").assert().failure();
}
