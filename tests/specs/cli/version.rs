// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version flag specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn version_flag_outputs_name_and_semver() {
    bc().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("burnchart"))
        .stdout(predicate::str::is_match(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap());
}

#[test]
fn version_subcommand_does_not_exist() {
    bc().arg("version").assert().failure();
}
