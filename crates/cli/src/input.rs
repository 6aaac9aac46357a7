// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue-list input.
//!
//! The engine does not talk to the tracker itself; callers export an issue
//! array to JSON (the same shape the tracker API returns) and hand the file
//! to burnchart.

use std::fs;
use std::path::Path;

use bc_core::Issue;

use crate::error::{Error, Result};

/// Loads an issue array from a JSON file.
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    let content = fs::read_to_string(path).map_err(|e| Error::InputUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let issues: Vec<Issue> = serde_json::from_str(&content).map_err(|e| Error::InputMalformed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::debug!(count = issues.len(), path = %path.display(), "loaded issues");
    Ok(issues)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
