// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn bc() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("burnchart").unwrap()
}

/// Mixed FY25Q1 fixture covering every exclusion reason the pipeline can
/// produce plus two issues that survive scoping.
pub const FIXTURE_Q1: &str = r##"[
    {
        "id": 1,
        "iid": 1,
        "title": "open feature work",
        "state": "opened",
        "created_at": "2025-04-05T09:00:00Z",
        "point": 2.0,
        "kanban_status": "作業中",
        "quarter": "FY25Q1"
    },
    {
        "id": 2,
        "iid": 2,
        "title": "completed in period",
        "state": "closed",
        "created_at": "2025-04-02T09:00:00Z",
        "completed_at": "2025-05-20T15:00:00Z",
        "due_date": "2025-05-30T00:00:00Z",
        "point": 3.0,
        "kanban_status": "完了",
        "quarter": "@FY25Q1"
    },
    {
        "id": 3,
        "iid": 3,
        "title": "template row",
        "state": "opened",
        "created_at": "2025-04-01T09:00:00Z",
        "kanban_status": "#テンプレート",
        "quarter": "FY25Q1"
    },
    {
        "id": 4,
        "iid": 4,
        "title": "tagged for last year",
        "state": "opened",
        "created_at": "2025-04-10T09:00:00Z",
        "point": 5.0,
        "quarter": "FY24Q4"
    },
    {
        "id": 5,
        "iid": 5,
        "title": "stale completion",
        "state": "closed",
        "created_at": "2025-04-01T09:00:00Z",
        "completed_at": "2025-03-01T09:00:00Z",
        "point": 1.0,
        "quarter": "FY25Q1"
    },
    {
        "id": 6,
        "iid": 6,
        "title": "done without due date",
        "state": "closed",
        "created_at": "2025-04-08T09:00:00Z",
        "completed_at": "2025-06-01T09:00:00Z",
        "point": 8.0,
        "kanban_status": "共有待ち",
        "quarter": "FY25Q1"
    }
]"##;

/// Writes `content` as `issues.json` inside a fresh temp dir.
pub fn write_issues(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("issues.json");
    std::fs::write(&path, content).unwrap();
    (temp, path)
}
