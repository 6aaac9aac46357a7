// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod quarters;
pub mod report;
pub mod schema;
pub mod scope;
pub mod velocity;

use std::path::Path;

use bc_core::{apply_scope_filters, Period, ScopeFilterResult};

use crate::cli::NarrowArgs;
use crate::config::Config;
use crate::error::Result;
use crate::filters::IssueFilter;
use crate::input;

/// Shared front half of the reporting commands: load the issue file,
/// apply caller-side narrowing, then run the scope pipeline.
pub(crate) fn scoped_issues(
    input_path: &Path,
    period: &Period,
    narrow: &NarrowArgs,
    include_missing_due_date: bool,
    config: &Config,
) -> Result<ScopeFilterResult> {
    let issues = input::load_issues(input_path)?;
    let filter = IssueFilter::from_args(narrow)?;
    let issues = filter.apply(issues);
    let options = config.scope_options(include_missing_due_date);
    let result = apply_scope_filters(issues, period, &options);
    tracing::debug!(
        filtered = result.filtered.len(),
        excluded = result.excluded.len(),
        warnings = result.warnings.len(),
        "scope pipeline complete"
    );
    Ok(result)
}
