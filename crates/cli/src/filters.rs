// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-side issue narrowing.
//!
//! Classification filters applied before the scope pipeline runs: the
//! pipeline decides what belongs to the period, these flags decide which
//! slice of the backlog the caller is asking about in the first place.

use bc_core::{Issue, State};

use crate::cli::NarrowArgs;
use crate::error::Result;

/// Classification filter over issue lists. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub milestone: Option<String>,
    pub assignee: Option<String>,
    pub service: Option<String>,
    pub state: Option<State>,
}

impl IssueFilter {
    /// Builds a filter from command-line flags, validating the state value.
    pub fn from_args(args: &NarrowArgs) -> Result<Self> {
        let state = match args.state.as_deref() {
            Some(s) => Some(s.parse::<State>()?),
            None => None,
        };
        Ok(IssueFilter {
            milestone: args.milestone.clone(),
            assignee: args.assignee.clone(),
            service: args.service.clone(),
            state,
        })
    }

    /// Returns true if `issue` passes every set criterion.
    pub fn matches(&self, issue: &Issue) -> bool {
        let field_matches =
            |want: &Option<String>, have: &Option<String>| match (want, have) {
                (None, _) => true,
                (Some(w), Some(h)) => w == h,
                (Some(_), None) => false,
            };
        field_matches(&self.milestone, &issue.milestone)
            && field_matches(&self.assignee, &issue.assignee)
            && field_matches(&self.service, &issue.service)
            && self.state.map_or(true, |s| issue.state == s)
    }

    /// Keeps only matching issues, preserving order.
    pub fn apply(&self, issues: Vec<Issue>) -> Vec<Issue> {
        let before = issues.len();
        let kept: Vec<Issue> = issues.into_iter().filter(|i| self.matches(i)).collect();
        if kept.len() != before {
            tracing::debug!(before, after = kept.len(), "narrowed issue list");
        }
        kept
    }
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
