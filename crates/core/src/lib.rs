// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bc-core: Scope correction and chart baselines for the burnchart CLI
//!
//! This crate is the deterministic heart of burnchart: given a fetched
//! issue list and a reporting period it decides what belongs in the
//! report, repairs known upstream data defects, maps periods onto fiscal
//! quarters, and projects calendar-aware ideal progress lines. Everything
//! here is synchronous, pure, and free of I/O; fetching, rendering, and
//! persistence live with the callers.

pub mod calendar;
pub mod error;
pub mod ideal;
pub mod issue;
pub mod period;
pub mod quarter;
pub mod scope;

pub use calendar::{business_days_between, is_business_day};
pub use error::{Error, Result};
pub use ideal::{ideal_burn_down, ideal_burn_up};
pub use issue::{Issue, KanbanStatus, State};
pub use period::Period;
pub use quarter::{normalize_label, overlapping_quarters, QuarterLabel};
pub use scope::{
    apply_scope_filters, ExclusionReason, ExclusionRecord, ScopeFilterResult, ScopeOptions,
};
