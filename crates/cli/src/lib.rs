// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bcrs - Quarter-scoped burn chart reporting for tracker issues.
//!
//! This crate provides the command-line surface over [`bc_core`]: it loads
//! exported issue lists from JSON, runs the scope-correction pipeline for a
//! reporting period, and assembles burn-down/burn-up chart rows, velocity
//! buckets, and fiscal-quarter lookups.
//!
//! # Main Components
//!
//! - [`chart`] - actual-progress aggregation merged with ideal baselines
//! - [`config`] - optional `burnchart.toml` defaults
//! - [`filters`] - caller-side narrowing before the pipeline runs
//! - [`input`] - issue-list loading from tracker JSON exports
//! - [`Error`] - error types for all operations

mod cli;
mod commands;
mod completions;
mod display;
mod schema;

pub mod chart;
pub mod config;
pub mod error;
pub mod filters;
pub mod input;

pub use cli::{ChartMode, Cli, Command, InputArgs, NarrowArgs, OutputFormat, PeriodArgs, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

/// Initializes the tracing subscriber for CLI runs.
///
/// Logs go to stderr so stdout stays parseable; the default level is
/// `warn`, overridable through `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute a CLI invocation. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    match cli.command {
        Command::Report {
            input,
            period,
            mode,
            narrow,
            include_missing_due_date,
            format,
        } => commands::report::run(
            input,
            period,
            mode,
            narrow,
            include_missing_due_date,
            format,
            &config,
        ),
        Command::Scope {
            input,
            period,
            narrow,
            include_missing_due_date,
            format,
        } => commands::scope::run(
            input,
            period,
            narrow,
            include_missing_due_date,
            format,
            &config,
        ),
        Command::Quarters {
            from,
            to,
            range,
            format,
        } => commands::quarters::run(from, to, range, format, &config),
        Command::Velocity {
            input,
            weeks,
            format,
        } => commands::velocity::run(input, weeks, format, &config),
        Command::Schema { command } => commands::schema::run(command),
        Command::Completion { shell } => completions::run(shell),
    }
}
