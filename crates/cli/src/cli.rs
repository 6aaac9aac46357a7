// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which baseline a report projects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ChartMode {
    /// Remaining points against the remaining-work baseline.
    #[default]
    BurnDown,
    /// Completed points against the completed-work baseline.
    BurnUp,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Reporting:
  report      Burn-down/burn-up chart rows for a period
  scope       Scoped issue set with exclusions and warnings
  velocity    Weekly completed-points buckets
  quarters    Fiscal quarters overlapping a period

Tooling:
  schema      JSON Schema for the JSON outputs
  completion  Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  burnchart quarters --from 2025-04-01 --to 2025-06-30
  burnchart scope -i issues.json --from 2025-04-01 --to 2025-06-30
  burnchart report -i issues.json --from 2025-04-01 --to 2025-06-30 --format json";

#[derive(Parser)]
#[command(name = "burnchart")]
#[command(version)]
#[command(about = "Quarter-scoped burn chart reporting for tracker issues")]
#[command(
    long_about = "Quarter-scoped burn chart reporting for tracker issues.\n\n\
    Reads an exported issue list, corrects its scope for a reporting period,\n\
    and produces calendar-aware burn-down/burn-up chart data."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Path to a config file (default: ./burnchart.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Issue-list input shared by the reporting commands.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON file containing the exported issue array
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,
}

/// Reporting period shared by the reporting commands.
#[derive(Args, Debug)]
pub struct PeriodArgs {
    /// Period start date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub from: NaiveDate,

    /// Period end date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub to: NaiveDate,
}

/// Optional narrowing applied before the scope pipeline runs.
#[derive(Args, Debug, Default)]
pub struct NarrowArgs {
    /// Only issues in this milestone
    #[arg(long)]
    pub milestone: Option<String>,

    /// Only issues assigned to this person
    #[arg(long)]
    pub assignee: Option<String>,

    /// Only issues for this service
    #[arg(long)]
    pub service: Option<String>,

    /// Only issues in this tracker state (opened, closed)
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Produce burn-down/burn-up chart rows for a period
    #[command(after_help = "Examples:\n  \
        burnchart report -i issues.json --from 2025-04-01 --to 2025-06-30\n  \
        burnchart report -i issues.json --from 2025-04-01 --to 2025-06-30 --mode burn-up\n  \
        burnchart report -i issues.json --from 2025-04-01 --to 2025-06-30 --milestone v2")]
    Report {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        period: PeriodArgs,

        /// Chart baseline to project
        #[arg(long, value_enum, default_value_t)]
        mode: ChartMode,

        #[command(flatten)]
        narrow: NarrowArgs,

        /// Keep done/awaiting-handoff issues that lack a due date
        #[arg(long)]
        include_missing_due_date: bool,

        /// Output format
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the scoped issue set with exclusions and warnings
    Scope {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        period: PeriodArgs,

        #[command(flatten)]
        narrow: NarrowArgs,

        /// Keep done/awaiting-handoff issues that lack a due date
        #[arg(long)]
        include_missing_due_date: bool,

        /// Output format
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the fiscal quarters a period overlaps, or expand one label
    #[command(after_help = "Examples:\n  \
        burnchart quarters --from 2025-06-30 --to 2025-07-01\n  \
        burnchart quarters --range FY25Q2")]
    Quarters {
        /// Period start date (YYYY-MM-DD, inclusive)
        #[arg(long, value_name = "DATE", conflicts_with = "range")]
        from: Option<NaiveDate>,

        /// Period end date (YYYY-MM-DD, inclusive)
        #[arg(long, value_name = "DATE", conflicts_with = "range")]
        to: Option<NaiveDate>,

        /// Expand a quarter label into its date range instead
        #[arg(long, value_name = "LABEL")]
        range: Option<String>,

        /// Output format
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Weekly completed-points velocity buckets
    Velocity {
        #[command(flatten)]
        input: InputArgs,

        /// Number of most recent weeks to include
        #[arg(long, default_value_t = 12)]
        weeks: usize,

        /// Output format
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Output JSON Schema for the JSON outputs
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Which JSON output to describe.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Schema for `report --format json`
    Report,
    /// Schema for `scope --format json`
    Scope,
    /// Schema for `velocity --format json`
    Velocity,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
