// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use serde::Serialize;

use bc_core::Period;

use crate::chart::{burn_down_rows, burn_up_rows, ChartPoint};
use crate::cli::{ChartMode, InputArgs, NarrowArgs, OutputFormat, PeriodArgs};
use crate::config::Config;
use crate::display::format_chart_rows;
use crate::error::Result;

/// JSON output structure for the report command.
#[derive(Serialize)]
struct ReportOutputJson<'a> {
    mode: &'static str,
    period: PeriodJson,
    rows: &'a [ChartPoint],
}

#[derive(Serialize)]
struct PeriodJson {
    start: NaiveDate,
    end: NaiveDate,
}

impl ChartMode {
    fn as_str(self) -> &'static str {
        match self {
            ChartMode::BurnDown => "burn-down",
            ChartMode::BurnUp => "burn-up",
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: InputArgs,
    period: PeriodArgs,
    mode: ChartMode,
    narrow: NarrowArgs,
    include_missing_due_date: bool,
    format: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    let period = Period::new(period.from, period.to)?;
    let result = super::scoped_issues(
        &input.input,
        &period,
        &narrow,
        include_missing_due_date,
        config,
    )?;

    let rows = match mode {
        ChartMode::BurnDown => burn_down_rows(&result.filtered, &period),
        ChartMode::BurnUp => burn_up_rows(&result.filtered, &period),
    };

    match config.output_format(format) {
        OutputFormat::Text => {
            println!("{}", format_chart_rows(&rows));
            if !result.excluded.is_empty() {
                eprintln!(
                    "note: {} issue(s) excluded from scope; run 'burnchart scope' for details",
                    result.excluded.len()
                );
            }
            if !result.warnings.is_empty() {
                eprintln!(
                    "warning: {} issue(s) kept despite a missing due date",
                    result.warnings.len()
                );
            }
        }
        OutputFormat::Json => {
            let output = ReportOutputJson {
                mode: mode.as_str(),
                period: PeriodJson {
                    start: period.start(),
                    end: period.end(),
                },
                rows: &rows,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
