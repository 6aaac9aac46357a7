// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bc_core::Period;

use crate::cli::{InputArgs, NarrowArgs, OutputFormat, PeriodArgs};
use crate::config::Config;
use crate::display::{format_exclusion_line, format_issue_line};
use crate::error::Result;

pub fn run(
    input: InputArgs,
    period: PeriodArgs,
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

    match config.output_format(format) {
        OutputFormat::Text => {
            println!("Scoped issues ({}):", result.filtered.len());
            for issue in &result.filtered {
                println!("{}", format_issue_line(issue));
            }
            println!();
            println!("Excluded ({}):", result.excluded.len());
            for record in &result.excluded {
                println!("{}", format_exclusion_line(record));
            }
            if !result.warnings.is_empty() {
                println!();
                println!("Warnings ({}):", result.warnings.len());
                for record in &result.warnings {
                    println!("{}", format_exclusion_line(record));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
