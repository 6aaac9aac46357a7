// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use serde::Serialize;

use bc_core::{overlapping_quarters, Period, QuarterLabel};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_quarters;
use crate::error::{Error, Result};

/// JSON output for the period form.
#[derive(Serialize)]
struct QuartersOutputJson {
    quarters: Vec<String>,
}

/// JSON output for the `--range` form.
#[derive(Serialize)]
struct QuarterRangeJson {
    label: String,
    start: NaiveDate,
    end: NaiveDate,
}

pub fn run(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    range: Option<String>,
    format: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    if let Some(label) = range {
        // The one fallible mapping in the engine: a malformed label is a
        // configuration error, reported here at the boundary.
        let quarter: QuarterLabel = label.parse()?;
        let (start, end) = quarter.date_range();
        match config.output_format(format) {
            OutputFormat::Text => println!("{}: {} to {}", quarter, start, end),
            OutputFormat::Json => {
                let output = QuarterRangeJson {
                    label: quarter.to_string(),
                    start,
                    end,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        return Ok(());
    }

    let (from, to) = match (from, to) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(Error::PeriodRequired),
    };
    let period = Period::new(from, to)?;
    let quarters = overlapping_quarters(&period);

    match config.output_format(format) {
        OutputFormat::Text => println!("{}", format_quarters(&quarters)),
        OutputFormat::Json => {
            let output = QuartersOutputJson {
                quarters: quarters.iter().map(|q| q.to_string()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "quarters_tests.rs"]
mod tests;
