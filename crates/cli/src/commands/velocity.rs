// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use crate::chart::{weekly_velocity, VelocityBucket};
use crate::cli::{InputArgs, OutputFormat};
use crate::config::Config;
use crate::display::format_velocity;
use crate::error::Result;
use crate::input::load_issues;

/// JSON output structure for the velocity command.
#[derive(Serialize)]
struct VelocityOutputJson<'a> {
    weeks: usize,
    buckets: &'a [VelocityBucket],
}

pub fn run(
    input: InputArgs,
    weeks: usize,
    format: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    let issues = load_issues(&input.input)?;
    let buckets = weekly_velocity(&issues, weeks);

    match config.output_format(format) {
        OutputFormat::Text => println!("{}", format_velocity(&buckets)),
        OutputFormat::Json => {
            let output = VelocityOutputJson {
                weeks,
                buckets: &buckets,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "velocity_tests.rs"]
mod tests;
