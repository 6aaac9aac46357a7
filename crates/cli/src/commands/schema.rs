// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON
//! output.

use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{report, scope, velocity};

/// Run the schema command.
pub fn run(command: SchemaCommand) -> Result<()> {
    let schema = match command {
        SchemaCommand::Report => schema_for!(report::ReportOutputJson),
        SchemaCommand::Scope => schema_for!(scope::ScopeOutputJson),
        SchemaCommand::Velocity => schema_for!(velocity::VelocityOutputJson),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
