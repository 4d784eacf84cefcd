//! What the `qtc` binary writes, and how it exits, for an evaluation.
//!
//! A rejected input only ever produces the error list: on stderr for the
//! human formats, as `{"errors": [...]}` on stdout for JSON.

use anyhow::{Context, Result};

use qtc_model::Assessment;
use qtc_validate::ValidationFailure;

use crate::render::{render_failure, render_failure_json, render_text};
use crate::summary::assessment_tables;

/// Exit status for a completed assessment.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when the inputs are rejected.
pub const EXIT_INVALID_INPUTS: i32 = 1;

/// Report format for an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Text,
    Json,
}

/// Rendered process output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

pub fn exit_code(outcome: &Result<Assessment, ValidationFailure>) -> i32 {
    match outcome {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_INVALID_INPUTS,
    }
}

/// Render an evaluation outcome in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn command_output(
    outcome: &Result<Assessment, ValidationFailure>,
    format: OutputFormat,
) -> Result<CommandOutput> {
    let mut output = CommandOutput {
        exit_code: exit_code(outcome),
        ..CommandOutput::default()
    };
    match (outcome, format) {
        (Ok(assessment), OutputFormat::Table) => output.stdout = assessment_tables(assessment),
        (Ok(assessment), OutputFormat::Text) => output.stdout = render_text(assessment),
        (Ok(assessment), OutputFormat::Json) => {
            output.stdout = to_json_line(assessment).context("serialize assessment")?;
        }
        (Err(failure), OutputFormat::Json) => {
            output.stdout =
                to_json_line(&render_failure_json(failure)).context("serialize errors")?;
        }
        (Err(failure), OutputFormat::Table | OutputFormat::Text) => {
            output.stderr = render_failure(failure);
        }
    }
    Ok(output)
}

fn to_json_line<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
