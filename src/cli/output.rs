//! CLI output: error presentation and response formatting.

use crate::error::CommandError;
use serde_json::Value;

/// User-facing rendering of a terminal error.
pub fn map_error(error: &CommandError) -> String {
    format!("Error: {}", error)
}

/// Reject an unknown output format as a usage error. Checked up front,
/// before any command work, so commands that print nothing still report
/// the bad flag.
pub fn validate_output_format(format: &str) -> Result<(), CommandError> {
    match format {
        "json" | "text" => Ok(()),
        other => Err(CommandError::Usage(format!(
            "Invalid output format: '{}'. Must be 'json' or 'text'.",
            other
        ))),
    }
}

/// Render a command's response payload for the terminal.
///
/// `json` pretty-prints; `text` prints bare strings without quotes and
/// falls back to pretty JSON for structured payloads.
pub fn format_output(value: &Value, format: &str) -> Result<String, CommandError> {
    validate_output_format(format)?;
    match (format, value) {
        ("text", Value::String(s)) => Ok(s.clone()),
        _ => serde_json::to_string_pretty(value)
            .map_err(|e| CommandError::Transport(format!("Failed to serialize output: {}", e))),
    }
}
