//! JSON output formatting.

use crate::commands::Command;

/// Format a parsed command as pretty-printed, tag-discriminated JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_command_json(command: &Command) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(command)
}
