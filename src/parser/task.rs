//! Per-command argument parsers.
//!
//! Each parser validates one command kind's fixed argument pattern and
//! extracts its fields. Descriptions capture lazily up to the first
//! occurrence of the next flag (`/by`, `/from`, `/to`); the final field
//! of a pattern captures greedily to the end of the line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::commands::Command;
use crate::core::parse_datetime;
use crate::error::ParseError;

/// Usage string for the `todo` command.
pub const TODO_USAGE: &str = "todo <description>";

/// Usage string for the `deadline` command.
pub const DEADLINE_USAGE: &str = "deadline <description> /by <date>";

/// Usage string for the `event` command.
pub const EVENT_USAGE: &str = "event <description> /from <start> /to <end>";

// Compiled argument patterns, one per command kind.
static LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/from (?P<from>.*?) /to (?P<to>.*)$")
        .unwrap_or_else(|e| panic!("Invalid list regex: {e}"))
});

static DEADLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<description>.*?) /by (?P<by>.*)$")
        .unwrap_or_else(|e| panic!("Invalid deadline regex: {e}"))
});

static EVENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<description>.*?) /from (?P<from>.*?) /to (?P<to>.*)$")
        .unwrap_or_else(|e| panic!("Invalid event regex: {e}"))
});

static INDEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<index>\d+)$").unwrap_or_else(|e| panic!("Invalid index regex: {e}"))
});

/// Parse the arguments of a `list` command.
///
/// The `/from <start> /to <end>` range is optional; without it the
/// command covers all representable time.
///
/// # Errors
///
/// Returns an error when a range bound fails date/time parsing or when
/// `from` is after `to`.
pub fn parse_list(arguments: &str) -> Result<Command, ParseError> {
    let Some(caps) = LIST_PATTERN.captures(arguments) else {
        return Ok(Command::list_all());
    };

    let from = parse_datetime(&caps["from"])?;
    let to = parse_datetime(&caps["to"])?;

    if from > to {
        return Err(ParseError::InvalidDateRange);
    }

    Ok(Command::ListTasks { from, to })
}

/// Parse the arguments of a `todo` command.
///
/// # Errors
///
/// Returns an error when the description is empty.
pub fn parse_todo(arguments: &str) -> Result<Command, ParseError> {
    if arguments.is_empty() {
        return Err(ParseError::MalformedArguments { usage: TODO_USAGE });
    }

    Ok(Command::AddTodo {
        description: arguments.to_string(),
    })
}

/// Parse the arguments of a `deadline` command.
///
/// # Errors
///
/// Returns an error when the `/by` flag is missing, the description is
/// empty, or the date token fails date/time parsing.
pub fn parse_deadline(arguments: &str) -> Result<Command, ParseError> {
    let malformed = ParseError::MalformedArguments {
        usage: DEADLINE_USAGE,
    };

    let Some(caps) = DEADLINE_PATTERN.captures(arguments) else {
        return Err(malformed);
    };

    let description = &caps["description"];
    if description.is_empty() {
        return Err(malformed);
    }

    let due_at = parse_datetime(&caps["by"])?;
    Ok(Command::AddDeadline {
        description: description.to_string(),
        due_at,
    })
}

/// Parse the arguments of an `event` command.
///
/// The start/end order is deliberately not validated; only `list`
/// enforces range ordering.
///
/// # Errors
///
/// Returns an error when a flag is missing, the description is empty,
/// or either date token fails date/time parsing.
pub fn parse_event(arguments: &str) -> Result<Command, ParseError> {
    let malformed = ParseError::MalformedArguments { usage: EVENT_USAGE };

    let Some(caps) = EVENT_PATTERN.captures(arguments) else {
        return Err(malformed);
    };

    let description = &caps["description"];
    if description.is_empty() {
        return Err(malformed);
    }

    let starts_at = parse_datetime(&caps["from"])?;
    let ends_at = parse_datetime(&caps["to"])?;
    Ok(Command::AddEvent {
        description: description.to_string(),
        starts_at,
        ends_at,
    })
}

/// Parse the arguments of a `mark` or `unmark` command.
///
/// # Errors
///
/// Returns an error when the argument is not a 1-based positive integer.
pub fn parse_mark(arguments: &str, mark_as_done: bool) -> Result<Command, ParseError> {
    let index = parse_index(arguments).ok_or(ParseError::InvalidIndex)?;

    Ok(if mark_as_done {
        Command::MarkTask { index }
    } else {
        Command::UnmarkTask { index }
    })
}

/// Parse the arguments of a `delete` command.
///
/// # Errors
///
/// Returns an error when the argument is not a 1-based positive integer.
pub fn parse_delete(arguments: &str) -> Result<Command, ParseError> {
    let index = parse_index(arguments).ok_or(ParseError::InvalidIndex)?;
    Ok(Command::DeleteTask { index })
}

/// Convert a user-supplied 1-based position into a zero-based index.
///
/// `checked_sub` makes `0`, non-digit input, and overflow all invalid.
fn parse_index(input: &str) -> Option<usize> {
    let caps = INDEX_PATTERN.captures(input.trim())?;
    let position: usize = caps["index"].parse().ok()?;
    position.checked_sub(1)
}
