//! Command values produced by the parser.
//!
//! A [`Command`] is the structured result of parsing one input line.
//! The executor matches exhaustively on the variant; `Invalid` carries
//! the message to show the user instead of executable data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{EARLIEST, LATEST};

/// The parsed form of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// Add a plain todo with no schedule.
    AddTodo {
        description: String,
    },
    /// Add a task due at a specific point in time.
    AddDeadline {
        description: String,
        due_at: NaiveDateTime,
    },
    /// Add an event spanning a start and end time.
    AddEvent {
        description: String,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
    },
    /// List tasks falling within the given range.
    ListTasks {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    /// Mark the task at the zero-based index as done.
    MarkTask {
        index: usize,
    },
    /// Mark the task at the zero-based index as not done.
    UnmarkTask {
        index: usize,
    },
    /// Delete the task at the zero-based index.
    DeleteTask {
        index: usize,
    },
    /// Exit the application.
    Exit,
    /// Input that could not be parsed, with a user-facing message.
    Invalid {
        message: String,
    },
}

impl Command {
    /// Create an `Invalid` command carrying the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// A list command covering all representable time.
    #[must_use]
    pub const fn list_all() -> Self {
        Self::ListTasks {
            from: EARLIEST,
            to: LATEST,
        }
    }

    /// Whether this command is the invalid sentinel.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_constructor() {
        let command = Command::invalid("bad input");
        assert!(command.is_invalid());
        assert_eq!(
            command,
            Command::Invalid {
                message: "bad input".to_string()
            }
        );
    }

    #[test]
    fn test_list_all_covers_full_range() {
        let Command::ListTasks { from, to } = Command::list_all() else {
            panic!("list_all must produce ListTasks");
        };
        assert_eq!(from, EARLIEST);
        assert_eq!(to, LATEST);
        assert!(from <= to);
    }

    #[test]
    fn test_valid_commands_are_not_invalid() {
        assert!(!Command::Exit.is_invalid());
        assert!(!Command::list_all().is_invalid());
        assert!(!Command::MarkTask { index: 0 }.is_invalid());
    }

    #[test]
    fn test_json_tagging() {
        let json = serde_json::to_value(Command::MarkTask { index: 2 }).unwrap();
        assert_eq!(json["kind"], "mark_task");
        assert_eq!(json["index"], 2);
    }

    #[test]
    fn test_deadline_round_trips_through_serde() {
        let command = Command::AddDeadline {
            description: "submit report".to_string(),
            due_at: chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
        };
        let json = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
    }
}
