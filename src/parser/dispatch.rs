//! The command dispatcher.
//!
//! Splits one raw input line into a command keyword and a trailing
//! argument string, then delegates to the matching argument parser.
//! Every failure a delegate reports is folded into
//! [`Command::Invalid`] here; no error crosses this boundary.

use once_cell::sync::Lazy;
use regex::Regex;

use super::task;
use crate::commands::Command;
use crate::error::ParseError;

// A command is a keyword followed by an optional arguments string.
static COMMAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<command>\S+)(?P<arguments>.*)$")
        .unwrap_or_else(|e| panic!("Invalid command regex: {e}"))
});

/// Parse one raw input line into a [`Command`].
///
/// Pure function of its input: keyword matching is exact and
/// case-sensitive, and all recognized failures come back as
/// [`Command::Invalid`] with a user-facing message.
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let Some(caps) = COMMAND_PATTERN.captures(input.trim()) else {
        return Command::invalid(ParseError::UnrecognizedCommand.to_string());
    };

    let keyword = &caps["command"];
    let arguments = caps["arguments"].trim();

    let parsed = match keyword {
        "list" => task::parse_list(arguments),
        "todo" => task::parse_todo(arguments),
        "deadline" => task::parse_deadline(arguments),
        "event" => task::parse_event(arguments),
        "mark" => task::parse_mark(arguments, true),
        "unmark" => task::parse_mark(arguments, false),
        "delete" => task::parse_delete(arguments),
        "bye" => Ok(Command::Exit),
        _ => Err(ParseError::UnrecognizedCommand),
    };

    parsed.unwrap_or_else(|error| Command::invalid(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::core::{EARLIEST, LATEST};

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    // ==================
    // Dispatch Tests
    // ==================

    #[test]
    fn test_empty_input_is_unrecognized() {
        assert_eq!(
            parse_command(""),
            Command::invalid("unrecognized command")
        );
        assert_eq!(
            parse_command("   "),
            Command::invalid("unrecognized command")
        );
    }

    #[test]
    fn test_unknown_keyword_is_unrecognized() {
        assert_eq!(
            parse_command("frobnicate the widget"),
            Command::invalid("unrecognized command")
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            parse_command("List"),
            Command::invalid("unrecognized command")
        );
        assert_eq!(
            parse_command("TODO read"),
            Command::invalid("unrecognized command")
        );
        assert_eq!(
            parse_command("BYE"),
            Command::invalid("unrecognized command")
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(
            parse_command("   todo   read a book   "),
            Command::AddTodo {
                description: "read a book".to_string()
            }
        );
    }

    #[test]
    fn test_bye_exits() {
        assert_eq!(parse_command("bye"), Command::Exit);
    }

    #[test]
    fn test_deterministic_for_equal_input() {
        let line = "deadline submit report /by 2024-03-01 1800";
        assert_eq!(parse_command(line), parse_command(line));
    }

    // ==================
    // Todo Tests
    // ==================

    #[test]
    fn test_todo_takes_whole_argument_string() {
        assert_eq!(
            parse_command("todo read a book"),
            Command::AddTodo {
                description: "read a book".to_string()
            }
        );
    }

    #[test]
    fn test_todo_without_description_shows_usage() {
        assert_eq!(
            parse_command("todo"),
            Command::invalid("invalid task\nusage: todo <description>")
        );
    }

    // ==================
    // Deadline Tests
    // ==================

    #[test]
    fn test_deadline_with_date_and_time() {
        assert_eq!(
            parse_command("deadline Submit report /by 2024-03-01 1800"),
            Command::AddDeadline {
                description: "Submit report".to_string(),
                due_at: at(2024, 3, 1, 18, 0),
            }
        );
    }

    #[test]
    fn test_deadline_missing_by_flag_shows_usage() {
        assert_eq!(
            parse_command("deadline Submit report"),
            Command::invalid("invalid task\nusage: deadline <description> /by <date>")
        );
    }

    #[test]
    fn test_deadline_with_bad_date_surfaces_parser_message() {
        let Command::Invalid { message } = parse_command("deadline x /by whenever") else {
            panic!("expected invalid command");
        };
        assert!(message.contains("whenever"));
    }

    // ==================
    // Event Tests
    // ==================

    #[test]
    fn test_event_with_range() {
        assert_eq!(
            parse_command("event Standup /from 2024-03-01 0900 /to 2024-03-01 0915"),
            Command::AddEvent {
                description: "Standup".to_string(),
                starts_at: at(2024, 3, 1, 9, 0),
                ends_at: at(2024, 3, 1, 9, 15),
            }
        );
    }

    #[test]
    fn test_event_does_not_check_range_order() {
        // Unlike list, an event with start after end still parses.
        assert_eq!(
            parse_command("event Trip /from 2024-05-01 /to 2024-04-01"),
            Command::AddEvent {
                description: "Trip".to_string(),
                starts_at: at(2024, 5, 1, 0, 0),
                ends_at: at(2024, 4, 1, 0, 0),
            }
        );
    }

    // ==================
    // List Tests
    // ==================

    #[test]
    fn test_list_without_range_covers_all_time() {
        assert_eq!(
            parse_command("list"),
            Command::ListTasks {
                from: EARLIEST,
                to: LATEST,
            }
        );
    }

    #[test]
    fn test_list_with_range() {
        assert_eq!(
            parse_command("list /from 2024-01-01 /to 2024-02-01"),
            Command::ListTasks {
                from: at(2024, 1, 1, 0, 0),
                to: at(2024, 2, 1, 0, 0),
            }
        );
    }

    #[test]
    fn test_list_rejects_from_after_to() {
        assert_eq!(
            parse_command("list /from 2024-01-01 /to 2023-01-01"),
            Command::invalid("invalid date range: from must not be after to")
        );
    }

    // ==================
    // Index Tests
    // ==================

    #[test]
    fn test_mark_converts_to_zero_based() {
        assert_eq!(parse_command("mark 3"), Command::MarkTask { index: 2 });
        assert_eq!(parse_command("unmark 1"), Command::UnmarkTask { index: 0 });
        assert_eq!(parse_command("delete 10"), Command::DeleteTask { index: 9 });
    }

    #[test]
    fn test_invalid_indices_are_rejected() {
        let expected = Command::invalid("invalid task index: expected a positive number");
        assert_eq!(parse_command("mark 0"), expected);
        assert_eq!(parse_command("mark abc"), expected);
        assert_eq!(parse_command("delete -1"), expected);
        assert_eq!(parse_command("unmark 1 2"), expected);
    }
}
