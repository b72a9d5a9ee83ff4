//! Parsing of raw input lines into [`Command`](crate::Command) values.
//!
//! The dispatcher splits the command keyword from its arguments and
//! routes to one per-keyword argument parser:
//! - `todo read a book`
//! - `deadline submit report /by 2024-03-01 1800`
//! - `event standup /from 2024-03-01 0900 /to 2024-03-01 0915`
//! - `list [/from <start> /to <end>]`
//! - `mark 3` / `unmark 3` / `delete 3`
//! - `bye`

mod dispatch;
mod task;

pub use dispatch::parse_command;
pub use task::{DEADLINE_USAGE, EVENT_USAGE, TODO_USAGE};
