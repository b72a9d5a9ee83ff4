use chrono::NaiveDateTime;
use colored::Colorize;

use crate::commands::Command;
use crate::core::{EARLIEST, LATEST};

/// Format a parsed command as a single human-readable line.
///
/// Indices render 1-based, matching what the user typed. A list over
/// the full representable range renders as "all tasks" instead of the
/// sentinel timestamps.
#[must_use]
pub fn format_command_pretty(command: &Command) -> String {
    match command {
        Command::AddTodo { description } => {
            format!("{} {}", "todo".green().bold(), description)
        }
        Command::AddDeadline {
            description,
            due_at,
        } => format!(
            "{} {}  {} {}",
            "deadline".green().bold(),
            description,
            "by".dimmed(),
            format_timestamp(*due_at).yellow()
        ),
        Command::AddEvent {
            description,
            starts_at,
            ends_at,
        } => format!(
            "{} {}  {} {}  {} {}",
            "event".green().bold(),
            description,
            "from".dimmed(),
            format_timestamp(*starts_at).yellow(),
            "to".dimmed(),
            format_timestamp(*ends_at).yellow()
        ),
        Command::ListTasks { from, to } if *from == EARLIEST && *to == LATEST => {
            format!("{} all tasks", "list".blue().bold())
        }
        Command::ListTasks { from, to } => format!(
            "{} {} {}  {} {}",
            "list".blue().bold(),
            "from".dimmed(),
            format_timestamp(*from).yellow(),
            "to".dimmed(),
            format_timestamp(*to).yellow()
        ),
        Command::MarkTask { index } => {
            format!("{} task {}", "mark".cyan().bold(), index + 1)
        }
        Command::UnmarkTask { index } => {
            format!("{} task {}", "unmark".cyan().bold(), index + 1)
        }
        Command::DeleteTask { index } => {
            format!("{} task {}", "delete".red().bold(), index + 1)
        }
        Command::Exit => "bye".dimmed().to_string(),
        Command::Invalid { message } => {
            format!("{} {}", "invalid:".red().bold(), message)
        }
    }
}

fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}
