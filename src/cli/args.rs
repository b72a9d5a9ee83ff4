use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Parse a task-tracking command line into a structured command")]
#[command(long_about = "taskpad - command parser for a personal task tracker

Reads one command line from its arguments, parses it, and prints the
structured result. The task list itself lives with the executor; this
binary only shows what the parser produced.

COMMANDS:
  todo <description>
  deadline <description> /by <date>
  event <description> /from <start> /to <end>
  list [/from <start> /to <end>]
  mark <n> | unmark <n> | delete <n>
  bye

DATE FORMATS:
  2024-03-01, 2024-03-01 1800, 2024-03-01 18:00, 01/03/2024

EXAMPLES:
  taskpad todo read a book
  taskpad deadline submit report /by 2024-03-01 1800
  taskpad --output json list /from 2024-01-01 /to 2024-02-01

Unparseable input prints the invalid-command message and exits 1.")]
#[command(version)]
pub struct Cli {
    /// Output format for the parsed command
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,

    /// The command line to parse, e.g. `todo read a book`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub line: Vec<String>,
}

/// Output format for the parsed command.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
