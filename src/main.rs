use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taskpad::cli::args::{Cli, OutputFormat};
use taskpad::output::{json, pretty};
use taskpad::parse_command;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let line = cli.line.join(" ");

    let command = parse_command(&line);
    let rendered = match cli.output {
        OutputFormat::Pretty => pretty::format_command_pretty(&command),
        OutputFormat::Json => json::format_command_json(&command)?,
    };
    println!("{rendered}");

    if command.is_invalid() {
        std::process::exit(1);
    }
    Ok(())
}
