//! taskpad - command parsing for a personal task-tracking CLI
//!
//! This crate turns free-text input lines like `deadline submit report
//! /by 2024-03-01 1800` into typed [`Command`] values that an executor
//! can match on. Parsing never fails past the boundary: unparseable
//! input becomes [`Command::Invalid`] with a user-facing message.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;

pub use commands::Command;
pub use error::ParseError;
pub use parser::parse_command;
