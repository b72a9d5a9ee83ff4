//! Command-line interface for the parser inspection binary.

pub mod args;
