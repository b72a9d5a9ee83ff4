//! Core value parsing shared across command parsers.

mod datetime;

pub use datetime::{parse_datetime, DateTimeError, EARLIEST, LATEST};
