//! Rendering of parsed commands for the inspection binary.

pub mod json;
pub mod pretty;
