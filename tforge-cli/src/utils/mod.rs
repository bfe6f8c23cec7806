//! # Utilities
//!
//! Terminal output helpers and parsing of comma-separated arguments.

pub mod output;
pub mod parse;
