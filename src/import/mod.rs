//! Deck import module
//!
//! Turns the text of a two-column CSV file into validated question/answer
//! pairs. Supports:
//! - Comma-delimited records with double-quoted fields
//! - Backslash escapes inside quoted fields
//! - Extra columns (ignored) and blank lines (skipped)

mod parser;

pub use parser::*;
