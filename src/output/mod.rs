//! Output formatting for subnet results.
//!
//! This module handles rendering results for the caller:
//! - [`json`] - JSON objects, one per result
//! - [`terminal`] - Human readable blocks with colors
//! - [`csv`] - CSV rows, a header and one row per result

mod csv;
mod json;
mod terminal;

pub use csv::{batch_csv_rows, print_batch_csv, print_csv, result_csv_rows};
pub use json::{outcome_to_json, print_batch_json, print_json, to_json};
pub use terminal::{format_field, print_batch_terminal, print_terminal, render};
