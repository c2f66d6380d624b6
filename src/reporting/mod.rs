// src/reporting/mod.rs
pub mod console;
pub mod json;
mod shared;

pub use console::print_report;
pub use json::{format_json, table_from_json, table_to_json};
