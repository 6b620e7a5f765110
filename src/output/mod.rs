//! Report formatting
//!
//! - `TreeFormatter`: box-drawing console/text rendering with the total line
//! - `print_json`: machine-readable report for downstream tooling

mod config;
mod json;
mod tree;

// Re-export public types
pub use config::OutputConfig;
pub use json::print_json;
pub use tree::{TreeFormatter, format_kb};
