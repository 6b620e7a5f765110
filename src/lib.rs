//! Sapling - A tree command for file systems that exist only as a script

pub mod attrs;
pub mod command;
pub mod error;
pub mod output;
pub mod stats;
pub mod tree;

pub use attrs::{AttrInterner, FileAttrs, InternPolicy};
pub use command::{Command, parse_script};
pub use error::{BuildError, ParseError};
pub use output::{OutputConfig, TreeFormatter, format_kb, print_json};
pub use stats::{TreeStats, collect_stats, print_stats, print_stats_json};
pub use tree::{DepthFirst, Node, ROOT_ID, TreeBuilder};
