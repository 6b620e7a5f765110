//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::tree::Node;

/// Machine-readable report: the aggregate size plus the whole tree.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    total_kb: f64,
    tree: &'a Node,
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_json(root: &Node) -> io::Result<()> {
    let report = JsonReport {
        total_kb: root.total_size(),
        tree: root,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
