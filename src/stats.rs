//! Summary statistics for a built tree
//!
//! One traversal over the finished tree collecting node counts, the
//! aggregate size, and the interner's distinct-bundle count.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::output::format_kb;
use crate::tree::Node;

/// Aggregate counts over a built tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeStats {
    /// Number of directories under the root (the root itself is not counted)
    pub directories: usize,
    /// Number of files
    pub files: usize,
    /// Sum of all file sizes in kilobytes
    pub total_kb: f64,
    /// Distinct attribute bundles handed out by the interner
    pub distinct_attrs: usize,
}

/// Collect statistics in a single traversal of the tree.
pub fn collect_stats(root: &Node, distinct_attrs: usize) -> TreeStats {
    let mut stats = TreeStats {
        distinct_attrs,
        ..Default::default()
    };

    for node in root.iter() {
        match node {
            Node::Dir { .. } => stats.directories += 1,
            Node::File { size_kb, .. } => {
                stats.files += 1;
                stats.total_kb += *size_kb;
            }
        }
    }

    stats
}

/// Print statistics to stdout with optional color.
pub fn print_stats(stats: &TreeStats, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    stdout.set_color(&bold)?;
    writeln!(stdout, "Tree Statistics")?;
    stdout.reset()?;
    writeln!(stdout, "───────────────")?;

    writeln!(stdout, "Directories:     {}", stats.directories)?;
    writeln!(stdout, "Files:           {}", stats.files)?;
    writeln!(stdout, "Total size:      {}KB", format_kb(stats.total_kb))?;
    writeln!(stdout, "Attribute sets:  {}", stats.distinct_attrs)?;

    Ok(())
}

/// Print statistics as JSON.
pub fn print_stats_json(stats: &TreeStats) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(stats).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::attrs::FileAttrs;

    use super::*;

    fn file(name: &str, size_kb: f64) -> Node {
        Node::File {
            name: name.to_string(),
            size_kb,
            attrs: Rc::new(FileAttrs {
                extension: String::new(),
                read_only: false,
                owner: "alice".to_string(),
                group: "staff".to_string(),
            }),
        }
    }

    fn dir(name: &str, children: Vec<Node>) -> Node {
        Node::Dir {
            name: name.to_string(),
            children,
        }
    }

    #[test]
    fn test_collect_counts_and_total() {
        let tree = dir(
            "root",
            vec![
                dir("src", vec![file("main.rs", 2.0)]),
                dir("docs", Vec::new()),
                file("README", 0.5),
            ],
        );
        let stats = collect_stats(&tree, 3);
        assert_eq!(stats.directories, 2);
        assert_eq!(stats.files, 2);
        assert_eq!(stats.total_kb, 2.5);
        assert_eq!(stats.distinct_attrs, 3);
    }

    #[test]
    fn test_collect_on_empty_root() {
        let stats = collect_stats(&dir("root", Vec::new()), 0);
        assert_eq!(stats.directories, 0);
        assert_eq!(stats.files, 0);
        assert_eq!(stats.total_kb, 0.0);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = TreeStats {
            directories: 1,
            files: 2,
            total_kb: 4.0,
            distinct_attrs: 1,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["files"], 2);
        assert_eq!(json["total_kb"], 4.0);
    }
}
