//! Tree node types

use std::rc::Rc;

use serde::Serialize;

use crate::attrs::FileAttrs;

/// Node of the virtual file tree.
///
/// A closed sum type with exactly two variants; consumers match on it
/// directly.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        name: String,
        size_kb: f64,
        attrs: Rc<FileAttrs>,
    },
    Dir {
        name: String,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    /// Sum of every file size reachable from this node, in kilobytes.
    ///
    /// Directories contribute nothing themselves.
    pub fn total_size(&self) -> f64 {
        match self {
            Node::File { size_kb, .. } => *size_kb,
            Node::Dir { children, .. } => children.iter().map(Node::total_size).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> Rc<FileAttrs> {
        Rc::new(FileAttrs {
            extension: "txt".to_string(),
            read_only: false,
            owner: "alice".to_string(),
            group: "staff".to_string(),
        })
    }

    fn file(name: &str, size_kb: f64) -> Node {
        Node::File {
            name: name.to_string(),
            size_kb,
            attrs: attrs(),
        }
    }

    fn dir(name: &str, children: Vec<Node>) -> Node {
        Node::Dir {
            name: name.to_string(),
            children,
        }
    }

    #[test]
    fn test_total_size_sums_all_depths() {
        let tree = dir(
            "root",
            vec![
                file("a.txt", 2.5),
                dir(
                    "sub",
                    vec![file("b.txt", 1.5), dir("deep", vec![file("c.txt", 4.0)])],
                ),
            ],
        );
        assert_eq!(tree.total_size(), 8.0);
    }

    #[test]
    fn test_total_size_of_empty_dir_is_zero() {
        assert_eq!(dir("empty", Vec::new()).total_size(), 0.0);
    }

    #[test]
    fn test_total_size_of_file_is_its_own() {
        assert_eq!(file("a.txt", 3.25).total_size(), 3.25);
    }

    #[test]
    fn test_accessors() {
        let d = dir("docs", Vec::new());
        let f = file("notes.txt", 1.0);
        assert_eq!(d.name(), "docs");
        assert!(d.is_dir());
        assert_eq!(f.name(), "notes.txt");
        assert!(!f.is_dir());
    }

    #[test]
    fn test_json_shape() {
        let tree = dir("root", vec![file("a.txt", 2.5)]);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["type"], "dir");
        assert_eq!(json["children"][0]["type"], "file");
        assert_eq!(json["children"][0]["size_kb"], 2.5);
        assert_eq!(json["children"][0]["attrs"]["extension"], "txt");
    }
}
