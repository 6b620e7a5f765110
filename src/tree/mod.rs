//! Virtual file tree model and construction
//!
//! This module provides the tree itself and the machinery that builds it:
//!
//! - `Node`: the closed Dir/File sum type every consumer matches on
//! - `TreeBuilder`: id-registry driven construction from creation commands
//! - `DepthFirst`: lazy pre-order iteration over a directory's descendants

mod builder;
mod node;
mod traversal;

// Re-export public types
pub use builder::{ROOT_ID, TreeBuilder};
pub use node::Node;
pub use traversal::DepthFirst;
