//! TreeBuilder - registry-driven construction of the virtual tree

use std::collections::HashMap;
use std::mem;

use crate::attrs::{AttrInterner, InternPolicy};
use crate::command::Command;
use crate::error::BuildError;

use super::Node;

/// Registry id reserved for the implicit root directory.
pub const ROOT_ID: u32 = 0;

/// Index of a directory in the builder's arena.
type DirIx = usize;

/// One directory under construction.
#[derive(Debug)]
struct DirSlot {
    name: String,
    children: Vec<Child>,
}

/// Child entry of a directory under construction. Subdirectories stay arena
/// references until `finish`; files are complete nodes as soon as they are
/// added.
#[derive(Debug)]
enum Child {
    Dir(DirIx),
    File(Node),
}

/// Builds the tree from creation commands.
///
/// Directories live in an index arena while the tree is under construction,
/// because [`Node`] owns its children by value and commands may append to any
/// registered directory at any time. `finish` materializes the owned tree
/// from the root down.
#[derive(Debug)]
pub struct TreeBuilder {
    arena: Vec<DirSlot>,
    registry: HashMap<u32, DirIx>,
    interner: AttrInterner,
}

impl TreeBuilder {
    /// Create a builder with the root directory pre-registered under
    /// [`ROOT_ID`].
    pub fn new(policy: InternPolicy) -> Self {
        let mut registry = HashMap::new();
        registry.insert(ROOT_ID, 0);
        Self {
            arena: vec![DirSlot {
                name: "root".to_string(),
                children: Vec::new(),
            }],
            registry,
            interner: AttrInterner::new(policy),
        }
    }

    /// Create a directory named `name`, register it under `id` and append it
    /// as the last child of the directory registered under `parent_id`.
    pub fn add_dir(&mut self, id: u32, parent_id: u32, name: &str) -> Result<(), BuildError> {
        if self.registry.contains_key(&id) {
            return Err(BuildError::DuplicateId(id));
        }
        let parent = self.lookup(parent_id)?;

        let ix = self.arena.len();
        self.arena.push(DirSlot {
            name: name.to_string(),
            children: Vec::new(),
        });
        self.registry.insert(id, ix);
        self.arena[parent].children.push(Child::Dir(ix));
        Ok(())
    }

    /// Append a file as the last child of the directory registered under
    /// `parent_id`.
    ///
    /// The extension is derived from `name`; the attribute bundle goes
    /// through the interner.
    pub fn add_file(
        &mut self,
        parent_id: u32,
        read_only: bool,
        owner: &str,
        group: &str,
        size_kb: f64,
        name: &str,
    ) -> Result<(), BuildError> {
        if !size_kb.is_finite() || size_kb < 0.0 {
            return Err(BuildError::InvalidSize(size_kb));
        }
        let parent = self.lookup(parent_id)?;

        let attrs = self
            .interner
            .intern(derive_extension(name), read_only, owner, group);
        self.arena[parent].children.push(Child::File(Node::File {
            name: name.to_string(),
            size_kb,
            attrs,
        }));
        Ok(())
    }

    /// Run a parsed command sequence against the builder, failing fast on
    /// the first error.
    pub fn apply<I>(&mut self, commands: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            match command {
                Command::Dir {
                    id,
                    parent_id,
                    name,
                } => self.add_dir(id, parent_id, &name)?,
                Command::File {
                    parent_id,
                    read_only,
                    owner,
                    group,
                    size_kb,
                    name,
                } => self.add_file(parent_id, read_only, &owner, &group, size_kb, &name)?,
            }
        }
        Ok(())
    }

    /// Distinct attribute bundles interned so far.
    pub fn distinct_attrs(&self) -> usize {
        self.interner.distinct()
    }

    /// Materialize the finished tree rooted at [`ROOT_ID`].
    pub fn finish(self) -> Node {
        let mut arena = self.arena;
        materialize(&mut arena, 0)
    }

    fn lookup(&self, parent_id: u32) -> Result<DirIx, BuildError> {
        self.registry
            .get(&parent_id)
            .copied()
            .ok_or(BuildError::UnknownParent(parent_id))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(InternPolicy::Shared)
    }
}

/// Convert an arena directory into an owned node, consuming its slot.
fn materialize(arena: &mut Vec<DirSlot>, ix: DirIx) -> Node {
    let name = mem::take(&mut arena[ix].name);
    let slots = mem::take(&mut arena[ix].children);
    let children = slots
        .into_iter()
        .map(|child| match child {
            Child::File(node) => node,
            Child::Dir(child_ix) => materialize(arena, child_ix),
        })
        .collect();
    Node::Dir { name, children }
}

/// Derive a file's extension from its name.
///
/// Splitting on `'.'` must yield exactly two non-empty parts for the second
/// to count as an extension; anything else (no dot, several dots, empty stem
/// or suffix) has none.
fn derive_extension(name: &str) -> &str {
    let mut parts = name.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(stem), Some(ext), None) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => "",
    }
}
