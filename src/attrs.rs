//! Shared per-file attribute bundles and their interner
//!
//! Many files in a real tree share the same owner/group/extension/read-only
//! combination. `AttrInterner` hands out one canonical `Rc<FileAttrs>` per
//! distinct combination, so metadata memory is bounded by the number of
//! distinct bundles rather than the number of files.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

/// Immutable attribute bundle shared between files.
///
/// Equality is structural; the interner relies on it to decide whether a
/// canonical instance already exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileAttrs {
    pub extension: String,
    pub read_only: bool,
    pub owner: String,
    pub group: String,
}

/// How the builder obtains attribute bundles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InternPolicy {
    /// Share one canonical bundle per distinct combination (default).
    #[default]
    Shared,
    /// Allocate a fresh bundle for every file.
    PerFile,
}

/// Flyweight cache mapping attribute bundles to their canonical instance.
///
/// Owned by one `TreeBuilder`; independent trees get independent caches.
#[derive(Debug, Default)]
pub struct AttrInterner {
    policy: InternPolicy,
    cache: HashMap<FileAttrs, Rc<FileAttrs>>,
}

impl AttrInterner {
    pub fn new(policy: InternPolicy) -> Self {
        Self {
            policy,
            cache: HashMap::new(),
        }
    }

    /// Return the bundle for the given fields.
    ///
    /// Under `Shared`, repeated calls with equal fields return pointer-equal
    /// results; under `PerFile` every call allocates.
    pub fn intern(
        &mut self,
        extension: &str,
        read_only: bool,
        owner: &str,
        group: &str,
    ) -> Rc<FileAttrs> {
        let candidate = FileAttrs {
            extension: extension.to_string(),
            read_only,
            owner: owner.to_string(),
            group: group.to_string(),
        };

        match self.policy {
            InternPolicy::PerFile => Rc::new(candidate),
            InternPolicy::Shared => {
                if let Some(canonical) = self.cache.get(&candidate) {
                    return Rc::clone(canonical);
                }
                let canonical = Rc::new(candidate.clone());
                self.cache.insert(candidate, Rc::clone(&canonical));
                canonical
            }
        }
    }

    /// Number of distinct canonical bundles interned so far.
    ///
    /// Always 0 under `PerFile` since nothing is cached.
    pub fn distinct(&self) -> usize {
        self.cache.len()
    }
}
