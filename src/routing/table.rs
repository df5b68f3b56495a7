//! Route table and resolution.
//!
//! # Responsibilities
//! - Store the ordered path → view entries
//! - Reject duplicate paths at construction time
//! - Look up the view handle for an incoming path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over entries (route counts are small)
//! - Path comparison is byte-exact and case-sensitive
//! - No trailing-slash normalization; `/game` and `/game/` are distinct
//! - Explicit None on a miss rather than a silent default

use std::collections::HashSet;

use thiserror::Error;

/// Errors that can occur while assembling the routing configuration.
///
/// All variants are fatal: the application should fail to start rather than
/// run with an ambiguous table.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Two entries share the same path.
    #[error("duplicate route path {path:?}")]
    DuplicatePath { path: String },

    /// Two views were registered under the same name.
    #[error("duplicate view name {name:?}")]
    DuplicateView { name: String },

    /// A route references a view name that was never registered.
    #[error("route {path:?} references unknown view {view:?}")]
    UnknownView { path: String, view: String },
}

/// A single path → view association.
#[derive(Debug, Clone)]
pub struct RouteEntry<V> {
    path: String,
    view: V,
}

impl<V> RouteEntry<V> {
    /// Create an entry for a literal path.
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }

    /// The literal path this entry matches.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The view handle this entry resolves to.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Immutable table mapping literal paths to view handles.
///
/// Built once at startup and never mutated; share it via `Arc` when several
/// owners need it. The table stores opaque handles supplied by the rendering
/// layer and never calls into them.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table from an ordered entry list.
    ///
    /// Entry order is preserved and determines match priority. Duplicate
    /// paths are a configuration error, not last-write-wins.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(ConfigurationError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }

        tracing::info!(route_count = entries.len(), "Route table built");

        Ok(Self { entries })
    }

    /// Resolve a path to its view handle.
    ///
    /// Returns the view of the first entry whose path exactly equals the
    /// input. A miss returns `None`; that is a normal outcome the navigation
    /// layer answers with a fallback view, not a failure.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.view)
    }

    /// Number of configured routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no routes are configured (every lookup misses).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured paths in match order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }
}
