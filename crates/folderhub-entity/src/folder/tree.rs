//! Folder tree structures for hierarchical display.
//!
//! Trees are derived views built from materialized paths; they are never
//! authoritative and are rebuilt from a snapshot on every use.

use serde::{Deserialize, Serialize};

/// A node in a folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full materialized path.
    pub path: String,
    /// Depth level (0 for root).
    pub depth: usize,
    /// Number of direct child folders.
    pub child_count: u64,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

/// A complete folder tree for one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }
}
