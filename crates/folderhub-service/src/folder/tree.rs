//! Folder tree building for hierarchical display.

use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, FolderNode, FolderTree};

/// Builds display trees from folder snapshots.
///
/// Child relationships are derived from materialized paths (a folder's
/// parent is the folder whose path equals its own with the last segment
/// removed). The tree is a view; paths remain authoritative.
#[derive(Debug, Clone, Default)]
pub struct TreeService;

impl TreeService {
    /// Creates a new tree service.
    pub fn new() -> Self {
        Self
    }

    /// Builds the folder tree for one organization from a snapshot.
    ///
    /// Folders whose parent path has no matching folder in the snapshot do
    /// not appear under any root; they are still counted in
    /// `total_folders`.
    pub fn org_tree(&self, org_id: OrgId, folders: &[Folder]) -> FolderTree {
        let members: Vec<&Folder> = folders.iter().filter(|f| f.org_id == org_id).collect();

        let roots = members
            .iter()
            .filter(|f| f.is_root())
            .map(|root| self.build_node(root, &members))
            .collect();

        FolderTree {
            roots,
            total_folders: members.len() as u64,
        }
    }

    /// Builds a node and its subtree from the flat member list.
    fn build_node(&self, folder: &Folder, members: &[&Folder]) -> FolderNode {
        let children: Vec<FolderNode> = members
            .iter()
            .filter(|f| f.parent_path() == Some(folder.path.as_str()))
            .map(|child| self.build_node(child, members))
            .collect();

        FolderNode {
            name: folder.name.clone(),
            path: folder.path.clone(),
            depth: folder.depth(),
            child_count: children.len() as u64,
            children,
        }
    }
}
