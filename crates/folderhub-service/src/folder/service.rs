//! Folder queries and the subtree move operation.

use tracing::info;

use folderhub_core::error::AppError;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::{Folder, PATH_SEPARATOR};

use super::path;

/// Read and move operations over a folder snapshot.
///
/// The service owns a point-in-time snapshot of folders in caller-supplied
/// order. Queries return owned subsequences in snapshot order; a move
/// returns a wholly new snapshot which the caller must adopt for the move
/// to be visible to subsequent operations. The service itself holds no
/// other state and never mutates the snapshot it was given.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// The folder snapshot.
    folders: Vec<Folder>,
}

impl FolderService {
    /// Creates a service over a snapshot.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// Returns the underlying snapshot.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Lists all folders belonging to an organization, in snapshot order.
    ///
    /// An organization with no folders yields an empty vector, never an
    /// error.
    pub fn folders_by_org(&self, org_id: OrgId) -> Vec<Folder> {
        self.folders
            .iter()
            .filter(|f| f.org_id == org_id)
            .cloned()
            .collect()
    }

    /// Lists all descendants of the named folder within an organization,
    /// in snapshot order.
    ///
    /// The anchor is the first folder in snapshot order matching both the
    /// organization and the name; when names are duplicated the earlier
    /// folder wins. A folder that exists but has no descendants yields an
    /// empty vector, distinguishing it from an absent folder.
    pub fn descendants_of(&self, org_id: OrgId, name: &str) -> Result<Vec<Folder>, AppError> {
        let anchor = self
            .folders
            .iter()
            .find(|f| f.org_id == org_id && f.name == name)
            .ok_or_else(|| {
                AppError::not_found("folder does not exist in the specified organization")
            })?;

        Ok(self
            .folders
            .iter()
            .filter(|f| f.org_id == org_id && path::is_descendant(&f.path, &anchor.path))
            .cloned()
            .collect())
    }

    /// Moves a folder and its entire subtree under a new parent.
    ///
    /// Source and destination are resolved by name, first match in
    /// snapshot order regardless of organization; the organization check
    /// happens after resolution. On success returns a new snapshot of the
    /// same length and order with rewritten paths for the moved subtree;
    /// every other folder is copied unchanged.
    pub fn move_folder(&self, name: &str, dst: &str) -> Result<Vec<Folder>, AppError> {
        let source = self
            .folders
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| AppError::source_not_found("source folder does not exist"))?;

        let dest = self
            .folders
            .iter()
            .find(|f| f.name == dst)
            .ok_or_else(|| AppError::destination_not_found("destination folder does not exist"))?;

        // Name comparison, not path: a folder also cannot be moved onto a
        // different folder that shares its name.
        if source.name == dest.name {
            return Err(AppError::self_move("cannot move a folder to itself"));
        }
        if source.org_id != dest.org_id {
            return Err(AppError::cross_org_move(
                "cannot move a folder to a different organization",
            ));
        }
        if path::is_descendant(&dest.path, &source.path) {
            return Err(AppError::cyclic_move(
                "cannot move a folder to a child of itself",
            ));
        }

        let old_prefix = source.path.clone();
        let new_prefix = format!("{}{}{}", dest.path, PATH_SEPARATOR, source.name);

        let folders = self
            .folders
            .iter()
            .map(|folder| {
                let mut folder = folder.clone();
                if folder.name == source.name && folder.path == old_prefix {
                    folder.path = new_prefix.clone();
                } else if path::is_descendant(&folder.path, &old_prefix) {
                    folder.path = path::rebase(&folder.path, &old_prefix, &new_prefix);
                }
                folder
            })
            .collect();

        info!(
            source = %name,
            destination = %dst,
            old_path = %old_prefix,
            new_path = %new_prefix,
            "Folder moved"
        );

        Ok(folders)
    }
}
