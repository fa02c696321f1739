//! Folder entity model.

use serde::{Deserialize, Serialize};

use folderhub_core::error::AppError;
use folderhub_core::types::OrgId;

/// The character separating segments in a materialized path.
pub const PATH_SEPARATOR: char = '.';

/// A folder in a multi-tenant hierarchy.
///
/// Hierarchy is encoded entirely in the materialized `path`: each segment
/// is an ancestor's name, ending in the folder's own name. A root folder's
/// path equals its name. Folders from different organizations are never
/// related, regardless of their paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name. Not guaranteed unique within an organization.
    pub name: String,
    /// The organization this folder belongs to.
    pub org_id: OrgId,
    /// Full materialized path (e.g., `documents.reports.q3`).
    pub path: String,
}

impl Folder {
    /// Creates a folder under the given parent path, or a root folder when
    /// `parent_path` is `None`.
    ///
    /// The name must be non-empty and must not contain the path separator;
    /// a name containing `.` would be indistinguishable from nesting once
    /// materialized. Snapshots supplied directly by callers are accepted
    /// as-is and never re-validated.
    pub fn new(
        name: impl Into<String>,
        org_id: OrgId,
        parent_path: Option<&str>,
    ) -> Result<Self, AppError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::validation("folder name cannot be empty"));
        }
        if name.contains(PATH_SEPARATOR) {
            return Err(AppError::validation(format!(
                "folder name cannot contain '{PATH_SEPARATOR}'"
            )));
        }

        let path = match parent_path {
            Some(parent) => format!("{parent}{PATH_SEPARATOR}{name}"),
            None => name.clone(),
        };

        Ok(Self { name, org_id, path })
    }

    /// Check if this is a root folder (its path has a single segment).
    pub fn is_root(&self) -> bool {
        !self.path.contains(PATH_SEPARATOR)
    }

    /// The parent's materialized path, or `None` for a root folder.
    pub fn parent_path(&self) -> Option<&str> {
        self.path
            .rfind(PATH_SEPARATOR)
            .map(|idx| &self.path[..idx])
    }

    /// Depth in the hierarchy (0 for root folders).
    pub fn depth(&self) -> usize {
        self.path.matches(PATH_SEPARATOR).count()
    }
}
