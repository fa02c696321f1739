//! Snapshot loading and persistence.
//!
//! Snapshots are stored as a JSON array of folder records. The engine
//! itself never touches storage; after a successful move the CLI writes
//! the returned snapshot back so that later commands observe it.

use std::fs;
use std::path::Path;

use tracing::debug;

use folderhub_core::AppResult;
use folderhub_entity::folder::Folder;

/// Read a folder snapshot from a JSON file.
pub fn load_snapshot(path: impl AsRef<Path>) -> AppResult<Vec<Folder>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let folders: Vec<Folder> = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), count = folders.len(), "Snapshot loaded");
    Ok(folders)
}

/// Write a folder snapshot to a JSON file.
pub fn save_snapshot(path: impl AsRef<Path>, folders: &[Folder]) -> AppResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(folders)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), count = folders.len(), "Snapshot saved");
    Ok(())
}
