//! # folderhub-service
//!
//! The folder hierarchy engine for FolderHub. Services operate on
//! immutable snapshots supplied by the caller: queries return owned
//! subsequences, and the move operation returns a wholly new snapshot
//! rather than mutating in place. Callers adopt the returned snapshot to
//! observe a move's effect on subsequent operations.

pub mod folder;

pub use folder::{FolderService, TreeService};
