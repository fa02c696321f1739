//! Folder hierarchy queries, moves, and tree building.

pub mod path;
pub mod service;
pub mod tree;

pub use service::FolderService;
pub use tree::TreeService;
