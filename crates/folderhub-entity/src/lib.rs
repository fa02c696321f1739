//! # folderhub-entity
//!
//! Domain entity models for FolderHub. Every struct in this crate is a
//! plain value object; all entities derive `Debug`, `Clone`, `Serialize`,
//! and `Deserialize`.

pub mod folder;
