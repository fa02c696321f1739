//! Unified application error types for FolderHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested folder was not found in the given organization.
    NotFound,
    /// A move's source folder could not be resolved by name.
    SourceNotFound,
    /// A move's destination folder could not be resolved by name.
    DestinationNotFound,
    /// A move's source and destination resolve to the same name.
    SelfMove,
    /// A move's source and destination belong to different organizations.
    CrossOrgMove,
    /// A move's destination lies within the source's own subtree.
    CyclicMove,
    /// Input validation failed.
    Validation,
    /// An internal error occurred.
    Internal,
    /// A storage I/O error occurred.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::SourceNotFound => write!(f, "SOURCE_NOT_FOUND"),
            Self::DestinationNotFound => write!(f, "DESTINATION_NOT_FOUND"),
            Self::SelfMove => write!(f, "SELF_MOVE"),
            Self::CrossOrgMove => write!(f, "CROSS_ORG_MOVE"),
            Self::CyclicMove => write!(f, "CYCLIC_MOVE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified application error used throughout FolderHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. The `kind` field is the machine-checkable
/// taxonomy; the message is human-readable and intended to be surfaced to
/// callers verbatim.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a source-not-found error.
    pub fn source_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceNotFound, message)
    }

    /// Create a destination-not-found error.
    pub fn destination_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DestinationNotFound, message)
    }

    /// Create a self-move error.
    pub fn self_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SelfMove, message)
    }

    /// Create a cross-organization-move error.
    pub fn cross_org_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossOrgMove, message)
    }

    /// Create a cyclic-move error.
    pub fn cyclic_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CyclicMove, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_code() {
        let err = AppError::cyclic_move("cannot move a folder to a child of itself");
        assert_eq!(
            err.to_string(),
            "CYCLIC_MOVE: cannot move a folder to a child of itself"
        );
    }

    #[test]
    fn test_kind_is_checkable() {
        let err = AppError::source_not_found("source folder does not exist");
        assert_eq!(err.kind, ErrorKind::SourceNotFound);
        assert_ne!(err.kind, ErrorKind::DestinationNotFound);
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::with_source(ErrorKind::Storage, "I/O error", io);
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Storage);
        assert!(cloned.source.is_none());
    }
}
