//! Error types for the application shell.

use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// An extension failed while loading.
    #[error("extension {name} failed to load: {source}")]
    Extension {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An extension with this name is already loaded.
    #[error("extension already loaded: {0}")]
    ExtensionLoaded(String),

    /// A template extension namespace is already registered.
    #[error("template namespace already registered: {0}")]
    DuplicateNamespace(String),

    /// A template tag name is already registered.
    #[error("template tag already registered: {0}")]
    DuplicateTag(String),
}

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
