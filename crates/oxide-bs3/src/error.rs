//! Error types for the Bootstrap 3 extension.

use std::path::{Path, PathBuf};

/// Errors raised while configuring, installing or rendering.
#[derive(Debug, thiserror::Error)]
pub enum Bs3Error {
    /// Filesystem error on a specific path.
    #[error("IO error on '{path}': {source}")]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An asset is not part of the compiled bundle.
    #[error("Asset not bundled: {0}")]
    MissingAsset(String),

    /// The configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A picker script template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Registration with the host application failed.
    #[error("Application error: {0}")]
    App(#[from] oxide_app::AppError),
}

impl Bs3Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for extension operations.
pub type Result<T> = std::result::Result<T, Bs3Error>;
