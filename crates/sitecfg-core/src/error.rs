//! Error types for sitecfg-core

use std::path::PathBuf;

/// Result type for sitecfg-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, decoding or rendering settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A layer file's top level is not a table of settings
    #[error("Layer {origin} must be a table of settings, found {found}")]
    InvalidLayer { origin: String, found: String },

    /// An explicitly requested layer file does not exist
    #[error("Layer file not found: {path}")]
    LayerNotFound { path: PathBuf },

    /// Resolved settings could not be decoded into a typed site configuration
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// A URL template is syntactically malformed
    #[error("Invalid URL template '{template}': {message}")]
    Template { template: String, message: String },

    /// A URL template names a placeholder the renderer does not know
    #[error("Unknown placeholder '{name}' in template '{template}'")]
    UnknownPlaceholder { template: String, name: String },

    /// A known placeholder has no value in the render context
    #[error("Template '{template}' needs a value for '{name}'")]
    MissingPlaceholder { template: String, name: String },

    /// Settings cannot be expressed in the requested export format
    #[error("Cannot render settings as {format}: {message}")]
    Render { format: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from sitecfg-fs
    #[error(transparent)]
    Fs(#[from] sitecfg_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}
