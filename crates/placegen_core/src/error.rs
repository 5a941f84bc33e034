//! Generator error types.

use std::path::PathBuf;

use crate::format::DocumentFormat;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An emitter failed to render or save a file.
    #[error("Failed to create {} {filename}: {source}", .format.label())]
    Emitter {
        format: DocumentFormat,
        filename: String,
        #[source]
        source: anyhow::Error,
    },

    /// A descriptor's type tag does not name a known emitter.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// A descriptor is malformed (bad filename, extension mismatch).
    #[error("Invalid descriptor {filename:?}: {reason}")]
    InvalidDescriptor { filename: String, reason: String },

    /// Two descriptors target the same output file.
    #[error("Duplicate filename in manifest: {0}")]
    DuplicateFilename(String),

    /// The configuration file could not be parsed.
    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
