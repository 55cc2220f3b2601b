//! Catalog loading errors.

use std::path::PathBuf;

use shutterbook_domain::error::ValidationError;

/// Errors raised while loading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// The file could not be read.
    #[error("failed to read catalog file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid array of service records.
    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),

    /// A record breaks a domain invariant.
    #[error("invalid service record at index {index}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
