//! Error types for the currency symbol generator.
//!
//! Every variant is fatal for a generator run. Ambiguous symbols are not
//! errors; the resolver drops them and reports them in
//! [`Resolution::dropped`](crate::models::Resolution::dropped).

use std::path::PathBuf;

use thiserror::Error;

/// Type alias for Result using [`SymbolsError`].
pub type Result<T> = std::result::Result<T, SymbolsError>;

/// Errors that can occur while fetching, resolving or emitting currency symbols.
#[derive(Error, Debug)]
pub enum SymbolsError {
    /// The credential needed to reach the registry was not supplied.
    /// Raised before any request is made.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// The registry could not be reached or returned malformed data.
    #[error("Registry fetch failed: {source_id} - {message}")]
    RegistryFetchFailure {
        /// The registry source that failed
        source_id: String,
        /// What went wrong
        message: String,
    },

    /// The registry contained no currencies.
    #[error("Registry is empty")]
    MissingRegistry,

    /// Two registry records share the same currency code.
    #[error("Duplicate currency code in registry: {0}")]
    DuplicateCode(String),

    /// No symbol survived resolution, so the grammar token would be empty.
    #[error("No currency symbol left after resolution")]
    EmptySymbolTable,

    /// A generated artifact could not be written.
    #[error("Failed to write artifact {}: {source}", path.display())]
    ArtifactWrite {
        /// Target file
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SymbolsError {
    pub(crate) fn fetch_failure(source_id: &str, message: impl Into<String>) -> Self {
        Self::RegistryFetchFailure {
            source_id: source_id.to_string(),
            message: message.into(),
        }
    }
}
