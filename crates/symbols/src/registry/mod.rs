//! Currency registry sources.
//!
//! A [`RegistrySource`] delivers the raw list of [`CurrencyRecord`]s that the
//! resolver works on. The generator fetches exactly once per run and never
//! retries.

pub mod currconv;

use async_trait::async_trait;

use crate::errors::{Result, SymbolsError};
use crate::models::CurrencyRecord;

pub use currconv::CurrConvRegistry;

/// Trait for currency registry sources.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use cursym_symbols::registry::RegistrySource;
///
/// struct FileRegistry {
///     path: std::path::PathBuf,
/// }
///
/// #[async_trait]
/// impl RegistrySource for FileRegistry {
///     fn id(&self) -> &'static str {
///         "FILE"
///     }
///
///     async fn fetch_registry(&self) -> Result<Vec<CurrencyRecord>, SymbolsError> {
///         // ... read and parse the file
///     }
/// }
/// ```
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Unique identifier for this source, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch every currency the source knows about.
    ///
    /// # Errors
    ///
    /// [`SymbolsError::RegistryFetchFailure`] when the source is unreachable
    /// or returns malformed data.
    async fn fetch_registry(&self) -> Result<Vec<CurrencyRecord>>;
}

/// Registry held in memory.
///
/// Fails with [`SymbolsError::RegistryFetchFailure`] when constructed with
/// [`StaticRegistry::failing`].
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    records: Vec<CurrencyRecord>,
    failure: Option<String>,
}

impl StaticRegistry {
    pub fn new(records: Vec<CurrencyRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A registry whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl RegistrySource for StaticRegistry {
    fn id(&self) -> &'static str {
        "STATIC"
    }

    async fn fetch_registry(&self) -> Result<Vec<CurrencyRecord>> {
        match &self.failure {
            Some(message) => Err(SymbolsError::fetch_failure(self.id(), message.clone())),
            None => Ok(self.records.clone()),
        }
    }
}
