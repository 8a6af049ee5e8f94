//! currencyconverterapi.com registry source.
//!
//! Fetches the full currency list from the `/api/v7/currencies` endpoint.
//! The endpoint requires an API key passed as the `apiKey` query parameter.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::errors::{Result, SymbolsError};
use crate::models::CurrencyRecord;
use crate::registry::RegistrySource;

use models::{CurrenciesResponse, ErrorResponse};

/// Source ID constant
const SOURCE_ID: &str = "CURRCONV";

/// Public free-tier endpoint
pub const DEFAULT_BASE_URL: &str = "https://free.currconv.com";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Registry backed by currencyconverterapi.com.
///
/// # Example
///
/// ```ignore
/// use cursym_symbols::registry::{CurrConvRegistry, RegistrySource};
///
/// let source = CurrConvRegistry::new("your_api_key")?;
/// let records = source.fetch_registry().await?;
/// ```
pub struct CurrConvRegistry {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CurrConvRegistry {
    /// Create a source for the given API key.
    ///
    /// Fails with [`SymbolsError::MissingCredential`] if the key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(SymbolsError::MissingCredential(
                "currencyconverterapi.com API key".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the source at another host (paid tier, proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v7/currencies", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RegistrySource for CurrConvRegistry {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_registry(&self) -> Result<Vec<CurrencyRecord>> {
        let url = self.endpoint();
        debug!("Fetching currency registry from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SymbolsError::fetch_failure(SOURCE_ID, "Request timed out")
                } else {
                    SymbolsError::fetch_failure(SOURCE_ID, format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SymbolsError::fetch_failure(SOURCE_ID, format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let records = parse_currencies(&body)?;
        info!("Fetched {} currencies from {}", records.len(), SOURCE_ID);
        Ok(records)
    }
}

fn status_error(status: reqwest::StatusCode, body: &str) -> SymbolsError {
    if let Ok(ErrorResponse { error: Some(message) }) = serde_json::from_str(body) {
        return SymbolsError::fetch_failure(SOURCE_ID, message);
    }
    SymbolsError::fetch_failure(SOURCE_ID, format!("HTTP {} - {}", status, body))
}

/// Parse a `/api/v7/currencies` body into records sorted by code.
///
/// Entries whose `id` disagrees with their key are kept as-is, so duplicated
/// codes reach the resolver and are reported there.
pub fn parse_currencies(body: &str) -> Result<Vec<CurrencyRecord>> {
    let response: CurrenciesResponse = serde_json::from_str(body).map_err(|e| {
        SymbolsError::fetch_failure(SOURCE_ID, format!("Malformed registry response: {}", e))
    })?;

    let mut records: Vec<CurrencyRecord> = response
        .results
        .into_iter()
        .map(|(key, entry)| entry.into_record(key))
        .collect();
    records.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(records)
}
