//! currencyconverterapi.com response models.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::CurrencyRecord;

/// Response of `/api/v7/currencies`
#[derive(Debug, Deserialize)]
pub struct CurrenciesResponse {
    /// Currencies keyed by code
    pub results: BTreeMap<String, CurrConvCurrency>,
}

/// Single currency entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrConvCurrency {
    /// Currency code, normally equal to the map key
    #[serde(default)]
    pub id: Option<String>,
    pub currency_name: String,
    /// Absent for many currencies
    #[serde(default)]
    pub currency_symbol: Option<String>,
}

impl CurrConvCurrency {
    pub fn into_record(self, key: String) -> CurrencyRecord {
        CurrencyRecord {
            code: self.id.unwrap_or(key),
            name: self.currency_name,
            symbol: self.currency_symbol,
        }
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}
