//! Registry record and generated per-code info.

use serde::{Deserialize, Serialize};

use super::types::{CurrencyCode, Symbol};

/// A single currency as published by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Unique currency code
    pub code: CurrencyCode,
    /// Human readable name
    pub name: String,
    /// Symbol, when the registry knows one
    #[serde(default)]
    pub symbol: Option<Symbol>,
}

impl CurrencyRecord {
    /// Create a record without a symbol.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            symbol: None,
        }
    }

    /// Set the record's symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// The symbol, ignoring empty strings.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref().filter(|s| !s.is_empty())
    }
}

/// Name and owning symbol of a code after resolution.
///
/// `symbol` is empty when the code owns no entry in the symbol table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub name: String,
    pub symbol: Symbol,
}

impl CurrencyInfo {
    pub fn has_symbol(&self) -> bool {
        !self.symbol.is_empty()
    }
}
