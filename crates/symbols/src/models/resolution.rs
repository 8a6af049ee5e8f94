//! Resolver output.
//!
//! All tables are ordered maps so that iteration, and therefore every
//! rendered artifact, is independent of insertion order.

use std::collections::BTreeMap;

use serde::Serialize;

use super::currency::CurrencyInfo;
use super::types::{CurrencyCode, Symbol};

/// Symbol -> code. Keys are unique after resolution.
pub type SymbolTable = BTreeMap<Symbol, CurrencyCode>;

/// Code -> name and owning symbol. One entry per registry record.
pub type CodeTable = BTreeMap<CurrencyCode, CurrencyInfo>;

/// All registry codes, sorted ascending.
pub type CodeList = Vec<CurrencyCode>;

/// A symbol removed because several currencies claim it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DroppedSymbol {
    pub symbol: Symbol,
    /// Every code that claimed the symbol, sorted
    pub codes: Vec<CurrencyCode>,
    /// True when an override later gave the symbol an owner again
    pub restored: bool,
}

/// Result of resolving a registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub symbols: SymbolTable,
    pub codes: CodeTable,
    pub code_list: CodeList,
    /// Ambiguous symbols removed during disambiguation, sorted by symbol
    pub dropped: Vec<DroppedSymbol>,
}

impl Resolution {
    /// Symbol table entries as `(symbol, code)`, sorted by code then symbol.
    ///
    /// This is the order used by every emitted artifact.
    pub fn symbols_by_code(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .symbols
            .iter()
            .map(|(symbol, code)| (symbol.as_str(), code.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Look up the code owning `symbol`.
    pub fn code_for_symbol(&self, symbol: &str) -> Option<&str> {
        self.symbols.get(symbol).map(String::as_str)
    }

    /// Look up the resolved info for `code`.
    pub fn info(&self, code: &str) -> Option<&CurrencyInfo> {
        self.codes.get(code)
    }

    /// Number of codes that own a symbol.
    pub fn codes_with_symbol(&self) -> usize {
        self.codes.values().filter(|info| info.has_symbol()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_by_code_orders_by_code_then_symbol() {
        let mut resolution = Resolution::default();
        resolution.symbols.insert("£".to_string(), "GBP".to_string());
        resolution.symbols.insert("US$".to_string(), "USD".to_string());
        resolution.symbols.insert("$".to_string(), "USD".to_string());
        resolution.symbols.insert("€".to_string(), "EUR".to_string());

        assert_eq!(
            resolution.symbols_by_code(),
            vec![("€", "EUR"), ("£", "GBP"), ("$", "USD"), ("US$", "USD")]
        );
    }
}
