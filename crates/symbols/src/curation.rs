//! Curated symbol fixes compiled into the generator.
//!
//! Two kinds of patches exist:
//!
//! - [`SymbolEdit`] rewrites a record's symbol *before* disambiguation, for
//!   currencies the registry lacks a symbol for or encodes badly.
//! - [`SymbolOverride`] writes a `symbol -> code` entry *after*
//!   disambiguation, giving an ambiguous symbol a single owner or adding a
//!   symbol the registry never publishes.

use serde::Serialize;

use crate::models::{CurrencyCode, Symbol};

/// Symbols patched onto registry records before disambiguation, as `(code, symbol)`.
const BUILTIN_EDITS: &[(&str, &str)] = &[("RUB", "₽"), ("BTC", "₿")];

/// Owners of the most common shared symbols, as `(symbol, code)`. Applied in order.
const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    ("$", "USD"),
    ("£", "GBP"),
    ("₩", "KRW"),
    ("P.", "BYN"),
];

/// Patch of a single record's symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolEdit {
    pub code: CurrencyCode,
    pub symbol: Symbol,
}

impl SymbolEdit {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
        }
    }
}

/// Forced `symbol -> code` assignment. The symbol is written verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolOverride {
    pub symbol: Symbol,
    pub code: CurrencyCode,
}

impl SymbolOverride {
    pub fn new(symbol: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            code: code.into(),
        }
    }
}

/// Ordered edits and overrides handed to the resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Curation {
    pub edits: Vec<SymbolEdit>,
    pub overrides: Vec<SymbolOverride>,
}

impl Curation {
    /// The curation shipped with the generator.
    pub fn builtin() -> Self {
        Self {
            edits: BUILTIN_EDITS
                .iter()
                .map(|(code, symbol)| SymbolEdit::new(*code, *symbol))
                .collect(),
            overrides: BUILTIN_OVERRIDES
                .iter()
                .map(|(symbol, code)| SymbolOverride::new(*symbol, *code))
                .collect(),
        }
    }

    /// No edits, no overrides: pure automatic disambiguation.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_edit(mut self, code: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.edits.push(SymbolEdit::new(code, symbol));
        self
    }

    pub fn with_override(mut self, symbol: impl Into<String>, code: impl Into<String>) -> Self {
        self.overrides.push(SymbolOverride::new(symbol, code));
        self
    }
}
