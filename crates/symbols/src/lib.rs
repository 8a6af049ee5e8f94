//! Currency symbol generator
//!
//! Turns a currency registry (code, name, optional symbol) into two
//! build-time artifacts:
//!
//! - a lexer grammar fragment whose token matches every usable symbol
//! - a Rust module with `symbol -> code`, `code -> {name, symbol}` and the
//!   list of all codes
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  RegistrySource  |  (currencyconverterapi.com, in-memory)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  SymbolResolver  | <-- |     Curation     |  (edits + overrides)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |    Resolution    |  (SymbolTable, CodeTable, CodeList)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Artifacts     |  (grammar fragment, Rust tables)
//! +------------------+
//! ```
//!
//! Symbols are not unique across currencies. The resolver drops every symbol
//! claimed by more than one currency, then applies the curated overrides,
//! which always win.

pub mod curation;
pub mod emitter;
pub mod errors;
pub mod generator;
pub mod models;
pub mod registry;
pub mod resolver;

pub use curation::{Curation, SymbolEdit, SymbolOverride};
pub use emitter::{ArtifactNames, Artifacts, GrammarOptions};
pub use errors::{Result, SymbolsError};
pub use generator::{Generated, Generator};
pub use models::{
    CodeList, CodeTable, CurrencyCode, CurrencyInfo, CurrencyRecord, DroppedSymbol, Resolution,
    Symbol, SymbolTable,
};
pub use registry::{CurrConvRegistry, RegistrySource, StaticRegistry};
pub use resolver::{resolve, SymbolResolver};
