//! Currency symbol models
//!
//! - `types` - Type aliases for codes and symbols
//! - `currency` - Registry records and per-code info (CurrencyRecord, CurrencyInfo)
//! - `resolution` - Resolver output tables (SymbolTable, CodeTable, Resolution)

mod currency;
mod resolution;
mod types;

pub use currency::{CurrencyInfo, CurrencyRecord};
pub use resolution::{CodeList, CodeTable, DroppedSymbol, Resolution, SymbolTable};
pub use types::{CurrencyCode, Symbol};
