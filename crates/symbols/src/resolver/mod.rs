//! Symbol disambiguation.
//!
//! Turns a raw registry into the symbol and code tables used by the emitted
//! artifacts. Resolution runs in a fixed order:
//!
//! ```text
//! registry ──> 1. manual edits ──> 2. group by uppercased symbol
//!                                        │
//!                                        v
//!          3. drop symbols claimed by more than one code
//!                                        │
//!                                        v
//!          4. overrides (exact writes, last one wins)
//!                                        │
//!                                        v
//!          5. code table via code -> symbol inverse index
//!          6. sorted code list
//! ```
//!
//! Every intermediate collection is an ordered map keyed by code or symbol, so
//! the output never depends on the order records arrive in.

mod symbol_resolver;

pub use symbol_resolver::{resolve, SymbolResolver};
