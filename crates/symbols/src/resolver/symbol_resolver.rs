use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::curation::{Curation, SymbolEdit, SymbolOverride};
use crate::errors::{Result, SymbolsError};
use crate::models::{
    CodeTable, CurrencyCode, CurrencyInfo, CurrencyRecord, DroppedSymbol, Resolution, Symbol,
    SymbolTable,
};

/// Resolver bound to a fixed [`Curation`].
///
/// # Example
///
/// ```
/// use cursym_symbols::{CurrencyRecord, SymbolResolver};
///
/// let registry = vec![
///     CurrencyRecord::new("USD", "US Dollar").with_symbol("$"),
///     CurrencyRecord::new("AUD", "Australian Dollar").with_symbol("$"),
///     CurrencyRecord::new("GBP", "British Pound").with_symbol("£"),
/// ];
///
/// let resolution = SymbolResolver::builtin().resolve(&registry).unwrap();
/// assert_eq!(resolution.code_for_symbol("$"), Some("USD"));
/// assert_eq!(resolution.info("AUD").unwrap().symbol, "");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolResolver {
    curation: Curation,
}

impl SymbolResolver {
    pub fn new(curation: Curation) -> Self {
        Self { curation }
    }

    /// Resolver using [`Curation::builtin`].
    pub fn builtin() -> Self {
        Self::new(Curation::builtin())
    }

    pub fn curation(&self) -> &Curation {
        &self.curation
    }

    pub fn resolve(&self, registry: &[CurrencyRecord]) -> Result<Resolution> {
        resolve(registry, &self.curation.overrides, &self.curation.edits)
    }
}

/// Resolve `registry` into symbol and code tables.
///
/// `edits` patch record symbols before disambiguation; `overrides` are written
/// into the symbol table afterwards, in order, and always win.
///
/// # Errors
///
/// - [`SymbolsError::MissingRegistry`] if `registry` is empty
/// - [`SymbolsError::DuplicateCode`] if two records share a code
pub fn resolve(
    registry: &[CurrencyRecord],
    overrides: &[SymbolOverride],
    edits: &[SymbolEdit],
) -> Result<Resolution> {
    if registry.is_empty() {
        return Err(SymbolsError::MissingRegistry);
    }

    let mut records = index_by_code(registry)?;
    apply_edits(&mut records, edits);

    let (mut symbols, mut dropped) = unique_symbols(&records);
    apply_overrides(&mut symbols, overrides, &records);

    for entry in &mut dropped {
        entry.restored = symbols.contains_key(&entry.symbol);
    }

    let owners = owning_symbols(&symbols, overrides);
    let codes: CodeTable = records
        .values()
        .map(|record| {
            let symbol = owners
                .get(record.code.as_str())
                .map(|s| s.to_string())
                .unwrap_or_default();
            (
                record.code.clone(),
                CurrencyInfo {
                    name: record.name.clone(),
                    symbol,
                },
            )
        })
        .collect();

    // BTreeMap keys are already sorted and unique
    let code_list = records.keys().cloned().collect();

    debug!(
        "Resolved {} currencies: {} symbols, {} ambiguous dropped",
        records.len(),
        symbols.len(),
        dropped.len()
    );

    Ok(Resolution {
        symbols,
        codes,
        code_list,
        dropped,
    })
}

/// Index records by code, rejecting duplicates.
///
/// Records are sorted first so the reported duplicate is the smallest one,
/// whatever order the registry arrived in.
fn index_by_code(registry: &[CurrencyRecord]) -> Result<BTreeMap<CurrencyCode, CurrencyRecord>> {
    let mut sorted: Vec<&CurrencyRecord> = registry.iter().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));

    if let Some(pair) = sorted.windows(2).find(|pair| pair[0].code == pair[1].code) {
        return Err(SymbolsError::DuplicateCode(pair[0].code.clone()));
    }

    Ok(sorted
        .into_iter()
        .map(|record| (record.code.clone(), record.clone()))
        .collect())
}

fn apply_edits(records: &mut BTreeMap<CurrencyCode, CurrencyRecord>, edits: &[SymbolEdit]) {
    for edit in edits {
        match records.get_mut(&edit.code) {
            Some(record) => {
                debug!(
                    "Symbol edit {}: {:?} -> {:?}",
                    edit.code, record.symbol, edit.symbol
                );
                record.symbol = Some(edit.symbol.clone());
            }
            None => warn!(
                "Symbol edit for {} skipped: code not in registry",
                edit.code
            ),
        }
    }
}

/// Group records by uppercased symbol and keep only single-owner symbols.
fn unique_symbols(
    records: &BTreeMap<CurrencyCode, CurrencyRecord>,
) -> (SymbolTable, Vec<DroppedSymbol>) {
    let mut candidates: BTreeMap<Symbol, Vec<CurrencyCode>> = BTreeMap::new();
    for record in records.values() {
        if let Some(symbol) = record.symbol() {
            candidates
                .entry(symbol.to_uppercase())
                .or_default()
                .push(record.code.clone());
        }
    }

    let mut symbols = SymbolTable::new();
    let mut dropped = Vec::new();
    for (symbol, codes) in candidates {
        match <[CurrencyCode; 1]>::try_from(codes) {
            Ok([code]) => {
                symbols.insert(symbol, code);
            }
            Err(codes) => {
                info!(
                    "Dropping ambiguous symbol {:?} shared by {}",
                    symbol,
                    codes.join(", ")
                );
                dropped.push(DroppedSymbol {
                    symbol,
                    codes,
                    restored: false,
                });
            }
        }
    }

    (symbols, dropped)
}

fn apply_overrides(
    symbols: &mut SymbolTable,
    overrides: &[SymbolOverride],
    records: &BTreeMap<CurrencyCode, CurrencyRecord>,
) {
    for entry in overrides {
        if !records.contains_key(&entry.code) {
            warn!(
                "Override {:?} -> {} targets a code not in registry",
                entry.symbol, entry.code
            );
        }
        if !matches_uppercased_input(&entry.symbol) {
            warn!(
                "Override {:?} -> {} has lowercase letters and never matches uppercased input",
                entry.symbol, entry.code
            );
        }
        match symbols.insert(entry.symbol.clone(), entry.code.clone()) {
            Some(previous) if previous != entry.code => debug!(
                "Override {:?} reassigned from {} to {}",
                entry.symbol, previous, entry.code
            ),
            _ => {}
        }
    }
}

/// Lexers fed uppercased input only ever see keys that are already uppercase.
fn matches_uppercased_input(symbol: &str) -> bool {
    symbol == symbol.to_uppercase()
}

/// Inverse index code -> owning symbol, built from the final symbol table.
///
/// With several symbols per code, the latest effective override wins, then
/// the smallest remaining symbol.
fn owning_symbols<'a>(
    symbols: &'a SymbolTable,
    overrides: &'a [SymbolOverride],
) -> BTreeMap<&'a str, &'a str> {
    let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
    for (symbol, code) in symbols {
        owners.entry(code.as_str()).or_insert(symbol.as_str());
    }
    for entry in overrides {
        // a later override may have handed the symbol to another code
        if symbols.get(&entry.symbol) == Some(&entry.code) {
            owners.insert(entry.code.as_str(), entry.symbol.as_str());
        }
    }
    owners
}
