//! Property-based tests for symbol resolution.
//!
//! These tests verify that the resolver's guarantees hold across arbitrary
//! registries and curations, using `proptest` for case generation. The symbol
//! pool is deliberately small so that shared symbols are common.

use proptest::prelude::*;
use std::collections::BTreeMap;

use cursym_symbols::{
    resolve, Artifacts, CurrencyRecord, GrammarOptions, SymbolEdit, SymbolOverride,
};

// =============================================================================
// Generators
// =============================================================================

/// Generates a symbol from a small pool, including case variants.
fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("$".to_string()),
        Just("£".to_string()),
        Just("€".to_string()),
        Just("₩".to_string()),
        Just("kr".to_string()),
        Just("Kr".to_string()),
        Just("R".to_string()),
        Just("P.".to_string()),
        Just("ден".to_string()),
    ]
}

/// Generates a registry with unique codes, in arbitrary order.
fn arb_registry() -> impl Strategy<Value = Vec<CurrencyRecord>> {
    proptest::collection::btree_map(
        "[A-Z]{3}",
        ("[A-Za-z ]{3,20}", proptest::option::of(arb_symbol())),
        1..30,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(code, (name, symbol))| CurrencyRecord { code, name, symbol })
            .collect::<Vec<_>>()
    })
    .prop_shuffle()
}

fn arb_overrides() -> impl Strategy<Value = Vec<SymbolOverride>> {
    proptest::collection::vec(
        (arb_symbol(), "[A-Z]{3}").prop_map(|(symbol, code)| SymbolOverride::new(symbol, code)),
        0..5,
    )
}

fn arb_edits() -> impl Strategy<Value = Vec<SymbolEdit>> {
    proptest::collection::vec(
        ("[A-Z]{3}", arb_symbol()).prop_map(|(code, symbol)| SymbolEdit::new(code, symbol)),
        0..3,
    )
}

/// Owners of each uppercased symbol before overrides, edits already applied.
fn owners_by_symbol(
    registry: &[CurrencyRecord],
    edits: &[SymbolEdit],
) -> BTreeMap<String, Vec<String>> {
    let mut patched: BTreeMap<String, Option<String>> = registry
        .iter()
        .map(|r| (r.code.clone(), r.symbol.clone()))
        .collect();
    for edit in edits {
        if let Some(symbol) = patched.get_mut(&edit.code) {
            *symbol = Some(edit.symbol.clone());
        }
    }

    let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (code, symbol) in patched {
        if let Some(symbol) = symbol.filter(|s| !s.is_empty()) {
            owners.entry(symbol.to_uppercase()).or_default().push(code);
        }
    }
    owners
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property 1: Every code appears exactly once**
    ///
    /// CodeTable and CodeList both hold one entry per input record; CodeList
    /// is strictly ascending.
    #[test]
    fn prop_every_code_once(
        registry in arb_registry(),
        overrides in arb_overrides(),
        edits in arb_edits(),
    ) {
        let resolution = resolve(&registry, &overrides, &edits).unwrap();

        prop_assert_eq!(resolution.codes.len(), registry.len());
        prop_assert_eq!(resolution.code_list.len(), registry.len());
        prop_assert!(resolution.code_list.windows(2).all(|w| w[0] < w[1]));
        for record in &registry {
            prop_assert!(resolution.codes.contains_key(&record.code));
            prop_assert_eq!(&resolution.codes[&record.code].name, &record.name);
        }
    }

    /// **Property 2: Single-owner symbols are kept, shared symbols dropped**
    ///
    /// Unless an override writes the same key.
    #[test]
    fn prop_uniqueness_filtering(
        registry in arb_registry(),
        overrides in arb_overrides(),
        edits in arb_edits(),
    ) {
        let resolution = resolve(&registry, &overrides, &edits).unwrap();

        for (symbol, codes) in owners_by_symbol(&registry, &edits) {
            if overrides.iter().any(|o| o.symbol == symbol) {
                continue;
            }
            if codes.len() == 1 {
                prop_assert_eq!(resolution.code_for_symbol(&symbol), Some(codes[0].as_str()));
            } else {
                prop_assert_eq!(resolution.code_for_symbol(&symbol), None);
                prop_assert!(resolution.dropped.iter().any(|d| d.symbol == symbol && d.codes == codes));
            }
        }
    }

    /// **Property 3: Overrides always win, last one per symbol**
    #[test]
    fn prop_overrides_win(
        registry in arb_registry(),
        overrides in arb_overrides(),
        edits in arb_edits(),
    ) {
        let resolution = resolve(&registry, &overrides, &edits).unwrap();

        let mut expected: BTreeMap<&str, &str> = BTreeMap::new();
        for o in &overrides {
            expected.insert(o.symbol.as_str(), o.code.as_str());
        }
        for (symbol, code) in expected {
            prop_assert_eq!(resolution.code_for_symbol(symbol), Some(code));
        }
    }

    /// **Property 4: Code table symbols agree with the symbol table**
    ///
    /// A non-empty symbol in the code table maps back to its code; an empty one
    /// means no symbol maps to the code at all.
    #[test]
    fn prop_code_table_consistent(
        registry in arb_registry(),
        overrides in arb_overrides(),
        edits in arb_edits(),
    ) {
        let resolution = resolve(&registry, &overrides, &edits).unwrap();

        for (code, info) in &resolution.codes {
            if info.symbol.is_empty() {
                prop_assert!(resolution.symbols.values().all(|c| c != code));
            } else {
                prop_assert_eq!(resolution.code_for_symbol(&info.symbol), Some(code.as_str()));
            }
        }
    }

    /// **Property 5: Output does not depend on input order**
    ///
    /// Reversing the registry yields identical tables and identical rendered
    /// artifacts (or the same refusal to render an empty symbol table).
    #[test]
    fn prop_order_independent(
        registry in arb_registry(),
        overrides in arb_overrides(),
        edits in arb_edits(),
    ) {
        let forward = resolve(&registry, &overrides, &edits).unwrap();
        let reversed: Vec<_> = registry.iter().rev().cloned().collect();
        let backward = resolve(&reversed, &overrides, &edits).unwrap();

        prop_assert_eq!(&forward, &backward);

        let options = GrammarOptions::default();
        prop_assert_eq!(
            Artifacts::render(&forward, &options).ok(),
            Artifacts::render(&backward, &options).ok()
        );
    }
}
