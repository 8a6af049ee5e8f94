//! Generated Rust lookup tables.

use crate::models::Resolution;

const HEADER: &str = "// @generated by cursym-codegen from the currency registry. Do not edit by hand.\n";

const PRELUDE: &str = "
/// Name and symbol of a currency code. `symbol` is empty when the code owns none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub name: &'static str,
    pub symbol: &'static str,
}
";

const LOOKUPS: &str = "
/// Code owning `symbol`, if any.
pub fn symbol_to_code(symbol: &str) -> Option<&'static str> {
    SYM_TO_CODE
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, code)| *code)
}

/// Name and symbol of `code`, if known.
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CODE_TO_SYM
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| &CODE_TO_SYM[i].1)
}
";

/// Render the generated Rust module.
///
/// String literals use `Debug` escaping, which is always a valid Rust literal
/// and keeps printable non-ASCII symbols readable.
pub fn render_source(resolution: &Resolution) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str(PRELUDE);

    out.push_str("\n/// Symbol to currency code, sorted by code.\n");
    out.push_str("pub static SYM_TO_CODE: &[(&str, &str)] = &[\n");
    for (symbol, code) in resolution.symbols_by_code() {
        out.push_str(&format!("    ({:?}, {:?}),\n", symbol, code));
    }
    out.push_str("];\n");

    out.push_str("\n/// Currency code to name and symbol, sorted by code.\n");
    out.push_str("pub static CODE_TO_SYM: &[(&str, CurrencyInfo)] = &[\n");
    for (code, info) in &resolution.codes {
        out.push_str(&format!(
            "    ({:?}, CurrencyInfo {{ name: {:?}, symbol: {:?} }}),\n",
            code, info.name, info.symbol
        ));
    }
    out.push_str("];\n");

    out.push_str("\n/// Every known currency code, sorted.\n");
    out.push_str("pub static CODES: &[&str] = &[\n");
    for code in &resolution.code_list {
        out.push_str(&format!("    {:?},\n", code));
    }
    out.push_str("];\n");

    out.push_str(LOOKUPS);
    out
}
