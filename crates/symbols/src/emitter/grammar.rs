//! Lexer grammar fragment.

use crate::errors::{Result, SymbolsError};
use crate::models::Resolution;

/// Names used in the rendered grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarOptions {
    /// `lexer grammar <name>;`
    pub grammar_name: String,
    /// Token rule holding the symbol alternation
    pub token_name: String,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            grammar_name: "CurrencyConverterSymbols".to_string(),
            token_name: "CURSIGN".to_string(),
        }
    }
}

/// Render a lexer grammar whose single token matches any resolved symbol.
///
/// Alternatives follow [`Resolution::symbols_by_code`].
///
/// Fails with [`SymbolsError::EmptySymbolTable`] when no symbol survived
/// resolution: a lexer rule with no alternatives matches the empty string,
/// which ANTLR rejects.
pub fn render_grammar(resolution: &Resolution, options: &GrammarOptions) -> Result<String> {
    if resolution.symbols.is_empty() {
        return Err(SymbolsError::EmptySymbolTable);
    }

    let alternatives = resolution
        .symbols_by_code()
        .into_iter()
        .map(|(symbol, _)| quote_literal(symbol))
        .collect::<Vec<_>>()
        .join(" | ");

    Ok(format!(
        "lexer grammar {};\n{}: {};\n",
        options.grammar_name, options.token_name, alternatives
    ))
}

fn quote_literal(symbol: &str) -> String {
    let mut quoted = String::with_capacity(symbol.len() + 2);
    quoted.push('\'');
    for c in symbol.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
