//! One generator run: fetch, resolve, render.

use log::info;

use crate::emitter::{Artifacts, GrammarOptions};
use crate::errors::Result;
use crate::models::{CurrencyRecord, Resolution};
use crate::registry::RegistrySource;
use crate::resolver::SymbolResolver;

/// Output of a successful run. Nothing has been written yet.
#[derive(Clone, Debug)]
pub struct Generated {
    pub resolution: Resolution,
    pub artifacts: Artifacts,
}

/// Drives a registry source through the resolver and emitter.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    resolver: SymbolResolver,
    grammar: GrammarOptions,
}

impl Generator {
    pub fn new(resolver: SymbolResolver) -> Self {
        Self {
            resolver,
            grammar: GrammarOptions::default(),
        }
    }

    pub fn with_grammar_options(mut self, grammar: GrammarOptions) -> Self {
        self.grammar = grammar;
        self
    }

    /// Fetch the registry once and render both artifacts in memory.
    pub async fn run(&self, source: &dyn RegistrySource) -> Result<Generated> {
        let registry = source.fetch_registry().await?;
        info!("Registry {} returned {} records", source.id(), registry.len());
        self.generate(&registry)
    }

    /// Resolve an already fetched registry and render both artifacts.
    pub fn generate(&self, registry: &[CurrencyRecord]) -> Result<Generated> {
        let resolution = self.resolver.resolve(registry)?;
        let artifacts = Artifacts::render(&resolution, &self.grammar)?;

        info!(
            "Resolved {} currencies: {} symbols, {} codes with a symbol, {} ambiguous dropped ({} restored by overrides)",
            resolution.code_list.len(),
            resolution.symbols.len(),
            resolution.codes_with_symbol(),
            resolution.dropped.len(),
            resolution.dropped.iter().filter(|d| d.restored).count()
        );

        Ok(Generated {
            resolution,
            artifacts,
        })
    }
}
