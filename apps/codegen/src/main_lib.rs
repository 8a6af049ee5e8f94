use anyhow::Context;
use cursym_symbols::{ArtifactNames, CurrConvRegistry, Generator, SymbolResolver};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, API_KEY_VAR};

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

/// Fetch the registry, resolve symbols and write both artifacts.
///
/// Artifacts are only written once both are rendered.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let source = CurrConvRegistry::new(config.api_key.as_str())
        .with_context(|| {
            format!(
                "No API key present: pass it as the first argument or set {}",
                API_KEY_VAR
            )
        })?
        .with_base_url(config.registry_url.clone());

    let generated = Generator::new(SymbolResolver::builtin())
        .run(&source)
        .await
        .context("Failed to generate currency symbol tables")?;

    for dropped in generated.resolution.dropped.iter().filter(|d| !d.restored) {
        tracing::debug!(
            "Symbol {:?} left without owner ({})",
            dropped.symbol,
            dropped.codes.join(", ")
        );
    }

    let (grammar_path, source_path) = generated
        .artifacts
        .write_to(&config.out_dir, &ArtifactNames::default())
        .context("Failed to write generated artifacts")?;

    tracing::info!(
        "Generated {} and {}",
        grammar_path.display(),
        source_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_aborts_before_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("out");
        let config = Config {
            api_key: String::new(),
            out_dir: out_dir.clone(),
            registry_url: "http://127.0.0.1:9".to_string(),
            log_format: "text".to_string(),
        };

        let error = run(&config).await.unwrap_err();
        assert!(format!("{:#}", error).contains("Missing credential"));
        assert!(!out_dir.exists());
    }
}
