use std::path::PathBuf;

use cursym_symbols::registry::currconv::DEFAULT_BASE_URL;

/// Environment variable holding the registry API key.
pub const API_KEY_VAR: &str = "CURRENCY_API_KEY";

pub struct Config {
    /// Empty when not supplied; rejected before any fetch.
    pub api_key: String,
    pub out_dir: PathBuf,
    pub registry_url: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Build from positional arguments and a variable lookup.
    ///
    /// The first positional argument takes precedence over `CURRENCY_API_KEY`.
    pub fn from_sources<I, F>(args: I, var: F) -> Self
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let api_key = args
            .into_iter()
            .next()
            .or_else(|| var(API_KEY_VAR))
            .map(|key| key.trim().to_string())
            .unwrap_or_default();
        let out_dir = var("CURSYM_OUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| ".".into());
        let registry_url = var("CURSYM_REGISTRY_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let log_format = var("CURSYM_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Self {
            api_key,
            out_dir: PathBuf::from(out_dir),
            registry_url,
            log_format,
        }
    }
}
