use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub narrative: NarrativeConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// CSV dataset loaded once at startup
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/foods.csv")
}

#[derive(Debug, Deserialize, Clone)]
pub struct NarrativeConfig {
    /// Gemini API key. Empty disables the remote narrator.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "gemini-flash-latest".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_temperature() -> f64 {
    0.7
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables `GEMINI_API_KEY` and `GEMINI_MODEL`
    /// 2. Environment variables (DIETPLAN__CATALOG__PATH, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DIETPLAN")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            builder = builder.set_override("narrative.api_key", api_key)?;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            builder = builder.set_override("narrative.model", model)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err("Catalog path must not be empty".to_string());
        }
        if self.narrative.timeout_secs == 0 {
            return Err("Narrative timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.narrative.temperature) {
            return Err(format!(
                "Narrative temperature must be between 0 and 2, got {}",
                self.narrative.temperature
            ));
        }
        Ok(())
    }
}
