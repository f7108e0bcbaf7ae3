use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub firebase: FirebaseSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseSettings {
    pub api_key: String,
    pub database_url: String,
    pub storage_bucket: String,
    #[serde(default = "default_auth_endpoint")]
    pub auth_endpoint: String,
    #[serde(default = "default_storage_endpoint")]
    pub storage_endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_voice_delay_ms")]
    pub voice_delay_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: default_search_limit(),
            max_limit: default_max_limit(),
            voice_delay_ms: default_voice_delay_ms(),
        }
    }
}

fn default_search_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

fn default_voice_delay_ms() -> u64 {
    2000
}

fn default_auth_endpoint() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

fn default_storage_endpoint() -> String {
    "https://firebasestorage.googleapis.com".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with JOBCON_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with JOBCON_)
            // e.g., JOBCON_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("JOBCON")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("JOBCON")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the bare (unprefixed) Firebase environment variables commonly set in
/// deployment, so a plain FIREBASE_API_KEY works without the JOBCON prefix.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("FIREBASE_API_KEY") {
        builder = builder.set_override("firebase.api_key", api_key)?;
    }
    if let Ok(database_url) = env::var("FIREBASE_DATABASE_URL") {
        builder = builder.set_override("firebase.database_url", database_url)?;
    }
    if let Ok(bucket) = env::var("FIREBASE_STORAGE_BUCKET") {
        builder = builder.set_override("firebase.storage_bucket", bucket)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_settings() {
        let search = SearchSettings::default();
        assert_eq!(search.default_limit, 20);
        assert_eq!(search.max_limit, 100);
        assert_eq!(search.voice_delay_ms, 2000);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_endpoints() {
        assert!(default_auth_endpoint().starts_with("https://identitytoolkit"));
        assert!(default_storage_endpoint().starts_with("https://firebasestorage"));
    }
}
