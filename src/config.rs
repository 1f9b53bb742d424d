use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::ModelGeneration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub feedback: FeedbackSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub contributions: ContributionSettings,
    #[serde(default)]
    pub recommend: RecommendSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    #[serde(default = "default_feedback_path")]
    pub path: String,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            path: default_feedback_path(),
        }
    }
}

fn default_feedback_path() -> String {
    "data/feedback.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_generation_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_generation_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            endpoint: default_generation_endpoint(),
            model: default_generation_model(),
            api_key: None,
            timeout_secs: default_generation_timeout(),
        }
    }
}

fn default_generation_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_generation_model() -> String {
    "gemini-pro".to_string()
}
fn default_generation_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContributionSettings {
    #[serde(default = "default_contributions_path")]
    pub path: String,
    #[serde(default)]
    pub admin_key: Option<String>,
    #[serde(default)]
    pub discord_webhook: Option<String>,
    #[serde(default)]
    pub resend_api_key: Option<String>,
    #[serde(default)]
    pub notify_email: Option<String>,
}

impl Default for ContributionSettings {
    fn default() -> Self {
        Self {
            path: default_contributions_path(),
            admin_key: None,
            discord_webhook: None,
            resend_api_key: None,
            notify_email: None,
        }
    }
}

fn default_contributions_path() -> String {
    "data/contributions.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendSettings {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default)]
    pub model_generation: ModelGeneration,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            min_score: default_min_score(),
            model_generation: ModelGeneration::default(),
        }
    }
}

fn default_top_n() -> usize {
    3
}
fn default_min_score() -> f64 {
    30.0
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
    /// 1. Default values on the structs
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with ADVISOR_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ADVISOR_)
            // e.g., ADVISOR__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ADVISOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Well-known bare environment variables win over everything
        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ADVISOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay the deployment secrets that are conventionally provided as bare
/// environment variables rather than ADVISOR__-prefixed ones.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(key) = env::var("GEMINI_API_KEY") {
        builder = builder.set_override("generation.api_key", key)?;
    }
    if let Ok(key) = env::var("ADMIN_API_KEY") {
        builder = builder.set_override("contributions.admin_key", key)?;
    }
    if let Ok(url) = env::var("DISCORD_WEBHOOK_URL") {
        builder = builder.set_override("contributions.discord_webhook", url)?;
    }
    if let Ok(key) = env::var("RESEND_API_KEY") {
        builder = builder.set_override("contributions.resend_api_key", key)?;
    }
    if let Ok(email) = env::var("NOTIFY_EMAIL") {
        builder = builder.set_override("contributions.notify_email", email)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recommend_settings() {
        let recommend = RecommendSettings::default();
        assert_eq!(recommend.top_n, 3);
        assert_eq!(recommend.min_score, 30.0);
        assert_eq!(recommend.model_generation, ModelGeneration::V2);
    }

    #[test]
    fn test_default_paths() {
        let settings = Settings::default();
        assert_eq!(settings.catalog.path, "data/catalog.json");
        assert_eq!(settings.contributions.path, "data/contributions.json");
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
