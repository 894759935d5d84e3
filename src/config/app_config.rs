use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{DailySchedule, DomainError, GenerationConfig};

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable selecting the listen port
pub const PORT_ENV: &str = "PORT";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub gemini: GeminiConfig,
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Gemini provider settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Request timeout; the HTTP client default applies when unset
    pub timeout_secs: Option<u64>,
    pub generation: GenerationConfig,
}

/// Daily post job settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub enabled: bool,
    /// Local time of day, `HH:MM`
    pub run_at: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: crate::infrastructure::llm::DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: None,
            generation: GenerationConfig::default(),
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("generation", &self.generation)
            .finish()
    }
}

impl GeminiConfig {
    /// The API key, treating an empty value as missing
    pub fn require_api_key(&self) -> Result<&str, DomainError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "The {} environment variable is not set",
                    API_KEY_ENV
                ))
            })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            run_at: "09:00".to_string(),
        }
    }
}

impl SchedulerConfig {
    pub fn schedule(&self) -> Result<DailySchedule, DomainError> {
        DailySchedule::parse(&self.run_at)
    }
}

impl AppConfig {
    /// Load configuration from files, `APP__*` variables, `PORT` and `GOOGLE_API_KEY`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(env::var(PORT_ENV).ok(), env::var(API_KEY_ENV).ok())
    }

    fn load_with(
        port: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port)?
            .set_override_option("gemini.api_key", api_key)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.generation, GenerationConfig::default());
        assert!(config.scheduler.enabled);
        assert_eq!(config.scheduler.run_at, "09:00");
        assert!(config.gemini.timeout().is_none());
    }

    #[test]
    fn test_load_applies_port_and_api_key_overrides() {
        let config = AppConfig::load_with(Some("9191".to_string()), Some("abc".to_string()))
            .unwrap();

        assert_eq!(config.server.port, 9191);
        assert_eq!(config.gemini.require_api_key().unwrap(), "abc");
    }

    #[test]
    fn test_load_without_overrides_keeps_defaults() {
        let config = AppConfig::load_with(None, None).unwrap();

        assert!(config.gemini.require_api_key().is_err());
        assert_eq!(config.scheduler.schedule().unwrap(), DailySchedule::default());
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let gemini = GeminiConfig {
            api_key: Some("   ".to_string()),
            ..GeminiConfig::default()
        };

        let err = gemini.require_api_key().unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let gemini = GeminiConfig {
            api_key: Some("super-secret".to_string()),
            ..GeminiConfig::default()
        };

        let debug = format!("{:?}", gemini);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_invalid_run_at_is_a_configuration_error() {
        let scheduler = SchedulerConfig {
            enabled: true,
            run_at: "9h".to_string(),
        };

        assert!(scheduler.schedule().is_err());
    }
}
