//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `TRANSFORMATION_ASSISTANT`
//! prefix and `__` between nested keys. Every section has defaults, so the
//! service starts with an empty environment.
//!
//! # Example
//!
//! ```no_run
//! use transformation_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod scanner;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use scanner::ScannerConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TRANSFORMATION_ASSISTANT";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM gateway (OpenAI key, model, timeout)
    #[serde(default)]
    pub ai: AiConfig,

    /// Keyword table and thresholds
    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads variables with the `TRANSFORMATION_ASSISTANT` prefix
    /// 3. Uses `__` (double underscore) between nested keys
    ///
    /// # Environment Variable Format
    ///
    /// - `TRANSFORMATION_ASSISTANT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TRANSFORMATION_ASSISTANT__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key`
    /// - `TRANSFORMATION_ASSISTANT__SCANNER__KEYWORDS_PATH=keywords.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.scanner.validate()?;

        // The gateway must give up before the router drops the request.
        if self.server.request_timeout_secs <= self.ai.timeout_secs {
            return Err(ValidationError::TimeoutOrder {
                server_secs: self.server.request_timeout_secs,
                ai_secs: self.ai.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests that touch them
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TRANSFORMATION_ASSISTANT__SERVER__PORT",
        "TRANSFORMATION_ASSISTANT__SERVER__ENVIRONMENT",
        "TRANSFORMATION_ASSISTANT__AI__OPENAI_API_KEY",
        "TRANSFORMATION_ASSISTANT__AI__MODEL",
        "TRANSFORMATION_ASSISTANT__SCANNER__HIGH_THRESHOLD",
        "TRANSFORMATION_ASSISTANT__SCANNER__MEDIUM_THRESHOLD",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.scanner.high_threshold, 6);
        assert_eq!(config.scanner.medium_threshold, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TRANSFORMATION_ASSISTANT__SERVER__PORT", "3000");
        env::set_var("TRANSFORMATION_ASSISTANT__AI__OPENAI_API_KEY", "sk-test");
        env::set_var("TRANSFORMATION_ASSISTANT__AI__MODEL", "gpt-4o");
        env::set_var("TRANSFORMATION_ASSISTANT__SCANNER__HIGH_THRESHOLD", "8");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.ai.has_openai());
        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.scanner.high_threshold, 8);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TRANSFORMATION_ASSISTANT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_validate_requires_server_timeout_above_ai_timeout() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 1;
        config.ai.timeout_secs = 300;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TimeoutOrder {
                server_secs: 1,
                ai_secs: 300
            })
        ));

        config.server.request_timeout_secs = 60;
        config.ai.timeout_secs = 60;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TimeoutOrder { .. })
        ));

        config.server.request_timeout_secs = 61;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ai_timeout_beyond_cap() {
        let mut config = AppConfig::default();
        config.ai.timeout_secs = 600;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TRANSFORMATION_ASSISTANT__SCANNER__HIGH_THRESHOLD", "2");
        env::set_var("TRANSFORMATION_ASSISTANT__SCANNER__MEDIUM_THRESHOLD", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
