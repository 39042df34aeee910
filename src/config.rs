use serde::{Deserialize, Serialize};
use tracing::{info, error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated
    pub cors_origins: Option<String>,

    /// Database URL
    #[serde(default = "default_db_url")]
    pub db_url: String,

    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Self::from_vars(std::env::vars())
    }

    /// Build the configuration from key/value pairs named like the environment variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        match envy::from_iter::<_, Config>(vars) {
            Ok(config) => {
                info!("✅ Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("❌ Failed to load configuration: {}", e);
                Err(ConfigError::EnvError(e))
            }
        }
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.to_lowercase() == "dev" || self.environment.to_lowercase() == "development"
    }

    /// Allowed CORS origins, empty when CORS is not configured
    pub fn cors_origin_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            cors_origins: None,
            db_url: default_db_url(),
            db_max_connections: default_db_max_connections(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EnvError(envy::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvError(e) => write!(f, "Environment variable error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_db_url() -> String {
    "sqlite://superlists.db?mode=rwc".to_string()
}

fn default_db_max_connections() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.db_url, "sqlite://superlists.db?mode=rwc");
        assert_eq!(config.db_max_connections, 5);
        assert!(config.is_development());
        assert!(config.cors_origin_list().is_empty());
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_vars(vars(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ENVIRONMENT", "prod"),
            ("DB_URL", "sqlite::memory:"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ]))
        .unwrap();
        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert!(!config.is_development());
        assert_eq!(config.db_url, "sqlite::memory:");
        assert_eq!(config.cors_origin_list(), vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let result = Config::from_vars(vars(&[("PORT", "not-a-port")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }
}
