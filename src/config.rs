use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Search engine tunables
    #[serde(default)]
    pub search: SearchOptions,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: MEDAID_)
            .add_source(
                config::Environment::with_prefix("MEDAID")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Search engine tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Minimum similarity ratio (exclusive) for a record to be returned
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Per-category result cap when the request supplies none
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Suggestion cap when the request supplies none
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Hard ceiling on caller-supplied limits
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            default_limit: default_limit(),
            suggestion_limit: default_suggestion_limit(),
            max_results: default_max_results(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_threshold() -> f64 {
    0.30
}

fn default_limit() -> usize {
    10
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_max_results() -> usize {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        assert_eq!(default_port(), 5000);
        assert_eq!(default_threshold(), 0.30);
        assert_eq!(default_limit(), 10);
        assert_eq!(default_suggestion_limit(), 5);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_embedded_defaults_parse() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.search.threshold, 0.30);
        assert_eq!(config.search.max_results, 100);
    }
}
