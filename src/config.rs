//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Environment Metadata ===
    /// Deployment environment name (development, production, test).
    #[serde(default = "default_node_env")]
    pub node_env: String,

    /// Node hostname, injected by the orchestrator via the downward API.
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Kubernetes namespace the pod runs in.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_node_env() -> String {
    "development".to_string()
}

fn default_hostname() -> String {
    "unknown".to_string()
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.node_env.is_empty() {
            return Err("NODE_ENV must not be empty".to_string());
        }

        Ok(())
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            node_env: default_node_env(),
            hostname: default_hostname(),
            namespace: default_namespace(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_port(), 8080);
        assert_eq!(default_node_env(), "development");
        assert_eq!(default_namespace(), "default");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_environment() {
        let config = Config {
            node_env: String::new(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_production());
    }

    #[test]
    fn production_flag_tracks_node_env() {
        let config = Config {
            node_env: "production".to_string(),
            ..Config::default()
        };

        assert!(config.is_production());
    }
}
