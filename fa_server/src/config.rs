//! Server configuration loaded from environment variables.
//!
//! All variables are optional. CLI flags, when given, take precedence over the
//! environment.

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Default address the HTTP server binds to.
const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Configuration error with context about which variable is wrong.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to (`SERVER_BIND`).
    pub bind: SocketAddr,
    /// Address the Prometheus exporter binds to (`METRICS_BIND`). The
    /// exporter is disabled when unset.
    pub metrics_bind: Option<SocketAddr>,
}

impl ServerConfig {
    /// Loads configuration from the environment, with CLI overrides taking
    /// precedence. Unset or unparseable variables fall back to defaults.
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        metrics_bind_override: Option<SocketAddr>,
    ) -> Self {
        let bind = bind_override.unwrap_or_else(|| parse_env_or("SERVER_BIND", default_bind()));
        let metrics_bind =
            metrics_bind_override.or_else(|| env::var("METRICS_BIND").ok().and_then(|v| v.parse().ok()));
        Self { bind, metrics_bind }
    }

    /// Validates that the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("must differ from the server bind address {}", self.bind),
            });
        }
        Ok(())
    }
}

fn default_bind() -> SocketAddr {
    DEFAULT_BIND.parse().expect("default bind address must parse")
}

/// Parses an environment variable, falling back to a default when the
/// variable is unset or unparseable.
fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_bind_parses() {
        assert_eq!(default_bind().port(), 8080);
    }

    #[test]
    fn test_cli_overrides_win() {
        let bind: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let metrics: SocketAddr = "0.0.0.0:9001".parse().unwrap();
        let config = ServerConfig::from_env(Some(bind), Some(metrics));
        assert_eq!(config.bind, bind);
        assert_eq!(config.metrics_bind, Some(metrics));
    }

    #[test]
    fn test_validate_accepts_distinct_addresses() {
        let config = ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            metrics_bind: Some("127.0.0.1:9090".parse().unwrap()),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_disabled_metrics() {
        let config = ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            metrics_bind: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_shared_bind() {
        let bind: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let config = ServerConfig {
            bind,
            metrics_bind: Some(bind),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("METRICS_BIND"));
    }
}
