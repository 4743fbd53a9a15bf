//! Server configuration, read from the environment

use std::env;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "unitconv";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: &'static str,
    pub version: &'static str,
    pub protocol_version: &'static str,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl ServerConfig {
    /// `UNITCONV_LOG` wins over `RUST_LOG`; both unset means `info`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = ["UNITCONV_LOG", "RUST_LOG"]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            name: SERVER_NAME,
            version: SERVER_VERSION,
            protocol_version: PROTOCOL_VERSION,
            log_filter,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(ServerConfig::default().log_filter, "info");
    }

    #[test]
    fn test_unitconv_log_wins() {
        let config = config_with(&[("UNITCONV_LOG", "debug"), ("RUST_LOG", "warn")]);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = config_with(&[("RUST_LOG", "unitconv_units=trace")]);
        assert_eq!(config.log_filter, "unitconv_units=trace");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = config_with(&[("UNITCONV_LOG", "  "), ("RUST_LOG", "warn")]);
        assert_eq!(config.log_filter, "warn");
    }
}
