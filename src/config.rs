use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "AARAM_ADDR";
pub const WORKERS_VAR: &str = "AARAM_WORKERS";
pub const LOG_FORMAT_VAR: &str = "AARAM_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Size of the astra worker pool.
    pub max_workers: usize,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            log_format: LogFormat::Compact,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            cfg.addr = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                var: ADDR_VAR,
                value: raw.clone(),
                reason: format!("{e}"),
            })?;
        }

        if let Some(raw) = lookup(WORKERS_VAR) {
            cfg.max_workers = match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: WORKERS_VAR,
                        value: raw,
                        reason: "must be at least 1".into(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: WORKERS_VAR,
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            };
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            cfg.log_format = match raw.trim().to_ascii_lowercase().as_str() {
                "compact" | "" => LogFormat::Compact,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: LOG_FORMAT_VAR,
                        value: raw,
                        reason: "expected `compact` or `json`".into(),
                    })
                }
            };
        }

        Ok(cfg)
    }
}
