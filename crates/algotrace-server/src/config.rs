//! Server configuration from environment variables:
//! - `ALGOTRACE_HOST`: bind address (default: "0.0.0.0")
//! - `ALGOTRACE_PORT`: listen port (default: "3000")
//! - `ALGOTRACE_TRACE_CAPACITY`: traces kept for `GET /traces/{id}` (default: 256)

use crate::store::DEFAULT_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub trace_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            trace_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        ServerConfig {
            host: lookup("ALGOTRACE_HOST").unwrap_or(defaults.host),
            port: parse_or("ALGOTRACE_PORT", &lookup, defaults.port),
            trace_capacity: parse_or("ALGOTRACE_TRACE_CAPACITY", &lookup, defaults.trace_capacity),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_port_and_ignores_garbage() {
        let config = ServerConfig::from_lookup(|key| match key {
            "ALGOTRACE_PORT" => Some("8080".to_string()),
            "ALGOTRACE_TRACE_CAPACITY" => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert_eq!(config.trace_capacity, DEFAULT_CAPACITY);
    }
}
