use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_FLASH_SECS: u64 = 5;

/// Where and how the gateway talks to the remote API.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Sent with every request. Always includes the JSON content type.
    pub headers: Vec<(String, String)>,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Start-up configuration for the console binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub bind_addr: String,
    pub gateway: GatewayConfig,
    /// Lifetime of transient success messages.
    pub flash_ttl: Duration,
}

impl ConsoleConfig {
    /// Read `RECRUITDESK_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("RECRUITDESK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "RECRUITDESK_API_URL",
                value: base_url,
            });
        }

        let mut gateway = GatewayConfig::new(base_url);
        if let Some(raw) = lookup("RECRUITDESK_API_HEADERS") {
            for (name, value) in parse_headers(&raw)? {
                gateway = gateway.with_header(&name, &value);
            }
        }

        let flash_secs = match lookup("RECRUITDESK_FLASH_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "RECRUITDESK_FLASH_SECS",
                value: raw,
            })?,
            None => DEFAULT_FLASH_SECS,
        };

        Ok(Self {
            bind_addr: lookup("RECRUITDESK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            gateway,
            flash_ttl: Duration::from_secs(flash_secs),
        })
    }
}

/// `Name: value; Other: value` → pairs.
fn parse_headers(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(ConfigError::Invalid {
                key: "RECRUITDESK_API_HEADERS",
                value: pair.to_string(),
            }),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
    Header(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "Invalid value for {key}: '{value}'"),
            ConfigError::Header(e) => write!(f, "Invalid gateway header: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConsoleConfig, ConfigError> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ConsoleConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_match_original_deployment() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.gateway.base_url, "http://localhost:5000/api");
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert_eq!(cfg.flash_ttl, Duration::from_secs(5));
        assert_eq!(
            cfg.gateway.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn trims_trailing_slash_and_adds_headers() {
        let cfg = load(&[
            ("RECRUITDESK_API_URL", "https://api.example.com/v2/"),
            ("RECRUITDESK_API_HEADERS", "X-Tenant: acme; X-Trace:on"),
        ])
        .unwrap();
        assert_eq!(cfg.gateway.base_url, "https://api.example.com/v2");
        assert_eq!(cfg.gateway.headers.len(), 3);
        assert_eq!(cfg.gateway.headers[2], ("X-Trace".to_string(), "on".to_string()));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load(&[("RECRUITDESK_FLASH_SECS", "soon")]).is_err());
        assert!(load(&[("RECRUITDESK_API_URL", "localhost:5000")]).is_err());
        assert!(load(&[("RECRUITDESK_API_HEADERS", "no-colon-here")]).is_err());
    }
}
