use crate::use_cases::LoginPolicy;
use serde::Deserialize;
use std::{
    env, fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};
use url::Url;

pub const DEFAULT_PRODUCTS_URL: &str = "https://dummyjson.com/products";
pub const DEFAULT_LOGIN_URL: &str = "https://dummyjson.com/auth/login";

// Runtime settings for the gateway. Defaults, then an optional TOML file named
// by GATEWAY_CONFIG, then individual environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub products_url: String,
    pub login_url: String,
    // Unset means the HTTP client's own defaults apply.
    pub upstream_timeout_ms: Option<u64>,
    pub relay_login_status: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            static_dir: PathBuf::from("public"),
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            upstream_timeout_ms: None,
            relay_login_status: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    InvalidValue {
        key: &'static str,
        value: String,
    },
    InvalidUrl {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config file {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "failed to parse config file: {err}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
            ConfigError::InvalidUrl { key, value, reason } => {
                write!(f, "invalid url for {key} ({value:?}): {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GatewayConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    // Same as `load`, with the environment supplied by `lookup`.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("GATEWAY_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(ConfigError::Parse)
    }

    // `lookup` is `std::env::var` in production and a map in tests.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup("GATEWAY_HOST") {
            self.host = parse_value("GATEWAY_HOST", value)?;
        }
        if let Some(value) = lookup("GATEWAY_PORT") {
            self.port = parse_value("GATEWAY_PORT", value)?;
        }
        if let Some(value) = lookup("GATEWAY_STATIC_DIR") {
            self.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup("PRODUCTS_URL") {
            self.products_url = value;
        }
        if let Some(value) = lookup("LOGIN_URL") {
            self.login_url = value;
        }
        if let Some(value) = lookup("UPSTREAM_TIMEOUT_MS") {
            self.upstream_timeout_ms = Some(parse_value("UPSTREAM_TIMEOUT_MS", value)?);
        }
        if let Some(value) = lookup("RELAY_LOGIN_STATUS") {
            self.relay_login_status = parse_flag("RELAY_LOGIN_STATUS", value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_upstream_url("products_url", &self.products_url)?;
        validate_upstream_url("login_url", &self.login_url)?;
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_ms.map(Duration::from_millis)
    }

    pub fn login_policy(&self) -> LoginPolicy {
        LoginPolicy::from_relay_flag(self.relay_login_status)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

fn validate_upstream_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}
