//! Server configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `LISTKEEPER_HOST` | `127.0.0.1` |
//! | `LISTKEEPER_PORT` | `8080` |
//! | `LISTKEEPER_SESSION_TTL_MINUTES` | `60` (1 to 525600) |
//! | `LISTKEEPER_SECURE_COOKIES` | `false` |

use std::net::SocketAddr;
use thiserror::Error;
use tower_sessions::cookie::time::Duration;

const HOST_VAR: &str = "LISTKEEPER_HOST";
const PORT_VAR: &str = "LISTKEEPER_PORT";
const TTL_VAR: &str = "LISTKEEPER_SESSION_TTL_MINUTES";
const SECURE_VAR: &str = "LISTKEEPER_SECURE_COOKIES";

/// Longest accepted session inactivity timeout: one year, in minutes.
pub const MAX_SESSION_TTL_MINUTES: i64 = 365 * 24 * 60;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to something that could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },

    /// Host and port do not form a socket address.
    #[error("invalid listen address {0}")]
    InvalidAddress(String),
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Idle minutes before a session expires, within
    /// `1..=MAX_SESSION_TTL_MINUTES`
    pub session_ttl_minutes: i64,
    /// Mark the session cookie `Secure`
    pub secure_cookies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            session_ttl_minutes: 60,
            secure_cookies: false,
        }
    }
}

impl ServerConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the session inactivity timeout, clamped to
    /// `1..=MAX_SESSION_TTL_MINUTES`.
    #[must_use]
    pub fn with_session_ttl_minutes(mut self, minutes: i64) -> Self {
        self.session_ttl_minutes = minutes.clamp(1, MAX_SESSION_TTL_MINUTES);
        self
    }

    /// Session inactivity timeout.
    ///
    /// Clamped like [`with_session_ttl_minutes`](Self::with_session_ttl_minutes),
    /// since the field is public and may have been set directly.
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        Duration::minutes(self.session_ttl_minutes.clamp(1, MAX_SESSION_TTL_MINUTES))
    }

    /// Require HTTPS for the session cookie.
    #[must_use]
    pub const fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to read variables. Unset variables keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but
    /// malformed, or if the session TTL is outside
    /// `1..=MAX_SESSION_TTL_MINUTES`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = parse(PORT_VAR, port)?;
        }
        if let Some(ttl) = lookup(TTL_VAR) {
            let minutes: i64 = parse(TTL_VAR, ttl.clone())?;
            if !(1..=MAX_SESSION_TTL_MINUTES).contains(&minutes) {
                return Err(ConfigError::InvalidValue { name: TTL_VAR, value: ttl });
            }
            config.session_ttl_minutes = minutes;
        }
        if let Some(secure) = lookup(SECURE_VAR) {
            config.secure_cookies = match secure.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigError::InvalidValue { name: SECURE_VAR, value: secure }),
            };
        }

        Ok(config)
    }

    /// Address the listener binds to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if the host is not an IP
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}
