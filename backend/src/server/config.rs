//! Environment-driven server configuration.
//!
//! | Variable              | Default                        |
//! |-----------------------|--------------------------------|
//! | `USER_API_BIND_ADDR`  | `0.0.0.0:8080`                 |
//! | `USER_API_SWAGGER_UI` | enabled in debug builds only   |
//! | `USER_API_JSON_LIMIT` | `1048576`                      |

use mockable::Env;
use std::net::SocketAddr;
use tracing::debug;

use crate::inbound::http::extractors::DEFAULT_JSON_LIMIT;

pub(crate) const BIND_ADDR_ENV: &str = "USER_API_BIND_ADDR";
pub(crate) const SWAGGER_UI_ENV: &str = "USER_API_SWAGGER_UI";
pub(crate) const JSON_LIMIT_ENV: &str = "USER_API_JSON_LIMIT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const ADDR_EXPECTED: &str = "host:port socket address";
const LIMIT_EXPECTED: &str = "positive byte count";

/// Errors raised while reading server settings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerSettingsError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value as read.
        value: String,
        /// Accepted format.
        expected: &'static str,
    },
}

impl ServerSettingsError {
    fn invalid(name: &'static str, value: &str, expected: &'static str) -> Self {
        Self::InvalidEnv {
            name,
            value: value.to_owned(),
            expected,
        }
    }
}

/// Settings consumed by [`crate::server::create_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) swagger_ui: bool,
    pub(crate) json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            swagger_ui: cfg!(debug_assertions),
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Read settings from the environment, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    /// [`ServerSettingsError::InvalidEnv`] when a variable is set but cannot be
    /// parsed.
    ///
    /// # Examples
    /// ```
    /// use mockable::MockEnv;
    /// use user_api::server::ServerConfig;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "USER_API_BIND_ADDR" => Some("127.0.0.1:9000".to_owned()),
    ///     _ => None,
    /// });
    /// let config = ServerConfig::from_env(&env).expect("valid settings");
    /// assert_eq!(config.bind_addr().port(), 9000);
    /// ```
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ServerSettingsError> {
        let defaults = Self::default();

        let bind_addr = match env.string(BIND_ADDR_ENV) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ServerSettingsError::invalid(BIND_ADDR_ENV, &value, ADDR_EXPECTED))?,
            None => {
                debug!("{BIND_ADDR_ENV} not set; binding {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }
        };

        let swagger_ui = match env.string(SWAGGER_UI_ENV) {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| ServerSettingsError::invalid(SWAGGER_UI_ENV, &value, BOOL_EXPECTED))?,
            None => defaults.swagger_ui,
        };

        let json_limit = match env.string(JSON_LIMIT_ENV) {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| {
                    ServerSettingsError::invalid(JSON_LIMIT_ENV, &value, LIMIT_EXPECTED)
                })?,
            None => defaults.json_limit,
        };

        Ok(Self {
            bind_addr,
            swagger_ui,
            json_limit,
        })
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether `/docs/` and `/api-docs/openapi.json` are served.
    #[must_use]
    pub fn swagger_ui(&self) -> bool {
        self.swagger_ui
    }

    /// Maximum accepted request body size in bytes.
    #[must_use]
    pub fn json_limit(&self) -> usize {
        self.json_limit
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
