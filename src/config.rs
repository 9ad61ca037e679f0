use crate::error::ConfigError;
use crate::token::generate_token;
use regex::Regex;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::sync::LazyLock;
use tracing::{info, warn};

pub const PORT_ENV: &str = "TOOL_SERVER_PORT";
pub const TOKEN_ENV: &str = "TOOL_SERVER_TOKEN";
pub const DEFAULT_PORT: u16 = 48081;

static PORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("port pattern is valid"));

/// Returns true when `value` is one or more ASCII digits. No range check.
pub fn validate_port(value: &str) -> bool {
    PORT_PATTERN.is_match(value)
}

/// Default the port when the input is absent or empty, otherwise parse it.
pub fn resolve_port(input: Option<&str>) -> Result<u16, ConfigError> {
    let raw = match input {
        None | Some("") => return Ok(DEFAULT_PORT),
        Some(raw) => raw,
    };
    if !validate_port(raw) {
        return Err(ConfigError::InvalidPortFormat(raw.to_string()));
    }
    raw.parse::<u16>()
        .map_err(|_| ConfigError::PortOutOfRange(raw.to_string()))
}

/// Keep a supplied token verbatim, or generate one when absent or empty.
pub fn resolve_token(input: Option<&str>) -> Result<String, ConfigError> {
    match input {
        None | Some("") => generate_token(),
        Some(token) => Ok(token.to_string()),
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ToolServerConfig {
    pub port: u16,
    pub token: String,
    pub token_generated: bool,
}

impl ToolServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Resolve both settings through `lookup`, which maps a variable name to its raw value.
    ///
    /// A value that is not valid UTF-8 counts as supplied: a port fails the
    /// digits check and a token is rejected rather than regenerated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let raw_port = match lookup(PORT_ENV).map(OsString::into_string) {
            None => None,
            Some(Ok(p)) => Some(p),
            Some(Err(p)) => {
                let lossy = p.to_string_lossy().into_owned();
                warn!(value = %lossy, "{PORT_ENV} is not valid UTF-8");
                return Err(ConfigError::InvalidPortFormat(lossy));
            }
        };
        let raw_token = match lookup(TOKEN_ENV).map(OsString::into_string) {
            None => None,
            Some(Ok(t)) => Some(t),
            Some(Err(_)) => {
                warn!("{TOKEN_ENV} is not valid UTF-8");
                return Err(ConfigError::NonUnicodeToken);
            }
        };

        let port = resolve_port(raw_port.as_deref()).inspect_err(|e| {
            warn!(error = %e, "{PORT_ENV} rejected");
        })?;

        let token_generated = raw_token.as_deref().map_or(true, str::is_empty);
        let token = resolve_token(raw_token.as_deref())?;
        if token_generated {
            info!("{TOKEN_ENV} not set, generated a random token");
        }

        info!(port, token_generated, "Resolved tool server configuration");
        Ok(Self {
            port,
            token,
            token_generated,
        })
    }
}

impl fmt::Debug for ToolServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolServerConfig")
            .field("port", &self.port)
            .field("token", &"<redacted>")
            .field("token_generated", &self.token_generated)
            .finish()
    }
}
