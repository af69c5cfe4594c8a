//! # Gateway Config
//!
//! Environment-style configuration for the chat failover gateway.
//!
//! Credentials are optional: a missing provider credential disables that
//! adapter rather than failing startup. The timing relation between the
//! per-attempt deadline and the end-to-end budget is validated here so the
//! dispatcher can rely on it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use secrecy::SecretString;
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable holding the primary provider credential.
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
/// Environment variable holding the secondary provider credential.
pub const GEMINI_KEY_VAR: &str = "GEMINI_KEY";
/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the per-attempt deadline in seconds.
pub const ATTEMPT_DEADLINE_VAR: &str = "ATTEMPT_DEADLINE_SECS";
/// Environment variable holding the end-to-end request budget in seconds.
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_ATTEMPT_DEADLINE: Duration = Duration::from_secs(25);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration load error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {variable}: {message}")]
    Invalid {
        /// The offending variable name.
        variable: String,
        /// What went wrong while parsing.
        message: String,
    },

    /// The per-attempt deadline does not fit inside the request budget.
    #[error(
        "attempt deadline ({attempt_deadline:?}) must be strictly less than \
         the request timeout ({request_timeout:?})"
    )]
    DeadlineBudget {
        /// The configured per-attempt deadline.
        attempt_deadline: Duration,
        /// The configured end-to-end budget.
        request_timeout: Duration,
    },
}

/// Gateway configuration, read-only after initialization.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Credential for the primary provider, when configured.
    pub groq_api_key: Option<SecretString>,
    /// Credential for the secondary provider, when configured.
    pub gemini_api_key: Option<SecretString>,
    /// Wall-clock deadline for each individual provider attempt.
    pub attempt_deadline: Duration,
    /// End-to-end budget for one inbound request.
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            groq_api_key: None,
            gemini_api_key: None,
            attempt_deadline: DEFAULT_ATTEMPT_DEADLINE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    /// Returns an error for unparseable values or an attempt deadline that
    /// does not fit inside the request budget. Missing credentials are not
    /// errors; the affected adapter is simply disabled.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&lookup, PORT_VAR, DEFAULT_PORT)?;
        let attempt_secs = parse_var(
            &lookup,
            ATTEMPT_DEADLINE_VAR,
            DEFAULT_ATTEMPT_DEADLINE.as_secs(),
        )?;
        let timeout_secs = parse_var(
            &lookup,
            REQUEST_TIMEOUT_VAR,
            DEFAULT_REQUEST_TIMEOUT.as_secs(),
        )?;

        let config = Self {
            port,
            groq_api_key: read_secret(&lookup, GROQ_API_KEY_VAR),
            gemini_api_key: read_secret(&lookup, GEMINI_KEY_VAR),
            attempt_deadline: Duration::from_secs(attempt_secs),
            request_timeout: Duration::from_secs(timeout_secs),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the timing configuration.
    ///
    /// # Errors
    /// Returns an error when the per-attempt deadline is not strictly less
    /// than the end-to-end budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempt_deadline >= self.request_timeout {
            return Err(ConfigError::DeadlineBudget {
                attempt_deadline: self.attempt_deadline,
                request_timeout: self.request_timeout,
            });
        }
        Ok(())
    }

    /// Whether any provider credential is configured.
    #[must_use]
    pub fn has_any_credential(&self) -> bool {
        self.groq_api_key.is_some() || self.gemini_api_key.is_some()
    }
}

fn read_secret<F>(lookup: &F, name: &str) -> Option<SecretString>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => Some(SecretString::new(value)),
        None => {
            warn!(variable = name, "credential not set, provider disabled");
            None
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            variable: name.to_string(),
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}
