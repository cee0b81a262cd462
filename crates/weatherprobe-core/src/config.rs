// crates/weatherprobe-core/src/config.rs
// ============================================================================
// Module: Endpoint Configuration
// Description: Environment-backed endpoint configuration for probe sessions.
// Purpose: Resolve and validate the base URL and timeout once per session.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! The endpoint target is resolved once at session start and shared read-only
//! by every probe case. Environment parsing is strict: values must be valid
//! UTF-8 and non-empty, and the base URL must parse as an absolute URL.
//! Invalid values fail closed at load time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use url::Url;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Fallback base URL when [`ProbeEnv::BaseUrl`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://api:8080";

/// Per-request timeout before any environment override is applied.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for endpoint configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeEnv {
    /// Base URL of the API under test.
    BaseUrl,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl ProbeEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "APP_BASE_URL",
            Self::TimeoutSeconds => "WEATHERPROBE_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while resolving endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment value contained invalid UTF-8.
    #[error("{name} must be valid UTF-8")]
    NotUtf8 {
        /// Environment variable name.
        name: &'static str,
    },
    /// An environment value was set but empty or whitespace.
    #[error("{name} must not be empty")]
    Empty {
        /// Environment variable name.
        name: &'static str,
    },
    /// A timeout override was not a positive integer number of seconds.
    #[error("{name} must be a positive integer number of seconds")]
    InvalidTimeout {
        /// Environment variable or flag name.
        name: &'static str,
    },
    /// The base URL did not parse as an absolute URL.
    #[error("invalid base URL `{value}`: {reason}")]
    InvalidBaseUrl {
        /// Offending value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {reason}")]
    ClientBuild {
        /// Builder diagnostic.
        reason: String,
    },
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Immutable endpoint target shared read-only by every probe case in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Validated absolute base URL of the API under test.
    base_url: Url,
    /// Effective per-request timeout.
    timeout: Duration,
}

impl EndpointConfig {
    /// Resolves configuration from the environment.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when the base URL variable is unset.
    /// A timeout override acts as a minimum and never shortens
    /// [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when an environment value is not valid UTF-8,
    /// is empty, is an invalid timeout, or is a malformed base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = read_env_nonempty(ProbeEnv::BaseUrl)?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(&base_url)?.with_timeout(timeout_from_env()?))
    }

    /// Builds a configuration from an explicit base URL with the default
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the value is not an
    /// absolute URL that can serve as a base.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                value: base_url.to_string(),
                reason: "URL cannot serve as a base".to_string(),
            });
        }
        Ok(Self {
            base_url: parsed,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Replaces the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the validated base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the effective per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// ============================================================================
// SECTION: Environment Resolution
// ============================================================================

/// Resolves the effective timeout from the environment alone.
///
/// The override acts as a minimum and never shortens [`DEFAULT_TIMEOUT`].
/// Callers that take the base URL from another source still consult this so
/// the timeout override is never silently dropped.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidTimeout`] when the override is set but not a
/// positive integer number of seconds.
pub fn timeout_from_env() -> Result<Duration, ConfigError> {
    Ok(read_env_nonempty(ProbeEnv::TimeoutSeconds)?
        .map(|raw| parse_timeout_seconds(ProbeEnv::TimeoutSeconds.as_str(), &raw))
        .transpose()?
        .map_or(DEFAULT_TIMEOUT, |override_timeout| DEFAULT_TIMEOUT.max(override_timeout)))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
fn read_env_strict(key: ProbeEnv) -> Result<Option<String>, ConfigError> {
    std::env::var_os(key.as_str()).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| ConfigError::NotUtf8 {
            name: key.as_str(),
        })
    })
}

/// Reads an environment variable and rejects empty values.
fn read_env_nonempty(key: ProbeEnv) -> Result<Option<String>, ConfigError> {
    match read_env_strict(key)? {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty {
            name: key.as_str(),
        }),
        other => Ok(other),
    }
}

/// Parses a positive timeout value from an environment string.
fn parse_timeout_seconds(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
        name,
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            name,
        });
    }
    Ok(Duration::from_secs(secs))
}
