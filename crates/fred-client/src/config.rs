//! Provider connection settings resolved from the environment.

use crate::error::{ClientError, ClientResult};

/// Fixed provider base address.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "FRED_API_KEY";

/// Environment variable overriding the provider base address.
pub const BASE_URL_ENV: &str = "FRED_BASE_URL";

/// Where to send operators who have no key yet.
pub const API_KEY_HELP_URL: &str = "https://fred.stlouisfed.org/docs/api/api_key.html";

/// Resolved settings for a [`FredClient`](crate::FredClient).
///
/// The API key is optional here so a server can start without one; the key is
/// only demanded when the first client is built.
#[derive(Clone, PartialEq, Eq)]
pub struct FredSettings {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for FredSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for FredSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FredSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl FredSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Point the client at a different base address (mock servers, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_key: non_blank(API_KEY_ENV),
            base_url: non_blank(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Return the API key or a configuration error telling the operator where to get one.
    pub fn require_api_key(&self) -> ClientResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(missing_api_key()),
        }
    }
}

pub(crate) fn missing_api_key() -> ClientError {
    ClientError::config_error(format!(
        "{API_KEY_ENV} environment variable is required. \
         Get your free API key from: {API_KEY_HELP_URL}"
    ))
}
