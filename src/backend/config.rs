//! Backend configuration
//!
//! The base URL is resolved once, at construction, from the first available of:
//! an explicit override, the value baked in at build time
//! (`AUTHSCAN_BACKEND_URL`), and the literal default.

use crate::backend::error::{BackendError, BackendResult};
use crate::core::validation::validate_base_url;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// Base URL used when neither an override nor a build-time value is present
pub const DEFAULT_BASE_URL: &str = "http://localhost:4001/blockchain";

/// Default per-request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

const BUILD_TIME_BASE_URL: Option<&str> = option_env!("AUTHSCAN_BACKEND_URL");

/// Where the resolved base URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Override,
    BuildTime,
    Default,
}

impl fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseUrlSource::Override => write!(f, "override"),
            BaseUrlSource::BuildTime => write!(f, "build-time"),
            BaseUrlSource::Default => write!(f, "default"),
        }
    }
}

/// Resolved, immutable backend settings
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    base_url: Url,
    source: BaseUrlSource,
    timeout: Duration,
}

impl BackendConfig {
    /// Resolve the base URL from an optional override, the build-time value
    /// and the default, in that order
    pub fn resolve(override_url: Option<&str>) -> BackendResult<Self> {
        Self::resolve_from(override_url, BUILD_TIME_BASE_URL)
    }

    pub(crate) fn resolve_from(
        override_url: Option<&str>,
        build_time_url: Option<&str>,
    ) -> BackendResult<Self> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        let (raw, source) = if let Some(url) = present(override_url) {
            (url, BaseUrlSource::Override)
        } else if let Some(url) = present(build_time_url) {
            (url, BaseUrlSource::BuildTime)
        } else {
            (DEFAULT_BASE_URL, BaseUrlSource::Default)
        };

        let base_url = validate_base_url(raw).map_err(|message| BackendError::InvalidUrl {
            url: raw.to_string(),
            message,
        })?;

        log::debug!("Backend base URL {} (from {})", base_url, source);

        Ok(Self {
            base_url,
            source,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Use an explicit base URL
    pub fn with_base_url(base_url: &str) -> BackendResult<Self> {
        Self::resolve_from(Some(base_url), None)
    }

    /// Replace the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn source(&self) -> BaseUrlSource {
        self.source
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
