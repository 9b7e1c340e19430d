//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend host/port is deployment configuration, not code. The WASM
//! bundle has no process environment at runtime, so values are read from the
//! compile-time environment via `option_env!` and fall back to local-dev
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Default backend base URL for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Cookie holding the encoded session token.
pub const SESSION_COOKIE: &str = "session_data";

/// Upper bound on how long the identity probe may keep the app in `checking`.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay before a non-admin is sent home from an admin-only view.
pub const ADMIN_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Runtime configuration shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without trailing slash.
    pub api_base: String,
    pub session_cookie: String,
    pub probe_timeout: Duration,
    pub admin_redirect_delay: Duration,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            session_cookie: SESSION_COOKIE.to_owned(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            admin_redirect_delay: ADMIN_REDIRECT_DELAY,
            log_level: log::Level::Info,
        }
    }
}

impl ClientConfig {
    /// Build the config from `GAMERBLOG_API_BASE` and `GAMERBLOG_LOG` captured at compile time.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GAMERBLOG_API_BASE"), option_env!("GAMERBLOG_LOG"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_owned();
        }
        if let Some(level) = log_level.and_then(|raw| raw.trim().parse::<log::Level>().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Absolute URL for an API path such as `/api/user`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
