//! Error types for REST calls and session mutations.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Callers convert every variant into a localized
//! string at the call site (or into the anonymous auth state) so views never
//! see an uncaught failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No response within the configured bound.
    #[error("request timed out")]
    Timeout,
    /// Browser-only call invoked outside the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to show the end user: the server's `message`/`error` field when
    /// present, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// HTTP status, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure of a login/register/logout flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Registration rejected locally before any request was made.
    #[error("Hasła nie są identyczne")]
    PasswordMismatch,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionError {
    /// Localized message for the login form.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::PasswordMismatch => self.to_string(),
            Self::Api(err) => err.user_message(fallback),
        }
    }
}
