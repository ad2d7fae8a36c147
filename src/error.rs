//! Error types shared by the session store, REST client, and storage layer.
//!
//! ERROR HANDLING
//! ==============
//! Every error here is recoverable. Login failures become notifications and
//! leave the user on the login form; a corrupt stored session resets to
//! logged-out; storage write failures are logged and rolled back.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback text when a rejected login carries no usable `message`.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Failures of session operations and backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The request could not be sent or the reply could not be read.
    #[error("network request failed: {0}")]
    Network(String),

    /// The login endpoint answered with a non-2xx status.
    #[error("{message}")]
    AuthRejected { status: u16, message: String },

    /// A 2xx body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The persisted user record could not be parsed at restore.
    #[error("stored session is corrupt: {0}")]
    StorageCorrupt(String),

    /// A non-login endpoint answered with a non-2xx status.
    #[error("request failed with status {0}")]
    HttpStatus(u16),

    /// `login` was called while another login request is outstanding.
    #[error("a login request is already in progress")]
    LoginInProgress,

    /// An authenticated call was attempted without a session.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl SessionError {
    /// Whether the error came back from the server as an authorization failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::AuthRejected { status: 401 | 403, .. } | Self::HttpStatus(401 | 403)
        )
    }
}

/// Failures writing to persistent key/value storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the write (quota, private mode).
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Invalid build-time configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL: {0:?}")]
    InvalidBaseUrl(String),

    #[error("storage namespace must not be empty")]
    EmptyNamespace,
}
