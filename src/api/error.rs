//
//  catchtrend
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for the CatchTrend API client.
//!
//! Every call through [`ApiClient`](super::ApiClient) yields either its typed
//! payload or exactly one [`NetworkError`]. The taxonomy is closed so that
//! collaborators can map each kind to user-facing copy and a retry affordance.
//!
//! # Example
//!
//! ```rust
//! use catchtrend::api::NetworkError;
//!
//! fn describe(err: &NetworkError) -> &'static str {
//!     match err {
//!         NetworkError::Unauthorized => "please log in again",
//!         NetworkError::RateLimited => "slow down",
//!         e if e.is_retryable() => "try again",
//!         _ => "something went wrong",
//!     }
//! }
//!
//! assert_eq!(describe(&NetworkError::Timeout), "try again");
//! ```

use thiserror::Error;

use crate::auth::StorageError;

/// The result of a single API call.
pub type ApiResult<T> = Result<T, NetworkError>;

/// Unified error type for every backend and completion-service call.
///
/// # Variants
///
/// | Variant | Meaning | Retryable |
/// |---------|---------|-----------|
/// | `InvalidUrl` | Base URL / path composition failed | No |
/// | `Unauthorized` | Missing or rejected credential (401) | No, route to login |
/// | `RateLimited` | 429 Too Many Requests | Yes, after backing off |
/// | `ServerError` | 5xx | Yes, after a delay |
/// | `HttpError` | Any other non-2xx status | No |
/// | `EncodingError` | Request body could not be serialized | No |
/// | `DecodingError` | Response body did not match the schema | No |
/// | `NetworkFailure` | DNS, refused connection, TLS, reset | Yes |
/// | `Timeout` | The per-call deadline elapsed | Yes |
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The request URL could not be composed into a valid absolute URL.
    ///
    /// This is a configuration defect (malformed base URL) or an unusable
    /// path parameter, and is never worth retrying.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No credential is stored, or the backend rejected the one we sent.
    #[error("Unauthorized, please log in")]
    Unauthorized,

    /// The backend is throttling this client.
    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    /// The backend answered with a 5xx status.
    #[error("Server error: {0}")]
    ServerError(u16),

    /// The backend answered with an unexpected status.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request: {0}")]
    EncodingError(#[source] serde_json::Error),

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    DecodingError(#[source] serde_json::Error),

    /// A transport-level failure other than a timeout.
    #[error("Network connection failed: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    /// The request did not complete within its deadline.
    #[error("Request timed out")]
    Timeout,
}

impl NetworkError {
    /// Returns `true` when repeating the same call later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError(_) | Self::NetworkFailure(_) | Self::Timeout
        )
    }

    /// Returns the HTTP status code this error was classified from, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited => Some(429),
            Self::ServerError(code) | Self::HttpError(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` when the caller should send the user back to login.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Failure of the `login` operation.
///
/// Login is the one call that writes credentials, so besides the network
/// outcome it can fail to persist the token it received.
#[derive(Error, Debug)]
pub enum LoginError {
    /// The login request itself failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The backend accepted the credentials but they could not be stored.
    #[error("Failed to store credentials: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(NetworkError::Timeout.is_retryable());
        assert!(NetworkError::RateLimited.is_retryable());
        assert!(NetworkError::ServerError(503).is_retryable());
        assert!(!NetworkError::Unauthorized.is_retryable());
        assert!(!NetworkError::HttpError(404).is_retryable());
        assert!(!NetworkError::InvalidUrl("nope".into()).is_retryable());
    }

    #[test]
    fn test_status_code_preserved() {
        assert_eq!(NetworkError::HttpError(418).status_code(), Some(418));
        assert_eq!(NetworkError::ServerError(502).status_code(), Some(502));
        assert_eq!(NetworkError::Timeout.status_code(), None);
    }

    #[test]
    fn test_login_error_wraps_storage() {
        let err: LoginError = StorageError::Backend("locked".into()).into();
        assert!(err.to_string().contains("locked"));
    }
}
