//
//  catchtrend
//  completion/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Completion-service errors and their classification.

use thiserror::Error;
use tracing::{error, warn};

use super::types::ErrorEnvelope;
use crate::api::{classify_status, NetworkError};

/// Error code the service uses for an exhausted account balance.
pub const INSUFFICIENT_QUOTA: &str = "insufficient_quota";

#[derive(Error, Debug)]
pub enum CompletionError {
    /// Transport failure or a status with no more specific meaning.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The account has no remaining quota. Retrying will not help.
    #[error("API quota exhausted, check the account balance")]
    InsufficientQuota,

    /// The service explained the failure in its error body.
    #[error("API error: {0}")]
    Api(String),

    /// The call succeeded but produced no answer text.
    #[error("Empty response")]
    EmptyResponse,
}

impl CompletionError {
    /// Returns `true` when repeating the same call later may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(err) => err.is_retryable(),
            _ => false,
        }
    }
}

/// Classifies a non-2xx completion response.
///
/// - 401 is `Unauthorized` (a bad API key)
/// - 429 is `InsufficientQuota` when the body says so, else `RateLimited`
/// - anything else with a readable `{"error": {"message"}}` body is `Api`
/// - the rest falls back to the backend classification
pub fn classify_failure(status: u16, body: &[u8]) -> CompletionError {
    let envelope: Option<ErrorEnvelope> = serde_json::from_slice(body).ok();

    match status {
        401 => {
            error!("Completion service rejected the API key");
            NetworkError::Unauthorized.into()
        }
        429 => match envelope {
            Some(e) if e.error.code.as_deref() == Some(INSUFFICIENT_QUOTA) => {
                error!("Completion quota exhausted: {}", e.error.message);
                CompletionError::InsufficientQuota
            }
            _ => {
                warn!("Completion service is rate limiting");
                NetworkError::RateLimited.into()
            }
        },
        _ => match envelope {
            Some(e) => {
                error!("Completion service error {}: {}", status, e.error.message);
                CompletionError::Api(e.error.message)
            }
            None => match classify_status(status) {
                Err(err) => err.into(),
                Ok(()) => NetworkError::HttpError(status).into(),
            },
        },
    }
}
