//
//  catchtrend
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Classifier & Decoder
//!
//! Pure functions from `(status, body)` to a typed result. No I/O and no
//! credential access happens here, so every branch can be exercised with
//! canned bytes.
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 200–299 | decode the body |
//! | 401 | [`NetworkError::Unauthorized`] |
//! | 429 | [`NetworkError::RateLimited`] |
//! | 500–599 | [`NetworkError::ServerError`] |
//! | other | [`NetworkError::HttpError`] |
//!
//! Wire field names are snake_case, which is also how the model structs
//! name their fields, so serde's derived mapping is the identity.

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::error::{ApiResult, NetworkError};

/// Classifies an HTTP status code. `Ok(())` means "proceed to decode".
pub fn classify_status(status: u16) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(NetworkError::Unauthorized),
        429 => Err(NetworkError::RateLimited),
        500..=599 => Err(NetworkError::ServerError(status)),
        _ => Err(NetworkError::HttpError(status)),
    }
}

/// Decodes a JSON body into `T`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        error!("Failed to decode response: {}", e);
        debug!("Response body: {}", preview(body));
        NetworkError::DecodingError(e)
    })
}

/// Classifies the status and, on success, decodes the body into `T`.
///
/// ```rust
/// use catchtrend::api::{decode_response, NetworkError};
/// use catchtrend::models::LoginResponse;
///
/// let body = br#"{"success":true,"message":"ok","access_token":"abc123","token_type":"bearer","expires_in":3600}"#;
/// let login: LoginResponse = decode_response(200, body)?;
/// assert_eq!(login.access_token, "abc123");
///
/// let err = decode_response::<LoginResponse>(429, b"").unwrap_err();
/// assert!(matches!(err, NetworkError::RateLimited));
/// # Ok::<(), NetworkError>(())
/// ```
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<T> {
    if let Err(err) = classify_status(status) {
        warn!("HTTP {}: {}", status, err);
        if matches!(err, NetworkError::HttpError(_)) {
            debug!("Response body: {}", preview(body));
        }
        return Err(err);
    }
    decode_body(body)
}

/// First few hundred characters of a body, for diagnostics.
fn preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body).chars().take(500).collect()
}
