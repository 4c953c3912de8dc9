//
//  catchtrend
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport Executor
//!
//! Sends a [`PreparedRequest`] over `reqwest` with a per-call deadline and
//! hands back the raw status and body. Transport exceptions are folded into
//! [`NetworkError::Timeout`] or [`NetworkError::NetworkFailure`]; status
//! codes are left for the response classifier.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::error::NetworkError;
use super::request::PreparedRequest;

/// Timeout classes for the two kinds of service this crate talks to.
///
/// | Class | Default |
/// |-------|---------|
/// | `Data` | 30 s |
/// | `Completion` | 120 s |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutClass {
    /// Market-data and analysis endpoints of the backend.
    Data,
    /// AI-completion endpoints, which routinely take minutes.
    Completion,
}

impl TimeoutClass {
    /// The default deadline for this class.
    pub fn default_duration(&self) -> Duration {
        match self {
            Self::Data => Duration::from_secs(30),
            Self::Completion => Duration::from_secs(120),
        }
    }
}

/// Status and body of an HTTP response, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Builds the shared `reqwest` client with this crate's User-Agent.
pub fn http_client() -> Result<Client, NetworkError> {
    Client::builder()
        .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
        .build()
        .map_err(NetworkError::NetworkFailure)
}

/// Executes a request with the given deadline.
///
/// The deadline covers connecting, sending and reading the whole body.
///
/// # Errors
///
/// - [`NetworkError::Timeout`] if the deadline elapsed
/// - [`NetworkError::NetworkFailure`] for any other transport failure
pub async fn execute(
    http: &Client,
    request: PreparedRequest,
    timeout: Duration,
) -> Result<RawResponse, NetworkError> {
    debug!("{} {}", request.method, request.url);

    let mut builder = http
        .request(request.method.into(), request.url)
        .timeout(timeout);

    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = builder.send().await.map_err(classify_transport_error)?;
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(classify_transport_error)?
        .to_vec();

    debug!("HTTP {} ({} bytes)", status, body.len());

    Ok(RawResponse { status, body })
}

/// Maps a `reqwest` failure onto the transport error kinds.
pub fn classify_transport_error(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        warn!("Request timed out");
        NetworkError::Timeout
    } else {
        warn!("Network failure: {}", err);
        NetworkError::NetworkFailure(err)
    }
}
