//
//  catchtrend
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CatchTrend API Client
//!
//! The single entry point for backend calls. A call runs through a fixed
//! pipeline:
//!
//! 1. compose the URL ([`build_url`])
//! 2. resolve the bearer token (authenticated endpoints only)
//! 3. build the request ([`build_request`])
//! 4. execute it with the per-call deadline ([`execute`])
//! 5. classify the status and decode the body ([`decode_response`])
//!
//! An authenticated endpoint with no stored token fails with
//! [`NetworkError::Unauthorized`] before anything touches the network.
//!
//! The client never mutates credentials, except in [`ApiClient::login`]
//! (which saves them) and [`ApiClient::logout`] (which clears them). In
//! particular a 401 is reported to the caller but does not log anyone out.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::endpoint::Endpoint;
use super::error::{ApiResult, LoginError, NetworkError};
use super::request::{build_request, build_url, parse_base_url};
use super::response::decode_response;
use super::transport::{execute, http_client, TimeoutClass};
use crate::auth::{AuthManager, CredentialStore};
use crate::config::Config;
use crate::models::{
    ComprehensiveResponse, ConlAnalysisResponse, KLineResponse, LoginResponse, MinuteResponse,
    RealTimeResponse,
};

/// HTTP client for the CatchTrend backend.
///
/// Cheap to share behind an `Arc`; calls may run concurrently.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use catchtrend::api::ApiClient;
/// use catchtrend::auth::{AuthManager, CredentialStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = Arc::new(AuthManager::new(CredentialStore::in_memory()));
/// let client = ApiClient::new("https://strategy-claude-code.vercel.app", auth)?;
///
/// client.login("sui", "secret").await?;
/// let data = client.get_comprehensive_data("CONL", None).await?;
/// println!("{:?}", data.comprehensive_data);
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    auth: Arc<AuthManager>,
}

impl ApiClient {
    /// Creates a client for `base_url` using the default data timeout.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::InvalidUrl`] if `base_url` is not an absolute http(s) URL
    /// - [`NetworkError::NetworkFailure`] if the HTTP client cannot be built
    pub fn new(base_url: &str, auth: Arc<AuthManager>) -> ApiResult<Self> {
        parse_base_url(base_url)?;
        Ok(Self {
            http: http_client()?,
            base_url: base_url.trim().to_string(),
            timeout: TimeoutClass::Data.default_duration(),
            auth,
        })
    }

    /// Creates a client and its auth manager from configuration, with
    /// credentials in the system keyring.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let store = CredentialStore::keyring(&config.storage.service);
        let auth = Arc::new(AuthManager::new(store));
        Ok(Self::new(&config.api.base_url, auth)?.with_timeout(config.api.timeout()))
    }

    /// Overrides the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The auth manager this client reads tokens from.
    pub fn auth(&self) -> &Arc<AuthManager> {
        &self.auth
    }

    /// Performs one call and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Exactly one [`NetworkError`]; see the module docs for the pipeline.
    pub async fn call<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> ApiResult<T> {
        // An unusable URL is reported ahead of a missing token.
        build_url(endpoint, &self.base_url)?;

        let token = if endpoint.requires_auth() {
            match self.auth.get_access_token() {
                Some(token) => Some(token),
                None => {
                    warn!("{} requires authentication but no token is stored", endpoint.name());
                    return Err(NetworkError::Unauthorized);
                }
            }
        } else {
            None
        };

        let request = build_request(endpoint, &self.base_url, token.as_deref())?;
        debug!("Calling {} ({} {})", endpoint.name(), request.method, request.url.path());

        let response = execute(&self.http, request, self.timeout).await?;
        decode_response(response.status, &response.body)
    }

    /// Exchanges a username and password for a token.
    ///
    /// When the backend reports `success`, the token and username are saved
    /// before this returns. A response with `success == false` is returned
    /// as-is and leaves stored credentials alone.
    ///
    /// # Errors
    ///
    /// - [`LoginError::Network`] if the call fails, or reports success
    ///   without a token (`Unauthorized`)
    /// - [`LoginError::Storage`] if the credentials could not be saved
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, LoginError> {
        let endpoint = Endpoint::Login {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.call(&endpoint).await?;

        if response.success {
            if response.access_token.is_empty() {
                warn!("Login reported success without a token");
                return Err(NetworkError::Unauthorized.into());
            }
            self.auth.save_auth(&response.access_token, username)?;
            info!("Logged in as {}", username);
        } else {
            warn!("Login rejected: {}", response.message);
        }

        Ok(response)
    }

    /// Clears stored credentials. Always succeeds.
    pub fn logout(&self) {
        self.auth.clear_auth();
    }

    /// Real-time quote, K-lines and intraday data for one symbol.
    pub async fn get_comprehensive_data(
        &self,
        symbol: &str,
        timestamp: Option<i64>,
    ) -> ApiResult<ComprehensiveResponse> {
        self.call(&Endpoint::Comprehensive {
            symbol: symbol.to_string(),
            timestamp,
        })
        .await
    }

    pub async fn get_kline(
        &self,
        symbol: &str,
        period: &str,
        count: u32,
        timestamp: i64,
    ) -> ApiResult<KLineResponse> {
        self.call(&Endpoint::KLine {
            symbol: symbol.to_string(),
            period: period.to_string(),
            count,
            timestamp,
        })
        .await
    }

    pub async fn get_minute(
        &self,
        symbol: &str,
        date: Option<&str>,
        timestamp: i64,
    ) -> ApiResult<MinuteResponse> {
        self.call(&Endpoint::Minute {
            symbol: symbol.to_string(),
            date: date.map(str::to_string),
            timestamp,
        })
        .await
    }

    pub async fn get_realtime(
        &self,
        symbols: &[String],
        timestamp: i64,
    ) -> ApiResult<RealTimeResponse> {
        self.call(&Endpoint::Realtime {
            symbols: symbols.to_vec(),
            timestamp,
        })
        .await
    }

    /// CONL analysis of the latest trading day.
    pub async fn get_conl_analysis_latest(
        &self,
        kline_type: &str,
        include_market_context: bool,
        timestamp: Option<i64>,
    ) -> ApiResult<ConlAnalysisResponse> {
        self.call(&Endpoint::AnalysisLatest {
            kline_type: kline_type.to_string(),
            include_market_context,
            timestamp,
        })
        .await
    }

    /// CONL analysis of a `YYYY-MM-DD` trading day.
    pub async fn get_conl_analysis_by_date(
        &self,
        date: &str,
        include_market_context: bool,
        timestamp: Option<i64>,
    ) -> ApiResult<ConlAnalysisResponse> {
        self.call(&Endpoint::AnalysisByDate {
            date: date.to_string(),
            include_market_context,
            timestamp,
        })
        .await
    }
}
