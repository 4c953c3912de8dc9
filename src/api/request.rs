//
//  catchtrend
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! Turns an [`Endpoint`] plus a base URL and an optional bearer token into a
//! [`PreparedRequest`]: a plain-data HTTP request that the transport can
//! execute. Nothing here touches the network or the credential store, so a
//! construction failure (bad base URL, unusable path parameter, body that
//! cannot be serialized) is reported before any I/O happens.
//!
//! ```rust
//! use catchtrend::api::{build_request, Endpoint};
//!
//! let endpoint = Endpoint::AnalysisByDate {
//!     date: "2025-11-07".to_string(),
//!     include_market_context: true,
//!     timestamp: None,
//! };
//!
//! let request = build_request(&endpoint, "https://example.com", Some("abc123"))?;
//! assert_eq!(
//!     request.url.as_str(),
//!     "https://example.com/api/v1/analyze/conl/2025-11-07?include_market_context=true"
//! );
//! assert_eq!(request.header("Authorization"), Some("Bearer abc123"));
//! # Ok::<(), catchtrend::api::NetworkError>(())
//! ```

use std::fmt;

use serde::Serialize;
use url::Url;

use super::endpoint::{Endpoint, HttpMethod};
use super::error::NetworkError;

/// Header carrying the JSON content type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Header carrying the bearer credential.
pub const AUTHORIZATION: &str = "Authorization";

/// A fully formed HTTP request, described as plain data.
#[derive(Clone)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(AUTHORIZATION) {
                    (name.as_str(), "Bearer ***")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("PreparedRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

impl PreparedRequest {
    /// Creates a request with the JSON content type set and no body.
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: vec![(CONTENT_TYPE.to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// Attaches `Authorization: Bearer <token>`.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers
            .push((AUTHORIZATION.to_string(), format!("Bearer {}", token)));
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::EncodingError`] if serialization fails.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, NetworkError> {
        let bytes = serde_json::to_vec(body).map_err(NetworkError::EncodingError)?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Parses a configured base URL, requiring an absolute `http`/`https` URL.
pub fn parse_base_url(base_url: &str) -> Result<Url, NetworkError> {
    let url = Url::parse(base_url.trim())
        .map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(NetworkError::InvalidUrl(format!(
            "{}: expected an absolute http(s) URL",
            base_url
        )));
    }

    // Paths are appended textually, so anything after the path would swallow them.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(NetworkError::InvalidUrl(format!(
            "{}: base URL must not carry a query or fragment",
            base_url
        )));
    }

    Ok(url)
}

/// Joins an already-encoded path (starting with `/`) onto a base URL.
///
/// Any path prefix on the base URL is kept, so `https://host/prefix` plus
/// `/api/v1/x` yields `https://host/prefix/api/v1/x`.
pub fn join_path(base_url: &str, path: &str) -> Result<Url, NetworkError> {
    let base = parse_base_url(base_url)?;
    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", joined, e)))
}

/// Builds the full request URL for an endpoint: base, path and query.
pub fn build_url(endpoint: &Endpoint, base_url: &str) -> Result<Url, NetworkError> {
    for param in endpoint.path_params() {
        // Empty and dot-only segments would collapse or climb the path.
        if param.is_empty() || param.chars().all(|c| c == '.') {
            return Err(NetworkError::InvalidUrl(format!(
                "{:?} is not a valid path parameter for {}",
                param,
                endpoint.name()
            )));
        }
    }

    let mut url = join_path(base_url, &endpoint.path())?;

    let query = endpoint.query();
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }

    Ok(url)
}

/// Builds the HTTP request for an endpoint.
///
/// The token is attached when given; deciding whether one is required is the
/// caller's job.
///
/// # Errors
///
/// - [`NetworkError::InvalidUrl`] if the URL cannot be composed
/// - [`NetworkError::EncodingError`] if the body cannot be serialized
pub fn build_request(
    endpoint: &Endpoint,
    base_url: &str,
    token: Option<&str>,
) -> Result<PreparedRequest, NetworkError> {
    let url = build_url(endpoint, base_url)?;
    let mut request = PreparedRequest::new(endpoint.method(), url);

    if let Some(token) = token {
        request = request.with_bearer(token);
    }

    if let Some(body) = endpoint.body() {
        request = request.with_json(&body)?;
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::ser::Error as _;
    use serde::Serializer;

    use super::*;

    const BASE: &str = "https://strategy.example.com";

    #[test]
    fn test_login_request() {
        let endpoint = Endpoint::Login {
            username: "sui".into(),
            password: "sui0617".into(),
        };
        let request = build_request(&endpoint, BASE, None).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.as_str(), "https://strategy.example.com/api/v1/stocks/auth/login");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);

        let body: serde_json::Value = serde_json::from_slice(request.body.as_ref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"username": "sui", "password": "sui0617"}));
    }

    #[test]
    fn test_query_appended_in_order() {
        let endpoint = Endpoint::AnalysisLatest {
            kline_type: "1min".into(),
            include_market_context: false,
            timestamp: Some(1731000000),
        };
        let url = build_url(&endpoint, BASE).unwrap();
        assert_eq!(
            url.query(),
            Some("kline_type=1min&include_market_context=false&_t=1731000000")
        );
    }

    #[test]
    fn test_base_url_prefix_and_trailing_slash() {
        let endpoint = Endpoint::Comprehensive {
            symbol: "CONL".into(),
            timestamp: Some(5),
        };
        let url = build_url(&endpoint, "http://localhost:8000/proxy/").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/proxy/api/v1/stocks/CONL/comprehensive?timestamp=5"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let endpoint = Endpoint::Comprehensive {
            symbol: "CONL".into(),
            timestamp: None,
        };
        for base in ["", "not a url", "ftp://example.com", "mailto:someone@example.com"] {
            let err = build_url(&endpoint, base).unwrap_err();
            assert!(matches!(err, NetworkError::InvalidUrl(_)), "{base}");
        }
    }

    #[test]
    fn test_base_url_with_query_or_fragment_rejected() {
        for base in [
            "https://host.example/?k=v",
            "https://host.example/prefix?",
            "https://host.example/#top",
        ] {
            let err = parse_base_url(base).unwrap_err();
            assert!(matches!(err, NetworkError::InvalidUrl(_)), "{base}");
        }
        assert!(parse_base_url("https://host.example/prefix/").is_ok());
    }

    #[test]
    fn test_dot_segments_rejected() {
        for symbol in ["", ".", ".."] {
            let endpoint = Endpoint::Comprehensive {
                symbol: symbol.into(),
                timestamp: None,
            };
            let err = build_url(&endpoint, BASE).unwrap_err();
            assert!(matches!(err, NetworkError::InvalidUrl(_)), "{symbol:?}");
        }
    }

    #[test]
    fn test_slash_in_symbol_stays_one_segment() {
        let endpoint = Endpoint::Comprehensive {
            symbol: "../../admin".into(),
            timestamp: None,
        };
        let url = build_url(&endpoint, BASE).unwrap();
        assert_eq!(url.path(), "/api/v1/stocks/..%2F..%2Fadmin/comprehensive");
    }

    #[test]
    fn test_bearer_header() {
        let endpoint = Endpoint::Realtime {
            symbols: vec!["CONL".into(), "TSLL".into()],
            timestamp: 9,
        };
        let request = build_request(&endpoint, BASE, Some("abc123")).unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer abc123"));
        assert!(!format!("{:?}", request).contains("abc123"));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn test_encoding_error() {
        let url = Url::parse(BASE).unwrap();
        let err = PreparedRequest::new(HttpMethod::Post, url)
            .with_json(&Unserializable)
            .unwrap_err();
        assert!(matches!(err, NetworkError::EncodingError(_)));
    }

    #[test]
    fn test_non_string_map_keys_fail_to_encode() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "x");
        let url = Url::parse(BASE).unwrap();
        let result = PreparedRequest::new(HttpMethod::Post, url).with_json(&map);
        assert!(matches!(result, Err(NetworkError::EncodingError(_))));
    }
}
