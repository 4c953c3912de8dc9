//
//  catchtrend
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Registry
//!
//! The closed set of operations the backend exposes. Each [`Endpoint`]
//! variant carries its own typed parameters, and every request attribute
//! (method, path, auth requirement, body, query) is a pure function of the
//! variant.
//!
//! | Variant | Method | Path | Auth |
//! |---------|--------|------|------|
//! | `Login` | POST | `/api/v1/stocks/auth/login` | No |
//! | `Comprehensive` | GET | `/api/v1/stocks/{symbol}/comprehensive` | Yes |
//! | `KLine` | POST | `/api/v1/stocks/kline` | Yes |
//! | `Minute` | POST | `/api/v1/stocks/minute` | Yes |
//! | `Realtime` | POST | `/api/v1/stocks/realtime` | Yes |
//! | `AnalysisLatest` | GET | `/api/v1/analyze/conl/latest` | Yes |
//! | `AnalysisByDate` | GET | `/api/v1/analyze/conl/{date}` | Yes |
//!
//! ## Example
//!
//! ```rust
//! use catchtrend::api::{Endpoint, HttpMethod};
//!
//! let endpoint = Endpoint::Comprehensive {
//!     symbol: "CONL".to_string(),
//!     timestamp: Some(1700000000),
//! };
//!
//! assert_eq!(endpoint.method(), HttpMethod::Get);
//! assert_eq!(endpoint.path(), "/api/v1/stocks/CONL/comprehensive");
//! assert!(endpoint.requires_auth());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// HTTP methods used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Returns the method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Body of `POST /api/v1/stocks/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/v1/stocks/kline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KLineRequest {
    pub symbol: String,
    pub period: String,
    pub count: u32,
    pub timestamp: i64,
}

/// Body of `POST /api/v1/stocks/minute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinuteRequest {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub timestamp: i64,
}

/// Body of `POST /api/v1/stocks/realtime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeRequest {
    pub symbols: Vec<String>,
    pub timestamp: i64,
}

/// Request body of an endpoint, one variant per body shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Login(LoginRequest),
    KLine(KLineRequest),
    Minute(MinuteRequest),
    Realtime(RealtimeRequest),
}

/// A typed description of one backend operation.
///
/// Descriptors are immutable values built fresh for every call. The
/// `timestamp` parameters are cache-busting values supplied by the caller
/// (usually seconds since the epoch); they are sent verbatim.
#[derive(Clone, PartialEq)]
pub enum Endpoint {
    /// Exchange a username and password for a bearer token.
    Login { username: String, password: String },

    /// Real-time quote, daily/minute K-lines and intraday data in one payload.
    Comprehensive { symbol: String, timestamp: Option<i64> },

    /// K-line (candlestick) series for a period such as `"1d"` or `"5m"`.
    KLine {
        symbol: String,
        period: String,
        count: u32,
        timestamp: i64,
    },

    /// Intraday minute series, optionally for a specific date.
    Minute {
        symbol: String,
        date: Option<String>,
        timestamp: i64,
    },

    /// Real-time quotes for several symbols.
    Realtime { symbols: Vec<String>, timestamp: i64 },

    /// CONL analysis for the latest trading day.
    AnalysisLatest {
        kline_type: String,
        include_market_context: bool,
        timestamp: Option<i64>,
    },

    /// CONL analysis for a given `YYYY-MM-DD` date.
    AnalysisByDate {
        date: String,
        include_market_context: bool,
        timestamp: Option<i64>,
    },
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The password must never reach logs.
        match self {
            Self::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            other => write!(f, "{} {}", other.method(), other.path()),
        }
    }
}

impl Endpoint {
    /// Short operation name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Comprehensive { .. } => "comprehensive",
            Self::KLine { .. } => "kline",
            Self::Minute { .. } => "minute",
            Self::Realtime { .. } => "realtime",
            Self::AnalysisLatest { .. } => "analysis_latest",
            Self::AnalysisByDate { .. } => "analysis_by_date",
        }
    }

    /// The HTTP method of this operation.
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::Comprehensive { .. } | Self::AnalysisLatest { .. } | Self::AnalysisByDate { .. } => {
                HttpMethod::Get
            }
            Self::Login { .. } | Self::KLine { .. } | Self::Minute { .. } | Self::Realtime { .. } => {
                HttpMethod::Post
            }
        }
    }

    /// Whether a bearer token must accompany the request.
    ///
    /// Only login is public; every market-data and analysis operation is
    /// authenticated.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login { .. })
    }

    /// The unencoded path segments, including caller-supplied parameters.
    pub fn path_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = API_PREFIX.to_vec();
        match self {
            Self::Login { .. } => segments.extend(["stocks", "auth", "login"]),
            Self::Comprehensive { symbol, .. } => {
                segments.extend(["stocks", symbol.as_str(), "comprehensive"])
            }
            Self::KLine { .. } => segments.extend(["stocks", "kline"]),
            Self::Minute { .. } => segments.extend(["stocks", "minute"]),
            Self::Realtime { .. } => segments.extend(["stocks", "realtime"]),
            Self::AnalysisLatest { .. } => segments.extend(["analyze", "conl", "latest"]),
            Self::AnalysisByDate { date, .. } => {
                segments.extend(["analyze", "conl", date.as_str()])
            }
        }
        segments
    }

    /// The caller-supplied values substituted into the path template.
    pub fn path_params(&self) -> Vec<&str> {
        match self {
            Self::Comprehensive { symbol, .. } => vec![symbol.as_str()],
            Self::AnalysisByDate { date, .. } => vec![date.as_str()],
            _ => Vec::new(),
        }
    }

    /// The request path, with every segment percent-encoded.
    ///
    /// A `/` inside a parameter is encoded as `%2F`, so parameters can never
    /// add segments to the path.
    pub fn path(&self) -> String {
        self.path_segments()
            .into_iter()
            .map(|segment| format!("/{}", encode_path_segment(segment)))
            .collect()
    }

    /// The request body, for the POST operations.
    pub fn body(&self) -> Option<RequestBody> {
        match self {
            Self::Login { username, password } => Some(RequestBody::Login(LoginRequest {
                username: username.clone(),
                password: password.clone(),
            })),
            Self::KLine {
                symbol,
                period,
                count,
                timestamp,
            } => Some(RequestBody::KLine(KLineRequest {
                symbol: symbol.clone(),
                period: period.clone(),
                count: *count,
                timestamp: *timestamp,
            })),
            Self::Minute {
                symbol,
                date,
                timestamp,
            } => Some(RequestBody::Minute(MinuteRequest {
                symbol: symbol.clone(),
                date: date.clone(),
                timestamp: *timestamp,
            })),
            Self::Realtime { symbols, timestamp } => Some(RequestBody::Realtime(RealtimeRequest {
                symbols: symbols.clone(),
                timestamp: *timestamp,
            })),
            Self::Comprehensive { .. } | Self::AnalysisLatest { .. } | Self::AnalysisByDate { .. } => {
                None
            }
        }
    }

    /// Query parameters in declaration order. Empty when the operation has none.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Comprehensive { timestamp, .. } => timestamp
                .map(|t| vec![("timestamp", t.to_string())])
                .unwrap_or_default(),
            Self::AnalysisLatest {
                kline_type,
                include_market_context,
                timestamp,
            } => {
                let mut items = vec![
                    ("kline_type", kline_type.clone()),
                    ("include_market_context", include_market_context.to_string()),
                ];
                if let Some(t) = timestamp {
                    items.push(("_t", t.to_string()));
                }
                items
            }
            Self::AnalysisByDate {
                include_market_context,
                timestamp,
                ..
            } => {
                let mut items = vec![("include_market_context", include_market_context.to_string())];
                if let Some(t) = timestamp {
                    items.push(("_t", t.to_string()));
                }
                items
            }
            _ => Vec::new(),
        }
    }
}

/// Percent-encodes one path segment.
///
/// Everything but ASCII alphanumerics and `*-._` is escaped; spaces become
/// `%20` rather than the form-encoding `+`.
pub fn encode_path_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
