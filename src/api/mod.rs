//
//  catchtrend
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the CatchTrend market-data backend.
//!
//! ## Architecture
//!
//! - [`endpoint`]: the closed set of backend operations
//! - [`request`]: endpoint + base URL + token to a plain-data request
//! - [`transport`]: executes a request with a deadline
//! - [`response`]: status classification and JSON decoding
//! - [`error`]: the error taxonomy shared by every call
//! - [`client`]: [`ApiClient`], which ties the pipeline to the auth state
//!
//! Everything but `transport` and `client` is pure and can be tested
//! without a server.
//!
//! ## Error Handling
//!
//! Every call yields its payload or exactly one [`NetworkError`]:
//!
//! - `Unauthorized`: no token stored, or 401
//! - `RateLimited`: 429
//! - `ServerError`: 5xx
//! - `HttpError`: any other non-2xx
//! - `Timeout` / `NetworkFailure`: transport problems

pub mod client;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use client::ApiClient;
pub use endpoint::{encode_path_segment, Endpoint, HttpMethod, RequestBody};
pub use error::{ApiResult, LoginError, NetworkError};
pub use request::{build_request, build_url, parse_base_url, PreparedRequest};
pub use response::{classify_status, decode_body, decode_response};
pub use transport::{execute, http_client, RawResponse, TimeoutClass};
