//
//  catchtrend
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CatchTrend Client Library
//!
//! A credential-aware client for the CatchTrend trading and analysis
//! backend, plus the `ct` command-line tool built on it.
//!
//! ## Overview
//!
//! The backend serves stock quotes, K-line and intraday series, and a
//! structured intraday analysis of CONL. Every data call carries a bearer
//! token obtained from a username/password login; the token and username
//! are kept in the platform's secure storage between runs.
//!
//! ## Features
//!
//! - **Typed Endpoints**: a closed set of backend operations with typed responses
//! - **Secure Credentials**: token storage in the system keyring with rollback
//! - **Observable Auth State**: subscribe to login/logout changes
//! - **AI Completions**: chat and reasoning calls to an OpenAI-compatible service
//!
//! ## Module Structure
//!
//! - [`api`]: endpoint catalog, request pipeline and [`ApiClient`]
//! - [`auth`]: secure storage and the observable [`AuthManager`]
//! - [`completion`]: the AI completion client
//! - [`models`]: response types for the market-data endpoints
//! - [`config`]: configuration file management
//! - [`cli`]: command-line interface definitions using clap
//! - [`output`]: JSON and status output
//! - [`interactive`]: prompts for credentials
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use catchtrend::{ApiClient, AuthManager, CredentialStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = Arc::new(AuthManager::new(CredentialStore::keyring("com.sunshinenew07.CatchTrend")));
//! let client = ApiClient::new("https://strategy-claude-code.vercel.app", auth.clone())?;
//!
//! if !auth.is_authenticated() {
//!     client.login("sui", "secret").await?;
//! }
//! let quote = client.get_realtime(&["CONL".to_string()], 0).await?;
//! println!("{:?}", quote.real_time_data.get("CONL"));
//! # Ok(())
//! # }
//! ```

/// Backend access.
///
/// Endpoints are values; building, sending and decoding a request are
/// separate steps so each can be tested without a server.
pub mod api;

/// Credential storage and authentication state.
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// OpenAI-compatible chat and reasoning client.
pub mod completion;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/catchtrend/config.toml`
/// - macOS: `~/Library/Application Support/catchtrend/config.toml`
/// - Windows: `%APPDATA%\catchtrend\config.toml`
pub mod config;

/// Interactive terminal prompts.
pub mod interactive;

/// Response models for the market-data endpoints.
pub mod models;

/// Output helpers.
pub mod output;

pub use api::{ApiClient, Endpoint, LoginError, NetworkError};
pub use auth::{AuthManager, AuthSnapshot, CredentialStore, StorageError};
pub use cli::Cli;
pub use completion::{AiModel, CompletionClient, CompletionError};
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display and the HTTP user agent.
pub const APP_NAME: &str = "ct";

/// Application version, from Cargo.toml.
///
/// ```rust
/// use catchtrend::VERSION;
///
/// println!("ct version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1`: Any failure not covered below
/// - `4`: Authentication required or rejected; run `ct auth login`
pub mod exit_codes {
    use crate::api::{LoginError, NetworkError};
    use crate::completion::CompletionError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Authentication required or failed.
    pub const AUTH_ERROR: i32 = 4;

    /// Picks the exit code for a failed command.
    ///
    /// Walks the error chain, so context added with `anyhow` does not hide
    /// an underlying `Unauthorized`.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        let requires_login = error.chain().any(|cause| {
            if let Some(e) = cause.downcast_ref::<NetworkError>() {
                return e.requires_login();
            }
            if let Some(LoginError::Network(e)) = cause.downcast_ref::<LoginError>() {
                return e.requires_login();
            }
            if let Some(CompletionError::Network(e)) = cause.downcast_ref::<CompletionError>() {
                return e.requires_login();
            }
            false
        });

        if requires_login {
            AUTH_ERROR
        } else {
            ERROR
        }
    }

}
