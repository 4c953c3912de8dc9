//
//  catchtrend
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credential persistence and the observable authentication state.
//!
//! The backend issues a single bearer token per login. That token and the
//! username it was issued for are the only two values persisted, both in
//! the platform's secure storage.
//!
//! ## Module Structure
//!
//! - [`keyring`]: raw secret backends (system keyring, in-memory)
//! - [`store`]: the two named credentials over a backend
//! - [`state`]: the in-memory snapshot and its change notifications
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use catchtrend::auth::{AuthManager, CredentialStore, MemoryBackend};
//!
//! let store = CredentialStore::new(Arc::new(MemoryBackend::new()));
//! let auth = AuthManager::new(store);
//!
//! auth.save_auth("abc123", "sui")?;
//! assert!(auth.snapshot().is_authenticated);
//! # Ok::<(), catchtrend::auth::StorageError>(())
//! ```

mod keyring;
mod state;
mod store;

pub use keyring::*;
pub use state::*;
pub use store::*;

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};

/// Reads one secret line from stdin, for `--password-stdin` style flags.
///
/// Trailing whitespace and the newline are stripped.
///
/// # Errors
///
/// Fails if stdin cannot be read or the line is empty.
pub fn read_secret_from_stdin() -> Result<String> {
    let stdin = io::stdin();
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    let secret = line.trim_end().to_string();
    if secret.is_empty() {
        bail!("No secret provided on stdin");
    }
    Ok(secret)
}
