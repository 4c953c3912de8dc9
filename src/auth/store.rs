//
//  catchtrend
//  auth/store.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Credential Store
//!
//! Durable storage for exactly two secrets: the bearer token and the
//! username it belongs to. Nothing else in the crate persists or caches
//! either value.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::keyring::{KeyringBackend, MemoryBackend, SecretBackend};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "jwt_access_token";

/// Storage key of the username.
pub const USERNAME_KEY: &str = "username";

/// Errors raised by secure storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The key is absent, or storage could not be queried.
    #[error("Credential not found")]
    NotFound,

    /// The stored bytes are not valid UTF-8 text.
    #[error("Stored credential is not valid UTF-8")]
    DecodeError,

    /// The platform storage rejected the operation.
    #[error("Secure storage error: {0}")]
    Backend(String),
}

/// The two named secrets over a [`SecretBackend`].
///
/// Cheap to clone; clones share the backend.
///
/// # Example
///
/// ```rust
/// use catchtrend::auth::{CredentialStore, TOKEN_KEY, USERNAME_KEY};
///
/// let store = CredentialStore::in_memory();
/// store.save("t1", "u1")?;
/// assert_eq!(store.load(TOKEN_KEY)?, "t1");
/// assert_eq!(store.load(USERNAME_KEY)?, "u1");
///
/// store.clear()?;
/// assert!(store.load(TOKEN_KEY).is_err());
/// # Ok::<(), catchtrend::auth::StorageError>(())
/// ```
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn SecretBackend>,
}

impl CredentialStore {
    /// Creates a store over any backend.
    pub fn new(backend: Arc<dyn SecretBackend>) -> Self {
        Self { backend }
    }

    /// Creates a store over the system keyring under `service`.
    pub fn keyring(service: &str) -> Self {
        Self::new(Arc::new(KeyringBackend::new(service)))
    }

    /// Creates a store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Replaces the stored token and username.
    ///
    /// Both prior values are removed first. If the username cannot be
    /// written the token written just before is removed again, so a failed
    /// save never leaves a token without its username.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] encountered; the caller must treat
    /// it as a failed login.
    pub fn save(&self, token: &str, username: &str) -> Result<(), StorageError> {
        self.backend.delete(TOKEN_KEY)?;
        self.backend.delete(USERNAME_KEY)?;

        self.backend.set(TOKEN_KEY, token)?;
        if let Err(err) = self.backend.set(USERNAME_KEY, username) {
            warn!("Failed to store {}, rolling back {}: {}", USERNAME_KEY, TOKEN_KEY, err);
            if let Err(rollback) = self.backend.delete(TOKEN_KEY) {
                warn!("Rollback of {} failed: {}", TOKEN_KEY, rollback);
            }
            return Err(err);
        }

        debug!("Stored credentials for {}", username);
        Ok(())
    }

    /// Reads one key.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if the key is absent or storage cannot be queried
    /// - [`StorageError::DecodeError`] if the stored value is not UTF-8 text
    pub fn load(&self, key: &str) -> Result<String, StorageError> {
        match self.backend.get(key) {
            Ok(value) => Ok(value),
            Err(StorageError::Backend(reason)) => {
                debug!("Could not query {}: {}", key, reason);
                Err(StorageError::NotFound)
            }
            Err(other) => Err(other),
        }
    }

    /// Removes one key. Absence is not an error.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.backend.delete(key)
    }

    /// Removes both keys, attempting each even if the first fails.
    ///
    /// Returns the first error encountered.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.delete(TOKEN_KEY);
        let username = self.delete(USERNAME_KEY);
        token.and(username)
    }
}
