//
//  catchtrend
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secret Backends
//!
//! Raw string storage underneath the [`CredentialStore`](super::CredentialStore).
//! A backend stores one string per key under a fixed service namespace and
//! knows nothing about tokens or usernames.
//!
//! ## Platform Support
//!
//! [`KeyringBackend`] uses the platform's secure storage:
//!
//! - **macOS / iOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! Entries are encrypted at rest by the platform. [`MemoryBackend`] keeps
//! entries in process memory and is meant for tests and headless runs.
//!
//! ## Example
//!
//! ```rust
//! use catchtrend::auth::{MemoryBackend, SecretBackend};
//!
//! let backend = MemoryBackend::new();
//! backend.set("username", "sui")?;
//! assert_eq!(backend.get("username")?, "sui");
//!
//! // Deleting is idempotent
//! backend.delete("username")?;
//! backend.delete("username")?;
//! # Ok::<(), catchtrend::auth::StorageError>(())
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use keyring::Entry;

use super::store::StorageError;

/// The default secure-storage namespace for CatchTrend credentials.
pub const DEFAULT_SERVICE: &str = "com.sunshinenew07.CatchTrend";

/// Key/value secret storage under one service namespace.
///
/// Individual operations must be atomic with respect to each other; the
/// platform keychain already guarantees this.
pub trait SecretBackend: Send + Sync {
    /// Creates or replaces the entry for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Reads the entry for `key`.
    ///
    /// Fails with [`StorageError::NotFound`] when the entry does not exist and
    /// [`StorageError::DecodeError`] when it is not valid UTF-8.
    fn get(&self, key: &str) -> Result<String, StorageError>;

    /// Removes the entry for `key`. A missing entry is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Secret storage in the system's native keyring service.
///
/// # Notes
///
/// - On Linux, a secret service daemon (GNOME Keyring, KWallet) must be running.
/// - Entries persist across restarts and reboots.
#[derive(Debug, Clone)]
pub struct KeyringBackend {
    /// The service name identifying this application in the keyring.
    service: String,
}

impl Default for KeyringBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE)
    }
}

impl KeyringBackend {
    /// Creates a keyring backend for the given service namespace.
    ///
    /// No keyring access occurs during construction.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    /// The service namespace entries are stored under.
    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<Entry, StorageError> {
        Entry::new(&self.service, key).map_err(map_keyring_error)
    }
}

impl SecretBackend for KeyringBackend {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entry(key)?.set_password(value).map_err(map_keyring_error)
    }

    fn get(&self, key: &str) -> Result<String, StorageError> {
        self.entry(key)?.get_password().map_err(map_keyring_error)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => Err(map_keyring_error(e)),
        }
    }
}

fn map_keyring_error(err: keyring::Error) -> StorageError {
    match err {
        keyring::Error::NoEntry => StorageError::NotFound,
        keyring::Error::BadEncoding(_) => StorageError::DecodeError,
        other => StorageError::Backend(other.to_string()),
    }
}

/// In-process secret storage.
///
/// Clones share the same entries, which lets tests simulate a process
/// restart by building a second store over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("memory backend lock poisoned".to_string()))
    }
}

impl SecretBackend for MemoryBackend {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String, StorageError> {
        self.lock()?.get(key).cloned().ok_or(StorageError::NotFound)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
