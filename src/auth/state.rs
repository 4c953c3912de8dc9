//
//  catchtrend
//  auth/state.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Auth State
//!
//! An in-memory, observable projection of the [`CredentialStore`]. Reads of
//! `is_authenticated` / `current_username` never touch storage; the snapshot
//! is recomputed at construction and after every save or clear.
//!
//! The access token itself is deliberately not cached here:
//! [`AuthManager::get_access_token`] always asks the store, so a logout on
//! one task is seen by the next request on any other task.
//!
//! ## Example
//!
//! ```rust
//! use catchtrend::auth::{AuthManager, CredentialStore};
//!
//! let auth = AuthManager::new(CredentialStore::in_memory());
//! assert!(!auth.is_authenticated());
//!
//! auth.save_auth("t1", "u1")?;
//! assert_eq!(auth.get_access_token().as_deref(), Some("t1"));
//! assert_eq!(auth.current_username().as_deref(), Some("u1"));
//!
//! auth.clear_auth();
//! assert_eq!(auth.get_access_token(), None);
//! assert!(!auth.is_authenticated());
//! # Ok::<(), catchtrend::auth::StorageError>(())
//! ```

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::store::{CredentialStore, StorageError, TOKEN_KEY, USERNAME_KEY};

/// Immutable view of the authentication state.
///
/// Invariant: `is_authenticated` is `true` exactly when a non-empty token and
/// a username were both readable at the last refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub current_username: Option<String>,
}

impl AuthSnapshot {
    fn signed_out() -> Self {
        Self::default()
    }

    fn signed_in(username: String) -> Self {
        Self {
            is_authenticated: true,
            current_username: Some(username),
        }
    }
}

/// Owner of the credential lifecycle.
///
/// Share one instance per process, typically behind an `Arc`. All methods
/// take `&self`; the snapshot lives in a `watch` channel so UI code can
/// subscribe to changes.
pub struct AuthManager {
    store: CredentialStore,
    state: watch::Sender<AuthSnapshot>,
}

impl AuthManager {
    /// Creates the manager and synchronizes it with the store.
    pub fn new(store: CredentialStore) -> Self {
        let (state, _) = watch::channel(AuthSnapshot::signed_out());
        let manager = Self { store, state };
        manager.refresh();
        manager
    }

    /// Re-reads both keys and publishes a new snapshot.
    pub fn refresh(&self) {
        let token = self.store.load(TOKEN_KEY);
        let username = self.store.load(USERNAME_KEY);

        let snapshot = match (token, username) {
            (Ok(token), Ok(username)) if !token.is_empty() => AuthSnapshot::signed_in(username),
            _ => AuthSnapshot::signed_out(),
        };

        debug!(
            "Auth state refreshed: authenticated={}",
            snapshot.is_authenticated
        );
        self.state.send_replace(snapshot);
    }

    /// Persists a new credential, then refreshes.
    ///
    /// # Errors
    ///
    /// Propagates the store's error. The snapshot is still re-read, since a
    /// failed save may already have removed the previous credential.
    pub fn save_auth(&self, token: &str, username: &str) -> Result<(), StorageError> {
        if let Err(err) = self.store.save(token, username) {
            warn!("Failed to save credentials: {}", err);
            self.refresh();
            return Err(err);
        }
        info!("Saved credentials for {}", username);
        self.refresh();
        Ok(())
    }

    /// Removes the stored credential and marks the state signed out.
    ///
    /// Storage failures are logged and otherwise ignored: logout always
    /// succeeds from the caller's point of view.
    pub fn clear_auth(&self) {
        if let Err(err) = self.store.clear() {
            warn!("Failed to clear stored credentials: {}", err);
        }
        self.state.send_replace(AuthSnapshot::signed_out());
        info!("Cleared credentials");
    }

    /// Reads the current token straight from the store.
    ///
    /// Returns `None` on any storage error or when the stored token is empty.
    pub fn get_access_token(&self) -> Option<String> {
        self.store.load(TOKEN_KEY).ok().filter(|t| !t.is_empty())
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn current_username(&self) -> Option<String> {
        self.state.borrow().current_username.clone()
    }

    /// Subscribes to snapshot changes.
    ///
    /// The receiver sees the current value immediately and is notified on
    /// every refresh and clear.
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }
}
