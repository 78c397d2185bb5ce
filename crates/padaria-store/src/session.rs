//! # Auth Session
//!
//! Login state persisted under the `auth-storage` key so a session
//! survives restarts.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         AuthSession                                      │
//! │                                                                         │
//! │  restore(storage) ──► load auth-storage.json (absent → logged out)     │
//! │                                                                         │
//! │  login(user, pass) ──► credentials ok → persist { user, true }         │
//! │                        credentials bad → no state change, Ok(false)    │
//! │                                                                         │
//! │  logout() ──► clear in-memory user, remove the persisted key           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single fixed credential pair, checked in-process. Not an identity
//! system; it gates the UI, nothing more.

use serde::{Deserialize, Serialize};
use tracing::debug;

use padaria_core::types::User;

use crate::error::StoreResult;
use crate::seed;
use crate::storage::{Storage, KEY_AUTH};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "padaria123";

/// The persisted shape under the auth key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    user: Option<User>,
    is_authenticated: bool,
}

impl Default for PersistedSession {
    fn default() -> Self {
        PersistedSession {
            user: None,
            is_authenticated: false,
        }
    }
}

// =============================================================================
// AuthSession
// =============================================================================

/// Login state with persisted restoration.
#[derive(Debug)]
pub struct AuthSession {
    storage: Storage,
    user: Option<User>,
}

impl AuthSession {
    /// Restores the session persisted under the auth key. Absent or
    /// unreadable state means logged out.
    pub async fn restore(storage: Storage) -> Self {
        let loaded = storage
            .load::<PersistedSession>(KEY_AUTH, PersistedSession::default())
            .await;

        let user = if loaded.value.is_authenticated {
            loaded.value.user
        } else {
            None
        };
        debug!(restored = user.is_some(), "auth session restored");

        AuthSession { storage, user }
    }

    /// Attempts a login. Returns `Ok(true)` and persists the session on
    /// success; `Ok(false)` leaves the current state untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> StoreResult<bool> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            debug!(username = %username, "login rejected");
            return Ok(false);
        }

        let user = seed::seed_user();
        self.storage
            .save(
                KEY_AUTH,
                &PersistedSession {
                    user: Some(user.clone()),
                    is_authenticated: true,
                },
            )
            .await?;
        debug!(username = %username, "login accepted");
        self.user = Some(user);
        Ok(true)
    }

    /// Ends the session and removes the persisted state.
    pub async fn logout(&mut self) -> StoreResult<()> {
        self.user = None;
        self.storage.remove(KEY_AUTH).await?;
        debug!("logged out");
        Ok(())
    }

    /// Whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
