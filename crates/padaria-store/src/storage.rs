//! # Persistence Adapter
//!
//! Durable mapping from a string key to a serialized collection, scoped
//! to a local data directory - the process-local equivalent of the
//! browser key-value medium the frontend uses.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Data Directory Layout                                │
//! │                                                                         │
//! │  <data-dir>/                                                            │
//! │  ├── products.json      ← serialized Vec<Product>                      │
//! │  ├── suppliers.json     ← serialized Vec<Supplier>                     │
//! │  ├── expenses.json      ← serialized Vec<Expense>                      │
//! │  ├── sales.json         ← serialized Vec<Sale>                         │
//! │  └── auth-storage.json  ← { user, isAuthenticated }                    │
//! │                                                                         │
//! │  One JSON document per key. Keys never contain path separators.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Contract
//! - `load` NEVER fails: missing key, unreadable file, or corrupt JSON
//!   all substitute the caller's fallback value. The outcome reports
//!   whether stored data or the fallback was used, so callers (and
//!   tests) can tell "loaded" from "defaulted" without side channels.
//! - `save` failures surface as [`StoreError`]; the caller's in-memory
//!   state is never touched.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Collection Keys
// =============================================================================

/// Key for the product collection.
pub const KEY_PRODUCTS: &str = "products";
/// Key for the supplier collection.
pub const KEY_SUPPLIERS: &str = "suppliers";
/// Key for the expense collection.
pub const KEY_EXPENSES: &str = "expenses";
/// Key for the sale collection.
pub const KEY_SALES: &str = "sales";
/// Key for the persisted auth session.
pub const KEY_AUTH: &str = "auth-storage";

// =============================================================================
// Load Outcome
// =============================================================================

/// Where a loaded value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The key existed and deserialized cleanly.
    Stored,
    /// The key was absent or its data was unusable; the fallback was used.
    Fallback,
}

/// A loaded value together with its provenance.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub source: LoadSource,
}

// =============================================================================
// Storage
// =============================================================================

/// Key-value persistence over a local data directory.
///
/// Cheap to clone; every component holding one talks to the same
/// directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Opens (creating if needed) a storage directory.
    pub async fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(StoreError::DataDir)?;
        debug!(dir = %dir.display(), "storage opened");
        Ok(Storage { dir })
    }

    /// Returns the backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Loads and deserializes the value under `key`.
    ///
    /// Never raises: a missing key, an unreadable file, or corrupt JSON
    /// all yield `fallback`, flagged as [`LoadSource::Fallback`].
    /// Corruption is logged; a missing key is normal (first run).
    pub async fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Loaded<T> {
        let path = self.key_path(key);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(key = %key, "key absent, using fallback");
                return Loaded {
                    value: fallback,
                    source: LoadSource::Fallback,
                };
            }
            Err(err) => {
                warn!(key = %key, error = %err, "read failed, using fallback");
                return Loaded {
                    value: fallback,
                    source: LoadSource::Fallback,
                };
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Loaded {
                value,
                source: LoadSource::Stored,
            },
            Err(err) => {
                warn!(key = %key, error = %err, "corrupt data, using fallback");
                Loaded {
                    value: fallback,
                    source: LoadSource::Fallback,
                }
            }
        }
    }

    /// Serializes and writes `value` under `key`.
    ///
    /// Write failures propagate; callers do not roll back in-memory
    /// state on error.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        tokio::fs::write(self.key_path(key), bytes)
            .await
            .map_err(|source| StoreError::WriteFailed {
                key: key.to_string(),
                source,
            })?;

        debug!(key = %key, "saved");
        Ok(())
    }

    /// Removes the value under `key`. Missing keys are a no-op.
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::WriteFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Checks whether `key` currently holds a value.
    ///
    /// A failed probe reports the key as present: seeding must never
    /// overwrite data it merely could not see.
    pub async fn contains(&self, key: &str) -> bool {
        match tokio::fs::try_exists(self.key_path(key)).await {
            Ok(exists) => exists,
            Err(err) => {
                warn!(key = %key, error = %err, "existence probe failed, assuming present");
                true
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
