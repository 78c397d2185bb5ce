//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the collection key as context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Presentation layer ← Responsible for user-visible messaging           │
//! │                                                                         │
//! │  NOTE: read failures never reach here - Storage::load substitutes      │
//! │  the fallback dataset instead. Only WRITES raise StoreError.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
///
/// Raised by writes (and by opening the data directory). A write failure
/// does NOT roll back in-memory state: the session keeps operating on
/// the newer data and diverges from storage until the next successful
/// write - an accepted inconsistency.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory cannot be created or opened.
    #[error("cannot open data directory: {0}")]
    DataDir(#[source] std::io::Error),

    /// A collection could not be serialized.
    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be written (e.g., disk full, permissions).
    #[error("failed to write '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
