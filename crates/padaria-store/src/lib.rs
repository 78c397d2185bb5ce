//! # padaria-store: Entity Store and Persistence for Padaria SA
//!
//! This crate provides the stateful layer of the Padaria SA system:
//! in-memory entity collections synchronized to a JSON key-value medium.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Padaria SA Data Flow                               │
//! │                                                                         │
//! │  Frontend action (add product, record expense, ...)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  padaria-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   AppStore    │    │    Storage    │    │     seed     │  │   │
//! │  │   │  (store.rs)   │    │ (storage.rs)  │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ 4 collections │───►│ <key>.json    │    │ fixed bakery │  │   │
//! │  │   │ CRUD + KPIs   │    │ per collection│    │ dataset      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Data directory: products.json, suppliers.json, expenses.json,         │
//! │                  sales.json, auth-storage.json                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - Key-value persistence adapter (load/save/remove)
//! - [`seed`] - Fixed seed datasets and idempotent seeding
//! - [`store`] - The entity store: collections + CRUD + KPI access
//! - [`session`] - Auth session with persisted restoration
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use padaria_store::{AppStore, Storage};
//!
//! let storage = Storage::open("./padaria_data").await?;
//! let mut store = AppStore::new(storage);
//!
//! // Seed absent collections, then load everything
//! store.initialize().await?;
//!
//! // CRUD
//! store.add_product(new_product).await?;
//! store.update_product(&id, patch).await?;
//!
//! // Dashboard
//! let kpis = store.kpis();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use session::AuthSession;
pub use storage::{LoadSource, Loaded, Storage};
pub use store::AppStore;
