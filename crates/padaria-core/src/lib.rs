//! # padaria-core: Pure Business Logic for Padaria SA
//!
//! This crate is the **heart** of the Padaria SA management system. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Padaria SA Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │   Products ──► Suppliers ──► Expenses ──► Dashboard             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ padaria-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   stock   │  │    kpi    │  │   │
//! │  │   │  Product  │  │   Money   │  │  status   │  │ dashboard │  │   │
//! │  │   │  Supplier │  │ centavos  │  │  tiers    │  │  metrics  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 padaria-store (Persistence Layer)               │   │
//! │  │          Entity collections, JSON storage, seeding              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Supplier, Expense, Sale, User)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`stock`] - Derived stock-status computation
//! - [`patch`] - Draft and partial-update input shapes
//! - [`kpi`] - Dashboard metric aggregation
//! - [`error`] - Validation error types
//! - [`validation`] - Presentation-layer input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Persistence, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use padaria_core::money::Money;
//! use padaria_core::stock::stock_status;
//! use padaria_core::types::StockStatus;
//!
//! // Create money from centavos (never from floats!)
//! let price = Money::from_cents(350); // R$ 3.50
//!
//! // Stock status is derived, never stored by hand
//! assert_eq!(stock_status(0), StockStatus::OutOfStock);
//! assert_eq!(stock_status(8), StockStatus::LowStock);
//! assert_eq!(stock_status(150), StockStatus::InStock);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kpi;
pub mod money;
pub mod patch;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use padaria_core::Money` instead of
// `use padaria_core::money::Money`

pub use error::ValidationError;
pub use kpi::{dashboard_kpis, AlertSeverity, BestSeller, DashboardKpis, StockAlert};
pub use money::Money;
pub use patch::{
    ExpensePatch, NewExpense, NewProduct, NewSale, NewSupplier, ProductPatch, SupplierPatch,
};
pub use stock::{stock_status, LOW_STOCK_THRESHOLD};
pub use types::*;
