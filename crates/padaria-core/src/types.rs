//! # Domain Types
//!
//! Core domain types used throughout Padaria SA.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Supplier     │   │    Expense      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  stock          │   │  cnpj           │   │  kind           │       │
//! │  │  status (DERIVED│   │  contact        │   │  supplier_id    │       │
//! │  │   from stock)   │   │  products (names│   │   (weak ref)    │       │
//! │  └─────────────────┘   │   not FKs)      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Sale       │   │      User       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  products: lines│   │  role           │  (session only, never a     │
//! │  │  total (client- │   │  username       │   persisted collection)     │
//! │  │   supplied)     │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Weak References
//! `Expense.supplier_id` and `SaleLine.product_id` are references by id,
//! resolved via lookup at read time. There is no ownership and no cascade:
//! deleting a supplier leaves `supplier_id` dangling, and consuming code
//! must treat a lookup miss as absence, not as an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Stock Status
// =============================================================================

/// Derived stock classification for a product.
///
/// Always computed from the `stock` field (see [`crate::stock`]), never
/// accepted from user input. The invariant: status is consistent with
/// stock at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Stock at or above the low-stock threshold.
    InStock,
    /// Stock above zero but below the threshold.
    LowStock,
    /// Stock is exactly zero.
    OutOfStock,
}

// =============================================================================
// Product
// =============================================================================

/// A bakery product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name (e.g., "Pão Francês").
    pub name: String,

    /// Category (e.g., "Pães", "Doces", "Bebidas").
    pub category: String,

    /// Free-form description.
    pub description: String,

    /// Cost price in centavos (>= 0).
    pub cost_price_cents: i64,

    /// Sell price in centavos (>= 0).
    pub sell_price_cents: i64,

    /// Current stock level (integer >= 0).
    pub stock: i64,

    /// Sales unit (e.g., "unidade", "fatia", "xícara").
    pub unit: String,

    /// Derived stock classification. Consistent with `stock` at read time.
    pub status: StockStatus,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the sell price as a Money type.
    #[inline]
    pub fn sell_price(&self) -> Money {
        Money::from_cents(self.sell_price_cents)
    }

    /// Returns the cost price as a Money type.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_cents(self.cost_price_cents)
    }

    /// Gross margin per unit sold.
    #[inline]
    pub fn unit_margin_cents(&self) -> i64 {
        self.sell_price_cents - self.cost_price_cents
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// Contact details for a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
}

/// A supplier of ingredients or services.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact: ContactInfo,

    /// Brazilian company registration number, format `##.###.###/####-##`.
    /// Format is checked in the presentation layer (see [`crate::validation`]).
    pub cnpj: String,

    /// Names of supplied products. Plain strings, NOT foreign keys into
    /// the product collection.
    pub products: Vec<String>,

    /// Payment terms (e.g., "30 dias").
    pub payment_terms: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Expense
// =============================================================================

/// Whether an expense recurs at a fixed amount or varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    /// Recurring, known amount (rent, utilities).
    Fixed,
    /// One-off or fluctuating (ingredient purchases).
    Variable,
}

/// A business expense.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,

    /// Serialized under the field name `type` for frontend compatibility.
    #[serde(rename = "type")]
    pub kind: ExpenseKind,

    pub category: String,
    pub description: String,

    /// Amount in centavos (> 0).
    pub amount_cents: i64,

    /// When the expense was incurred.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// Weak reference to a supplier. May point to a since-deleted
    /// supplier; lookup misses mean absence, not error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Returns the expense amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    /// Weak reference to a product. Dangling references are tolerated
    /// and dropped silently during aggregation.
    pub product_id: String,

    /// Quantity sold (> 0).
    pub quantity: i64,

    /// Unit price in centavos at time of sale (>= 0).
    pub unit_price_cents: i64,
}

impl SaleLine {
    /// Revenue contributed by this line (quantity × unit price).
    #[inline]
    pub fn revenue_cents(&self) -> i64 {
        self.quantity * self.unit_price_cents
    }
}

/// A completed sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,

    /// Ordered line items.
    pub products: Vec<SaleLine>,

    /// Client-supplied total in centavos. Should equal the sum of line
    /// items but is NOT enforced; use [`Sale::line_total_cents`] to compare.
    pub total_cents: i64,

    /// When the sale happened.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

impl Sale {
    /// Returns the client-supplied total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Sum of line-item revenues. May differ from `total_cents`.
    pub fn line_total_cents(&self) -> i64 {
        self.products.iter().map(SaleLine::revenue_cents).sum()
    }
}

// =============================================================================
// User
// =============================================================================

/// Access role for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

/// A user of the application.
///
/// Session-only: held in the auth session and `auth-storage` key,
/// never stored as an entity collection.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sale_fixture() -> Sale {
        Sale {
            id: "s1".to_string(),
            products: vec![
                SaleLine {
                    product_id: "p1".to_string(),
                    quantity: 20,
                    unit_price_cents: 35,
                },
                SaleLine {
                    product_id: "p5".to_string(),
                    quantity: 5,
                    unit_price_cents: 300,
                },
            ],
            total_cents: 2200,
            date: Utc::now(),
        }
    }

    #[test]
    fn test_sale_line_revenue() {
        let sale = sale_fixture();
        assert_eq!(sale.products[0].revenue_cents(), 700);
        assert_eq!(sale.products[1].revenue_cents(), 1500);
    }

    #[test]
    fn test_sale_line_total_matches_client_total() {
        let sale = sale_fixture();
        assert_eq!(sale.line_total_cents(), sale.total_cents);
    }

    #[test]
    fn test_sale_total_not_enforced() {
        // A client-supplied total that disagrees with the lines is kept as-is.
        let mut sale = sale_fixture();
        sale.total_cents = 9999;
        assert_eq!(sale.total().cents(), 9999);
        assert_ne!(sale.line_total_cents(), sale.total_cents);
    }

    #[test]
    fn test_product_unit_margin() {
        let product = Product {
            id: "p1".to_string(),
            name: "Croissant".to_string(),
            category: "Pães".to_string(),
            description: "Croissant de manteiga".to_string(),
            cost_price_cents: 120,
            sell_price_cents: 350,
            stock: 8,
            unit: "unidade".to_string(),
            status: StockStatus::LowStock,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(product.unit_margin_cents(), 230);
    }

    #[test]
    fn test_expense_kind_serializes_as_type() {
        let expense = Expense {
            id: "e1".to_string(),
            kind: ExpenseKind::Fixed,
            category: "Aluguel".to_string(),
            description: "Aluguel da padaria".to_string(),
            amount_cents: 350_000,
            date: Utc::now(),
            supplier_id: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["type"], "fixed");
        // Absent weak reference is omitted entirely.
        assert!(json.get("supplierId").is_none());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_value(StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "out_of_stock");
    }
}
