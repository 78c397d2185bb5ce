//! # Draft and Patch Input Shapes
//!
//! The shapes the presentation layer hands to the store:
//!
//! - `New*` drafts: the entity minus everything the store generates
//!   (id, timestamps, derived status).
//! - `*Patch` partial updates: every field optional, applied as a
//!   shallow merge over the existing entity.
//!
//! ## Merge Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  patch.apply_to(&mut entity)                            │
//! │                                                                         │
//! │  • Only fields that are Some(..) overwrite the entity                  │
//! │  • updated_at is bumped on every apply (where the entity has one)      │
//! │  • ProductPatch with a stock value recomputes the derived status       │
//! │  • A patch cannot clear an optional field (matches the original        │
//! │    shallow-merge behavior)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure data + pure merge: the store calls `apply_to` but owns none of
//! these semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::stock::stock_status;
use crate::types::{ContactInfo, Expense, ExpenseKind, Product, SaleLine, Supplier};

// =============================================================================
// Product
// =============================================================================

/// Input for creating a product: `Product` minus id, status, timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub cost_price_cents: i64,
    pub sell_price_cents: i64,
    pub stock: i64,
    pub unit: String,
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub cost_price_cents: Option<i64>,
    pub sell_price_cents: Option<i64>,
    pub stock: Option<i64>,
    pub unit: Option<String>,
}

impl ProductPatch {
    /// Shorthand for the common stock-adjustment patch.
    pub fn stock(stock: i64) -> Self {
        ProductPatch {
            stock: Some(stock),
            ..ProductPatch::default()
        }
    }

    /// Merges the provided fields over `product`, recomputing the derived
    /// status when stock is part of the patch and bumping `updated_at`.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(cost) = self.cost_price_cents {
            product.cost_price_cents = cost;
        }
        if let Some(sell) = self.sell_price_cents {
            product.sell_price_cents = sell;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
            product.status = stock_status(stock);
        }
        if let Some(unit) = &self.unit {
            product.unit = unit.clone();
        }
        product.updated_at = Utc::now();
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// Input for creating a supplier: `Supplier` minus id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: String,
    pub contact: ContactInfo,
    pub cnpj: String,
    pub products: Vec<String>,
    pub payment_terms: String,
}

/// Partial update for a supplier. `contact` is replaced as a whole,
/// matching the original's shallow merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub contact: Option<ContactInfo>,
    pub cnpj: Option<String>,
    pub products: Option<Vec<String>>,
    pub payment_terms: Option<String>,
}

impl SupplierPatch {
    /// Merges the provided fields over `supplier` and bumps `updated_at`.
    pub fn apply_to(&self, supplier: &mut Supplier) {
        if let Some(name) = &self.name {
            supplier.name = name.clone();
        }
        if let Some(contact) = &self.contact {
            supplier.contact = contact.clone();
        }
        if let Some(cnpj) = &self.cnpj {
            supplier.cnpj = cnpj.clone();
        }
        if let Some(products) = &self.products {
            supplier.products = products.clone();
        }
        if let Some(terms) = &self.payment_terms {
            supplier.payment_terms = terms.clone();
        }
        supplier.updated_at = Utc::now();
    }
}

// =============================================================================
// Expense
// =============================================================================

/// Input for creating an expense: `Expense` minus id and createdAt.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    pub category: String,
    pub description: String,
    pub amount_cents: i64,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
}

/// Partial update for an expense. Expenses carry no `updated_at`, so the
/// merge touches only the provided fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpensePatch {
    #[serde(rename = "type")]
    pub kind: Option<ExpenseKind>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    #[ts(as = "Option<String>")]
    pub date: Option<DateTime<Utc>>,
    /// Sets the weak supplier reference. A patch cannot clear it.
    pub supplier_id: Option<String>,
}

impl ExpensePatch {
    /// Merges the provided fields over `expense`.
    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(kind) = self.kind {
            expense.kind = kind;
        }
        if let Some(category) = &self.category {
            expense.category = category.clone();
        }
        if let Some(description) = &self.description {
            expense.description = description.clone();
        }
        if let Some(amount) = self.amount_cents {
            expense.amount_cents = amount;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(supplier_id) = &self.supplier_id {
            expense.supplier_id = Some(supplier_id.clone());
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// Input for creating a sale: `Sale` minus id.
///
/// `total_cents` is client-supplied and not validated against the line
/// items (see `Sale::line_total_cents` for callers that want to compare).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub products: Vec<SaleLine>,
    pub total_cents: i64,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StockStatus;

    fn product_fixture() -> Product {
        let created = Utc::now();
        Product {
            id: "p1".to_string(),
            name: "Pão Francês".to_string(),
            category: "Pães".to_string(),
            description: "Pão francês tradicional".to_string(),
            cost_price_cents: 15,
            sell_price_cents: 35,
            stock: 150,
            unit: "unidade".to_string(),
            status: StockStatus::InStock,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_stock_patch_recomputes_status() {
        let mut product = product_fixture();
        let before = product.updated_at;

        ProductPatch::stock(0).apply_to(&mut product);

        assert_eq!(product.stock, 0);
        assert_eq!(product.status, StockStatus::OutOfStock);
        assert!(product.updated_at >= before);
    }

    #[test]
    fn test_non_stock_patch_keeps_status() {
        let mut product = product_fixture();

        let patch = ProductPatch {
            sell_price_cents: Some(40),
            ..ProductPatch::default()
        };
        patch.apply_to(&mut product);

        assert_eq!(product.sell_price_cents, 40);
        assert_eq!(product.stock, 150);
        assert_eq!(product.status, StockStatus::InStock);
    }

    #[test]
    fn test_empty_patch_only_bumps_updated_at() {
        let mut product = product_fixture();
        let original = product.clone();

        ProductPatch::default().apply_to(&mut product);

        assert_eq!(product.name, original.name);
        assert_eq!(product.stock, original.stock);
        assert_eq!(product.status, original.status);
        assert_eq!(product.created_at, original.created_at);
    }

    #[test]
    fn test_supplier_patch_replaces_contact_wholesale() {
        let created = Utc::now();
        let mut supplier = Supplier {
            id: "s1".to_string(),
            name: "Moinho São Paulo".to_string(),
            contact: ContactInfo {
                phone: "(11) 1234-5678".to_string(),
                email: "vendas@moinhosp.com.br".to_string(),
            },
            cnpj: "12.345.678/0001-90".to_string(),
            products: vec!["farinha".to_string()],
            payment_terms: "30 dias".to_string(),
            created_at: created,
            updated_at: created,
        };

        let patch = SupplierPatch {
            contact: Some(ContactInfo {
                phone: "(11) 0000-0000".to_string(),
                email: "novo@moinhosp.com.br".to_string(),
            }),
            ..SupplierPatch::default()
        };
        patch.apply_to(&mut supplier);

        assert_eq!(supplier.contact.phone, "(11) 0000-0000");
        assert_eq!(supplier.name, "Moinho São Paulo");
    }

    #[test]
    fn test_expense_patch_sets_weak_reference() {
        let mut expense = Expense {
            id: "e1".to_string(),
            kind: ExpenseKind::Variable,
            category: "Ingredientes".to_string(),
            description: "Compra de farinha".to_string(),
            amount_cents: 85_000,
            date: Utc::now(),
            supplier_id: None,
            created_at: Utc::now(),
        };

        let patch = ExpensePatch {
            supplier_id: Some("sup-1".to_string()),
            ..ExpensePatch::default()
        };
        patch.apply_to(&mut expense);

        assert_eq!(expense.supplier_id.as_deref(), Some("sup-1"));
    }
}
