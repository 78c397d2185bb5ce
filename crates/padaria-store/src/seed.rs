//! # Seed Data
//!
//! Fixed bakery datasets written on first run, so the application opens
//! with something to look at instead of four empty screens.
//!
//! ## Seeding Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       seed_if_empty(&storage)                           │
//! │                                                                         │
//! │  For each collection key:                                               │
//! │    key absent  → write the fixed dataset                               │
//! │    key present → leave it alone (NEVER overwrites user data)           │
//! │                                                                         │
//! │  Idempotent: running twice leaves storage byte-identical after the     │
//! │  second call.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Seed ids are short literals ("1", "2", ...) that predate the UUID
//! scheme used for new entities; ids are opaque strings either way, and
//! the seed sales/expenses cross-reference them.

use chrono::{DateTime, TimeZone, Utc};

use padaria_core::stock::stock_status;
use padaria_core::types::{
    ContactInfo, Expense, ExpenseKind, Product, Role, Sale, SaleLine, Supplier, User,
};

use crate::error::StoreResult;
use crate::storage::{Storage, KEY_EXPENSES, KEY_PRODUCTS, KEY_SALES, KEY_SUPPLIERS};

// =============================================================================
// Seeding
// =============================================================================

/// What [`seed_if_empty`] did for each collection key.
#[derive(Debug, Default)]
pub struct SeedSummary {
    /// Keys that were absent and received the fixed dataset.
    pub written: Vec<&'static str>,
    /// Keys that already held data and were left untouched.
    pub existing: Vec<&'static str>,
}

/// Writes the fixed seed dataset under each collection key that is
/// currently absent. Existing data is never overwritten.
pub async fn seed_if_empty(storage: &Storage) -> StoreResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    if storage.contains(KEY_PRODUCTS).await {
        summary.existing.push(KEY_PRODUCTS);
    } else {
        storage.save(KEY_PRODUCTS, &seed_products()).await?;
        summary.written.push(KEY_PRODUCTS);
    }

    if storage.contains(KEY_SUPPLIERS).await {
        summary.existing.push(KEY_SUPPLIERS);
    } else {
        storage.save(KEY_SUPPLIERS, &seed_suppliers()).await?;
        summary.written.push(KEY_SUPPLIERS);
    }

    if storage.contains(KEY_EXPENSES).await {
        summary.existing.push(KEY_EXPENSES);
    } else {
        storage.save(KEY_EXPENSES, &seed_expenses()).await?;
        summary.written.push(KEY_EXPENSES);
    }

    if storage.contains(KEY_SALES).await {
        summary.existing.push(KEY_SALES);
    } else {
        storage.save(KEY_SALES, &seed_sales()).await?;
        summary.written.push(KEY_SALES);
    }

    Ok(summary)
}

// =============================================================================
// Fixed Datasets
// =============================================================================

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Static, known-valid calendar dates.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("static seed date")
}

fn product(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    cost_price_cents: i64,
    sell_price_cents: i64,
    stock: i64,
    unit: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        cost_price_cents,
        sell_price_cents,
        stock,
        unit: unit.to_string(),
        // Derived at construction so the consistency invariant holds
        // even in seed data.
        status: stock_status(stock),
        created_at: seed_date(2024, 1, 1),
        updated_at: seed_date(2024, 1, 15),
    }
}

/// The default product catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Pão Francês",
            "Pães",
            "Pão francês tradicional",
            15,
            35,
            150,
            "unidade",
        ),
        product(
            "2",
            "Croissant",
            "Pães",
            "Croissant de manteiga",
            120,
            350,
            8,
            "unidade",
        ),
        product(
            "3",
            "Torta de Frango",
            "Salgados",
            "Torta de frango com catupiry",
            380,
            890,
            0,
            "fatia",
        ),
        product(
            "4",
            "Bolo de Chocolate",
            "Doces",
            "Bolo de chocolate com cobertura",
            1200,
            3500,
            5,
            "unidade",
        ),
        product(
            "5",
            "Café Expresso",
            "Bebidas",
            "Café expresso tradicional",
            80,
            300,
            200,
            "xícara",
        ),
    ]
}

/// The default supplier roster.
pub fn seed_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "1".to_string(),
            name: "Moinho São Paulo".to_string(),
            contact: ContactInfo {
                phone: "(11) 1234-5678".to_string(),
                email: "vendas@moinhosp.com.br".to_string(),
            },
            cnpj: "12.345.678/0001-90".to_string(),
            products: vec![
                "farinha".to_string(),
                "fermento".to_string(),
                "açúcar".to_string(),
            ],
            payment_terms: "30 dias".to_string(),
            created_at: seed_date(2024, 1, 1),
            updated_at: seed_date(2024, 1, 15),
        },
        Supplier {
            id: "2".to_string(),
            name: "Laticínios Aurora".to_string(),
            contact: ContactInfo {
                phone: "(11) 9876-5432".to_string(),
                email: "pedidos@aurora.com.br".to_string(),
            },
            cnpj: "98.765.432/0001-10".to_string(),
            products: vec![
                "leite".to_string(),
                "manteiga".to_string(),
                "queijo".to_string(),
            ],
            payment_terms: "15 dias".to_string(),
            created_at: seed_date(2024, 1, 1),
            updated_at: seed_date(2024, 1, 15),
        },
    ]
}

/// The default expense ledger.
pub fn seed_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "1".to_string(),
            kind: ExpenseKind::Fixed,
            category: "Aluguel".to_string(),
            description: "Aluguel da padaria".to_string(),
            amount_cents: 350_000,
            date: seed_date(2024, 1, 1),
            supplier_id: None,
            created_at: seed_date(2024, 1, 1),
        },
        Expense {
            id: "2".to_string(),
            kind: ExpenseKind::Variable,
            category: "Ingredientes".to_string(),
            description: "Compra de farinha e fermento".to_string(),
            amount_cents: 85_000,
            date: seed_date(2024, 1, 15),
            supplier_id: Some("1".to_string()),
            created_at: seed_date(2024, 1, 15),
        },
        Expense {
            id: "3".to_string(),
            kind: ExpenseKind::Fixed,
            category: "Energia".to_string(),
            description: "Conta de luz".to_string(),
            amount_cents: 68_000,
            date: seed_date(2024, 1, 10),
            supplier_id: None,
            created_at: seed_date(2024, 1, 10),
        },
    ]
}

/// The default sales history.
pub fn seed_sales() -> Vec<Sale> {
    vec![
        Sale {
            id: "1".to_string(),
            products: vec![
                SaleLine {
                    product_id: "1".to_string(),
                    quantity: 20,
                    unit_price_cents: 35,
                },
                SaleLine {
                    product_id: "5".to_string(),
                    quantity: 5,
                    unit_price_cents: 300,
                },
            ],
            total_cents: 2200,
            date: seed_date(2024, 1, 15),
        },
        Sale {
            id: "2".to_string(),
            products: vec![
                SaleLine {
                    product_id: "2".to_string(),
                    quantity: 3,
                    unit_price_cents: 350,
                },
                SaleLine {
                    product_id: "4".to_string(),
                    quantity: 1,
                    unit_price_cents: 3500,
                },
            ],
            total_cents: 4550,
            date: seed_date(2024, 1, 15),
        },
    ]
}

/// The built-in administrator account.
pub fn seed_user() -> User {
    User {
        id: "1".to_string(),
        username: "admin".to_string(),
        name: "Administrador".to_string(),
        role: Role::Admin,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use padaria_core::types::StockStatus;

    #[test]
    fn test_seed_statuses_are_consistent_with_stock() {
        let products = seed_products();
        assert_eq!(products[0].status, StockStatus::InStock); // 150
        assert_eq!(products[1].status, StockStatus::LowStock); // 8
        assert_eq!(products[2].status, StockStatus::OutOfStock); // 0
        assert_eq!(products[3].status, StockStatus::LowStock); // 5
        assert_eq!(products[4].status, StockStatus::InStock); // 200
    }

    #[test]
    fn test_seed_sale_totals_match_their_lines() {
        for sale in seed_sales() {
            assert_eq!(sale.total_cents, sale.line_total_cents(), "sale {}", sale.id);
        }
    }

    #[tokio::test]
    async fn test_seed_if_empty_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).await.unwrap();

        let first = seed_if_empty(&storage).await.unwrap();
        assert_eq!(first.written.len(), 4);
        assert!(first.existing.is_empty());

        let snapshot = tokio::fs::read(storage.dir().join("products.json"))
            .await
            .unwrap();

        let second = seed_if_empty(&storage).await.unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.existing.len(), 4);

        let after = tokio::fs::read(storage.dir().join("products.json"))
            .await
            .unwrap();
        assert_eq!(snapshot, after);
    }

    #[tokio::test]
    async fn test_seed_never_overwrites_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).await.unwrap();

        // A user-modified (empty) product collection already exists.
        storage
            .save(KEY_PRODUCTS, &Vec::<Product>::new())
            .await
            .unwrap();

        seed_if_empty(&storage).await.unwrap();

        let loaded = storage.load::<Vec<Product>>(KEY_PRODUCTS, vec![]).await;
        assert!(loaded.value.is_empty());
    }
}
