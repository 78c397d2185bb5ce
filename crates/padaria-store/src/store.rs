//! # Entity Store
//!
//! The application's single stateful object: four in-memory collections
//! kept in sync with the persistence adapter.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       AppStore mutation                                  │
//! │                                                                         │
//! │  add_* / update_* / delete_*                                            │
//! │       │                                                                 │
//! │       ├─ 1. mutate the in-memory collection                             │
//! │       └─ 2. persist the WHOLE collection under its key                  │
//! │                                                                         │
//! │  No rollback: a failed write leaves memory ahead of storage until      │
//! │  the next successful write of that key.                                 │
//! │                                                                         │
//! │  update_* / delete_* with an unknown id: silent no-op (the collection  │
//! │  is still rewritten).                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sales are append-only: they get `fetch` and `add`, nothing else.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use padaria_core::kpi::{dashboard_kpis, DashboardKpis};
use padaria_core::patch::{
    ExpensePatch, NewExpense, NewProduct, NewSale, NewSupplier, ProductPatch, SupplierPatch,
};
use padaria_core::stock::stock_status;
use padaria_core::types::{Expense, Product, Sale, Supplier};

use crate::error::StoreResult;
use crate::seed;
use crate::storage::{
    LoadSource, Storage, KEY_EXPENSES, KEY_PRODUCTS, KEY_SALES, KEY_SUPPLIERS,
};

/// Generates an opaque id for a new entity.
fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// AppStore
// =============================================================================

/// In-memory entity collections backed by [`Storage`].
///
/// ## Example
/// ```rust,ignore
/// let storage = Storage::open("./padaria_data").await?;
/// let mut store = AppStore::new(storage);
/// store.initialize().await?;
///
/// store.add_product(draft).await?;
/// let kpis = store.kpis();
/// ```
#[derive(Debug)]
pub struct AppStore {
    storage: Storage,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
    expenses: Vec<Expense>,
    sales: Vec<Sale>,
}

impl AppStore {
    /// Creates an empty store over `storage`. Call [`initialize`] (or the
    /// individual `fetch_*` methods) before reading the collections.
    ///
    /// [`initialize`]: AppStore::initialize
    pub fn new(storage: Storage) -> Self {
        AppStore {
            storage,
            products: Vec::new(),
            suppliers: Vec::new(),
            expenses: Vec::new(),
            sales: Vec::new(),
        }
    }

    /// Seeds absent collections, then loads all four into memory.
    pub async fn initialize(&mut self) -> StoreResult<()> {
        let summary = seed::seed_if_empty(&self.storage).await?;
        if !summary.written.is_empty() {
            debug!(keys = ?summary.written, "seeded absent collections");
        }

        self.fetch_products().await;
        self.fetch_suppliers().await;
        self.fetch_expenses().await;
        self.fetch_sales().await;
        Ok(())
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Computes the dashboard metric set from the current collections.
    pub fn kpis(&self) -> DashboardKpis {
        dashboard_kpis(&self.products, &self.suppliers, &self.expenses, &self.sales)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Reloads products from storage, falling back to the seed catalog
    /// when the key is absent or unreadable. Replaces the collection.
    pub async fn fetch_products(&mut self) -> LoadSource {
        let loaded = self
            .storage
            .load(KEY_PRODUCTS, seed::seed_products())
            .await;
        debug!(count = loaded.value.len(), source = ?loaded.source, "fetched products");
        self.products = loaded.value;
        loaded.source
    }

    /// Appends a product built from `draft` and persists the collection.
    /// The stock status is derived; it is never caller-supplied.
    pub async fn add_product(&mut self, draft: NewProduct) -> StoreResult<()> {
        let now = Utc::now();
        let product = Product {
            id: new_entity_id(),
            name: draft.name,
            category: draft.category,
            description: draft.description,
            cost_price_cents: draft.cost_price_cents,
            sell_price_cents: draft.sell_price_cents,
            stock: draft.stock,
            unit: draft.unit,
            status: stock_status(draft.stock),
            created_at: now,
            updated_at: now,
        };
        debug!(id = %product.id, name = %product.name, "add product");

        self.products.push(product);
        self.storage.save(KEY_PRODUCTS, &self.products).await
    }

    /// Merges `patch` over the product with `id` and persists. Unknown
    /// ids are a silent no-op.
    pub async fn update_product(&mut self, id: &str, patch: ProductPatch) -> StoreResult<()> {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            patch.apply_to(product);
            debug!(id = %id, "update product");
        }
        self.storage.save(KEY_PRODUCTS, &self.products).await
    }

    /// Removes the product with `id` and persists. Unknown ids are a
    /// silent no-op; the remaining order is preserved.
    pub async fn delete_product(&mut self, id: &str) -> StoreResult<()> {
        self.products.retain(|p| p.id != id);
        debug!(id = %id, "delete product");
        self.storage.save(KEY_PRODUCTS, &self.products).await
    }

    // =========================================================================
    // Suppliers
    // =========================================================================

    /// Reloads suppliers from storage, falling back to the seed roster.
    pub async fn fetch_suppliers(&mut self) -> LoadSource {
        let loaded = self
            .storage
            .load(KEY_SUPPLIERS, seed::seed_suppliers())
            .await;
        debug!(count = loaded.value.len(), source = ?loaded.source, "fetched suppliers");
        self.suppliers = loaded.value;
        loaded.source
    }

    /// Appends a supplier built from `draft` and persists the collection.
    pub async fn add_supplier(&mut self, draft: NewSupplier) -> StoreResult<()> {
        let now = Utc::now();
        let supplier = Supplier {
            id: new_entity_id(),
            name: draft.name,
            contact: draft.contact,
            cnpj: draft.cnpj,
            products: draft.products,
            payment_terms: draft.payment_terms,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %supplier.id, name = %supplier.name, "add supplier");

        self.suppliers.push(supplier);
        self.storage.save(KEY_SUPPLIERS, &self.suppliers).await
    }

    /// Merges `patch` over the supplier with `id` and persists. Unknown
    /// ids are a silent no-op.
    pub async fn update_supplier(&mut self, id: &str, patch: SupplierPatch) -> StoreResult<()> {
        if let Some(supplier) = self.suppliers.iter_mut().find(|s| s.id == id) {
            patch.apply_to(supplier);
            debug!(id = %id, "update supplier");
        }
        self.storage.save(KEY_SUPPLIERS, &self.suppliers).await
    }

    /// Removes the supplier with `id` and persists. Expenses referencing
    /// it keep their `supplier_id` (weak reference, resolved lazily).
    pub async fn delete_supplier(&mut self, id: &str) -> StoreResult<()> {
        self.suppliers.retain(|s| s.id != id);
        debug!(id = %id, "delete supplier");
        self.storage.save(KEY_SUPPLIERS, &self.suppliers).await
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    /// Reloads expenses from storage, falling back to the seed ledger.
    pub async fn fetch_expenses(&mut self) -> LoadSource {
        let loaded = self
            .storage
            .load(KEY_EXPENSES, seed::seed_expenses())
            .await;
        debug!(count = loaded.value.len(), source = ?loaded.source, "fetched expenses");
        self.expenses = loaded.value;
        loaded.source
    }

    /// Appends an expense built from `draft` and persists the collection.
    pub async fn add_expense(&mut self, draft: NewExpense) -> StoreResult<()> {
        let expense = Expense {
            id: new_entity_id(),
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
            amount_cents: draft.amount_cents,
            date: draft.date,
            supplier_id: draft.supplier_id,
            created_at: Utc::now(),
        };
        debug!(id = %expense.id, category = %expense.category, "add expense");

        self.expenses.push(expense);
        self.storage.save(KEY_EXPENSES, &self.expenses).await
    }

    /// Merges `patch` over the expense with `id` and persists. Unknown
    /// ids are a silent no-op.
    pub async fn update_expense(&mut self, id: &str, patch: ExpensePatch) -> StoreResult<()> {
        if let Some(expense) = self.expenses.iter_mut().find(|e| e.id == id) {
            patch.apply_to(expense);
            debug!(id = %id, "update expense");
        }
        self.storage.save(KEY_EXPENSES, &self.expenses).await
    }

    /// Removes the expense with `id` and persists. Unknown ids are a
    /// silent no-op.
    pub async fn delete_expense(&mut self, id: &str) -> StoreResult<()> {
        self.expenses.retain(|e| e.id != id);
        debug!(id = %id, "delete expense");
        self.storage.save(KEY_EXPENSES, &self.expenses).await
    }

    // =========================================================================
    // Sales (append-only)
    // =========================================================================

    /// Reloads sales from storage, falling back to the seed history.
    pub async fn fetch_sales(&mut self) -> LoadSource {
        let loaded = self.storage.load(KEY_SALES, seed::seed_sales()).await;
        debug!(count = loaded.value.len(), source = ?loaded.source, "fetched sales");
        self.sales = loaded.value;
        loaded.source
    }

    /// Appends a sale built from `draft` and persists the collection.
    /// `total_cents` is recorded as supplied; it is not reconciled
    /// against the line items.
    pub async fn add_sale(&mut self, draft: NewSale) -> StoreResult<()> {
        let sale = Sale {
            id: new_entity_id(),
            products: draft.products,
            total_cents: draft.total_cents,
            date: draft.date,
        };
        debug!(id = %sale.id, total_cents = sale.total_cents, "add sale");

        self.sales.push(sale);
        self.storage.save(KEY_SALES, &self.sales).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use padaria_core::types::{ContactInfo, ExpenseKind, SaleLine, StockStatus};

    async fn fresh_store() -> (tempfile::TempDir, AppStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).await.unwrap();
        let mut store = AppStore::new(storage);
        store.initialize().await.unwrap();
        (dir, store)
    }

    fn product_draft(name: &str, stock: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: "Pães".to_string(),
            description: String::new(),
            cost_price_cents: 15,
            sell_price_cents: 35,
            stock,
            unit: "unidade".to_string(),
        }
    }

    #[tokio::test]
    async fn test_initialize_loads_seed_data() {
        let (_dir, store) = fresh_store().await;

        assert_eq!(store.products().len(), 5);
        assert_eq!(store.suppliers().len(), 2);
        assert_eq!(store.expenses().len(), 3);
        assert_eq!(store.sales().len(), 2);
    }

    #[tokio::test]
    async fn test_add_product_derives_status_and_persists() {
        let (_dir, mut store) = fresh_store().await;
        let storage = store.storage.clone();

        store.add_product(product_draft("Sonho", 3)).await.unwrap();

        let added = store.products().last().unwrap();
        assert_eq!(added.status, StockStatus::LowStock);
        assert!(!added.id.is_empty());

        // A second store over the same directory sees the write.
        let mut reread = AppStore::new(storage);
        assert_eq!(reread.fetch_products().await, LoadSource::Stored);
        assert_eq!(reread.products().len(), 6);
        assert_eq!(reread.products().last().unwrap().name, "Sonho");
    }

    #[tokio::test]
    async fn test_update_product_stock_recomputes_status() {
        let (_dir, mut store) = fresh_store().await;
        let id = store.products()[0].id.clone();
        let before = store.products()[0].updated_at;

        store
            .update_product(&id, ProductPatch::stock(0))
            .await
            .unwrap();

        let updated = &store.products()[0];
        assert_eq!(updated.stock, 0);
        assert_eq!(updated.status, StockStatus::OutOfStock);
        assert!(updated.updated_at >= before);
    }

    #[tokio::test]
    async fn test_update_with_unknown_id_is_silent_noop() {
        let (_dir, mut store) = fresh_store().await;
        let snapshot: Vec<Product> = store.products().to_vec();

        store
            .update_product("missing", ProductPatch::stock(999))
            .await
            .unwrap();

        assert_eq!(store.products().len(), snapshot.len());
        for (before, after) in snapshot.iter().zip(store.products()) {
            assert_eq!(before.stock, after.stock);
            assert_eq!(before.updated_at, after.updated_at);
        }
    }

    #[tokio::test]
    async fn test_delete_preserves_order_and_ignores_unknown_ids() {
        let (_dir, mut store) = fresh_store().await;
        let ids: Vec<String> = store.products().iter().map(|p| p.id.clone()).collect();

        store.delete_product(&ids[1]).await.unwrap();
        store.delete_product("missing").await.unwrap();

        let remaining: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(remaining, vec![&ids[0], &ids[2], &ids[3], &ids[4]]);
    }

    #[tokio::test]
    async fn test_supplier_crud_round_trip() {
        let (_dir, mut store) = fresh_store().await;

        store
            .add_supplier(NewSupplier {
                name: "Embalagens Sul".to_string(),
                contact: ContactInfo {
                    phone: "(51) 3333-4444".to_string(),
                    email: "contato@embalagenssul.com.br".to_string(),
                },
                cnpj: "11.222.333/0001-44".to_string(),
                products: vec!["sacolas".to_string()],
                payment_terms: "à vista".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(store.suppliers().len(), 3);

        let id = store.suppliers().last().unwrap().id.clone();
        store
            .update_supplier(
                &id,
                SupplierPatch {
                    payment_terms: Some("30 dias".to_string()),
                    ..SupplierPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(store.suppliers().last().unwrap().payment_terms, "30 dias");

        store.delete_supplier(&id).await.unwrap();
        assert_eq!(store.suppliers().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_supplier_leaves_expense_reference_dangling() {
        let (_dir, mut store) = fresh_store().await;

        // Seed expense "Ingredientes" references seed supplier "1".
        store.delete_supplier("1").await.unwrap();

        let ingredientes = store
            .expenses()
            .iter()
            .find(|e| e.category == "Ingredientes")
            .unwrap();
        assert_eq!(ingredientes.supplier_id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_expense_add_and_update() {
        let (_dir, mut store) = fresh_store().await;

        store
            .add_expense(NewExpense {
                kind: ExpenseKind::Variable,
                category: "Manutenção".to_string(),
                description: "Conserto do forno".to_string(),
                amount_cents: 45_000,
                date: Utc::now(),
                supplier_id: None,
            })
            .await
            .unwrap();
        assert_eq!(store.expenses().len(), 4);

        let id = store.expenses().last().unwrap().id.clone();
        store
            .update_expense(
                &id,
                ExpensePatch {
                    amount_cents: Some(52_000),
                    ..ExpensePatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(store.expenses().last().unwrap().amount_cents, 52_000);
    }

    #[tokio::test]
    async fn test_add_sale_records_total_as_supplied() {
        let (_dir, mut store) = fresh_store().await;

        // Lines sum to 700, but the supplied total (discounted) wins.
        store
            .add_sale(NewSale {
                products: vec![SaleLine {
                    product_id: "1".to_string(),
                    quantity: 20,
                    unit_price_cents: 35,
                }],
                total_cents: 650,
                date: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(store.sales().len(), 3);
        assert_eq!(store.sales().last().unwrap().total_cents, 650);
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_without_rollback() {
        let (dir, mut store) = fresh_store().await;
        let before = store.products().len();

        // Break the backing directory so the next persist fails.
        tokio::fs::remove_dir_all(dir.path()).await.unwrap();

        let err = store
            .add_product(product_draft("Sonho", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));

        // The in-memory append stays: memory runs ahead of storage
        // until the next successful write of the key.
        assert_eq!(store.products().len(), before + 1);
        assert_eq!(store.products().last().unwrap().name, "Sonho");
    }

    #[tokio::test]
    async fn test_kpis_over_seed_data() {
        let (_dir, store) = fresh_store().await;

        let kpis = store.kpis();
        assert_eq!(kpis.total_sales_cents, 6750);
        assert_eq!(kpis.total_expenses_cents, 503_000);
        assert_eq!(kpis.profit_cents, -496_250);
        assert_eq!(kpis.total_products, 5);
        assert_eq!(kpis.active_suppliers, 2);
        // Seed products "2" (stock 8), "3" (stock 0), "4" (stock 5).
        assert_eq!(kpis.stock_alerts.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_reports_fallback_on_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(dir.path()).await.unwrap();
        let mut store = AppStore::new(storage);

        // No initialize, nothing seeded: fetch falls back to seed data.
        assert_eq!(store.fetch_products().await, LoadSource::Fallback);
        assert_eq!(store.products().len(), 5);
    }
}
