//! # KPI Aggregation
//!
//! Dashboard metrics derived from the live collections.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      dashboard_kpis(...)                                │
//! │                                                                         │
//! │  sales ─────────► Σ total_cents ──────────► totalSales                 │
//! │  expenses ──────► Σ amount_cents ─────────► totalExpenses              │
//! │                   profit = sales − expenses                            │
//! │                   margin = profit / sales × 100 (0 when no sales)      │
//! │                                                                         │
//! │  sale lines ────► group by product_id ────► bestSelling (top 5 by      │
//! │                   (dangling ids dropped)     revenue, stable order)    │
//! │                                                                         │
//! │  products ──────► status ∈ {low, out} ────► stockAlerts                │
//! │                                              (collection order)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and stateless: recomputed from scratch on every request, no
//! caching or memoization. The collections are read-only inputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Expense, Product, Sale, StockStatus, Supplier};

/// Maximum entries in the best-sellers ranking.
pub const BEST_SELLERS_LIMIT: usize = 5;

// =============================================================================
// Report Types
// =============================================================================

/// One aggregated entry in the best-sellers ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BestSeller {
    pub product_id: String,
    /// Product name resolved from the live collection at aggregation time.
    pub name: String,
    /// Total quantity across all sale lines.
    pub quantity: i64,
    /// Total revenue (Σ quantity × unit price) in centavos.
    pub revenue_cents: i64,
}

/// How urgent a stock alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Stock is below the threshold but not exhausted.
    Low,
    /// Stock is exhausted.
    Critical,
}

/// A product that needs restocking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub product_id: String,
    pub product_name: String,
    pub current_stock: i64,
    pub severity: AlertSeverity,
}

/// The dashboard metric set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    /// Sum of all sale totals, in centavos.
    pub total_sales_cents: i64,
    /// Sum of all expense amounts, in centavos.
    pub total_expenses_cents: i64,
    /// totalSales − totalExpenses. Negative when the bakery is losing money.
    pub profit_cents: i64,
    /// profit / totalSales × 100, or 0.0 when there are no sales.
    pub profit_margin: f64,
    /// Top products by revenue, at most [`BEST_SELLERS_LIMIT`] entries.
    pub best_selling: Vec<BestSeller>,
    /// Low- and out-of-stock products, in collection order.
    pub stock_alerts: Vec<StockAlert>,
    /// Product collection size.
    pub total_products: usize,
    /// Supplier collection size.
    pub active_suppliers: usize,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the dashboard KPI set from the current collections.
///
/// ## Best-Seller Semantics
/// - Sale lines are grouped by `product_id` in first-encounter order.
/// - Lines referencing a product missing from `products` (deleted since
///   the sale) are silently dropped - weak references, not errors.
/// - Revenue is summed from the lines (quantity × unit price at time of
///   sale), NOT from current product prices.
/// - Stable sort by revenue descending: ties keep first-encountered order.
pub fn dashboard_kpis(
    products: &[Product],
    suppliers: &[Supplier],
    expenses: &[Expense],
    sales: &[Sale],
) -> DashboardKpis {
    let total_sales_cents: i64 = sales.iter().map(|s| s.total_cents).sum();
    let total_expenses_cents: i64 = expenses.iter().map(|e| e.amount_cents).sum();
    let profit_cents = total_sales_cents - total_expenses_cents;

    let profit_margin = if total_sales_cents > 0 {
        profit_cents as f64 / total_sales_cents as f64 * 100.0
    } else {
        0.0
    };

    DashboardKpis {
        total_sales_cents,
        total_expenses_cents,
        profit_cents,
        profit_margin,
        best_selling: best_selling(products, sales),
        stock_alerts: stock_alerts(products),
        total_products: products.len(),
        active_suppliers: suppliers.len(),
    }
}

/// Groups sale lines by product and ranks by revenue.
fn best_selling(products: &[Product], sales: &[Sale]) -> Vec<BestSeller> {
    // Vec accumulator instead of a HashMap: preserves first-encounter
    // order, which is the tie-break for equal revenues.
    let mut ranking: Vec<BestSeller> = Vec::new();

    for sale in sales {
        for line in &sale.products {
            // Weak reference: a lookup miss means the product was deleted;
            // the line is dropped, never an error.
            let Some(product) = products.iter().find(|p| p.id == line.product_id) else {
                continue;
            };

            match ranking.iter_mut().find(|b| b.product_id == line.product_id) {
                Some(entry) => {
                    entry.quantity += line.quantity;
                    entry.revenue_cents += line.revenue_cents();
                }
                None => ranking.push(BestSeller {
                    product_id: line.product_id.clone(),
                    name: product.name.clone(),
                    quantity: line.quantity,
                    revenue_cents: line.revenue_cents(),
                }),
            }
        }
    }

    // sort_by is stable, so equal revenues keep insertion order.
    ranking.sort_by(|a, b| b.revenue_cents.cmp(&a.revenue_cents));
    ranking.truncate(BEST_SELLERS_LIMIT);
    ranking
}

/// Collects low- and out-of-stock products, in collection order.
fn stock_alerts(products: &[Product]) -> Vec<StockAlert> {
    products
        .iter()
        .filter_map(|product| {
            let severity = match product.status {
                StockStatus::OutOfStock => AlertSeverity::Critical,
                StockStatus::LowStock => AlertSeverity::Low,
                StockStatus::InStock => return None,
            };
            Some(StockAlert {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                current_stock: product.stock,
                severity,
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
