//! # Stock Status Derivation
//!
//! The single derived field in the data model: a product's stock
//! classification, recomputed whenever stock changes.
//!
//! ## The Three-Tier Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      stock_status(stock)                                │
//! │                                                                         │
//! │   stock == 0          →  out_of_stock                                  │
//! │   0 < stock < 10      →  low_stock                                     │
//! │   stock >= 10         →  in_stock                                      │
//! │                                                                         │
//! │  Invoked on product create and on any update that includes a stock     │
//! │  field. No side effects, no persisted state of its own.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::StockStatus;

/// Stock levels below this (and above zero) classify as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Derives the stock classification for a stock quantity.
///
/// Pure function; callers are responsible for storing the result on the
/// product so that `status` stays consistent with `stock` at read time.
///
/// Stock is never negative upstream (the store trusts validated input),
/// but a negative value is still mapped to out-of-stock rather than
/// wrapping into a nonsense tier.
///
/// ## Example
/// ```rust
/// use padaria_core::stock::stock_status;
/// use padaria_core::types::StockStatus;
///
/// assert_eq!(stock_status(0), StockStatus::OutOfStock);
/// assert_eq!(stock_status(9), StockStatus::LowStock);
/// assert_eq!(stock_status(10), StockStatus::InStock);
/// ```
pub fn stock_status(stock: i64) -> StockStatus {
    if stock <= 0 {
        StockStatus::OutOfStock
    } else if stock < LOW_STOCK_THRESHOLD {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_out_of_stock() {
        assert_eq!(stock_status(0), StockStatus::OutOfStock);
    }

    #[test]
    fn test_low_stock_band() {
        for s in 1..LOW_STOCK_THRESHOLD {
            assert_eq!(stock_status(s), StockStatus::LowStock, "stock {}", s);
        }
    }

    #[test]
    fn test_in_stock_from_threshold_up() {
        assert_eq!(stock_status(LOW_STOCK_THRESHOLD), StockStatus::InStock);
        assert_eq!(stock_status(11), StockStatus::InStock);
        assert_eq!(stock_status(150), StockStatus::InStock);
        assert_eq!(stock_status(i64::MAX), StockStatus::InStock);
    }

    #[test]
    fn test_negative_treated_as_out_of_stock() {
        assert_eq!(stock_status(-1), StockStatus::OutOfStock);
    }
}
