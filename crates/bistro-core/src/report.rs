//! # Sales Report
//!
//! Aggregation over orders. Pure: no clock, no state, no side effects.
//!
//! ## Report Flow
//! ```text
//! SalesLedger::all_orders() ──► total_sales(&[Order]) ──► Money
//!                                      │
//! harness reads today's date ──────────┴──► SalesReport::generate(orders, date)
//!                                                  │
//!                                                  ▼
//!                          "Total Sales for 2026-10-19: $33.96"
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::order::Order;

/// Sum of `total_price()` over all orders; zero for an empty slice.
///
/// ## Example
/// ```rust
/// use bistro_core::{total_sales, Money};
///
/// assert_eq!(total_sales(&[]), Money::zero());
/// ```
pub fn total_sales(orders: &[Order]) -> Money {
    orders.iter().map(Order::total_price).sum()
}

/// A point-in-time sales summary.
///
/// The report date is supplied by the caller; this crate never reads the
/// system clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    #[ts(as = "String")]
    pub report_date: NaiveDate,
    pub order_count: usize,
    pub item_count: usize,
    pub total_sales: Money,
}

impl SalesReport {
    /// Builds a report over `orders` dated `report_date`.
    pub fn generate(orders: &[Order], report_date: NaiveDate) -> Self {
        SalesReport {
            report_date,
            order_count: orders.len(),
            item_count: orders.iter().map(Order::item_count).sum(),
            total_sales: total_sales(orders),
        }
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Sales for {}: {}",
            self.report_date.format("%Y-%m-%d"),
            self.total_sales
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
