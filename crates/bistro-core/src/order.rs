//! # Order
//!
//! One customer's selection of menu items.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SalesLedger::create_order()                                            │
//! │       │   (assigns the id)                                              │
//! │       ▼                                                                 │
//! │  ┌──────────┐   add_item(soup)    ┌──────────┐                         │
//! │  │  Empty   │────────────────────►│ Populated│◄──┐ add_item(...)       │
//! │  │ total $0 │                     │          │───┘                     │
//! │  └──────────┘                     └────┬─────┘                         │
//! │                                        │ total_price() (read only)     │
//! │                                        ▼                                │
//! │                                   report::total_sales()                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total is never stored: every `total_price()` call sums the current
//! items, so it can't go stale.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::MenuItem;

// =============================================================================
// Order Id
// =============================================================================

/// Ledger-assigned order number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderId(u64);

impl OrderId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        OrderId(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// Items are shared references into the menu catalog; the same dish may
/// appear more than once.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    items: Vec<Arc<MenuItem>>,
}

impl Order {
    /// Creates an empty order.
    ///
    /// The id always comes from the caller. Only [`crate::SalesLedger`]
    /// allocates ids, so numbering policy lives in one place.
    pub fn new(id: OrderId) -> Self {
        Order {
            id,
            items: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Appends an item. Never fails; there is no capacity limit.
    pub fn add_item(&mut self, item: Arc<MenuItem>) {
        self.items.push(item);
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Arc<MenuItem>] {
        &self.items
    }

    /// Sum of item prices, recomputed on every call. Zero when empty.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{MenuCatalog, Order, OrderId};
    ///
    /// let menu = MenuCatalog::with_house_menu();
    /// let mut order = Order::new(OrderId::new(1));
    /// assert!(order.total_price().is_zero());
    ///
    /// order.add_item(menu.find_by_name("Soup").unwrap());
    /// order.add_item(menu.find_by_name("Soup").unwrap());
    /// assert_eq!(order.total_price().cents(), 1198);
    /// ```
    pub fn total_price(&self) -> Money {
        self.items.iter().map(|item| item.price()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned snapshot for display or serialization.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from(self)
    }
}

/// Receipt format:
///
/// ```text
/// Order ID: 1
/// Soup - $5.99
/// Steak - $15.99
/// Total: $21.98
/// ```
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order ID: {}", self.id)?;
        for item in &self.items {
            writeln!(f, "{} - {}", item.name(), item.price())?;
        }
        write!(f, "Total: {}", self.total_price())
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Serializable snapshot of an order with its computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub items: Vec<MenuItem>,
    pub item_count: usize,
    pub total: Money,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        OrderSummary {
            id: order.id(),
            items: order.items().iter().map(|item| (**item).clone()).collect(),
            item_count: order.item_count(),
            total: order.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;

    fn menu() -> MenuCatalog {
        MenuCatalog::with_house_menu()
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new(OrderId::new(7));
        assert_eq!(order.id().value(), 7);
        assert!(order.is_empty());
        assert_eq!(order.total_price(), Money::zero());
    }

    #[test]
    fn test_total_is_sum_of_prices() {
        let menu = menu();
        let mut order = Order::new(OrderId::new(1));
        order.add_item(menu.find_by_name("Soup").unwrap());
        order.add_item(menu.find_by_name("Steak").unwrap());

        assert_eq!(order.total_price(), Money::from_cents(2198));
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_duplicates_count_twice() {
        let menu = menu();
        let mut order = Order::new(OrderId::new(2));
        let soup = menu.find_by_name("soup").unwrap();
        order.add_item(Arc::clone(&soup));
        order.add_item(soup);

        assert_eq!(order.total_price(), Money::from_cents(1198));
        assert!(Arc::ptr_eq(&order.items()[0], &order.items()[1]));
    }

    #[test]
    fn test_total_tracks_additions() {
        let menu = menu();
        let mut order = Order::new(OrderId::new(1));
        let before = order.total_price();
        order.add_item(menu.find_by_name("Coffee").unwrap());
        let after = order.total_price();

        assert_eq!(before, Money::zero());
        assert_eq!(after, Money::from_cents(299));
        assert_eq!(order.total_price(), after);
    }

    #[test]
    fn test_huge_total_saturates_instead_of_overflowing() {
        let bullion = Arc::new(MenuItem::new(
            "Bullion".to_string(),
            "92233720368547758.07".parse().unwrap(),
            crate::types::MenuCategory::Dessert,
        ));
        let mut order = Order::new(OrderId::new(1));
        order.add_item(Arc::clone(&bullion));
        order.add_item(bullion);

        assert_eq!(order.total_price(), Money::from_cents(i64::MAX));
        assert!(!order.total_price().is_negative());
    }

    #[test]
    fn test_receipt_display() {
        let menu = menu();
        let mut order = Order::new(OrderId::new(1));
        order.add_item(menu.find_by_name("Soup").unwrap());
        order.add_item(menu.find_by_name("Steak").unwrap());

        assert_eq!(
            order.to_string(),
            "Order ID: 1\nSoup - $5.99\nSteak - $15.99\nTotal: $21.98"
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let menu = menu();
        let mut order = Order::new(OrderId::new(3));
        order.add_item(menu.find_by_name("Cake").unwrap());

        let json = serde_json::to_value(order.summary()).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["total"], 499);
        assert_eq!(json["items"][0]["category"], "DESSERT");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: total equals the sum of prices and is stable across queries.
            #[test]
            fn total_is_sum_and_idempotent(picks in prop::collection::vec(0usize..4, 0..50)) {
                let menu = menu();
                let mut order = Order::new(OrderId::new(1));
                let mut expected = 0i64;
                for pick in &picks {
                    let item = Arc::clone(&menu.list()[*pick]);
                    expected += item.price().cents();
                    order.add_item(item);
                }

                let first = order.total_price();
                prop_assert_eq!(first.cents(), expected);
                for _ in 0..3 {
                    prop_assert_eq!(order.total_price(), first);
                }
            }
        }
    }
}
