//! # Sales Ledger
//!
//! Every order placed during the session, in creation order.
//!
//! ## Id Allocation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SalesLedger { next_id: 3, orders: [#1, #2] }                          │
//! │       │                                                                 │
//! │       ▼  create_order()                                                 │
//! │  read next_id (3) ──► push Order #3 ──► next_id = 4 ──► &mut Order #3   │
//! │                                                                         │
//! │  The counter is a field of THIS ledger. Two ledgers (e.g. two tests)    │
//! │  each start at #1 and never see each other's numbers.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger is append-only: there is no remove or void, so an id is never
//! handed out twice.

use tracing::debug;

use crate::money::Money;
use crate::order::{Order, OrderId};
use crate::report;
use crate::FIRST_ORDER_ID;

/// Append-only collection of orders with its own id counter.
#[derive(Debug, Clone)]
pub struct SalesLedger {
    next_id: u64,
    orders: Vec<Order>,
}

impl SalesLedger {
    /// Creates an empty ledger whose first order will be #1.
    pub fn new() -> Self {
        SalesLedger {
            next_id: FIRST_ORDER_ID,
            orders: Vec::new(),
        }
    }

    /// Opens a new empty order and returns the live handle.
    ///
    /// The returned reference points at the order stored in the ledger, so
    /// items added through it show up in later `all_orders()` reads.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{MenuCatalog, SalesLedger};
    ///
    /// let menu = MenuCatalog::with_house_menu();
    /// let mut ledger = SalesLedger::new();
    ///
    /// let order = ledger.create_order();
    /// assert_eq!(order.id().value(), 1);
    /// order.add_item(menu.find_by_name("cake").unwrap());
    ///
    /// assert_eq!(ledger.all_orders()[0].item_count(), 1);
    /// ```
    pub fn create_order(&mut self) -> &mut Order {
        let id = OrderId::new(self.next_id);
        self.next_id += 1;
        self.orders.push(Order::new(id));
        debug!(order_id = %id, "order created");

        let index = self.orders.len() - 1;
        &mut self.orders[index]
    }

    /// All orders, oldest first.
    pub fn all_orders(&self) -> &[Order] {
        &self.orders
    }

    /// Looks an order up by id.
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.index_of(id).map(|index| &self.orders[index])
    }

    /// Reacquires the live handle to an order, e.g. after a lock was released.
    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.index_of(id).map(move |index| &mut self.orders[index])
    }

    /// Total sales across every order in the ledger.
    pub fn total_sales(&self) -> Money {
        report::total_sales(&self.orders)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    // Ids are strictly increasing, so the vector is sorted by id.
    fn index_of(&self, id: OrderId) -> Option<usize> {
        self.orders.binary_search_by_key(&id, Order::id).ok()
    }
}

impl Default for SalesLedger {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
