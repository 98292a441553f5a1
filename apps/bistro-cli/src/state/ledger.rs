//! # Ledger State
//!
//! Shares the session's `SalesLedger` with the command handlers.
//!
//! ## Thread Safety
//! `create_order` reads and bumps the id counter, then appends. Holding the
//! ledger behind one `Mutex` keeps that read-modify-write atomic if the
//! harness ever serves more than one terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command               LedgerState call          Ledger change          │
//! │  ───────               ────────────────          ─────────────          │
//! │  Place Order ────────► with_ledger_mut ────────► create_order()         │
//! │  (each item) ────────► with_ledger_mut ────────► order_mut(id).add_item │
//! │  View Orders ────────► with_ledger ────────────► (read only)            │
//! │  Sales Report ───────► with_ledger ────────────► (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers never keep an `&mut Order` across lock scopes; they keep the
//! `OrderId` and reacquire the order with `order_mut`.

use std::sync::{Arc, Mutex};

use bistro_core::SalesLedger;

/// Ledger shared between command handlers.
#[derive(Debug, Clone)]
pub struct LedgerState {
    ledger: Arc<Mutex<SalesLedger>>,
}

impl LedgerState {
    /// Creates state around a fresh, empty ledger.
    pub fn new() -> Self {
        LedgerState {
            ledger: Arc::new(Mutex::new(SalesLedger::new())),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = ledger_state.with_ledger(|l| l.total_sales());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SalesLedger) -> R,
    {
        let ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let id = ledger_state.with_ledger_mut(|l| l.create_order().id());
    /// ```
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SalesLedger) -> R,
    {
        let mut ledger = self.ledger.lock().expect("Ledger mutex poisoned");
        f(&mut ledger)
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::MenuCatalog;
    use std::thread;

    #[test]
    fn test_clones_share_one_ledger() {
        let menu = MenuCatalog::with_house_menu();
        let state = LedgerState::new();
        let other = state.clone();

        let id = state.with_ledger_mut(|l| l.create_order().id());
        other.with_ledger_mut(|l| {
            l.order_mut(id)
                .unwrap()
                .add_item(menu.find_by_name("Soup").unwrap())
        });

        assert_eq!(state.with_ledger(|l| l.total_sales().cents()), 599);
    }

    #[test]
    fn test_concurrent_creation_never_reuses_ids() {
        let state = LedgerState::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|_| state.with_ledger_mut(|l| l.create_order().id().value()))
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=200).collect::<Vec<u64>>());
        state.with_ledger(|l| {
            let in_order: Vec<u64> = l.all_orders().iter().map(|o| o.id().value()).collect();
            assert_eq!(in_order, (1..=200).collect::<Vec<u64>>());
        });
    }
}
