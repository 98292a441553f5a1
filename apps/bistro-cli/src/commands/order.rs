//! # Order Commands
//!
//! Taking an order item by item, and listing the orders placed so far.
//!
//! ## Place Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_order() ──► show menu ──► prompt for a name                     │
//! │                        ▲               │                                │
//! │                        │               ├── "done"  ──► print receipt    │
//! │                        │               ├── found   ──► add_item         │
//! │                        │               │               "Item added..."  │
//! │                        │               └── missing ──► "Item not..."    │
//! │                        └───────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use bistro_core::{MenuCatalog, OrderId};
use tracing::{debug, info};

use super::{menu, prompt, read_line};
use crate::error::CliResult;
use crate::state::LedgerState;

/// Typing this instead of an item name closes the order.
pub const DONE_KEYWORD: &str = "done";

/// Opens a new order and fills it from operator input.
///
/// End of input closes the order the same way `done` does.
pub fn place_order(
    input: &mut impl BufRead,
    out: &mut impl Write,
    catalog: &MenuCatalog,
    ledger: &LedgerState,
) -> CliResult<OrderId> {
    let id = ledger.with_ledger_mut(|l| l.create_order().id());
    info!(order_id = %id, "order opened");

    loop {
        menu::view_menu(out, catalog)?;
        prompt(out, "Enter the name of the item to add (or 'done' to finish): ")?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            break;
        };
        let name = line.trim();

        if name.eq_ignore_ascii_case(DONE_KEYWORD) {
            break;
        }

        match catalog.find_by_name(name) {
            Some(item) => {
                debug!(order_id = %id, item = %item.name(), "item added");
                ledger.with_ledger_mut(|l| {
                    if let Some(order) = l.order_mut(id) {
                        order.add_item(item);
                    }
                });
                writeln!(out, "Item added to order.")?;
            }
            None => {
                debug!(order_id = %id, name = %name, "item not on menu");
                writeln!(out, "Item not found in menu.")?;
            }
        }
    }

    let receipt = ledger.with_ledger(|l| l.order(id).map(|o| o.to_string()));
    writeln!(out, "Your order:")?;
    if let Some(receipt) = receipt {
        writeln!(out, "{}", receipt)?;
    }

    info!(order_id = %id, "order closed");
    Ok(id)
}

/// Prints every receipt in creation order.
pub fn view_orders(out: &mut impl Write, ledger: &LedgerState) -> io::Result<()> {
    let receipts: Vec<String> = ledger.with_ledger(|l| {
        l.all_orders()
            .iter()
            .map(|order| order.to_string())
            .collect()
    });

    if receipts.is_empty() {
        return writeln!(out, "No orders placed yet.");
    }

    for receipt in receipts {
        writeln!(out, "{}", receipt)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::Money;
    use std::io::Cursor;

    fn run_order(script: &str, ledger: &LedgerState) -> (OrderId, String) {
        let catalog = MenuCatalog::with_house_menu();
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        let id = place_order(&mut input, &mut out, &catalog, ledger).unwrap();
        (id, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_place_order_by_name() {
        let ledger = LedgerState::new();
        let (id, out) = run_order("Soup\nsteak\ndone\n", &ledger);

        assert_eq!(id, OrderId::new(1));
        assert_eq!(out.matches("Item added to order.").count(), 2);
        assert!(out.ends_with(
            "Your order:\nOrder ID: 1\nSoup - $5.99\nSteak - $15.99\nTotal: $21.98\n"
        ));
        assert_eq!(
            ledger.with_ledger(|l| l.total_sales()),
            Money::from_cents(2198)
        );
    }

    #[test]
    fn test_unknown_item_reprompts() {
        let ledger = LedgerState::new();
        let (_, out) = run_order("Pizza\nCoffee\nDONE\n", &ledger);

        assert_eq!(out.matches("Item not found in menu.").count(), 1);
        assert_eq!(out.matches("Item added to order.").count(), 1);
        // menu shown before each of the three prompts
        assert_eq!(out.matches("--- Menu ---").count(), 3);
        assert!(out.contains("Total: $2.99"));
    }

    #[test]
    fn test_end_of_input_closes_order() {
        let ledger = LedgerState::new();
        let (_, out) = run_order("Cake\n", &ledger);

        assert!(out.contains("Your order:\nOrder ID: 1\nCake - $4.99\nTotal: $4.99\n"));
        assert_eq!(ledger.with_ledger(|l| l.len()), 1);
    }

    #[test]
    fn test_empty_order_still_recorded() {
        let ledger = LedgerState::new();
        let (_, out) = run_order("done\n", &ledger);

        assert!(out.ends_with("Your order:\nOrder ID: 1\nTotal: $0.00\n"));
        assert_eq!(ledger.with_ledger(|l| l.len()), 1);
    }

    #[test]
    fn test_view_orders() {
        let ledger = LedgerState::new();
        let mut out = Vec::new();
        view_orders(&mut out, &ledger).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No orders placed yet.\n");

        run_order("Soup\nSoup\ndone\n", &ledger);
        let mut out = Vec::new();
        view_orders(&mut out, &ledger).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Order ID: 1\nSoup - $5.99\nSoup - $5.99\nTotal: $11.98\n"
        );
    }
}
