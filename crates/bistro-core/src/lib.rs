//! # bistro-core: Pure Business Logic for Bistro POS
//!
//! Menu, order and sales-ledger logic as pure, in-memory code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bistro-cli (text menu)                        │   │
//! │  │   View Menu ──► Place Order ──► View Orders ──► Sales Report    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   order   │  │  ledger   │  │  report   │  │   │
//! │  │   │ MenuItem  │  │   Order   │  │  Sales-   │  │ total_    │  │   │
//! │  │   │ Catalog   │  │  OrderId  │  │  Ledger   │  │ sales     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Menu categories and menu items
//! - [`catalog`] - The ordered, name-unique menu
//! - [`order`] - A single customer order and its running total
//! - [`ledger`] - Every order placed in the session
//! - [`report`] - Sales aggregation over orders
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{MenuCatalog, MenuCategory, Money, SalesLedger};
//!
//! let mut menu = MenuCatalog::new();
//! menu.add_item("Soup", Money::from_cents(599), MenuCategory::Starter).unwrap();
//! menu.add_item("Steak", Money::from_cents(1599), MenuCategory::MainCourse).unwrap();
//!
//! let mut ledger = SalesLedger::new();
//! let order = ledger.create_order();
//! order.add_item(menu.find_by_name("soup").unwrap());
//! order.add_item(menu.find_by_name("STEAK").unwrap());
//!
//! assert_eq!(order.total_price(), Money::from_cents(2198));
//! assert_eq!(bistro_core::report::total_sales(ledger.all_orders()).cents(), 2198);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod order;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bistro_core::Money` instead of
// `use bistro_core::money::Money`

pub use catalog::MenuCatalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::SalesLedger;
pub use money::Money;
pub use order::{Order, OrderId, OrderSummary};
pub use report::{total_sales, SalesReport};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a menu item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 100;

/// Highest accepted menu price, in cents ($100,000.00).
pub const MAX_PRICE_CENTS: i64 = 10_000_000;

/// The first id a fresh ledger hands out.
pub const FIRST_ORDER_ID: u64 = 1;
