//! # Menu Catalog
//!
//! The ordered set of purchasable items.
//!
//! ## Invariants
//! - Insertion order is display order
//! - No two items share a name, ignoring case
//! - A failed `add_item` leaves the catalog unchanged
//!
//! The catalog is read-mostly: it is filled at startup and then only read,
//! so the CLI shares it behind a plain `Arc` with no lock.

use std::sync::Arc;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MenuCategory, MenuItem};
use crate::validation::{validate_item_name, validate_price};

/// The restaurant menu.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<Arc<MenuItem>>,
}

impl MenuCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        MenuCatalog { items: Vec::new() }
    }

    /// Creates a catalog pre-filled with the house menu.
    ///
    /// ```text
    /// Soup    $5.99   STARTER
    /// Steak   $15.99  MAIN_COURSE
    /// Cake    $4.99   DESSERT
    /// Coffee  $2.99   BEVERAGE
    /// ```
    pub fn with_house_menu() -> Self {
        let mut catalog = MenuCatalog::new();
        for (name, price, category) in HOUSE_MENU {
            // Fixed, distinct, well-formed entries
            catalog.push(name.to_string(), *price, *category);
        }
        catalog
    }

    /// Adds a new item to the end of the menu.
    ///
    /// ## Errors
    /// - `CoreError::DuplicateName` if an item with the same name exists,
    ///   compared ignoring case
    /// - `CoreError::Validation` for an empty or over-long name, or a
    ///   price that is negative or above `MAX_PRICE_CENTS`
    ///
    /// Surrounding whitespace is stripped from the stored name.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{CoreError, MenuCatalog, MenuCategory, Money};
    ///
    /// let mut menu = MenuCatalog::new();
    /// menu.add_item("Soup", Money::from_cents(599), MenuCategory::Starter).unwrap();
    ///
    /// let err = menu
    ///     .add_item("SOUP", Money::from_cents(100), MenuCategory::Starter)
    ///     .unwrap_err();
    /// assert!(matches!(err, CoreError::DuplicateName { .. }));
    /// assert_eq!(menu.len(), 1);
    /// ```
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: Money,
        category: MenuCategory,
    ) -> CoreResult<()> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;

        let name = name.trim().to_string();
        if self.find_by_name(&name).is_some() {
            return Err(CoreError::DuplicateName { name });
        }

        self.push(name, price, category);
        Ok(())
    }

    /// Items in insertion order.
    pub fn list(&self) -> &[Arc<MenuItem>] {
        &self.items
    }

    /// Finds an item by exact name, ignoring case only.
    ///
    /// Padding is not stripped here; callers trim operator input first.
    ///
    /// `None` is a normal outcome: the caller re-prompts.
    pub fn find_by_name(&self, name: &str) -> Option<Arc<MenuItem>> {
        self.items
            .iter()
            .find(|item| item.name_matches(name))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, name: String, price: Money, category: MenuCategory) {
        debug!(name = %name, price = %price, category = %category, "menu item added");
        self.items.push(Arc::new(MenuItem::new(name, price, category)));
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new()
    }
}

const HOUSE_MENU: &[(&str, Money, MenuCategory)] = &[
    ("Soup", Money::from_major_minor(5, 99), MenuCategory::Starter),
    ("Steak", Money::from_major_minor(15, 99), MenuCategory::MainCourse),
    ("Cake", Money::from_major_minor(4, 99), MenuCategory::Dessert),
    ("Coffee", Money::from_major_minor(2, 99), MenuCategory::Beverage),
];

// =============================================================================
// Unit Tests
// =============================================================================
