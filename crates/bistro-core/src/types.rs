//! # Domain Types
//!
//! Menu types used throughout Bistro POS.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    MenuItem     │        │  MenuCategory   │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  name           │───────►│  STARTER        │                        │
//! │  │  price (Money)  │        │  MAIN_COURSE    │                        │
//! │  │  category       │        │  DESSERT        │                        │
//! │  └─────────────────┘        │  BEVERAGE       │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Category Tokens
//! Downstream report consumers key on the exact tokens `STARTER`,
//! `MAIN_COURSE`, `DESSERT` and `BEVERAGE`. Serde, `Display` and `FromStr`
//! all agree on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Menu Category
// =============================================================================

/// The section of the menu an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Starter,
    MainCourse,
    Dessert,
    Beverage,
}

impl MenuCategory {
    /// Every category, in menu display order.
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Starter,
        MenuCategory::MainCourse,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
    ];

    /// The wire token for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Starter => "STARTER",
            MenuCategory::MainCourse => "MAIN_COURSE",
            MenuCategory::Dessert => "DESSERT",
            MenuCategory::Beverage => "BEVERAGE",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a category token, ignoring case (`"main_course"` works).
impl FromStr for MenuCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        MenuCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: MenuCategory::ALL
                    .iter()
                    .map(|c| c.as_str().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish or drink on the menu.
///
/// Immutable once built: fields are private and there are no setters.
/// Orders hold `Arc<MenuItem>` clones pointing into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    name: String,
    price: Money,
    category: MenuCategory,
}

impl MenuItem {
    /// Builds an item. Validation happens in [`crate::MenuCatalog::add_item`].
    pub(crate) fn new(name: String, price: Money, category: MenuCategory) -> Self {
        MenuItem {
            name,
            price,
            category,
        }
    }

    /// Display name as entered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn category(&self) -> MenuCategory {
        self.category
    }

    /// Exact name comparison that ignores only case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Menu line format: `Soup - $5.99 - STARTER`.
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.name, self.price, self.category)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
