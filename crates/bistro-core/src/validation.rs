//! # Validation Module
//!
//! Input validation for menu entries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI harness                                                   │
//! │  ├── Price text parsing (Money::from_str)                               │
//! │  └── Category token parsing (MenuCategory::from_str)                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: MenuCatalog::add_item                                         │
//! │  ├── THIS MODULE: name and price rules                                  │
//! │  └── Case-insensitive uniqueness                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_ITEM_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Soup").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (complimentary items)
/// - At most `MAX_PRICE_CENTS`, which keeps order and ledger totals far from
///   the `i64` limit
///
/// ## Example
/// ```rust
/// use bistro_core::money::Money;
/// use bistro_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(599)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// assert!(validate_price("92233720368547758.07".parse().unwrap()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    let max = Money::from_cents(MAX_PRICE_CENTS);
    if price > max {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
