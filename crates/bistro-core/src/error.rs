//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations (duplicate names)      │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  bistro-cli errors (app)                                                │
//! │  └── CliError         - What the operator sees                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not an Error
//! A menu lookup that finds nothing returns `None`. The item-selection loop
//! re-prompts on it; it never travels up as an error.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is local and recoverable; none is fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A menu item with the same name (ignoring case) already exists.
    ///
    /// ## When This Occurs
    /// ```text
    /// Menu: [Soup, Steak]
    ///      │
    ///      ▼
    /// add_item("SOUP", ...)
    ///      │
    ///      ▼
    /// DuplicateName { name: "SOUP" }   (menu unchanged)
    /// ```
    /// The caller decides whether to rename or skip.
    #[error("Menu item '{name}' already exists")]
    DuplicateName { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state changes, so a failed call leaves data untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is above the allowed ceiling.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: Money },

    /// Invalid format (e.g., unparsable price text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
