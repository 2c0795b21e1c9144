//! # Validation Module
//!
//! Input validation used by the presentation layer before it calls the
//! service. The core itself trusts whatever reaches it.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (fridge-cli)                                  │
//! │  ├── Parsing (integer, decimal)                                        │
//! │  └── Re-prompt until THIS MODULE accepts the value                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: InventoryService (fridge-core)                               │
//! │  └── No checks: dates and categories arrive range-valid                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fridge_core::validation::{validate_date, validate_item_category};
//!
//! assert!(validate_date(2024, 2, 29).is_ok());
//! assert!(validate_date(2023, 2, 29).is_err());
//! assert!(validate_item_category(0).is_err()); // "none" is filter-only here
//! ```

use crate::error::ValidationError;
use crate::types::{Category, Date};
use crate::{MAX_YEAR, MIN_YEAR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Date Validators
// =============================================================================

/// Validates the year of an expiration date.
///
/// ## Rules
/// - Must be between 2000 and 2100 (inclusive)
pub fn validate_year(year: i64) -> ValidationResult<i32> {
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(out_of_range("year", i64::from(MIN_YEAR), i64::from(MAX_YEAR)));
    }
    Ok(year as i32)
}

/// Validates a month number (1 = January).
pub fn validate_month(month: i64) -> ValidationResult<i32> {
    if !(1..=12).contains(&month) {
        return Err(out_of_range("month", 1, 12));
    }
    Ok(month as i32)
}

/// Validates a day of month for an already validated year and month.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed the length of the month, with February having 29
///   days in leap years
pub fn validate_day(year: i32, month: i32, day: i64) -> ValidationResult<i32> {
    let max = i64::from(days_in_month(year, month));
    if day < 1 || day > max {
        return Err(out_of_range("day", 1, max));
    }
    Ok(day as i32)
}

/// Validates a full date.
pub fn validate_date(year: i64, month: i64, day: i64) -> ValidationResult<Date> {
    let year = validate_year(year)?;
    let month = validate_month(month)?;
    let day = validate_day(year, month, day)?;
    Ok(Date::new(year, month, day))
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// =============================================================================
// Category Validators
// =============================================================================

/// Validates a category ordinal for a stored item (dairy..=fruit).
pub fn validate_item_category(index: i64) -> ValidationResult<Category> {
    Category::from_index(index)
        .filter(|c| *c != Category::None)
        .ok_or_else(|| {
            out_of_range(
                "category",
                Category::Dairy.index() as i64,
                Category::Fruit.index() as i64,
            )
        })
}

/// Validates a category ordinal for a filter (none..=fruit, none = any).
pub fn validate_filter_category(index: i64) -> ValidationResult<Category> {
    Category::from_index(index).ok_or_else(|| {
        out_of_range(
            "category",
            Category::None.index() as i64,
            Category::Fruit.index() as i64,
        )
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Returns
/// The trimmed name.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    Ok(name.to_string())
}

fn out_of_range(field: &str, min: i64, max: i64) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min,
        max,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
