//! # Domain Types
//!
//! Core domain types used throughout the fridge inventory.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Category     │   │      Date       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name      ─┐   │   │  None (wildcard)│   │  year           │       │
//! │  │  category  ─┴key│   │  Dairy          │   │  month          │       │
//! │  │  quantity (f64) │   │  Sweets         │   │  day            │       │
//! │  │  expiration     │   │  Meat           │   │                 │       │
//! │  └─────────────────┘   │  Fruit          │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Key
//! Items are identified by the pair `(name, category)`. Two items with the
//! same name but a different category are distinct entries.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Category
// =============================================================================

/// Closed, ordered set of item categories.
///
/// `None` is both a valid category for an item and, in filters, the
/// wildcard that matches every category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    None,
    Dairy,
    Sweets,
    Meat,
    Fruit,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::None,
        Category::Dairy,
        Category::Sweets,
        Category::Meat,
        Category::Fruit,
    ];

    /// Categories offered when entering an item (the wildcard is excluded).
    pub const ITEM_CATEGORIES: [Category; 4] = [
        Category::Dairy,
        Category::Sweets,
        Category::Meat,
        Category::Fruit,
    ];

    /// Looks a category up by its ordinal (`0 = none` .. `4 = fruit`).
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Ordinal of the category.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Category::None => "none",
            Category::Dairy => "dairy",
            Category::Sweets => "sweets",
            Category::Meat => "meat",
            Category::Fruit => "fruit",
        }
    }

    /// Whether an item of `other` passes a filter on `self`.
    #[inline]
    pub fn matches(self, other: Category) -> bool {
        self == Category::None || self == other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!("unknown category '{wanted}'"),
            })
    }
}

// =============================================================================
// Date
// =============================================================================

/// Calendar date as entered by the user.
///
/// Stored verbatim: no range checks and no normalization happen here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Date {
    #[inline]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Date { year, month, day }
    }

    /// Resolves the date on the proleptic Gregorian calendar.
    ///
    /// Out-of-range months and days roll over into the neighbouring
    /// month/year (`2022-02-30` lands on `2022-03-02`). Returns `None` only
    /// when the result falls outside chrono's representable range.
    pub fn resolve(&self) -> Option<NaiveDate> {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;

        let offset = i64::from(self.day) - 1;
        if offset >= 0 {
            first.checked_add_days(Days::new(offset.unsigned_abs()))
        } else {
            first.checked_sub_days(Days::new(offset.unsigned_abs()))
        }
    }

    /// Whole days from `today` until this date (negative once expired).
    pub fn days_from(&self, today: NaiveDate) -> Option<i64> {
        self.resolve()
            .map(|expiration| expiration.signed_duration_since(today).num_days())
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A perishable item in the fridge.
///
/// The identity key `(name, category)` is fixed at construction; only the
/// quantity and expiration change afterwards, through the owning
/// [`Collection`](crate::Collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    category: Category,
    quantity: f64,
    expiration: Date,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        quantity: f64,
        expiration: Date,
    ) -> Self {
        Item {
            name: name.into(),
            category,
            quantity,
            expiration,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    #[inline]
    pub fn expiration(&self) -> Date {
        self.expiration
    }

    /// Checks the identity key.
    #[inline]
    pub fn is(&self, name: &str, category: Category) -> bool {
        self.category == category && self.name == name
    }

    pub(crate) fn add_quantity(&mut self, quantity: f64) {
        self.quantity += quantity;
    }

    pub(crate) fn set_stock(&mut self, quantity: f64, expiration: Date) {
        self.quantity = quantity;
        self.expiration = expiration;
    }
}

/// Renders the line shown to the user for every listed item.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {} is part of the \"{}\" category, there is {} of it in the fridge, and it expires on {}.",
            self.name,
            self.category,
            format_quantity(self.quantity),
            self.expiration
        )
    }
}

// =============================================================================
// Quantity Formatting
// =============================================================================

/// Formats a quantity with six significant digits and no trailing zeros.
///
/// Follows `printf`'s `%g` rules: plain notation for exponents in
/// `-4..6`, scientific (`1e+06`) outside of it.
///
/// ## Example
/// ```rust
/// use fridge_core::format_quantity;
///
/// assert_eq!(format_quantity(1.0), "1");
/// assert_eq!(format_quantity(3.25), "3.25");
/// assert_eq!(format_quantity(0.1 + 0.2), "0.3");
/// assert_eq!(format_quantity(1_000_000.0), "1e+06");
/// ```
pub fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return quantity.to_string();
    }
    if quantity == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.5e}", quantity);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let precision = (5 - exponent) as usize;
        trim_fraction(&format!("{:.*}", precision, quantity)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
