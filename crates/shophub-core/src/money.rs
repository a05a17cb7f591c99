//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    ShopHub prices carry no paise — every amount in the catalog,         │
//! │    the cart and the order ledger is a whole number of rupees, so        │
//! │    a plain i64 represents every value exactly.                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shophub_core::money::Money;
//!
//! // Create from whole rupees
//! let price = Money::from_rupees(2999); // ₹2,999
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₹5,998
//! let total = price + Money::from_rupees(500);   // ₹3,499
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization (serializes as
///   a bare integer, matching the persisted storefront documents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::money::Money;
    ///
    /// let price = Money::from_rupees(2999);
    /// assert_eq!(price.rupees(), 2999);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.rupees(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax at the given rate, rounded to the nearest whole rupee.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`
    /// The +5000 provides round-half-up (5000/10000 = 0.5). i128
    /// intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::money::Money;
    /// use shophub_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(3000);
    /// let gst = TaxRate::from_bps(1800); // 18% GST
    ///
    /// // ₹3,000 × 18% = ₹540
    /// assert_eq!(subtotal.tax(gst).rupees(), 540);
    /// ```
    pub fn tax(&self, rate: TaxRate) -> Money {
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_rupees(tax as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(299);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.rupees(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with the rupee sign and Indian digit
/// grouping (lakh/crore): `₹1,23,456`.
///
/// ## Note
/// This is for logs and receipts. The storefront formats amounts itself
/// via `Intl.NumberFormat("en-IN")` for localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, group_indian(self.0.abs()))
    }
}

/// Groups digits Indian-style: the last three digits, then pairs.
fn group_indian(n: i64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_chars: Vec<char> = head.chars().collect();
    let mut i = head_chars.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(head_chars[start..i].iter().collect());
        i = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let money = Money::from_rupees(2999);
        assert_eq!(money.rupees(), 2999);
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(format!("{}", Money::from_rupees(0)), "₹0");
        assert_eq!(format!("{}", Money::from_rupees(829)), "₹829");
        assert_eq!(format!("{}", Money::from_rupees(4369)), "₹4,369");
        assert_eq!(format!("{}", Money::from_rupees(123456)), "₹1,23,456");
        assert_eq!(format!("{}", Money::from_rupees(12345678)), "₹1,23,45,678");
        assert_eq!(format!("{}", Money::from_rupees(-550)), "-₹550");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(1000);
        let b = Money::from_rupees(500);

        assert_eq!((a + b).rupees(), 1500);
        assert_eq!((a - b).rupees(), 500);
        let result: Money = a * 3;
        assert_eq!(result.rupees(), 3000);
    }

    #[test]
    fn test_tax_rounds_to_nearest_rupee() {
        let gst = TaxRate::from_bps(1800);

        // ₹3,000 × 18% = ₹540 exactly
        assert_eq!(Money::from_rupees(3000).tax(gst).rupees(), 540);
        // ₹5,000 × 18% = ₹900 exactly
        assert_eq!(Money::from_rupees(5000).tax(gst).rupees(), 900);
        // ₹1,999 × 18% = ₹359.82 → ₹360
        assert_eq!(Money::from_rupees(1999).tax(gst).rupees(), 360);
        // ₹97 × 18% = ₹17.46 → ₹17
        assert_eq!(Money::from_rupees(97).tax(gst).rupees(), 17);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_rupees(100);
        assert!(positive.is_positive());

        let negative = Money::from_rupees(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupees(299);
        assert_eq!(unit_price.multiply_quantity(3).rupees(), 897);
    }
}
