//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why a Dedicated Type?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    120 * 20 / 120 = 20.000000000000004  ❌ WRONG!                       │
//! │    Math.round(1.005 * 100) / 100 = 1   (expected 1.01)                  │
//! │                                                                         │
//! │  The database CHECK constraint compares net + vat with total to the    │
//! │  cent. One flipped cent and the row is rejected.                        │
//! │                                                                         │
//! │  OUR SOLUTION: exact decimals, always exactly 2 fraction digits         │
//! │    Money wraps a Decimal whose scale is pinned to 2.                   │
//! │    Every constructor rounds half away from zero.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use payhub_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let total = price + Money::from_cents(500);
//! assert_eq!(total.cents(), 1599);
//!
//! // Arbitrary decimals are rounded on the way in
//! let rounded = Money::round(Decimal::new(10005, 3)); // 10.005
//! assert_eq!(rounded.cents(), 1001);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of fraction digits in the minor currency unit.
pub const MINOR_UNIT_DIGITS: u32 = 2;

/// The single rounding rule used by every public operation.
///
/// Half away from zero: 0.005 → 0.01, -0.005 → -0.01, 2.675 → 2.68.
/// This matches Postgres `round(numeric, 2)`, which the database triggers use.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounds a decimal to the minor currency unit.
///
/// ## Example
/// ```rust
/// use payhub_core::money::round2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round2(Decimal::new(2675, 3)), Decimal::new(268, 2));
/// assert_eq!(round2(Decimal::new(-2675, 3)), Decimal::new(-268, 2));
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MINOR_UNIT_DIGITS, ROUNDING);
    rounded.rescale(MINOR_UNIT_DIGITS);
    // -0.001 rounds to a signed zero; keep it printing as "0.00"
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with exactly two fraction digits.
///
/// ## Design Decisions
/// - **Decimal inside**: base-10, so `0.1 + 0.2 == 0.3`
/// - **Scale pinned to 2**: no returned value ever carries a third decimal
/// - **Signed**: negative values are allowed for credits and differences
/// - **Serde**: serialized as a decimal string (`"120.00"`)
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  form field "1 234,56" ──► parse_money ──► Money                        │
/// │                                                                         │
/// │  Money ──► VatCalculator ──► MonetaryAmount { net, tax, total }         │
/// │                                      │                                  │
/// │                                      ├──► format_money ──► "1 234,56 ₽" │
/// │                                      └──► invoices / payments row       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Decimal", from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from minor units (cents, kopecks).
    ///
    /// ## Example
    /// ```rust
    /// use payhub_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MINOR_UNIT_DIGITS))
    }

    /// Creates a Money value from any decimal, rounding half away from zero.
    #[inline]
    pub fn round(value: Decimal) -> Self {
        Money(round2(value))
    }

    /// Returns the value in minor units.
    ///
    /// ## Example
    /// ```rust
    /// use payhub_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).cents(), -550);
    /// ```
    #[inline]
    pub fn cents(&self) -> i128 {
        self.0.mantissa()
    }

    /// Returns the underlying decimal (scale 2).
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money::from_cents(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `1234.56` rendering. Use [`crate::format::format_money`] for UI text.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::round(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
