//! # Domain Types
//!
//! Value types passed in and out of the calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │ MonetaryAmount  │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  percent 0-100  │   │  net_amount     │   │  quantity       │       │
//! │  │  20 = 20%       │   │  tax_amount     │   │  unit_price     │       │
//! │  └─────────────────┘   │  total_amount   │   │  tax_rate?      │       │
//! │                        │  tax_rate       │   │  discount?      │       │
//! │  ┌─────────────────┐   └─────────────────┘   └─────────────────┘       │
//! │  │  ChangedField   │                                                    │
//! │  │  Total/Net/Tax  │   AmountInputs ──► recalculate ──► MonetaryAmount  │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names serialize in camelCase because the consumer is the browser
//! form layer (`netAmount`, `vatRate`, ...). Decimals travel as strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CalcError, CalcResult};
use crate::money::Money;
use crate::validation::{validate, validate_percentage};

// =============================================================================
// Tax Rate
// =============================================================================

/// VAT rate as a percentage in `[0, 100]`.
///
/// ## Why a Newtype?
/// Every operation that accepts a rate must reject 101% or -5%. Wrapping the
/// check in the constructor means a `TaxRate` in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a tax rate from a percentage, failing with `InvalidRate`
    /// outside `[0, 100]`.
    ///
    /// ## Example
    /// ```rust
    /// use payhub_core::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(TaxRate::new(Decimal::from(20)).is_ok());
    /// assert!(TaxRate::new(Decimal::from(101)).is_err());
    /// ```
    pub fn new(percent: Decimal) -> CalcResult<Self> {
        Self::for_field("tax_rate", percent)
    }

    /// Same as [`TaxRate::new`] but reports `field` in the error.
    pub(crate) fn for_field(field: &str, percent: Decimal) -> CalcResult<Self> {
        validate_percentage(field, percent)?;
        Ok(TaxRate(percent.normalize()))
    }

    /// Zero tax rate (VAT exempt).
    #[inline]
    pub fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Returns the rate as a percentage (20 = 20%).
    #[inline]
    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = CalcError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        TaxRate::new(value)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Monetary Amount
// =============================================================================

/// A computed net / tax / total triple.
///
/// Produced by every calculator operation; never mutated afterwards.
/// `net_amount + tax_amount` matches `total_amount` to the cent (see
/// [`MonetaryAmount::is_consistent`]), which is the same rule the
/// `invoices` and `payments` tables enforce with a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryAmount {
    /// Amount excluding tax.
    #[ts(type = "string")]
    pub net_amount: Money,

    /// Tax portion.
    #[ts(type = "string")]
    pub tax_amount: Money,

    /// Gross amount (net + tax).
    #[ts(type = "string")]
    pub total_amount: Money,

    /// Rate the amounts were computed with.
    #[ts(type = "string")]
    pub tax_rate: TaxRate,
}

impl MonetaryAmount {
    /// All-zero amount at the given rate.
    pub fn zero(tax_rate: TaxRate) -> Self {
        MonetaryAmount {
            net_amount: Money::zero(),
            tax_amount: Money::zero(),
            total_amount: Money::zero(),
            tax_rate,
        }
    }

    /// Checks the net + tax = total rule with the given tolerance.
    pub fn is_consistent(&self, tolerance: Decimal) -> bool {
        validate(
            self.net_amount.amount(),
            self.tax_amount.amount(),
            self.total_amount.amount(),
            tolerance,
        )
    }
}

// =============================================================================
// Changed Field
// =============================================================================

/// Which amount field the user edited last.
///
/// ## Recalculation Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Edited    │  Held fixed     │  Derived                                 │
/// │  ──────────┼─────────────────┼───────────────────────────────────────   │
/// │  Total     │  total, rate    │  tax = total·r/(100+r), net = total-tax  │
/// │  Net       │  net, rate      │  tax = net·r/100, total = net+tax        │
/// │  Tax       │  total, tax     │  net = total - tax                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChangedField {
    Total,
    Net,
    Tax,
}

impl fmt::Display for ChangedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangedField::Total => write!(f, "total"),
            ChangedField::Net => write!(f, "net"),
            ChangedField::Tax => write!(f, "tax"),
        }
    }
}

impl FromStr for ChangedField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" | "gross" => Ok(ChangedField::Total),
            "net" => Ok(ChangedField::Net),
            "tax" | "vat" => Ok(ChangedField::Tax),
            other => Err(format!(
                "Unknown field: '{}'. Valid options: total, net, tax",
                other
            )),
        }
    }
}

// =============================================================================
// Amount Inputs
// =============================================================================

/// Current values of the amount fields on a form.
///
/// Any field may be missing; a missing rate falls back to the configured
/// default rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct AmountInputs {
    #[ts(type = "string | null")]
    pub total: Option<Decimal>,
    #[ts(type = "string | null")]
    pub net: Option<Decimal>,
    #[ts(type = "string | null")]
    pub tax: Option<Decimal>,
    #[ts(type = "string | null")]
    pub vat_rate: Option<Decimal>,
}

// =============================================================================
// Line Items
// =============================================================================

/// One invoice line as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Free-text label, carried through to the result.
    #[serde(default)]
    pub description: Option<String>,

    /// Must be positive. Fractional quantities (hours, kg) are allowed.
    #[ts(type = "string")]
    pub quantity: Decimal,

    /// Price per unit excluding tax.
    #[ts(type = "string")]
    pub unit_price: Decimal,

    /// Overrides the default rate for this line.
    #[serde(default)]
    #[ts(type = "string | null")]
    pub tax_rate: Option<Decimal>,

    /// Percentage discount in `[0, 100]`.
    #[serde(default)]
    #[ts(type = "string | null")]
    pub discount: Option<Decimal>,
}

impl LineItem {
    /// Creates a line with no rate override and no discount.
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        LineItem {
            description: None,
            quantity,
            unit_price,
            tax_rate: None,
            discount: None,
        }
    }

    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = Some(tax_rate);
        self
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A calculated line: the inputs preserved plus its rounded amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResult {
    pub description: Option<String>,
    #[ts(type = "string")]
    pub quantity: Decimal,
    #[ts(type = "string")]
    pub unit_price: Decimal,
    /// Discount percentage that was applied (0 when none).
    #[ts(type = "string")]
    pub discount: Decimal,
    #[serde(flatten)]
    #[ts(flatten)]
    pub amounts: MonetaryAmount,
}

/// Result of [`crate::calculator::VatCalculator::calculate_line_items`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItemsSummary {
    pub items: Vec<LineItemResult>,
    /// Aggregates summed at full precision and rounded once.
    pub totals: MonetaryAmount,
}

// =============================================================================
// Amount Record
// =============================================================================

/// The amount columns of an `invoices` or `payments` row.
///
/// Used on the submission path: check the triple here before sending it, so
/// the database CHECK constraint never has to reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AmountRecord {
    #[ts(type = "string")]
    pub net_amount: Decimal,
    #[ts(type = "string")]
    pub tax_amount: Decimal,
    #[ts(type = "string")]
    pub total_amount: Decimal,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub tax_rate: Option<Decimal>,
}

impl AmountRecord {
    /// Checks the net + tax = total rule with the given tolerance.
    pub fn is_consistent(&self, tolerance: Decimal) -> bool {
        validate(
            self.net_amount,
            self.tax_amount,
            self.total_amount,
            tolerance,
        )
    }
}

impl From<&MonetaryAmount> for AmountRecord {
    fn from(amount: &MonetaryAmount) -> Self {
        AmountRecord {
            net_amount: amount.net_amount.amount(),
            tax_amount: amount.tax_amount.amount(),
            total_amount: amount.total_amount.amount(),
            tax_rate: Some(amount.tax_rate.percent()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
