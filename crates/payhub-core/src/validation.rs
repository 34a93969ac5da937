//! # Validation Module
//!
//! Input checks shared by every calculator operation, plus the consistency
//! predicate used before a row is submitted.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (TypeScript)                                            │
//! │  └── parse_money on free-typed text, never rejects                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Calculator (Rust)                                            │
//! │  ├── THIS MODULE: ranges of amounts, rates, quantities                 │
//! │  └── validate(): net + tax = total before submit                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (Postgres)                                          │
//! │  └── CHECK constraint on invoices / payments, same rule as validate()  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use payhub_core::validation::{validate, validate_non_negative};
//! use rust_decimal::Decimal;
//!
//! assert!(validate_non_negative("net_amount", Decimal::from(5)).is_ok());
//! assert!(validate(Decimal::from(100), Decimal::from(20), Decimal::from(120), Decimal::new(1, 2)));
//! ```

use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};
use crate::money::round2;
use crate::{MAX_AMOUNT, MAX_QUANTITY};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a monetary input is not negative.
///
/// ## Rules
/// - Zero is allowed (empty form fields are treated as zero)
/// - Negative values fail with `InvalidAmount`
/// - Must not exceed MAX_AMOUNT
pub fn validate_non_negative(field: &str, value: Decimal) -> CalcResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CalcError::invalid_amount(field, value));
    }

    validate_magnitude(field, value)
}

/// Validates that an amount (of either sign) is within MAX_AMOUNT.
pub fn validate_magnitude(field: &str, value: Decimal) -> CalcResult<()> {
    if value.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(CalcError::invalid_amount(field, value));
    }

    Ok(())
}

/// Validates a percentage (tax rate or discount).
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
/// - Fractional rates such as 8.25 are allowed
pub fn validate_percentage(field: &str, value: Decimal) -> CalcResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(CalcError::invalid_rate(field, value));
    }

    Ok(())
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Fractional quantities are allowed (1.5 hours)
/// - Must not exceed MAX_QUANTITY
pub fn validate_quantity(value: Decimal) -> CalcResult<()> {
    if value <= Decimal::ZERO || value > Decimal::from(MAX_QUANTITY) {
        return Err(CalcError::invalid_amount("quantity", value));
    }

    Ok(())
}

/// Validates a line unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Negative prices are credits and only pass when `allow_credit` is set
pub fn validate_unit_price(value: Decimal, allow_credit: bool) -> CalcResult<()> {
    if allow_credit {
        return validate_magnitude("unit_price", value);
    }

    validate_non_negative("unit_price", value)
}

// =============================================================================
// Consistency Predicate
// =============================================================================

/// Checks that a net / tax / total triple is internally consistent.
///
/// Returns true iff `|round2(net + tax) - total| <= tolerance`. Never fails:
/// a `false` here means the database would reject the row.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Invoice form: Save                                                     │
/// │                                                                         │
/// │  validate(net, tax, total) ← THIS FUNCTION                             │
/// │       │                                                                 │
/// │       ├── false → highlight amounts, do not submit                      │
/// │       │                                                                 │
/// │       └── true  → insert / update row                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate(net: Decimal, tax: Decimal, total: Decimal, tolerance: Decimal) -> bool {
    net.checked_add(tax)
        .and_then(|sum| round2(sum).checked_sub(total))
        .map(|diff| diff.abs() <= tolerance)
        .unwrap_or(false)
}

// =============================================================================
// Unit Tests
// =============================================================================
