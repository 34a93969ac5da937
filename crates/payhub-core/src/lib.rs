//! # payhub-core: Monetary Calculations for PayHub
//!
//! This crate holds the VAT / amount logic behind PayHub's invoice and
//! payment forms, as pure functions with no network or database access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          PayHub Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │   Invoice form ──► Payment form ──► Line items ──► Save        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ts-rs generated types                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ payhub-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │calculator │  │  format   │  │ validation│  │   │
//! │  │   │   Money   │  │ VAT split │  │ ru-RU text│  │  ranges   │  │   │
//! │  │   │  round2   │  │ line items│  │ lenient   │  │  net+tax  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Postgres (invoices, payments)                      │   │
//! │  │        CHECK: net + vat = total, same rule as validate()        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type, exactly 2 decimals, one rounding rule
//! - [`types`] - TaxRate, MonetaryAmount, line items, form inputs
//! - [`calculator`] - Net / gross conversion, recalculation, aggregation
//! - [`format`] - Currency display and lenient parsing
//! - [`validation`] - Input ranges and the consistency predicate
//! - [`config`] - Default rate, tolerance, currency
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe to call from anywhere
//! 2. **Exact Decimals**: `rust_decimal`, never `f64`
//! 3. **One Rounding Rule**: half away from zero, 2 decimals, at every boundary
//! 4. **Explicit Errors**: typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use payhub_core::{ChangedField, AmountInputs, VatCalculator};
//! use rust_decimal::Decimal;
//!
//! let calc = VatCalculator::default();
//!
//! // The user typed a new VAT amount: total stays, net absorbs the change
//! let inputs = AmountInputs {
//!     total: Some(Decimal::from(120)),
//!     tax: Some(Decimal::from(25)),
//!     vat_rate: Some(Decimal::from(20)),
//!     ..Default::default()
//! };
//! let amount = calc.recalculate(ChangedField::Tax, &inputs).unwrap();
//! assert_eq!(amount.net_amount.cents(), 9500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod config;
pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::VatCalculator;
pub use config::CalculatorConfig;
pub use error::{CalcError, CalcResult, ConfigError, ConfigResult};
pub use format::{format_money, parse_money, Currency};
pub use money::Money;
pub use types::*;
pub use validation::validate;

use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// VAT rate used when neither the form nor the config names one (20%).
pub const DEFAULT_VAT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Default tolerance of the net + tax = total check (0.01).
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted monetary input, in major units.
///
/// ## Business Reason
/// Far above any real invoice, and low enough that quantity × price and the
/// invoice sums never approach the decimal type's limit.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Largest accepted line quantity.
pub const MAX_QUANTITY: i64 = 1_000_000_000;
