//! # Currency Formatting and Parsing
//!
//! Turns amounts into display text and free-typed form text back into
//! amounts.
//!
//! ## Display Conventions (ru-RU)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   1 234 567,89 ₽                                                        │
//! │    │   │    │  └── symbol after the number, non-breaking space before  │
//! │    │   │    └───── comma decimal separator, always 2 digits             │
//! │    └───┴────────── non-breaking space groups of three                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing is deliberately lenient: anything that does not look like a number
//! becomes zero instead of an error, so a half-typed field never blocks the
//! form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use ts_rs::TS;

use crate::error::{CalcError, CalcResult};
use crate::money::Money;
use crate::MAX_AMOUNT;

/// Group separator (U+00A0 NO-BREAK SPACE).
const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';

// =============================================================================
// Currency
// =============================================================================

/// Currencies the formatter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Russian rouble.
    #[default]
    Rub,
    Usd,
    Eur,
    Gbp,
    Cny,
    /// Kazakhstani tenge.
    Kzt,
    /// Belarusian rouble.
    Byn,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cny => "CNY",
            Currency::Kzt => "KZT",
            Currency::Byn => "BYN",
        }
    }

    /// Symbol as rendered in the ru-RU locale.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Rub => "₽",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cny => "CN¥",
            Currency::Kzt => "₸",
            Currency::Byn => "Br",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RUB" => Ok(Currency::Rub),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "CNY" => Ok(Currency::Cny),
            "KZT" => Ok(Currency::Kzt),
            "BYN" => Ok(Currency::Byn),
            _ => Err(CalcError::UnsupportedCurrency(s.to_string())),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount for display in the given currency.
///
/// Fails only with `UnsupportedCurrency`; any decimal amount renders.
///
/// ## Example
/// ```rust
/// use payhub_core::format::format_money;
/// use rust_decimal::Decimal;
///
/// let text = format_money(Decimal::new(123456, 2), "RUB").unwrap();
/// assert_eq!(text, "1\u{a0}234,56\u{a0}₽");
/// assert!(format_money(Decimal::ONE, "XYZ").is_err());
/// ```
pub fn format_money(amount: Decimal, currency_code: &str) -> CalcResult<String> {
    let currency = Currency::from_str(currency_code)?;
    Ok(format_in(Money::round(amount), currency))
}

/// Formats an already-rounded amount. Infallible.
pub fn format_in(amount: Money, currency: Currency) -> String {
    let value = amount.amount();
    let digits = value.abs().to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + 8);
    if amount.is_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    out.push(DECIMAL_SEPARATOR);
    out.push_str(fraction);
    out.push(GROUP_SEPARATOR);
    out.push_str(currency.symbol());
    out
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses free-typed money text, returning zero when it is not a number.
///
/// ## Rules
/// 1. Keep only digits, `.`, `,` and `-`
/// 2. A lone comma is the decimal separator (`"12,50"` → 12.50)
/// 3. With both present, the last one is the decimal separator and the other
///    is grouping (`"1,234.56"` → 1234.56, `"1.234,56"` → 1234.56)
/// 4. Repeated commas without a dot are grouping (`"1,234,567"` → 1234567)
/// 5. Anything still unparseable, or beyond MAX_AMOUNT → 0
/// 6. Result rounded to 2 decimals
///
/// ## Example
/// ```rust
/// use payhub_core::format::parse_money;
///
/// assert_eq!(parse_money("1 234,56 ₽").cents(), 123456);
/// assert_eq!(parse_money("abc").cents(), 0);
/// ```
pub fn parse_money(text: &str) -> Money {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => cleaned.replace('.', "").replacen(',', ".", 1),
        (Some(_), _) => cleaned.replace(',', ""),
        (None, Some(_)) if cleaned.matches(',').count() > 1 => cleaned.replace(',', ""),
        _ => cleaned.replacen(',', ".", 1),
    };

    match Decimal::from_str(&normalized) {
        Ok(value) if value.abs() <= Decimal::from(MAX_AMOUNT) => Money::round(value),
        _ => {
            if !text.trim().is_empty() {
                debug!(input = text, cleaned = %normalized, "Unparseable money text, using 0");
            }
            Money::zero()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
