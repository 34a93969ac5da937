//! # Error Types
//!
//! Domain-specific error types for payhub-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  payhub-core errors (this file)                                        │
//! │  ├── CalcError    - Rejected calculator input                          │
//! │  └── ConfigError  - Configuration could not be loaded                  │
//! │                                                                         │
//! │  Flow: CalcError → form layer → inline field message                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field and value in the message
//! 3. Errors are enum variants, never String
//! 4. Numeric operations fail fast, there are no partial results

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Calculation Error
// =============================================================================

/// Errors returned by the calculator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A monetary input (or quantity) is outside its allowed range.
    ///
    /// ## When This Occurs
    /// - Negative gross or net amount
    /// - Tax edit that would leave a negative net amount
    /// - Zero or negative line quantity
    /// - Negative unit price while credit lines are disabled
    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount { field: String, value: Decimal },

    /// A percentage is outside `[0, 100]` (tax rate or discount).
    #[error("Invalid rate for {field}: {value} (must be between 0 and 100)")]
    InvalidRate { field: String, value: Decimal },

    /// Formatting was requested for a currency code we do not know.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

impl CalcError {
    pub(crate) fn invalid_amount(field: &str, value: Decimal) -> Self {
        CalcError::InvalidAmount {
            field: field.to_string(),
            value,
        }
    }

    pub(crate) fn invalid_rate(field: &str, value: Decimal) -> Self {
        CalcError::InvalidRate {
            field: field.to_string(),
            value,
        }
    }
}

// =============================================================================
// Configuration Error
// =============================================================================

/// Errors raised while loading [`crate::config::CalculatorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not acceptable.
    #[error("Invalid config value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_messages() {
        let err = CalcError::invalid_amount("gross_amount", dec!(-1));
        assert_eq!(err.to_string(), "Invalid amount for gross_amount: -1");

        let err = CalcError::invalid_rate("tax_rate", dec!(101));
        assert_eq!(
            err.to_string(),
            "Invalid rate for tax_rate: 101 (must be between 0 and 100)"
        );

        let err = CalcError::UnsupportedCurrency("XYZ".to_string());
        assert_eq!(err.to_string(), "Unsupported currency: XYZ");
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
