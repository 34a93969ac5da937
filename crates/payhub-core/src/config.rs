//! # Calculator Configuration
//!
//! Settings that change calculator behaviour per deployment.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PAYHUB_DEFAULT_VAT_RATE=20                                         │
//! │     PAYHUB_TOLERANCE=0.01                                              │
//! │     PAYHUB_CURRENCY=RUB                                                │
//! │     PAYHUB_ALLOW_CREDIT_LINES=false                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     payhub.toml                                                        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     20% VAT, 0.01 tolerance, RUB, no credit lines                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # payhub.toml
//! default_vat_rate = 20
//! tolerance = "0.01"
//! currency = "RUB"
//! allow_credit_lines = false
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::format::Currency;
use crate::{DEFAULT_TOLERANCE, DEFAULT_VAT_RATE};

/// Environment variable names, in one place.
pub const ENV_DEFAULT_VAT_RATE: &str = "PAYHUB_DEFAULT_VAT_RATE";
pub const ENV_TOLERANCE: &str = "PAYHUB_TOLERANCE";
pub const ENV_CURRENCY: &str = "PAYHUB_CURRENCY";
pub const ENV_ALLOW_CREDIT_LINES: &str = "PAYHUB_ALLOW_CREDIT_LINES";

/// Largest tolerance accepted for the consistency check.
const MAX_TOLERANCE: Decimal = Decimal::ONE;

// =============================================================================
// Calculator Config
// =============================================================================

/// Configuration for [`crate::calculator::VatCalculator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Rate used when a form or line does not specify one.
    #[serde(default = "default_vat_rate")]
    pub default_vat_rate: Decimal,

    /// Allowed difference between `round2(net + tax)` and `total`.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,

    /// Currency used when the caller does not pass one.
    #[serde(default)]
    pub currency: Currency,

    /// Accept negative unit prices on line items (credit lines).
    #[serde(default)]
    pub allow_credit_lines: bool,
}

fn default_vat_rate() -> Decimal {
    DEFAULT_VAT_RATE
}

fn default_tolerance() -> Decimal {
    DEFAULT_TOLERANCE
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            default_vat_rate: default_vat_rate(),
            tolerance: default_tolerance(),
            currency: Currency::default(),
            allow_credit_lines: false,
        }
    }
}

impl CalculatorConfig {
    /// Parses a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: CalculatorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file, then applies environment
    /// overrides.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let base = if path.exists() {
            info!("Loading calculator config from {:?}", path);
            let text = std::fs::read_to_string(path)?;
            Self::from_toml_str(&text)?
        } else {
            debug!("Config file {:?} not found, using defaults", path);
            Self::default()
        };

        base.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a key lookup (normally `std::env::var`).
    pub fn with_env_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_DEFAULT_VAT_RATE) {
            self.default_vat_rate = parse_decimal(ENV_DEFAULT_VAT_RATE, &raw)?;
            debug!(rate = %self.default_vat_rate, "Default VAT rate from environment");
        }

        if let Some(raw) = lookup(ENV_TOLERANCE) {
            self.tolerance = parse_decimal(ENV_TOLERANCE, &raw)?;
        }

        if let Some(raw) = lookup(ENV_CURRENCY) {
            self.currency = Currency::from_str(&raw).map_err(|e| ConfigError::InvalidValue {
                key: ENV_CURRENCY.to_string(),
                reason: e.to_string(),
            })?;
        }

        if let Some(raw) = lookup(ENV_ALLOW_CREDIT_LINES) {
            self.allow_credit_lines = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    warn!("Ignoring unrecognised {}={}", ENV_ALLOW_CREDIT_LINES, other);
                    self.allow_credit_lines
                }
            };
        }

        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_vat_rate < Decimal::ZERO || self.default_vat_rate > Decimal::ONE_HUNDRED {
            return Err(ConfigError::InvalidValue {
                key: "default_vat_rate".to_string(),
                reason: format!("{} is outside 0..=100", self.default_vat_rate),
            });
        }

        if self.tolerance < Decimal::ZERO || self.tolerance > MAX_TOLERANCE {
            return Err(ConfigError::InvalidValue {
                key: "tolerance".to_string(),
                reason: format!("{} is outside 0..={}", self.tolerance, MAX_TOLERANCE),
            });
        }

        Ok(())
    }
}

fn parse_decimal(key: &str, raw: &str) -> ConfigResult<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
