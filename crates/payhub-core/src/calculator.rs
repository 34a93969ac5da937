//! # VAT Calculator
//!
//! Converts between net and gross amounts under a VAT rate, aggregates
//! invoice lines, and checks net / tax / total triples.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  From gross (total entered):                                            │
//! │    tax   = total × rate / (100 + rate)                                  │
//! │    net   = total − tax                                                  │
//! │                                                                         │
//! │  From net (net entered):                                                │
//! │    tax   = net × rate / 100                                             │
//! │    total = net + tax                                                    │
//! │                                                                         │
//! │  Tax entered directly:                                                  │
//! │    total fixed, net = total − tax                                       │
//! │                                                                         │
//! │  Rounding: half away from zero, 2 decimals, once per output field.     │
//! │  The derived field is computed from the other two ROUNDED fields, so   │
//! │  net + tax == total holds to the cent.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use payhub_core::calculator::VatCalculator;
//! use rust_decimal::Decimal;
//!
//! let calc = VatCalculator::default();
//! let amount = calc.calculate_from_gross(Decimal::from(120), Decimal::from(20)).unwrap();
//! assert_eq!(amount.net_amount.cents(), 10000);
//! assert_eq!(amount.tax_amount.cents(), 2000);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::{CalcError, CalcResult};
use crate::format::{format_in, Currency};
use crate::money::Money;
use crate::types::{
    AmountInputs, AmountRecord, ChangedField, LineItem, LineItemResult, LineItemsSummary,
    MonetaryAmount, TaxRate,
};
use crate::validation::{
    self, validate_magnitude, validate_non_negative, validate_percentage, validate_quantity,
    validate_unit_price,
};

// =============================================================================
// Unrounded Breakdown
// =============================================================================

/// Full-precision net / tax / total, before any rounding.
#[derive(Debug, Clone, Copy, Default)]
struct Breakdown {
    net: Decimal,
    tax: Decimal,
    total: Decimal,
}

impl Breakdown {
    fn from_net(net: Decimal, rate: TaxRate) -> Self {
        let tax = net * rate.percent() / Decimal::ONE_HUNDRED;
        Breakdown {
            net,
            tax,
            total: net + tax,
        }
    }

    fn from_gross(total: Decimal, rate: TaxRate) -> Self {
        let tax = total * rate.percent() / (Decimal::ONE_HUNDRED + rate.percent());
        Breakdown {
            net: total - tax,
            tax,
            total,
        }
    }

    /// Rounds net and tax; total is their sum.
    fn round_keeping_net(&self, rate: TaxRate) -> MonetaryAmount {
        let net_amount = Money::round(self.net);
        let tax_amount = Money::round(self.tax);
        MonetaryAmount {
            net_amount,
            tax_amount,
            total_amount: net_amount + tax_amount,
            tax_rate: rate,
        }
    }

    /// Rounds total and tax; net is the difference.
    fn round_keeping_total(&self, rate: TaxRate) -> MonetaryAmount {
        let total_amount = Money::round(self.total);
        let tax_amount = Money::round(self.tax);
        MonetaryAmount {
            net_amount: total_amount - tax_amount,
            tax_amount,
            total_amount,
            tax_rate: rate,
        }
    }

    /// Rounds each field on its own (used for aggregates).
    fn round_each(&self, rate: TaxRate) -> MonetaryAmount {
        MonetaryAmount {
            net_amount: Money::round(self.net),
            tax_amount: Money::round(self.tax),
            total_amount: Money::round(self.total),
            tax_rate: rate,
        }
    }

    fn checked_add(&self, other: &Breakdown) -> Option<Breakdown> {
        Some(Breakdown {
            net: self.net.checked_add(other.net)?,
            tax: self.tax.checked_add(other.tax)?,
            total: self.total.checked_add(other.total)?,
        })
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// The monetary calculator.
///
/// Stateless apart from its immutable configuration: every method is a pure
/// function of its arguments, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct VatCalculator {
    config: CalculatorConfig,
}

impl VatCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        VatCalculator { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Splits a tax-inclusive amount into net and tax.
    ///
    /// ## Errors
    /// - `InvalidAmount` if `gross_amount < 0`
    /// - `InvalidRate` if `tax_rate` is outside `[0, 100]`
    ///
    /// ## User Workflow
    /// ```text
    /// Payment form: user types "Total: 120"
    ///      │
    ///      ▼
    /// calculate_from_gross(120, 20) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Net: 100.00   VAT: 20.00   Total: 120.00
    /// ```
    pub fn calculate_from_gross(
        &self,
        gross_amount: Decimal,
        tax_rate: Decimal,
    ) -> CalcResult<MonetaryAmount> {
        validate_non_negative("gross_amount", gross_amount)?;
        let rate = TaxRate::new(tax_rate)?;
        debug!(gross = %gross_amount, rate = %rate, "Calculating from gross");

        Ok(Breakdown::from_gross(gross_amount, rate).round_keeping_total(rate))
    }

    /// Adds tax on top of a net amount.
    ///
    /// ## Errors
    /// - `InvalidAmount` if `net_amount < 0`
    /// - `InvalidRate` if `tax_rate` is outside `[0, 100]`
    pub fn calculate_from_net(
        &self,
        net_amount: Decimal,
        tax_rate: Decimal,
    ) -> CalcResult<MonetaryAmount> {
        validate_non_negative("net_amount", net_amount)?;
        let rate = TaxRate::new(tax_rate)?;
        debug!(net = %net_amount, rate = %rate, "Calculating from net");

        Ok(Breakdown::from_net(net_amount, rate).round_keeping_net(rate))
    }

    /// Recomputes the other two amount fields after the user edited one.
    ///
    /// A missing rate falls back to the configured default. Missing amounts
    /// count as zero.
    ///
    /// ## Tax Edits
    /// Editing the tax keeps the total fixed and moves the difference into
    /// the net amount. A tax larger than the total fails with
    /// `InvalidAmount` on `net_amount` instead of producing a negative net.
    pub fn recalculate(
        &self,
        changed_field: ChangedField,
        values: &AmountInputs,
    ) -> CalcResult<MonetaryAmount> {
        let tax_rate = values.vat_rate.unwrap_or(self.config.default_vat_rate);
        debug!(field = %changed_field, rate = %tax_rate, "Recalculating amounts");

        match changed_field {
            ChangedField::Total => {
                self.calculate_from_gross(values.total.unwrap_or_default(), tax_rate)
            }
            ChangedField::Net => self.calculate_from_net(values.net.unwrap_or_default(), tax_rate),
            ChangedField::Tax => {
                let total = values.total.unwrap_or_default();
                let tax = values.tax.unwrap_or_default();
                validate_non_negative("total_amount", total)?;
                validate_non_negative("tax_amount", tax)?;
                let rate = TaxRate::new(tax_rate)?;

                let total_amount = Money::round(total);
                let tax_amount = Money::round(tax);
                let net_amount = total_amount - tax_amount;
                if net_amount.is_negative() {
                    return Err(CalcError::invalid_amount("net_amount", net_amount.amount()));
                }

                Ok(MonetaryAmount {
                    net_amount,
                    tax_amount,
                    total_amount,
                    tax_rate: rate,
                })
            }
        }
    }

    /// Calculates every invoice line and the invoice totals.
    ///
    /// ## Per Line
    /// ```text
    /// subtotal        = quantity × unit_price
    /// discount_amount = subtotal × discount / 100
    /// line_net        = subtotal − discount_amount
    /// line amounts    = calculate_from_net(line_net, line rate or default)
    /// ```
    ///
    /// ## Totals
    /// Summed from the unrounded line values and rounded once, so a long
    /// invoice does not drift by a cent per line.
    ///
    /// Each line net and the running net sum are bounded by MAX_AMOUNT, the
    /// same limit `calculate_from_net` applies to its input.
    ///
    /// Any invalid line fails the whole call.
    pub fn calculate_line_items(
        &self,
        items: &[LineItem],
        default_tax_rate: Decimal,
    ) -> CalcResult<LineItemsSummary> {
        let default_rate = TaxRate::for_field("default_tax_rate", default_tax_rate)?;
        debug!(lines = items.len(), rate = %default_rate, "Calculating line items");

        let mut results = Vec::with_capacity(items.len());
        let mut sum = Breakdown::default();

        for item in items {
            validate_quantity(item.quantity)?;
            validate_unit_price(item.unit_price, self.config.allow_credit_lines)?;
            let discount = item.discount.unwrap_or_default();
            validate_percentage("discount", discount)?;
            let rate = match item.tax_rate {
                Some(percent) => TaxRate::new(percent)?,
                None => default_rate,
            };

            let subtotal = item.quantity * item.unit_price;
            let discount_amount = subtotal * discount / Decimal::ONE_HUNDRED;
            let line_net = subtotal - discount_amount;
            validate_magnitude("line_net", line_net)?;
            let line = Breakdown::from_net(line_net, rate);

            sum = sum
                .checked_add(&line)
                .ok_or_else(|| CalcError::invalid_amount("totals", line.total))?;
            validate_magnitude("totals", sum.net)?;

            results.push(LineItemResult {
                description: item.description.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                discount,
                amounts: line.round_keeping_net(rate),
            });
        }

        Ok(LineItemsSummary {
            items: results,
            totals: sum.round_each(default_rate),
        })
    }

    /// [`VatCalculator::calculate_line_items`] with the configured default
    /// rate.
    pub fn calculate_line_items_default(&self, items: &[LineItem]) -> CalcResult<LineItemsSummary> {
        self.calculate_line_items(items, self.config.default_vat_rate)
    }

    /// Formats an amount in `currency_code`, or in the configured currency
    /// when none is given.
    ///
    /// ## Errors
    /// - `UnsupportedCurrency` if `currency_code` is not a known code
    pub fn format_amount(
        &self,
        amount: Decimal,
        currency_code: Option<&str>,
    ) -> CalcResult<String> {
        let currency = match currency_code {
            Some(code) => code.parse::<Currency>()?,
            None => self.config.currency,
        };
        Ok(format_in(Money::round(amount), currency))
    }

    /// Checks a net / tax / total triple with an explicit tolerance.
    pub fn validate(&self, net: Decimal, tax: Decimal, total: Decimal, tolerance: Decimal) -> bool {
        validation::validate(net, tax, total, tolerance)
    }

    /// Checks a row about to be submitted, using the configured tolerance.
    pub fn validate_record(&self, record: &AmountRecord) -> bool {
        let consistent = record.is_consistent(self.config.tolerance);
        if !consistent {
            debug!(
                net = %record.net_amount,
                tax = %record.tax_amount,
                total = %record.total_amount,
                "Amount record fails net + tax = total"
            );
        }
        consistent
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_AMOUNT, MAX_QUANTITY};
    use rust_decimal_macros::dec;

    fn calc() -> VatCalculator {
        VatCalculator::default()
    }

    fn rate(percent: Decimal) -> TaxRate {
        TaxRate::new(percent).unwrap()
    }

    #[test]
    fn test_from_gross_known_value() {
        let amount = calc().calculate_from_gross(dec!(120), dec!(20)).unwrap();
        assert_eq!(amount.net_amount.amount(), dec!(100.00));
        assert_eq!(amount.tax_amount.amount(), dec!(20.00));
        assert_eq!(amount.total_amount.amount(), dec!(120.00));
        assert_eq!(amount.tax_rate, rate(dec!(20)));
    }

    #[test]
    fn test_from_net_known_value() {
        let amount = calc().calculate_from_net(dec!(100), dec!(20)).unwrap();
        assert_eq!(amount.net_amount.amount(), dec!(100.00));
        assert_eq!(amount.tax_amount.amount(), dec!(20.00));
        assert_eq!(amount.total_amount.amount(), dec!(120.00));
    }

    #[test]
    fn test_zero_rate_identity() {
        let gross = calc().calculate_from_gross(dec!(100), dec!(0)).unwrap();
        let net = calc().calculate_from_net(dec!(100), dec!(0)).unwrap();
        for amount in [gross, net] {
            assert_eq!(amount.net_amount.amount(), dec!(100));
            assert!(amount.tax_amount.is_zero());
            assert_eq!(amount.total_amount.amount(), dec!(100));
            assert!(amount.tax_rate.is_zero());
        }
    }

    #[test]
    fn test_from_gross_repeating_fraction() {
        // 100 × 20 / 120 = 16.666...
        let amount = calc().calculate_from_gross(dec!(100), dec!(20)).unwrap();
        assert_eq!(amount.tax_amount.amount(), dec!(16.67));
        assert_eq!(amount.net_amount.amount(), dec!(83.33));
        assert_eq!(amount.total_amount.amount(), dec!(100.00));
    }

    #[test]
    fn test_from_gross_rounds_half_away_from_zero() {
        // 0.21 × 10 / 110 = 0.0190909.. → 0.02
        let amount = calc().calculate_from_gross(dec!(0.21), dec!(10)).unwrap();
        assert_eq!(amount.tax_amount.amount(), dec!(0.02));
        assert_eq!(amount.net_amount.amount(), dec!(0.19));

        // 0.25 × 10 / 100 = 0.025 exactly → 0.03
        let amount = calc().calculate_from_net(dec!(0.25), dec!(10)).unwrap();
        assert_eq!(amount.tax_amount.amount(), dec!(0.03));
        assert_eq!(amount.total_amount.amount(), dec!(0.28));
    }

    #[test]
    fn test_boundary_rejection() {
        let err = calc().calculate_from_gross(dec!(-1), dec!(20)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidAmount { .. }));

        let err = calc().calculate_from_gross(dec!(100), dec!(101)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidRate { .. }));

        let err = calc().calculate_from_net(dec!(-0.01), dec!(20)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidAmount { .. }));

        let err = calc().calculate_from_net(dec!(10), dec!(-1)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidRate { .. }));
    }

    #[test]
    fn test_full_rate_boundary() {
        let amount = calc().calculate_from_gross(dec!(200), dec!(100)).unwrap();
        assert_eq!(amount.net_amount.amount(), dec!(100));
        assert_eq!(amount.tax_amount.amount(), dec!(100));
    }

    #[test]
    fn test_recalculate_total() {
        let inputs = AmountInputs {
            total: Some(dec!(120)),
            vat_rate: Some(dec!(20)),
            ..Default::default()
        };
        let amount = calc().recalculate(ChangedField::Total, &inputs).unwrap();
        assert_eq!(amount.net_amount.amount(), dec!(100));
    }

    #[test]
    fn test_recalculate_net_uses_default_rate() {
        let inputs = AmountInputs {
            net: Some(dec!(50)),
            ..Default::default()
        };
        let amount = calc().recalculate(ChangedField::Net, &inputs).unwrap();
        assert_eq!(amount.tax_rate.percent(), dec!(20));
        assert_eq!(amount.tax_amount.amount(), dec!(10));
        assert_eq!(amount.total_amount.amount(), dec!(60));
    }

    #[test]
    fn test_recalculate_missing_amount_is_zero() {
        let amount = calc()
            .recalculate(ChangedField::Total, &AmountInputs::default())
            .unwrap();
        assert_eq!(amount, MonetaryAmount::zero(rate(dec!(20))));
    }

    #[test]
    fn test_recalculate_tax_holds_total() {
        let inputs = AmountInputs {
            total: Some(dec!(120)),
            tax: Some(dec!(25)),
            vat_rate: Some(dec!(20)),
            ..Default::default()
        };
        let amount = calc().recalculate(ChangedField::Tax, &inputs).unwrap();
        assert_eq!(amount.net_amount.amount(), dec!(95.00));
        assert_eq!(amount.tax_amount.amount(), dec!(25.00));
        assert_eq!(amount.total_amount.amount(), dec!(120.00));
        assert!(amount.is_consistent(dec!(0)));
    }

    #[test]
    fn test_recalculate_tax_rejects_negative_net() {
        let inputs = AmountInputs {
            total: Some(dec!(10)),
            tax: Some(dec!(25)),
            ..Default::default()
        };
        let err = calc().recalculate(ChangedField::Tax, &inputs).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidAmount {
                field: "net_amount".to_string(),
                value: dec!(-15.00)
            }
        );
    }

    #[test]
    fn test_recalculate_tax_validates_rate() {
        let inputs = AmountInputs {
            total: Some(dec!(120)),
            tax: Some(dec!(20)),
            vat_rate: Some(dec!(250)),
            ..Default::default()
        };
        let err = calc().recalculate(ChangedField::Tax, &inputs).unwrap_err();
        assert!(matches!(err, CalcError::InvalidRate { .. }));
    }

    #[test]
    fn test_recalculate_uses_configured_default() {
        let config = CalculatorConfig {
            default_vat_rate: dec!(10),
            ..Default::default()
        };
        let inputs = AmountInputs {
            total: Some(dec!(110)),
            ..Default::default()
        };
        let amount = VatCalculator::new(config)
            .recalculate(ChangedField::Total, &inputs)
            .unwrap();
        assert_eq!(amount.net_amount.amount(), dec!(100));
    }

    #[test]
    fn test_line_items_aggregation() {
        let items = vec![
            LineItem::new(dec!(2), dec!(50)).with_tax_rate(dec!(20)),
            LineItem::new(dec!(1), dec!(30)).with_tax_rate(dec!(10)),
        ];
        let summary = calc().calculate_line_items(&items, dec!(20)).unwrap();

        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[0].amounts.total_amount.amount(), dec!(120.00));
        assert_eq!(summary.items[1].amounts.total_amount.amount(), dec!(33.00));
        assert_eq!(summary.items[0].quantity, dec!(2));
        assert_eq!(summary.items[0].unit_price, dec!(50));

        assert_eq!(summary.totals.net_amount.amount(), dec!(130.00));
        assert_eq!(summary.totals.tax_amount.amount(), dec!(23.00));
        assert_eq!(summary.totals.total_amount.amount(), dec!(153.00));
        assert_eq!(summary.totals.tax_rate, rate(dec!(20)));
    }

    #[test]
    fn test_line_items_empty() {
        let summary = calc().calculate_line_items(&[], dec!(20)).unwrap();
        assert!(summary.items.is_empty());
        assert!(summary.totals.net_amount.is_zero());
        assert!(summary.totals.tax_amount.is_zero());
        assert!(summary.totals.total_amount.is_zero());
    }

    #[test]
    fn test_line_items_discount_and_default_rate() {
        let items = vec![LineItem::new(dec!(3), dec!(10))
            .with_discount(dec!(10))
            .with_description("Consulting")];
        let summary = calc().calculate_line_items(&items, dec!(20)).unwrap();

        let line = &summary.items[0];
        assert_eq!(line.description.as_deref(), Some("Consulting"));
        assert_eq!(line.discount, dec!(10));
        assert_eq!(line.amounts.net_amount.amount(), dec!(27.00));
        assert_eq!(line.amounts.tax_amount.amount(), dec!(5.40));
        assert_eq!(line.amounts.total_amount.amount(), dec!(32.40));
        assert_eq!(line.amounts.tax_rate, rate(dec!(20)));
    }

    #[test]
    fn test_line_items_sum_before_rounding() {
        // Each line: net 0.333.. tax 0.0666.. → rounds to 0.33 / 0.07.
        // Three rounded lines would sum to 0.99 / 0.21; summing first gives 1.00 / 0.20.
        let third = dec!(1) / dec!(3);
        let items = vec![LineItem::new(dec!(1), third); 3];
        let summary = calc().calculate_line_items(&items, dec!(20)).unwrap();

        assert_eq!(summary.items[0].amounts.net_amount.amount(), dec!(0.33));
        assert_eq!(summary.items[0].amounts.tax_amount.amount(), dec!(0.07));
        assert_eq!(summary.totals.net_amount.amount(), dec!(1.00));
        assert_eq!(summary.totals.tax_amount.amount(), dec!(0.20));
        assert_eq!(summary.totals.total_amount.amount(), dec!(1.20));
    }

    #[test]
    fn test_line_items_reject_invalid_lines() {
        let cases = vec![
            LineItem::new(dec!(0), dec!(10)),
            LineItem::new(dec!(1), dec!(-10)),
            LineItem::new(dec!(1), dec!(10)).with_discount(dec!(150)),
            LineItem::new(dec!(1), dec!(10)).with_tax_rate(dec!(-5)),
        ];
        for item in cases {
            assert!(calc().calculate_line_items(&[item], dec!(20)).is_err());
        }

        let err = calc().calculate_line_items(&[], dec!(101)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidRate { .. }));
    }

    #[test]
    fn test_line_items_credit_lines_when_enabled() {
        let config = CalculatorConfig {
            allow_credit_lines: true,
            ..Default::default()
        };
        let items = vec![
            LineItem::new(dec!(1), dec!(100)),
            LineItem::new(dec!(1), dec!(-20)).with_description("Credit"),
        ];
        let summary = VatCalculator::new(config)
            .calculate_line_items_default(&items)
            .unwrap();

        assert_eq!(summary.items[1].amounts.total_amount.amount(), dec!(-24.00));
        assert_eq!(summary.totals.net_amount.amount(), dec!(80.00));
        assert_eq!(summary.totals.total_amount.amount(), dec!(96.00));
    }

    #[test]
    fn test_line_items_reject_oversized_line_net() {
        let line = LineItem::new(Decimal::from(MAX_QUANTITY), Decimal::from(MAX_AMOUNT));
        let items = vec![line; 20];
        let err = calc().calculate_line_items(&items, dec!(20)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidAmount { ref field, .. } if field == "line_net"));

        // Same bound calculate_from_net applies to a single amount
        assert!(calc()
            .calculate_from_net(Decimal::from(MAX_AMOUNT) + dec!(0.01), dec!(20))
            .is_err());
    }

    #[test]
    fn test_line_items_reject_oversized_totals() {
        let half = Decimal::from(MAX_AMOUNT / 2);
        let items = vec![
            LineItem::new(dec!(1), half),
            LineItem::new(dec!(1), half),
            LineItem::new(dec!(1), dec!(0.01)),
        ];
        let summary = calc().calculate_line_items(&items[..2], dec!(20)).unwrap();
        assert_eq!(summary.totals.net_amount.amount(), Decimal::from(MAX_AMOUNT));

        let err = calc().calculate_line_items(&items, dec!(20)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidAmount { ref field, .. } if field == "totals"));
    }

    #[test]
    fn test_format_amount_uses_configured_currency() {
        let nb = '\u{a0}';
        assert_eq!(
            calc().format_amount(dec!(1234.5), None).unwrap(),
            format!("1{nb}234,50{nb}₽")
        );

        let config = CalculatorConfig {
            currency: Currency::Eur,
            ..Default::default()
        };
        let eur = VatCalculator::new(config);
        assert_eq!(eur.format_amount(dec!(10), None).unwrap(), format!("10,00{nb}€"));
        assert_eq!(eur.format_amount(dec!(10), Some("usd")).unwrap(), format!("10,00{nb}$"));

        let err = eur.format_amount(dec!(10), Some("XYZ")).unwrap_err();
        assert_eq!(err, CalcError::UnsupportedCurrency("XYZ".to_string()));
    }

    #[test]
    fn test_validate_and_record() {
        let c = calc();
        assert!(c.validate(dec!(100), dec!(20), dec!(120), dec!(0.01)));
        assert!(!c.validate(dec!(100), dec!(20), dec!(121), dec!(0.01)));

        let amount = c.calculate_from_gross(dec!(99.99), dec!(20)).unwrap();
        assert!(c.validate_record(&AmountRecord::from(&amount)));

        let tampered = AmountRecord {
            tax_amount: dec!(0),
            ..AmountRecord::from(&amount)
        };
        assert!(!c.validate_record(&tampered));
    }
}
