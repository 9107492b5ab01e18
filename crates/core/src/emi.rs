//! Reducing-balance EMI calculation.
//!
//! Standard formula: `P * r * (1 + r)^n / ((1 + r)^n - 1)` where `r` is the
//! monthly rate and `n` the tenure in months. Zero-rate loans amortize
//! linearly.

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Result of an EMI calculation, rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiQuote {
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
}

/// Quotes the monthly instalment for a loan.
///
/// `annual_rate_pct` is the nominal annual rate in percent (e.g. `12` for
/// 12%). Principal and tenure must be positive; the rate must not be
/// negative.
pub fn quote(principal: Decimal, annual_rate_pct: Decimal, tenure_years: u32) -> Result<EmiQuote> {
    if principal <= Decimal::ZERO {
        return Err(invalid("principal", "must be a positive amount"));
    }
    if tenure_years == 0 {
        return Err(invalid("tenureYears", "must be at least one year"));
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(invalid("annualRate", "must not be negative"));
    }

    let months = u64::from(tenure_years) * 12;
    let months_dec = Decimal::from(months);

    let monthly = if annual_rate_pct.is_zero() {
        principal / months_dec
    } else {
        let rate = annual_rate_pct / Decimal::from(1200u32);
        let factor = (Decimal::ONE + rate)
            .checked_powu(months)
            .ok_or_else(|| invalid("tenureYears", "tenure too large to amortize"))?;
        principal * rate * factor / (factor - Decimal::ONE)
    };

    let total = monthly * months_dec;
    Ok(EmiQuote {
        monthly_payment: monthly.round_dp(2),
        total_payment: total.round_dp(2),
        total_interest: (total - principal).round_dp(2),
    })
}

fn invalid(field: &str, reason: &str) -> crate::Error {
    ValidationError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn one_lakh_at_twelve_percent_for_a_year() {
        let quote = quote(dec!(100000), dec!(12), 1).unwrap();
        assert_eq!(quote.monthly_payment, dec!(8884.88));
        assert_eq!(quote.total_payment, dec!(106618.55));
        assert_eq!(quote.total_interest, dec!(6618.55));
    }

    #[test]
    fn zero_rate_amortizes_linearly() {
        let quote = quote(dec!(12000), Decimal::ZERO, 1).unwrap();
        assert_eq!(quote.monthly_payment, dec!(1000));
        assert_eq!(quote.total_payment, dec!(12000));
        assert_eq!(quote.total_interest, dec!(0));
    }

    #[test]
    fn interest_grows_with_tenure() {
        let short = quote(dec!(500000), dec!(9.5), 5).unwrap();
        let long = quote(dec!(500000), dec!(9.5), 20).unwrap();
        assert!(long.total_interest > short.total_interest);
        assert!(long.monthly_payment < short.monthly_payment);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(matches!(
            quote(Decimal::ZERO, dec!(12), 1),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            quote(dec!(-1), dec!(12), 1),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            quote(dec!(100000), dec!(12), 0),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            quote(dec!(100000), dec!(-1), 1),
            Err(Error::Validation(_))
        ));
    }
}
