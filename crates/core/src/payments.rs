//! Outbound UPI payment links.
//!
//! The links are fire-and-forget deep links in the `upi://pay` scheme;
//! opening them is delegated to the host environment and there is no
//! success/failure callback.

use rust_decimal::Decimal;

use crate::constants::{UPI_CURRENCY, UPI_PAYEE_ADDRESS, UPI_PAYEE_NAME};

/// A payment request renderable as a `upi://pay` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiPaymentLink {
    /// Payee VPA, e.g. `name@bank`. VPAs are URI-safe and passed through
    /// unencoded.
    pub payee_address: String,
    pub payee_name: String,
    pub amount: Decimal,
    pub note: String,
}

impl UpiPaymentLink {
    pub fn new(payee_address: &str, payee_name: &str, amount: Decimal, note: &str) -> Self {
        UpiPaymentLink {
            payee_address: payee_address.to_string(),
            payee_name: payee_name.to_string(),
            amount,
            note: note.to_string(),
        }
    }

    /// Renders the deep link. Amounts are normalized to 2 decimal places;
    /// the currency is always INR.
    pub fn to_uri(&self) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu={}&tn={}",
            self.payee_address,
            urlencoding::encode(&self.payee_name),
            self.amount.round_dp(2),
            UPI_CURRENCY,
            urlencoding::encode(&self.note)
        )
    }
}

/// Link for repaying a loan instalment to the brokerage's account.
pub fn loan_repayment_link(amount: Decimal) -> UpiPaymentLink {
    UpiPaymentLink::new(UPI_PAYEE_ADDRESS, UPI_PAYEE_NAME, amount, "Loan Repayment")
}

/// Link for purchasing an auctioned vehicle.
pub fn vehicle_purchase_link(amount: Decimal) -> UpiPaymentLink {
    UpiPaymentLink::new(UPI_PAYEE_ADDRESS, UPI_PAYEE_NAME, amount, "Vehicle Purchase")
}
