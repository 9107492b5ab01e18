use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment category. Selects which of income/turnover is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmploymentType {
    Salaried,
    SelfEmployed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanType {
    Home,
    Vehicle,
    Personal,
    Education,
}

/// Review lifecycle of an application. `Pending` is the only non-terminal
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
}

impl LoanStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LoanStatus::Pending)
    }

    /// The only legal transitions are pending -> approved and
    /// pending -> rejected.
    pub fn can_transition_to(self, next: LoanStatus) -> bool {
        self == LoanStatus::Pending && next.is_terminal()
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoanStatus::Pending => "pending",
            LoanStatus::Approved => "approved",
            LoanStatus::Rejected => "rejected",
        };
        write!(f, "{label}")
    }
}

/// A stored loan application.
///
/// Exactly one of `monthly_income`/`monthly_turnover` is set, matching the
/// employment type; the submission workflow enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub name: String,
    pub contact_number: String,
    pub pan_card: String,
    pub aadhar: String,
    pub employment_type: EmploymentType,
    pub monthly_income: Option<Decimal>,
    pub monthly_turnover: Option<Decimal>,
    pub loan_type: LoanType,
    pub loan_amount: Decimal,
    pub document_url: String,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape: everything but the store-generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoanApplication {
    pub user_id: String,
    pub user_email: String,
    pub name: String,
    pub contact_number: String,
    pub pan_card: String,
    pub aadhar: String,
    pub employment_type: EmploymentType,
    pub monthly_income: Option<Decimal>,
    pub monthly_turnover: Option<Decimal>,
    pub loan_type: LoanType,
    pub loan_amount: Decimal,
    pub document_url: String,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw form input, all fields as typed by the applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanApplicationDraft {
    pub name: String,
    pub contact_number: String,
    pub pan_card: String,
    pub aadhar: String,
    pub employment_type: Option<EmploymentType>,
    pub monthly_income: String,
    pub monthly_turnover: String,
    pub loan_type: Option<LoanType>,
    pub loan_amount: String,
    pub document_url: String,
}

/// Coerces a typed-in amount to a non-negative number; anything that does
/// not parse, is absent, or is negative becomes zero.
pub fn coerce_non_negative(raw: &str) -> Decimal {
    match Decimal::from_str(raw.trim()) {
        Ok(value) if value >= Decimal::ZERO => value,
        _ => Decimal::ZERO,
    }
}
