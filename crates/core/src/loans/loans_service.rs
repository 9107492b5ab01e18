use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use super::loans_model::{
    coerce_non_negative, EmploymentType, LoanApplication, LoanApplicationDraft, LoanStatus,
    LoanType, NewLoanApplication,
};
use super::loans_traits::{LoanApplicationRepositoryTrait, LoanApplicationServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::session::SessionContext;
use crate::validation::validators;

/// Loan application intake workflow.
pub struct LoanApplicationService<R: LoanApplicationRepositoryTrait> {
    repository: Arc<R>,
}

impl<R: LoanApplicationRepositoryTrait> LoanApplicationService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        LoanApplicationService { repository }
    }

    /// Authoritative submission gate. Returns the selected enums so the
    /// caller never has to unwrap the draft's options afterwards.
    fn validate(draft: &LoanApplicationDraft) -> Result<(EmploymentType, LoanType), ValidationError> {
        validators::require("name", &draft.name)?;
        validators::check(
            "name",
            validators::is_valid_name(draft.name.trim()),
            "should only contain alphabets",
        )?;
        validators::require("contactNumber", &draft.contact_number)?;
        validators::check(
            "contactNumber",
            validators::is_valid_phone(draft.contact_number.trim()),
            "must be a 10-digit number",
        )?;
        validators::require("panCard", &draft.pan_card)?;
        validators::check(
            "panCard",
            validators::is_valid_pan(draft.pan_card.trim()),
            "must be 10 alphanumeric characters",
        )?;
        validators::require("aadhar", &draft.aadhar)?;
        validators::check(
            "aadhar",
            validators::is_valid_aadhaar(draft.aadhar.trim()),
            "must be a 12-digit number",
        )?;
        let employment_type = draft
            .employment_type
            .ok_or_else(|| ValidationError::MissingField("employmentType".to_string()))?;
        let loan_type = draft
            .loan_type
            .ok_or_else(|| ValidationError::MissingField("loanType".to_string()))?;
        validators::require("loanAmount", &draft.loan_amount)?;
        Ok((employment_type, loan_type))
    }
}

#[async_trait]
impl<R: LoanApplicationRepositoryTrait> LoanApplicationServiceTrait for LoanApplicationService<R> {
    /// Submits a loan application on behalf of the session's user.
    ///
    /// The stored record starts `pending` with both timestamps set to
    /// submission time. The income field not matching the employment type is
    /// forced to null; amounts coerce to non-negative numbers.
    async fn submit_application(
        &self,
        ctx: &SessionContext,
        draft: &LoanApplicationDraft,
    ) -> Result<LoanApplication> {
        let (employment_type, loan_type) = Self::validate(draft)?;

        let (monthly_income, monthly_turnover) = match employment_type {
            EmploymentType::Salaried => {
                (Some(coerce_non_negative(&draft.monthly_income)), None)
            }
            EmploymentType::SelfEmployed => {
                (None, Some(coerce_non_negative(&draft.monthly_turnover)))
            }
        };

        let now = Utc::now();
        let new_application = NewLoanApplication {
            user_id: ctx.uid.clone(),
            user_email: ctx.email.clone(),
            name: draft.name.trim().to_string(),
            contact_number: draft.contact_number.trim().to_string(),
            pan_card: draft.pan_card.trim().to_uppercase(),
            aadhar: draft.aadhar.trim().to_string(),
            employment_type,
            monthly_income,
            monthly_turnover,
            loan_type,
            loan_amount: coerce_non_negative(&draft.loan_amount),
            document_url: draft.document_url.trim().to_string(),
            status: LoanStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        debug!("submitting loan application for user {}", ctx.uid);
        self.repository.insert(new_application).await
    }

    async fn list_for_user(&self, ctx: &SessionContext) -> Result<Vec<LoanApplication>> {
        self.repository.list_for_user(&ctx.uid).await
    }
}
