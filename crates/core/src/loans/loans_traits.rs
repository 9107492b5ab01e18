use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::loans_model::{LoanApplication, LoanApplicationDraft, LoanStatus, NewLoanApplication};
use crate::errors::Result;
use crate::session::SessionContext;

/// Trait for loan-application record-store operations.
#[async_trait]
pub trait LoanApplicationRepositoryTrait: Send + Sync {
    /// Stores a new application; the store generates the id.
    async fn insert(&self, new_application: NewLoanApplication) -> Result<LoanApplication>;
    async fn get(&self, id: &str) -> Result<Option<LoanApplication>>;
    /// The full collection, unfiltered by owner. Review dashboard only.
    async fn list_all(&self) -> Result<Vec<LoanApplication>>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<LoanApplication>>;
    async fn update_status(
        &self,
        id: &str,
        status: LoanStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<LoanApplication>;
}

/// Trait for loan-application workflow operations.
#[async_trait]
pub trait LoanApplicationServiceTrait: Send + Sync {
    async fn submit_application(
        &self,
        ctx: &SessionContext,
        draft: &LoanApplicationDraft,
    ) -> Result<LoanApplication>;
    async fn list_for_user(&self, ctx: &SessionContext) -> Result<Vec<LoanApplication>>;
}
