use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};

use crate::errors::{Error, Result};
use crate::loans::{LoanApplication, LoanApplicationRepositoryTrait, LoanError, LoanStatus};
use crate::session::SessionContext;
use crate::users::UserRepositoryTrait;

/// Outcome an admin can hand down for a pending application.
///
/// Terminal-to-terminal moves are unrepresentable: a decision always targets
/// `pending`, and [`ReviewService::set_status`] re-reads the stored record
/// to confirm that before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn status(self) -> LoanStatus {
        match self {
            ReviewDecision::Approve => LoanStatus::Approved,
            ReviewDecision::Reject => LoanStatus::Rejected,
        }
    }
}

/// Admin review workflow over the full application collection.
pub struct ReviewService<L, U>
where
    L: LoanApplicationRepositoryTrait,
    U: UserRepositoryTrait,
{
    applications: Arc<L>,
    users: Arc<U>,
}

impl<L, U> ReviewService<L, U>
where
    L: LoanApplicationRepositoryTrait,
    U: UserRepositoryTrait,
{
    pub fn new(applications: Arc<L>, users: Arc<U>) -> Self {
        ReviewService {
            applications,
            users,
        }
    }

    /// Admin gate: the session's user record must exist and carry the admin
    /// flag. This runs before any application data is touched.
    async fn require_admin(&self, ctx: &SessionContext) -> Result<()> {
        match self.users.get(&ctx.uid).await? {
            Some(user) if user.is_admin => Ok(()),
            _ => {
                warn!("review dashboard refused for user {}", ctx.uid);
                Err(Error::AccessDenied)
            }
        }
    }

    /// Loads every loan application for review, unfiltered by owner.
    pub async fn enter_dashboard(&self, ctx: &SessionContext) -> Result<Vec<LoanApplication>> {
        self.require_admin(ctx).await?;
        self.applications.list_all().await
    }

    /// Applies a review decision to a pending application.
    ///
    /// The stored record is re-read and the transition checked against it,
    /// so a stale screen cannot move an already-decided application. Returns
    /// the store-confirmed record; callers replace their local copy with it
    /// rather than mutating optimistically.
    pub async fn set_status(
        &self,
        ctx: &SessionContext,
        application_id: &str,
        decision: ReviewDecision,
    ) -> Result<LoanApplication> {
        self.require_admin(ctx).await?;

        let current = self
            .applications
            .get(application_id)
            .await?
            .ok_or_else(|| Error::NotFound(application_id.to_string()))?;
        if !current.status.can_transition_to(decision.status()) {
            return Err(LoanError::AlreadyDecided(current.status).into());
        }

        let updated = self
            .applications
            .update_status(application_id, decision.status(), Utc::now())
            .await?;
        debug!("application {} {}", application_id, updated.status);
        Ok(updated)
    }
}
