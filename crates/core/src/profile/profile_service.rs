use std::sync::Arc;

use log::debug;

use super::profile_traits::BlobStoreTrait;
use crate::constants::PROFILE_PICTURES_PREFIX;
use crate::errors::{Error, Result};
use crate::loans::{LoanApplication, LoanApplicationRepositoryTrait};
use crate::session::SessionContext;
use crate::users::{User, UserRepositoryTrait};

/// Everything the profile screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOverview {
    pub user: User,
    pub applications: Vec<LoanApplication>,
}

/// Read-only profile composition plus profile-image replacement.
pub struct ProfileService<U, L, B>
where
    U: UserRepositoryTrait,
    L: LoanApplicationRepositoryTrait,
    B: BlobStoreTrait,
{
    users: Arc<U>,
    applications: Arc<L>,
    blobs: Arc<B>,
}

impl<U, L, B> ProfileService<U, L, B>
where
    U: UserRepositoryTrait,
    L: LoanApplicationRepositoryTrait,
    B: BlobStoreTrait,
{
    pub fn new(users: Arc<U>, applications: Arc<L>, blobs: Arc<B>) -> Self {
        ProfileService {
            users,
            applications,
            blobs,
        }
    }

    /// The current user's stored record and their submitted applications.
    pub async fn overview(&self, ctx: &SessionContext) -> Result<ProfileOverview> {
        let user = self
            .users
            .get(&ctx.uid)
            .await?
            .ok_or_else(|| Error::NotFound(format!("user {}", ctx.uid)))?;
        let applications = self.applications.list_for_user(&ctx.uid).await?;
        Ok(ProfileOverview { user, applications })
    }

    /// Stores a replacement profile image keyed by the user id, then records
    /// the resolved URL on the user document. Returns that URL.
    pub async fn update_profile_picture(
        &self,
        ctx: &SessionContext,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let path = format!("{PROFILE_PICTURES_PREFIX}/{}", ctx.uid);
        let reference = self.blobs.upload(&path, bytes).await?;
        let url = self.blobs.resolve_url(&reference).await?;
        self.users.update_profile_picture(&ctx.uid, &url).await?;
        debug!("profile picture updated for user {}", ctx.uid);
        Ok(url)
    }
}
