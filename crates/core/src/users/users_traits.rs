use async_trait::async_trait;

use super::users_model::User;
use crate::errors::Result;

/// Trait for user record-store operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Fetches a user document by uid; absent documents are not an error.
    async fn get(&self, uid: &str) -> Result<Option<User>>;
    async fn create(&self, user: User) -> Result<User>;
    async fn update_profile_picture(&self, uid: &str, url: &str) -> Result<User>;
    /// Operator action; registration never grants the flag.
    async fn set_admin(&self, uid: &str, is_admin: bool) -> Result<User>;
}
