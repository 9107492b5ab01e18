use async_trait::async_trait;

use super::session_model::{Identity, Session};
use crate::errors::Result;

/// Trait wrapping the external identity provider.
///
/// Invalid credentials surface as [`crate::Error::Unauthenticated`]; every
/// other provider failure is an opaque [`crate::Error::Persistence`].
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    async fn register(&self, email: &str, password: &str) -> Result<Identity>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;
    async fn sign_out(&self) -> Result<()>;
    async fn current_session(&self) -> Result<Option<Session>>;
}
