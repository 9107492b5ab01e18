use async_trait::async_trait;

use crate::errors::Result;

/// Trait wrapping external binary storage for profile images.
#[async_trait]
pub trait BlobStoreTrait: Send + Sync {
    /// Uploads the bytes and returns an opaque reference to the stored blob.
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<String>;
    /// Resolves a stored reference to a publicly fetchable URL.
    async fn resolve_url(&self, reference: &str) -> Result<String>;
}
