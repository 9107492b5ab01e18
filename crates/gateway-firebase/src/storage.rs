use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use loanbridge_core::errors::{Error, Result};
use loanbridge_core::profile::BlobStoreTrait;

use crate::auth::FirebaseAuthGateway;
use crate::config::FirebaseConfig;

const STORAGE_BASE: &str = "https://firebasestorage.googleapis.com/v0/b";

/// Blob storage over the Cloud Storage for Firebase REST API. References
/// are object paths within the project bucket.
pub struct FirebaseBlobStore {
    http: reqwest::Client,
    config: FirebaseConfig,
    auth: Arc<FirebaseAuthGateway>,
}

impl FirebaseBlobStore {
    pub fn new(
        http: reqwest::Client,
        config: FirebaseConfig,
        auth: Arc<FirebaseAuthGateway>,
    ) -> Self {
        FirebaseBlobStore { http, config, auth }
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{STORAGE_BASE}/{}/o/{}",
            self.config.storage_bucket,
            urlencoding::encode(path)
        )
    }
}

#[async_trait]
impl BlobStoreTrait for FirebaseBlobStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<String> {
        let url = format!(
            "{STORAGE_BASE}/{}/o?uploadType=media&name={}",
            self.config.storage_bucket,
            urlencoding::encode(path)
        );
        let mut request = self
            .http
            .post(&url)
            .header("Content-Type", "application/octet-stream")
            .body(bytes);
        if let Some(token) = self.auth.id_token() {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| Error::Persistence(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Persistence(format!("storage {status}: {body}")));
        }
        debug!("uploaded {path}");
        Ok(path.to_string())
    }

    /// Media download link for an uploaded object. The link works for any
    /// reader the bucket's security rules allow.
    async fn resolve_url(&self, reference: &str) -> Result<String> {
        Ok(format!("{}?alt=media", self.object_url(reference)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FirebaseBlobStore {
        FirebaseBlobStore::new(
            reqwest::Client::new(),
            FirebaseConfig {
                api_key: "key".to_string(),
                project_id: "demo-project".to_string(),
                storage_bucket: "demo-project.appspot.com".to_string(),
            },
            Arc::new(FirebaseAuthGateway::new(
                reqwest::Client::new(),
                FirebaseConfig {
                    api_key: "key".to_string(),
                    project_id: "demo-project".to_string(),
                    storage_bucket: "demo-project.appspot.com".to_string(),
                },
            )),
        )
    }

    #[tokio::test]
    async fn download_links_escape_the_object_path() {
        let url = store()
            .resolve_url("profile-pictures/user-1")
            .await
            .unwrap();
        assert_eq!(
            url,
            "https://firebasestorage.googleapis.com/v0/b/demo-project.appspot.com/o/profile-pictures%2Fuser-1?alt=media"
        );
    }
}
