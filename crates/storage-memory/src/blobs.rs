use async_trait::async_trait;
use dashmap::DashMap;

use loanbridge_core::errors::{Error, Result};
use loanbridge_core::profile::BlobStoreTrait;

/// Blob storage backed by process memory. References are the storage paths
/// themselves.
pub struct MemoryBlobStore {
    objects: DashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        MemoryBlobStore {
            objects: DashMap::new(),
        }
    }

    pub fn object(&self, path: &str) -> Option<Vec<u8>> {
        self.objects.get(path).map(|entry| entry.value().clone())
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStoreTrait for MemoryBlobStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<String> {
        self.objects.insert(path.to_string(), bytes);
        Ok(path.to_string())
    }

    async fn resolve_url(&self, reference: &str) -> Result<String> {
        if self.objects.contains_key(reference) {
            Ok(format!("memory://{reference}"))
        } else {
            Err(Error::NotFound(reference.to_string()))
        }
    }
}
