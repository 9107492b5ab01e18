//! In-memory implementations of the loanbridge gateway traits.
//!
//! A named-collection document store with generated ids, plus identity and
//! blob gateways backed by process memory. Behaves like the external
//! persistence service it stands in for: last-write-wins on concurrent
//! updates, no transactions, no retries. Used as the integration-test
//! backend and for local runs without a Firebase project.

pub mod blobs;
pub mod documents;
pub mod identity;
pub mod repositories;

use std::sync::Arc;

pub use blobs::MemoryBlobStore;
pub use documents::MemoryDocumentStore;
pub use identity::MemoryIdentityGateway;
pub use repositories::{
    MemoryLoanApplicationRepository, MemoryUserRepository, MemoryVehicleListingRepository,
};

/// Every gateway a workflow needs, wired over one shared document store.
pub struct MemoryBackend {
    pub identity: Arc<MemoryIdentityGateway>,
    pub users: Arc<MemoryUserRepository>,
    pub loans: Arc<MemoryLoanApplicationRepository>,
    pub vehicles: Arc<MemoryVehicleListingRepository>,
    pub blobs: Arc<MemoryBlobStore>,
    pub documents: Arc<MemoryDocumentStore>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        let documents = Arc::new(MemoryDocumentStore::new());
        MemoryBackend {
            identity: Arc::new(MemoryIdentityGateway::new()),
            users: Arc::new(MemoryUserRepository::new(documents.clone())),
            loans: Arc::new(MemoryLoanApplicationRepository::new(documents.clone())),
            vehicles: Arc::new(MemoryVehicleListingRepository::new(documents.clone())),
            blobs: Arc::new(MemoryBlobStore::new()),
            documents,
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}
