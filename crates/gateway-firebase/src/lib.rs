//! Firebase REST backend.
//!
//! Implements the identity, record-store, and blob gateways over the
//! Identity Toolkit, Firestore, and Cloud Storage REST APIs. All requests
//! are authenticated with the id token of the signed-in session; the
//! security rules on the project side enforce per-document access the same
//! way they do for the web client.

pub mod auth;
pub mod config;
pub mod firestore;
pub mod repositories;
pub mod storage;

use std::sync::Arc;

use crate::auth::FirebaseAuthGateway;
use crate::config::FirebaseConfig;
use crate::firestore::FirestoreClient;
use crate::repositories::{
    FirestoreLoanApplicationRepository, FirestoreUserRepository, FirestoreVehicleListingRepository,
};
use crate::storage::FirebaseBlobStore;

/// All gateways wired over one Firebase project.
pub struct FirebaseBackend {
    pub identity: Arc<FirebaseAuthGateway>,
    pub users: Arc<FirestoreUserRepository>,
    pub loans: Arc<FirestoreLoanApplicationRepository>,
    pub vehicles: Arc<FirestoreVehicleListingRepository>,
    pub blobs: Arc<FirebaseBlobStore>,
}

impl FirebaseBackend {
    pub fn new(config: FirebaseConfig) -> Self {
        let http = reqwest::Client::new();
        let identity = Arc::new(FirebaseAuthGateway::new(http.clone(), config.clone()));
        let firestore = Arc::new(FirestoreClient::new(
            http.clone(),
            config.clone(),
            identity.clone(),
        ));
        FirebaseBackend {
            users: Arc::new(FirestoreUserRepository::new(firestore.clone())),
            loans: Arc::new(FirestoreLoanApplicationRepository::new(firestore.clone())),
            vehicles: Arc::new(FirestoreVehicleListingRepository::new(firestore)),
            blobs: Arc::new(FirebaseBlobStore::new(http, config, identity.clone())),
            identity,
        }
    }

    /// Reads the project settings from the environment.
    pub fn from_env() -> loanbridge_core::Result<Self> {
        Ok(Self::new(FirebaseConfig::from_env()?))
    }
}
