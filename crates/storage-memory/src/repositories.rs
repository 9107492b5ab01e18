use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use loanbridge_core::constants::{
    LOAN_APPLICATIONS_COLLECTION, USERS_COLLECTION, VEHICLES_COLLECTION,
};
use loanbridge_core::errors::{Error, Result};
use loanbridge_core::loans::{
    LoanApplication, LoanApplicationRepositoryTrait, LoanStatus, NewLoanApplication,
};
use loanbridge_core::users::{User, UserRepositoryTrait};
use loanbridge_core::vehicles::{NewVehicleListing, VehicleListing, VehicleListingRepositoryTrait};

use super::documents::MemoryDocumentStore;

fn to_document<T: serde::Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| Error::Persistence(e.to_string()))
}

fn from_document<T: serde::de::DeserializeOwned>(document: Value) -> Result<T> {
    serde_json::from_value(document).map_err(|e| Error::Persistence(e.to_string()))
}

/// User records, keyed by the identity provider's uid.
pub struct MemoryUserRepository {
    store: Arc<MemoryDocumentStore>,
}

impl MemoryUserRepository {
    pub fn new(store: Arc<MemoryDocumentStore>) -> Self {
        MemoryUserRepository { store }
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryUserRepository {
    async fn get(&self, uid: &str) -> Result<Option<User>> {
        self.store
            .get(USERS_COLLECTION, uid)
            .map(from_document)
            .transpose()
    }

    async fn create(&self, user: User) -> Result<User> {
        let document = to_document(&user)?;
        self.store.put(USERS_COLLECTION, &user.uid, document)?;
        Ok(user)
    }

    async fn update_profile_picture(&self, uid: &str, url: &str) -> Result<User> {
        let merged = self.store.update(
            USERS_COLLECTION,
            uid,
            json!({ "profilePictureUrl": url, "updatedAt": Utc::now() }),
        )?;
        from_document(merged)
    }

    async fn set_admin(&self, uid: &str, is_admin: bool) -> Result<User> {
        let merged = self.store.update(
            USERS_COLLECTION,
            uid,
            json!({ "isAdmin": is_admin, "updatedAt": Utc::now() }),
        )?;
        from_document(merged)
    }
}

/// Loan applications with store-generated ids.
pub struct MemoryLoanApplicationRepository {
    store: Arc<MemoryDocumentStore>,
}

impl MemoryLoanApplicationRepository {
    pub fn new(store: Arc<MemoryDocumentStore>) -> Self {
        MemoryLoanApplicationRepository { store }
    }
}

#[async_trait]
impl LoanApplicationRepositoryTrait for MemoryLoanApplicationRepository {
    async fn insert(&self, new_application: NewLoanApplication) -> Result<LoanApplication> {
        let document = to_document(&new_application)?;
        let id = self.store.create(LOAN_APPLICATIONS_COLLECTION, document)?;
        let stored = self
            .store
            .get(LOAN_APPLICATIONS_COLLECTION, &id)
            .ok_or_else(|| Error::Persistence(format!("lost document {id}")))?;
        from_document(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<LoanApplication>> {
        self.store
            .get(LOAN_APPLICATIONS_COLLECTION, id)
            .map(from_document)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<LoanApplication>> {
        self.store
            .query(LOAN_APPLICATIONS_COLLECTION, |_| true)
            .into_iter()
            .map(from_document)
            .collect()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<LoanApplication>> {
        self.store
            .query(LOAN_APPLICATIONS_COLLECTION, |document| {
                document["userId"] == json!(user_id)
            })
            .into_iter()
            .map(from_document)
            .collect()
    }

    async fn update_status(
        &self,
        id: &str,
        status: LoanStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<LoanApplication> {
        let merged = self.store.update(
            LOAN_APPLICATIONS_COLLECTION,
            id,
            json!({ "status": status, "updatedAt": updated_at }),
        )?;
        from_document(merged)
    }
}

/// Vehicle listings with store-generated ids.
pub struct MemoryVehicleListingRepository {
    store: Arc<MemoryDocumentStore>,
}

impl MemoryVehicleListingRepository {
    pub fn new(store: Arc<MemoryDocumentStore>) -> Self {
        MemoryVehicleListingRepository { store }
    }
}

#[async_trait]
impl VehicleListingRepositoryTrait for MemoryVehicleListingRepository {
    async fn insert(&self, new_listing: NewVehicleListing) -> Result<VehicleListing> {
        let document = to_document(&new_listing)?;
        let id = self.store.create(VEHICLES_COLLECTION, document)?;
        let stored = self
            .store
            .get(VEHICLES_COLLECTION, &id)
            .ok_or_else(|| Error::Persistence(format!("lost document {id}")))?;
        from_document(stored)
    }

    async fn list_all(&self) -> Result<Vec<VehicleListing>> {
        self.store
            .query(VEHICLES_COLLECTION, |_| true)
            .into_iter()
            .map(from_document)
            .collect()
    }
}
