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

use crate::firestore::FirestoreClient;

fn to_document<T: serde::Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| Error::Persistence(e.to_string()))
}

fn from_document<T: serde::de::DeserializeOwned>(document: Value) -> Result<T> {
    serde_json::from_value(document).map_err(|e| Error::Persistence(e.to_string()))
}

/// User records in the `users` collection, with the document id equal to the
/// identity provider's uid.
pub struct FirestoreUserRepository {
    firestore: Arc<FirestoreClient>,
}

impl FirestoreUserRepository {
    pub fn new(firestore: Arc<FirestoreClient>) -> Self {
        FirestoreUserRepository { firestore }
    }
}

#[async_trait]
impl UserRepositoryTrait for FirestoreUserRepository {
    async fn get(&self, uid: &str) -> Result<Option<User>> {
        self.firestore
            .get(USERS_COLLECTION, uid)
            .await?
            .map(from_document)
            .transpose()
    }

    async fn create(&self, user: User) -> Result<User> {
        let document = to_document(&user)?;
        let stored = self
            .firestore
            .put(USERS_COLLECTION, &user.uid, document)
            .await?;
        from_document(stored)
    }

    async fn update_profile_picture(&self, uid: &str, url: &str) -> Result<User> {
        let merged = self
            .firestore
            .update(
                USERS_COLLECTION,
                uid,
                json!({ "profilePictureUrl": url, "updatedAt": Utc::now() }),
            )
            .await?;
        from_document(merged)
    }

    async fn set_admin(&self, uid: &str, is_admin: bool) -> Result<User> {
        let merged = self
            .firestore
            .update(
                USERS_COLLECTION,
                uid,
                json!({ "isAdmin": is_admin, "updatedAt": Utc::now() }),
            )
            .await?;
        from_document(merged)
    }
}

/// Loan applications in the `loanApplications` collection.
pub struct FirestoreLoanApplicationRepository {
    firestore: Arc<FirestoreClient>,
}

impl FirestoreLoanApplicationRepository {
    pub fn new(firestore: Arc<FirestoreClient>) -> Self {
        FirestoreLoanApplicationRepository { firestore }
    }
}

#[async_trait]
impl LoanApplicationRepositoryTrait for FirestoreLoanApplicationRepository {
    async fn insert(&self, new_application: NewLoanApplication) -> Result<LoanApplication> {
        let document = to_document(&new_application)?;
        let stored = self
            .firestore
            .create(LOAN_APPLICATIONS_COLLECTION, document)
            .await?;
        from_document(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<LoanApplication>> {
        self.firestore
            .get(LOAN_APPLICATIONS_COLLECTION, id)
            .await?
            .map(from_document)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<LoanApplication>> {
        self.firestore
            .list(LOAN_APPLICATIONS_COLLECTION)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<LoanApplication>> {
        self.firestore
            .query_eq(LOAN_APPLICATIONS_COLLECTION, "userId", user_id)
            .await?
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
        let merged = self
            .firestore
            .update(
                LOAN_APPLICATIONS_COLLECTION,
                id,
                json!({ "status": status, "updatedAt": updated_at }),
            )
            .await?;
        from_document(merged)
    }
}

/// Vehicle listings in the `vehicles` collection.
pub struct FirestoreVehicleListingRepository {
    firestore: Arc<FirestoreClient>,
}

impl FirestoreVehicleListingRepository {
    pub fn new(firestore: Arc<FirestoreClient>) -> Self {
        FirestoreVehicleListingRepository { firestore }
    }
}

#[async_trait]
impl VehicleListingRepositoryTrait for FirestoreVehicleListingRepository {
    async fn insert(&self, new_listing: NewVehicleListing) -> Result<VehicleListing> {
        let document = to_document(&new_listing)?;
        let stored = self.firestore.create(VEHICLES_COLLECTION, document).await?;
        from_document(stored)
    }

    async fn list_all(&self) -> Result<Vec<VehicleListing>> {
        self.firestore
            .list(VEHICLES_COLLECTION)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }
}
