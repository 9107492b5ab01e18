use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::profile_service::ProfileService;
use super::profile_traits::BlobStoreTrait;
use crate::errors::{Error, Result};
use crate::loans::{LoanApplication, LoanApplicationRepositoryTrait, LoanStatus, NewLoanApplication};
use crate::session::SessionContext;
use crate::users::{User, UserRepositoryTrait};

#[derive(Default)]
struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepositoryTrait for MockUserRepository {
    async fn get(&self, uid: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.uid == uid)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_profile_picture(&self, uid: &str, url: &str) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.uid == uid)
            .ok_or(Error::NotFound(uid.to_string()))?;
        user.profile_picture_url = Some(url.to_string());
        Ok(user.clone())
    }

    async fn set_admin(&self, uid: &str, _is_admin: bool) -> Result<User> {
        self.get(uid).await?.ok_or(Error::NotFound(uid.to_string()))
    }
}

#[derive(Default)]
struct EmptyLoanRepository;

#[async_trait]
impl LoanApplicationRepositoryTrait for EmptyLoanRepository {
    async fn insert(&self, _new_application: NewLoanApplication) -> Result<LoanApplication> {
        unimplemented!("not used by profile tests")
    }

    async fn get(&self, _id: &str) -> Result<Option<LoanApplication>> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<LoanApplication>> {
        Ok(Vec::new())
    }

    async fn list_for_user(&self, _user_id: &str) -> Result<Vec<LoanApplication>> {
        Ok(Vec::new())
    }

    async fn update_status(
        &self,
        id: &str,
        _status: LoanStatus,
        _updated_at: DateTime<Utc>,
    ) -> Result<LoanApplication> {
        Err(Error::NotFound(id.to_string()))
    }
}

#[derive(Default)]
struct MockBlobStore {
    uploads: Mutex<Vec<(String, usize)>>,
}

#[async_trait]
impl BlobStoreTrait for MockBlobStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<String> {
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), bytes.len()));
        Ok(path.to_string())
    }

    async fn resolve_url(&self, reference: &str) -> Result<String> {
        Ok(format!("https://blobs.example.com/{reference}"))
    }
}

fn user(uid: &str) -> User {
    let now = Utc::now();
    User {
        uid: uid.to_string(),
        email: format!("{uid}@example.com"),
        username: "Ravi Kumar".to_string(),
        dob: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
        aadhar: "123456789012".to_string(),
        pan: "ABCDE1234F".to_string(),
        contact: "9876543210".to_string(),
        is_admin: false,
        profile_picture_url: None,
        created_at: now,
        updated_at: now,
    }
}

fn ctx(uid: &str) -> SessionContext {
    SessionContext {
        uid: uid.to_string(),
        email: format!("{uid}@example.com"),
    }
}

#[tokio::test]
async fn overview_requires_a_stored_user_record() {
    let users = Arc::new(MockUserRepository::default());
    let profile = ProfileService::new(
        users.clone(),
        Arc::new(EmptyLoanRepository),
        Arc::new(MockBlobStore::default()),
    );

    let err = profile.overview(&ctx("uid-ghost")).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    users.create(user("uid-1")).await.unwrap();
    let overview = profile.overview(&ctx("uid-1")).await.unwrap();
    assert_eq!(overview.user.uid, "uid-1");
    assert!(overview.applications.is_empty());
}

#[tokio::test]
async fn profile_picture_is_stored_under_the_user_id_and_recorded() {
    let users = Arc::new(MockUserRepository::default());
    users.create(user("uid-1")).await.unwrap();
    let blobs = Arc::new(MockBlobStore::default());
    let profile = ProfileService::new(users.clone(), Arc::new(EmptyLoanRepository), blobs.clone());

    let url = profile
        .update_profile_picture(&ctx("uid-1"), vec![0u8; 16])
        .await
        .unwrap();
    assert_eq!(url, "https://blobs.example.com/profile-pictures/uid-1");

    let uploads = blobs.uploads.lock().unwrap();
    assert_eq!(uploads.as_slice(), &[("profile-pictures/uid-1".to_string(), 16)]);
    drop(uploads);

    let stored = users.get("uid-1").await.unwrap().unwrap();
    assert_eq!(stored.profile_picture_url.as_deref(), Some(url.as_str()));
}
