use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use super::vehicles_model::{
    ListingStatus, NewVehicleListing, VehicleListing, VehicleListingDraft, VehicleType,
};
use super::vehicles_service::{contact_seller, VehicleMarketplaceService};
use super::vehicles_traits::VehicleListingRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::session::SessionContext;

#[derive(Default)]
struct MockVehicleRepository {
    listings: Mutex<Vec<VehicleListing>>,
}

impl MockVehicleRepository {
    fn seed(&self, status: ListingStatus, registration_number: &str) {
        let now = Utc::now();
        self.listings.lock().unwrap().push(VehicleListing {
            id: format!("vehicle-{registration_number}"),
            user_id: "uid-seller".to_string(),
            vehicle_type: VehicleType::Car,
            registration_number: registration_number.to_string(),
            mobile_number: "9876543210".to_string(),
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            pincode: "600001".to_string(),
            image_url: String::new(),
            status,
            created_at: now,
            updated_at: now,
        });
    }
}

#[async_trait]
impl VehicleListingRepositoryTrait for MockVehicleRepository {
    async fn insert(&self, new_listing: NewVehicleListing) -> Result<VehicleListing> {
        let mut listings = self.listings.lock().unwrap();
        let stored = VehicleListing {
            id: format!("vehicle-{}", listings.len() + 1),
            user_id: new_listing.user_id,
            vehicle_type: new_listing.vehicle_type,
            registration_number: new_listing.registration_number,
            mobile_number: new_listing.mobile_number,
            name: new_listing.name,
            email: new_listing.email,
            pincode: new_listing.pincode,
            image_url: new_listing.image_url,
            status: new_listing.status,
            created_at: new_listing.created_at,
            updated_at: new_listing.updated_at,
        };
        listings.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<VehicleListing>> {
        Ok(self.listings.lock().unwrap().clone())
    }
}

fn ctx() -> SessionContext {
    SessionContext {
        uid: "uid-1".to_string(),
        email: "ravi@example.com".to_string(),
    }
}

fn valid_draft() -> VehicleListingDraft {
    VehicleListingDraft {
        vehicle_type: Some(VehicleType::Bike),
        registration_number: "tn01ab1234".to_string(),
        mobile_number: "9876543210".to_string(),
        name: "Ravi Kumar".to_string(),
        email: "ravi@example.com".to_string(),
        pincode: "600001".to_string(),
        image_url: "https://example.com/bike.jpg".to_string(),
    }
}

#[tokio::test]
async fn list_available_never_yields_sold_listings() {
    let repository = Arc::new(MockVehicleRepository::default());
    repository.seed(ListingStatus::Available, "TN01AB1111");
    repository.seed(ListingStatus::Sold, "TN01AB2222");
    repository.seed(ListingStatus::Available, "TN01AB3333");

    let marketplace = VehicleMarketplaceService::new(repository);
    let available = marketplace.list_available().await.unwrap();
    assert_eq!(available.len(), 2);
    assert!(available
        .iter()
        .all(|listing| listing.status == ListingStatus::Available));
}

#[tokio::test]
async fn new_listings_start_available_with_normalized_registration() {
    let repository = Arc::new(MockVehicleRepository::default());
    let marketplace = VehicleMarketplaceService::new(repository);

    let stored = marketplace
        .create_listing(&ctx(), &valid_draft())
        .await
        .unwrap();
    assert_eq!(stored.status, ListingStatus::Available);
    assert_eq!(stored.registration_number, "TN01AB1234");
    assert_eq!(stored.user_id, "uid-1");
    assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn listing_validation_names_the_failing_field() {
    let repository = Arc::new(MockVehicleRepository::default());
    let marketplace = VehicleMarketplaceService::new(repository.clone());

    let mut draft = valid_draft();
    draft.vehicle_type = None;
    let err = marketplace.create_listing(&ctx(), &draft).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(ref field)) if field == "vehicleType"
    ));

    let mut draft = valid_draft();
    draft.mobile_number = "12345".to_string();
    let err = marketplace.create_listing(&ctx(), &draft).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidField { ref field, .. }) if field == "mobileNumber"
    ));

    assert!(repository.listings.lock().unwrap().is_empty());
}

#[test]
fn contact_seller_builds_a_prefilled_mailto_link() {
    let now = Utc::now();
    let listing = VehicleListing {
        id: "vehicle-1".to_string(),
        user_id: "uid-seller".to_string(),
        vehicle_type: VehicleType::Car,
        registration_number: "TN01AB1234".to_string(),
        mobile_number: "9876543210".to_string(),
        name: "Priya".to_string(),
        email: "priya@example.com".to_string(),
        pincode: "600001".to_string(),
        image_url: String::new(),
        status: ListingStatus::Available,
        created_at: now,
        updated_at: now,
    };

    let link = contact_seller(&listing);
    assert!(link.starts_with("mailto:priya@example.com?subject="));
    assert!(link.contains("Interested%20in%20CAR%20-%20TN01AB1234"));
    assert!(link.contains("Hi%20Priya"));
    assert!(!link.contains(' '));
}
