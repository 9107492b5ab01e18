use std::sync::Arc;

use chrono::Utc;
use log::debug;

use super::vehicles_model::{
    ListingStatus, NewVehicleListing, VehicleListing, VehicleListingDraft, VehicleType,
};
use super::vehicles_traits::VehicleListingRepositoryTrait;
use crate::errors::{Result, ValidationError};
use crate::session::SessionContext;
use crate::validation::validators;

/// Buy/sell marketplace workflow.
pub struct VehicleMarketplaceService<R: VehicleListingRepositoryTrait> {
    repository: Arc<R>,
}

impl<R: VehicleListingRepositoryTrait> VehicleMarketplaceService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        VehicleMarketplaceService { repository }
    }

    /// Listings open to buyers. The store is read unfiltered and sold
    /// listings are dropped here; no pagination.
    pub async fn list_available(&self) -> Result<Vec<VehicleListing>> {
        let listings = self.repository.list_all().await?;
        Ok(listings
            .into_iter()
            .filter(|listing| listing.status == ListingStatus::Available)
            .collect())
    }

    /// Puts a vehicle up for sale on behalf of the session's user.
    pub async fn create_listing(
        &self,
        ctx: &SessionContext,
        draft: &VehicleListingDraft,
    ) -> Result<VehicleListing> {
        let vehicle_type = Self::validate(draft)?;

        let now = Utc::now();
        let new_listing = NewVehicleListing {
            user_id: ctx.uid.clone(),
            vehicle_type,
            registration_number: draft.registration_number.trim().to_uppercase(),
            mobile_number: draft.mobile_number.trim().to_string(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            pincode: draft.pincode.trim().to_string(),
            image_url: draft.image_url.trim().to_string(),
            status: ListingStatus::Available,
            created_at: now,
            updated_at: now,
        };

        debug!("creating vehicle listing for user {}", ctx.uid);
        self.repository.insert(new_listing).await
    }

    fn validate(draft: &VehicleListingDraft) -> Result<VehicleType, ValidationError> {
        let vehicle_type = draft
            .vehicle_type
            .ok_or_else(|| ValidationError::MissingField("vehicleType".to_string()))?;
        validators::require("registrationNumber", &draft.registration_number)?;
        validators::require("name", &draft.name)?;
        validators::check(
            "name",
            validators::is_valid_name(draft.name.trim()),
            "should only contain alphabets",
        )?;
        validators::require("mobileNumber", &draft.mobile_number)?;
        validators::check(
            "mobileNumber",
            validators::is_valid_phone(draft.mobile_number.trim()),
            "must be a 10-digit number",
        )?;
        validators::require("email", &draft.email)?;
        validators::check(
            "email",
            validators::is_valid_email(draft.email.trim()),
            "must be a valid email address",
        )?;
        validators::require("pincode", &draft.pincode)?;
        Ok(vehicle_type)
    }
}

/// Pre-filled `mailto:` link for reaching a listing's seller.
///
/// Pure side-effect construction; opening the link is delegated to the host
/// environment and nothing is persisted.
pub fn contact_seller(listing: &VehicleListing) -> String {
    let subject = format!(
        "Interested in {} - {}",
        listing.vehicle_type.to_string().to_uppercase(),
        listing.registration_number
    );
    let body = format!(
        "Hi {},\r\n\r\nI am interested in your vehicle ({}). Please contact me to discuss further.",
        listing.name, listing.registration_number
    );
    format!(
        "mailto:{}?subject={}&body={}",
        listing.email,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
