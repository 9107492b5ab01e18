use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleType {
    Car,
    Bike,
    Bus,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
            VehicleType::Bus => "bus",
        };
        write!(f, "{label}")
    }
}

/// Marketplace lifecycle: listings start `available`; the buy flow never
/// shows `sold` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingStatus {
    Available,
    Sold,
}

/// A stored vehicle-for-sale listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListing {
    pub id: String,
    pub user_id: String,
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub mobile_number: String,
    pub name: String,
    pub email: String,
    pub pincode: String,
    pub image_url: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape: everything but the store-generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicleListing {
    pub user_id: String,
    pub vehicle_type: VehicleType,
    pub registration_number: String,
    pub mobile_number: String,
    pub name: String,
    pub email: String,
    pub pincode: String,
    pub image_url: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sell form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleListingDraft {
    pub vehicle_type: Option<VehicleType>,
    pub registration_number: String,
    pub mobile_number: String,
    pub name: String,
    pub email: String,
    pub pincode: String,
    pub image_url: String,
}
