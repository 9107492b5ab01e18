pub mod vehicles_model;
pub mod vehicles_service;
pub mod vehicles_traits;

pub use vehicles_model::{
    ListingStatus, NewVehicleListing, VehicleListing, VehicleListingDraft, VehicleType,
};
pub use vehicles_service::{contact_seller, VehicleMarketplaceService};
pub use vehicles_traits::VehicleListingRepositoryTrait;

#[cfg(test)]
mod vehicles_service_tests;
