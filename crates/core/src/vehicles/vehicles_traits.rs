use async_trait::async_trait;

use super::vehicles_model::{NewVehicleListing, VehicleListing};
use crate::errors::Result;

/// Trait for vehicle-listing record-store operations.
#[async_trait]
pub trait VehicleListingRepositoryTrait: Send + Sync {
    /// Stores a new listing; the store generates the id.
    async fn insert(&self, new_listing: NewVehicleListing) -> Result<VehicleListing>;
    /// Everything the store holds, sold listings included; availability is
    /// filtered by the workflow.
    async fn list_all(&self) -> Result<Vec<VehicleListing>>;
}
