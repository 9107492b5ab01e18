pub mod profile_service;
pub mod profile_traits;

pub use profile_service::{ProfileOverview, ProfileService};
pub use profile_traits::BlobStoreTrait;

#[cfg(test)]
mod profile_service_tests;
