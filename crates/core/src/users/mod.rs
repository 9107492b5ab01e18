pub mod users_model;
pub mod users_service;
pub mod users_traits;

pub use users_model::{NewUserProfile, User};
pub use users_service::RegistrationService;
pub use users_traits::UserRepositoryTrait;

#[cfg(test)]
mod users_service_tests;
