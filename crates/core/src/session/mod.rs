pub mod session_manager;
pub mod session_model;
pub mod session_traits;

pub use session_manager::SessionManager;
pub use session_model::{Identity, Session, SessionContext};
pub use session_traits::IdentityGateway;

#[cfg(test)]
mod session_manager_tests;
