pub mod review_service;

pub use review_service::{ReviewDecision, ReviewService};
