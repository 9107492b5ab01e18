pub mod form_state;
pub mod loans_errors;
pub mod loans_model;
pub mod loans_service;
pub mod loans_traits;

pub use form_state::LoanFormState;
pub use loans_errors::LoanError;
pub use loans_model::{
    coerce_non_negative, EmploymentType, LoanApplication, LoanApplicationDraft, LoanStatus,
    LoanType, NewLoanApplication,
};
pub use loans_service::LoanApplicationService;
pub use loans_traits::{LoanApplicationRepositoryTrait, LoanApplicationServiceTrait};
