//! Shared constants: collection names, storage paths, and payment defaults.

/// Collection holding one document per registered user, keyed by the
/// identity provider's uid.
pub const USERS_COLLECTION: &str = "users";

/// Collection holding submitted loan applications.
pub const LOAN_APPLICATIONS_COLLECTION: &str = "loanApplications";

/// Collection holding vehicle-for-sale listings.
pub const VEHICLES_COLLECTION: &str = "vehicles";

/// Blob-store prefix for profile images, keyed by user id.
pub const PROFILE_PICTURES_PREFIX: &str = "profile-pictures";

/// Collection account (VPA) that receives loan repayments and auction
/// purchases.
pub const UPI_PAYEE_ADDRESS: &str = "9025645962@ibl";

/// Display name shown by the payer's UPI app.
pub const UPI_PAYEE_NAME: &str = "Kandhavel Finance";

/// All outbound payment links are denominated in rupees.
pub const UPI_CURRENCY: &str = "INR";
