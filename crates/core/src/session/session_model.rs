use serde::{Deserialize, Serialize};

/// Identity issued by the external provider at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

/// An authenticated session, valid until sign-out or provider-side expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub uid: String,
    pub email: String,
    /// Opaque bearer token, when the provider issues one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Explicit session context passed into every workflow call.
///
/// Workflows never consult global auth state; the caller resolves a context
/// from the [`super::SessionManager`] and hands it down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub uid: String,
    pub email: String,
}

impl From<&Session> for SessionContext {
    fn from(session: &Session) -> Self {
        SessionContext {
            uid: session.uid.clone(),
            email: session.email.clone(),
        }
    }
}
