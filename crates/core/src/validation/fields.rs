//! Keystroke gating for form fields.

/// Kinds of form fields that gate input while the user is typing.
///
/// A keystroke producing a value that [`FieldKind::accepts_partial`] rejects
/// is dropped by the form; free-typing fields (email, password, URLs) accept
/// everything and rely on the authoritative check at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Aadhaar,
    Pan,
    Phone,
    Password,
    Amount,
    FreeText,
}

impl FieldKind {
    /// Whether `candidate` is an acceptable partial value, i.e. whether it
    /// could still be extended into a valid one. The empty string is always
    /// acceptable (the user may clear the field).
    pub fn accepts_partial(self, candidate: &str) -> bool {
        match self {
            FieldKind::Name => candidate
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c.is_whitespace()),
            FieldKind::Aadhaar => {
                candidate.len() <= 12 && candidate.chars().all(|c| c.is_ascii_digit())
            }
            FieldKind::Phone => {
                candidate.len() <= 10 && candidate.chars().all(|c| c.is_ascii_digit())
            }
            FieldKind::Pan => {
                candidate.len() <= 10 && candidate.chars().all(|c| c.is_ascii_alphanumeric())
            }
            FieldKind::Amount => {
                candidate.chars().all(|c| c.is_ascii_digit() || c == '.')
                    && candidate.matches('.').count() <= 1
            }
            FieldKind::Email | FieldKind::Password | FieldKind::FreeText => true,
        }
    }
}
