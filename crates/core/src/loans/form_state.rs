use super::loans_model::{LoanApplication, LoanApplicationDraft};
use crate::errors::Error;

/// Render state for the loan application form.
///
/// Replaces ad-hoc form flags with one tagged variant: the screen renders
/// deterministically from whichever state it holds. A successful submission
/// clears the form; a failed one retains the draft for resubmission.
#[derive(Debug, Clone, PartialEq)]
pub enum LoanFormState {
    Draft(LoanApplicationDraft),
    Submitting(LoanApplicationDraft),
    Submitted(LoanApplication),
    Failed {
        draft: LoanApplicationDraft,
        message: String,
    },
}

impl LoanFormState {
    pub fn new() -> Self {
        LoanFormState::Draft(LoanApplicationDraft::default())
    }

    /// Moves an editable form into `Submitting`. Submitted and in-flight
    /// forms are left unchanged.
    pub fn begin_submit(self) -> Self {
        match self {
            LoanFormState::Draft(draft) | LoanFormState::Failed { draft, .. } => {
                LoanFormState::Submitting(draft)
            }
            other => other,
        }
    }

    /// Applies the workflow outcome to an in-flight submission.
    pub fn complete(self, outcome: Result<LoanApplication, Error>) -> Self {
        match (self, outcome) {
            (LoanFormState::Submitting(_), Ok(record)) => LoanFormState::Submitted(record),
            (LoanFormState::Submitting(draft), Err(error)) => LoanFormState::Failed {
                draft,
                message: error.to_string(),
            },
            (state, _) => state,
        }
    }

    /// The editable draft, when one exists.
    pub fn draft(&self) -> Option<&LoanApplicationDraft> {
        match self {
            LoanFormState::Draft(draft)
            | LoanFormState::Submitting(draft)
            | LoanFormState::Failed { draft, .. } => Some(draft),
            LoanFormState::Submitted(_) => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, LoanFormState::Submitting(_))
    }
}

impl Default for LoanFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn draft_with_name(name: &str) -> LoanApplicationDraft {
        LoanApplicationDraft {
            name: name.to_string(),
            ..LoanApplicationDraft::default()
        }
    }

    #[test]
    fn failed_submission_retains_the_draft() {
        let state = LoanFormState::Draft(draft_with_name("Ravi")).begin_submit();
        assert!(state.is_submitting());

        let state = state.complete(Err(Error::Persistence("quota exceeded".to_string())));
        match &state {
            LoanFormState::Failed { draft, message } => {
                assert_eq!(draft.name, "Ravi");
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("unexpected state: {other:?}"),
        }

        // The retained draft can be resubmitted.
        assert!(state.begin_submit().is_submitting());
    }

    #[test]
    fn completing_a_non_inflight_form_is_a_no_op() {
        let state = LoanFormState::new();
        let unchanged = state
            .clone()
            .complete(Err(Error::Persistence("late response".to_string())));
        assert_eq!(state, unchanged);
    }
}
