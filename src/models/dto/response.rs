use serde::Serialize;

use crate::models::domain::SubmissionOutcome;

/// Wire form of a submission outcome: `{ "resultId": "..", "errors": [] }`
/// on success, `{ "errors": ["answer 1"] }` on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
    pub errors: Vec<String>,
}

impl From<SubmissionOutcome> for SubmissionResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        let errors = outcome.error_messages();
        match outcome {
            SubmissionOutcome::Accepted { result_id } => SubmissionResponse {
                result_id: Some(result_id),
                errors,
            },
            SubmissionOutcome::Rejected { .. } => SubmissionResponse {
                result_id: None,
                errors,
            },
        }
    }
}
