use std::future::Future;

use contracts::domain::a005_daily_record::aggregate::DailyRecordPayload;
use contracts::domain::a005_daily_record::form::{
    prepare_submission, BranchResolution, DailyForm, SubmitError,
};

/// Result of one press of the form's Submit button.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent.
    Rejected(SubmitError),
    /// The POST failed; the form keeps its input.
    PostFailed(String),
    /// Record created and the list reloaded.
    Created,
}

impl SubmitOutcome {
    /// Message for the page's error banner.
    pub fn error_message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Rejected(e) => Some(e.to_string()),
            SubmitOutcome::PostFailed(_) => Some("Failed to submit data".to_string()),
            SubmitOutcome::Created => None,
        }
    }
}

/// Validate the draft, post it, then reload.
///
/// `post` runs at most once and only for a valid draft; `reload` runs once
/// after a successful post and never otherwise. The form is only read.
pub async fn submit_daily_record<P, PFut, R, RFut>(
    form: &DailyForm,
    required_fields: &[String],
    resolution: &BranchResolution,
    post: P,
    reload: R,
) -> SubmitOutcome
where
    P: FnOnce(DailyRecordPayload) -> PFut,
    PFut: Future<Output = Result<(), String>>,
    R: FnOnce() -> RFut,
    RFut: Future<Output = ()>,
{
    let payload = match prepare_submission(form, required_fields, resolution) {
        Ok(payload) => payload,
        Err(e) => return SubmitOutcome::Rejected(e),
    };

    if let Err(e) = post(payload).await {
        return SubmitOutcome::PostFailed(e);
    }

    reload().await;
    SubmitOutcome::Created
}
