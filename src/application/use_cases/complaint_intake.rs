use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};
use validator::Validate;

use crate::domain::complaint::{ComplaintRecord, ComplaintSubmission, COMPLAINT_TYPES};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::supabase::ComplaintSink;
use crate::shared::ticket;

/// Shown to the citizen when the write lands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintReceipt {
    pub ticket_id: String,
}

/// One failure message for every non-validation problem, matching the
/// portal's behavior of not distinguishing network from server errors.
pub const SUBMISSION_FAILED: &str = "Failed to submit complaint. Please try again.";

pub struct ComplaintIntakeUseCase {
    sink: Arc<dyn ComplaintSink>,
}

impl ComplaintIntakeUseCase {
    pub fn new(sink: Arc<dyn ComplaintSink>) -> Self {
        Self { sink }
    }

    pub async fn submit(&self, submission: &ComplaintSubmission) -> Result<ComplaintReceipt> {
        submission
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if !COMPLAINT_TYPES.contains(&submission.complaint_type.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Unknown complaint type {}",
                submission.complaint_type
            )));
        }

        let ticket_id = ticket::complaint_ticket_id();
        let record = ComplaintRecord::from_submission(ticket_id.clone(), submission);

        if let Err(err) = self.sink.insert(&record).await {
            error!(error = %err, "Complaint insert failed");
            return Err(AppError::SubmissionError(SUBMISSION_FAILED.to_string()));
        }

        info!(ticket_id = %ticket_id, "Complaint registered");
        Ok(ComplaintReceipt { ticket_id })
    }
}
