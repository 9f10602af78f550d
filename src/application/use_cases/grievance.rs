use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::domain::error::{AppError, Result};
use crate::shared::ticket;

/// The transparency page's feedback form. Unlike the complaint path this
/// one never leaves the process: the receipt is fabricated locally and the
/// submission is dropped. The asymmetry is inherited from the portal.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GrievanceSubmission {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 20))]
    pub phone: String,
    pub district_id: Option<String>,
    pub village_id: Option<String>,
    #[validate(length(min = 1, max = 4096))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrievanceReceipt {
    pub ticket_id: String,
}

pub struct GrievanceUseCase;

impl GrievanceUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, submission: &GrievanceSubmission) -> Result<GrievanceReceipt> {
        submission
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let ticket_id = ticket::grievance_ticket_id();
        info!(ticket_id = %ticket_id, "Grievance acknowledged (ephemeral)");
        Ok(GrievanceReceipt { ticket_id })
    }
}

impl Default for GrievanceUseCase {
    fn default() -> Self {
        Self::new()
    }
}
