use serde::{Deserialize, Serialize};
use validator::Validate;

/// Complaint categories offered by the public portal form.
pub const COMPLAINT_TYPES: [&str; 9] = [
    "Fund Misappropriation",
    "Project Delay",
    "Poor Quality Work",
    "Corruption",
    "Lack of Transparency",
    "Discrimination",
    "Incomplete Project",
    "Non-Receipt of Benefits",
    "Other",
];

/// What a citizen fills in. State and district arrive as plain display
/// strings, not dataset ids, matching the public form.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSubmission {
    #[validate(length(min = 1, max = 120))]
    pub citizen_name: String,
    #[validate(email)]
    pub citizen_email: String,
    #[validate(length(min = 6, max = 20))]
    pub citizen_phone: String,
    #[validate(length(min = 1, max = 80))]
    pub state: String,
    #[validate(length(min = 1, max = 80))]
    pub district: String,
    pub complaint_type: String,
    #[serde(default)]
    pub project_related: bool,
    #[serde(default)]
    pub project_name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 4096))]
    pub description: String,
}

/// The row written to the hosted `complaints` table. Written once, never
/// read back by this service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComplaintRecord {
    pub ticket_id: String,
    pub citizen_name: String,
    pub citizen_email: String,
    pub citizen_phone: String,
    pub state: String,
    pub district: String,
    pub complaint_type: String,
    pub project_related: bool,
    pub project_name: Option<String>,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub priority: String,
}

impl ComplaintRecord {
    pub fn from_submission(ticket_id: String, submission: &ComplaintSubmission) -> Self {
        Self {
            ticket_id,
            citizen_name: submission.citizen_name.clone(),
            citizen_email: submission.citizen_email.clone(),
            citizen_phone: submission.citizen_phone.clone(),
            state: submission.state.clone(),
            district: submission.district.clone(),
            complaint_type: submission.complaint_type.clone(),
            project_related: submission.project_related,
            project_name: submission
                .project_name
                .as_ref()
                .filter(|name| !name.is_empty())
                .cloned(),
            subject: submission.subject.clone(),
            description: submission.description.clone(),
            status: "pending".to_string(),
            priority: "medium".to_string(),
        }
    }
}
