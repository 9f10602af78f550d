use serde::{Deserialize, Serialize};

/// The four wizard steps, in order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    Location,
    ProjectDetails,
    BudgetTimeline,
    Review,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Location => 1,
            WizardStep::ProjectDetails => 2,
            WizardStep::BudgetTimeline => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Location => "Location",
            WizardStep::ProjectDetails => "Project Details",
            WizardStep::BudgetTimeline => "Budget & Timeline",
            WizardStep::Review => "Review & Submit",
        }
    }

    pub fn next(&self) -> WizardStep {
        match self {
            WizardStep::Location => WizardStep::ProjectDetails,
            WizardStep::ProjectDetails => WizardStep::BudgetTimeline,
            WizardStep::BudgetTimeline | WizardStep::Review => WizardStep::Review,
        }
    }

    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::Location | WizardStep::ProjectDetails => WizardStep::Location,
            WizardStep::BudgetTimeline => WizardStep::ProjectDetails,
            WizardStep::Review => WizardStep::BudgetTimeline,
        }
    }
}

/// Everything the wizard collects across its steps. All fields start empty
/// and the review step simply displays whatever was entered.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProposalFields {
    pub state_id: Option<String>,
    pub district_id: Option<String>,
    pub village_id: Option<String>,
    pub component: Option<String>,
    pub agency_id: Option<String>,
    pub description: Option<String>,
    pub funds_requested: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub beneficiaries: Option<i64>,
}

/// What the citizen sees after submitting: a display-only id plus the
/// entered fields with names joined in.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProposalReceipt {
    pub proposal_id: String,
    pub state_name: Option<String>,
    pub district_name: Option<String>,
    pub village_name: Option<String>,
    pub agency_name: Option<String>,
    pub component: Option<String>,
    pub funds_requested: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub beneficiaries: Option<i64>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_order_is_linear() {
        assert_eq!(WizardStep::Location.next(), WizardStep::ProjectDetails);
        assert_eq!(WizardStep::ProjectDetails.next(), WizardStep::BudgetTimeline);
        assert_eq!(WizardStep::BudgetTimeline.next(), WizardStep::Review);
    }

    #[test]
    fn steps_saturate_at_bounds() {
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::Location.previous(), WizardStep::Location);
    }

    #[test]
    fn step_numbers_span_one_to_four() {
        let numbers: Vec<u8> = [
            WizardStep::Location,
            WizardStep::ProjectDetails,
            WizardStep::BudgetTimeline,
            WizardStep::Review,
        ]
        .iter()
        .map(|s| s.number())
        .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
