use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{AppError, Result};
use crate::domain::project::ProgramComponent;
use crate::domain::proposal::{ProposalFields, ProposalReceipt, WizardStep};
use crate::infrastructure::dataset::ReferenceData;
use crate::shared::ticket;

/// A partial update; only the provided fields are touched. Location edits
/// cascade: a new state clears district and village, a new district clears
/// village.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalUpdate {
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

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSessionView {
    pub session_id: String,
    pub step: u8,
    pub step_title: String,
    pub fields: ProposalFields,
}

struct WizardSession {
    step: WizardStep,
    fields: ProposalFields,
}

/// Server-side home of the four-step proposal wizard. Sessions live in
/// memory only and disappear on submit or restart; nothing about a
/// proposal is ever persisted.
pub struct ProposalWizardUseCase {
    data: Arc<ReferenceData>,
    sessions: Mutex<HashMap<Uuid, WizardSession>>,
}

impl ProposalWizardUseCase {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self {
            data,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn start(&self) -> WizardSessionView {
        let id = Uuid::new_v4();
        let session = WizardSession {
            step: WizardStep::Location,
            fields: ProposalFields::default(),
        };
        let view = Self::view(id, &session);
        self.sessions.lock().unwrap().insert(id, session);
        view
    }

    pub fn get(&self, id: Uuid) -> Result<WizardSessionView> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("No wizard session {}", id)))?;
        Ok(Self::view(id, session))
    }

    pub fn next(&self, id: Uuid) -> Result<WizardSessionView> {
        self.step(id, |step| step.next())
    }

    pub fn back(&self, id: Uuid) -> Result<WizardSessionView> {
        self.step(id, |step| step.previous())
    }

    fn step(&self, id: Uuid, advance: impl Fn(WizardStep) -> WizardStep) -> Result<WizardSessionView> {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("No wizard session {}", id)))?;
        session.step = advance(session.step);
        Ok(Self::view(id, session))
    }

    pub fn update(&self, id: Uuid, update: ProposalUpdate) -> Result<WizardSessionView> {
        self.check_references(&update)?;

        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("No wizard session {}", id)))?;
        let fields = &mut session.fields;

        if let Some(state_id) = update.state_id {
            if fields.state_id.as_deref() != Some(state_id.as_str()) {
                fields.district_id = None;
                fields.village_id = None;
            }
            fields.state_id = Some(state_id);
        }
        if let Some(district_id) = update.district_id {
            if fields.district_id.as_deref() != Some(district_id.as_str()) {
                fields.village_id = None;
            }
            fields.district_id = Some(district_id);
        }
        if let Some(village_id) = update.village_id {
            fields.village_id = Some(village_id);
        }
        if let Some(component) = update.component {
            fields.component = Some(component);
        }
        if let Some(agency_id) = update.agency_id {
            fields.agency_id = Some(agency_id);
        }
        if let Some(description) = update.description {
            fields.description = Some(description);
        }
        if let Some(funds) = update.funds_requested {
            fields.funds_requested = Some(funds);
        }
        if let Some(start) = update.start_date {
            fields.start_date = Some(start);
        }
        if let Some(end) = update.end_date {
            fields.end_date = Some(end);
        }
        if let Some(beneficiaries) = update.beneficiaries {
            fields.beneficiaries = Some(beneficiaries);
        }

        Ok(Self::view(id, session))
    }

    /// Submitting closes the session and hands back a display-only receipt.
    pub fn submit(&self, id: Uuid) -> Result<ProposalReceipt> {
        let session = self
            .sessions
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("No wizard session {}", id)))?;
        let fields = session.fields;

        Ok(ProposalReceipt {
            proposal_id: ticket::proposal_display_id(),
            state_name: fields
                .state_id
                .as_deref()
                .and_then(|id| self.data.state_by_id(id))
                .map(|s| s.name.clone()),
            district_name: fields
                .district_id
                .as_deref()
                .and_then(|id| self.data.district_by_id(id))
                .map(|d| d.name.clone()),
            village_name: fields
                .village_id
                .as_deref()
                .and_then(|id| self.data.village_by_id(id))
                .map(|v| v.name.clone()),
            agency_name: fields
                .agency_id
                .as_deref()
                .and_then(|id| self.data.agency_by_id(id))
                .map(|a| a.name.clone()),
            component: fields.component,
            funds_requested: fields.funds_requested,
            start_date: fields.start_date,
            end_date: fields.end_date,
            beneficiaries: fields.beneficiaries,
            description: fields.description,
        })
    }

    fn check_references(&self, update: &ProposalUpdate) -> Result<()> {
        if let Some(state_id) = update.state_id.as_deref() {
            if self.data.state_by_id(state_id).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown state {}",
                    state_id
                )));
            }
        }
        if let Some(district_id) = update.district_id.as_deref() {
            if self.data.district_by_id(district_id).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown district {}",
                    district_id
                )));
            }
        }
        if let Some(village_id) = update.village_id.as_deref() {
            if self.data.village_by_id(village_id).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown village {}",
                    village_id
                )));
            }
        }
        if let Some(agency_id) = update.agency_id.as_deref() {
            if self.data.agency_by_id(agency_id).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown agency {}",
                    agency_id
                )));
            }
        }
        if let Some(component) = update.component.as_deref() {
            if ProgramComponent::parse(component).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown component {}",
                    component
                )));
            }
        }
        Ok(())
    }

    fn view(id: Uuid, session: &WizardSession) -> WizardSessionView {
        WizardSessionView {
            session_id: id.to_string(),
            step: session.step.number(),
            step_title: session.step.title().to_string(),
            fields: session.fields.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> ProposalWizardUseCase {
        ProposalWizardUseCase::new(Arc::new(ReferenceData::seeded()))
    }

    fn session_id(view: &WizardSessionView) -> Uuid {
        view.session_id.parse().unwrap()
    }

    #[test]
    fn wizard_starts_on_step_one() {
        let uc = use_case();
        let view = uc.start();
        assert_eq!(view.step, 1);
        assert_eq!(view.step_title, "Location");
        assert_eq!(view.fields, ProposalFields::default());
    }

    #[test]
    fn steps_saturate_at_both_ends() {
        let uc = use_case();
        let id = session_id(&uc.start());

        assert_eq!(uc.back(id).unwrap().step, 1, "cannot regress before 1");

        for expected in [2, 3, 4] {
            assert_eq!(uc.next(id).unwrap().step, expected);
        }
        assert_eq!(uc.next(id).unwrap().step, 4, "cannot advance past 4");
    }

    #[test]
    fn state_change_resets_district_and_village() {
        let uc = use_case();
        let id = session_id(&uc.start());

        uc.update(
            id,
            ProposalUpdate {
                state_id: Some("11".to_string()),
                district_id: Some("d6".to_string()),
                village_id: Some("v1".to_string()),
                ..ProposalUpdate::default()
            },
        )
        .unwrap();

        let view = uc
            .update(
                id,
                ProposalUpdate {
                    state_id: Some("12".to_string()),
                    ..ProposalUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(view.fields.state_id.as_deref(), Some("12"));
        assert_eq!(view.fields.district_id, None);
        assert_eq!(view.fields.village_id, None);
    }

    #[test]
    fn district_change_resets_village_only() {
        let uc = use_case();
        let id = session_id(&uc.start());

        uc.update(
            id,
            ProposalUpdate {
                state_id: Some("11".to_string()),
                district_id: Some("d6".to_string()),
                village_id: Some("v1".to_string()),
                ..ProposalUpdate::default()
            },
        )
        .unwrap();

        let view = uc
            .update(
                id,
                ProposalUpdate {
                    district_id: Some("d7".to_string()),
                    ..ProposalUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(view.fields.state_id.as_deref(), Some("11"));
        assert_eq!(view.fields.district_id.as_deref(), Some("d7"));
        assert_eq!(view.fields.village_id, None);
    }

    #[test]
    fn resubmitting_same_state_keeps_selection() {
        let uc = use_case();
        let id = session_id(&uc.start());

        uc.update(
            id,
            ProposalUpdate {
                state_id: Some("11".to_string()),
                district_id: Some("d6".to_string()),
                ..ProposalUpdate::default()
            },
        )
        .unwrap();
        let view = uc
            .update(
                id,
                ProposalUpdate {
                    state_id: Some("11".to_string()),
                    ..ProposalUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(view.fields.district_id.as_deref(), Some("d6"));
    }

    #[test]
    fn unknown_references_are_rejected() {
        let uc = use_case();
        let id = session_id(&uc.start());

        assert!(uc
            .update(
                id,
                ProposalUpdate {
                    state_id: Some("999".to_string()),
                    ..ProposalUpdate::default()
                },
            )
            .is_err());
        assert!(uc
            .update(
                id,
                ProposalUpdate {
                    component: Some("Unknown Scheme".to_string()),
                    ..ProposalUpdate::default()
                },
            )
            .is_err());
    }

    #[test]
    fn submit_closes_the_session_and_joins_names() {
        let uc = use_case();
        let id = session_id(&uc.start());

        uc.update(
            id,
            ProposalUpdate {
                state_id: Some("11".to_string()),
                district_id: Some("d6".to_string()),
                village_id: Some("v1".to_string()),
                agency_id: Some("a1".to_string()),
                component: Some("Adarsh Gram Yojana".to_string()),
                funds_requested: Some(2_000_000),
                beneficiaries: Some(400),
                ..ProposalUpdate::default()
            },
        )
        .unwrap();

        let receipt = uc.submit(id).unwrap();
        assert!(receipt.proposal_id.starts_with("PMAJAY-2024-"));
        assert_eq!(receipt.state_name.as_deref(), Some("Karnataka"));
        assert_eq!(receipt.village_name.as_deref(), Some("Yelahanka"));
        assert_eq!(receipt.agency_name.as_deref(), Some("National SC/ST Hub"));
        assert_eq!(receipt.funds_requested, Some(2_000_000));

        assert!(uc.get(id).is_err(), "session must be gone after submit");
        assert!(uc.submit(id).is_err());
    }
}
