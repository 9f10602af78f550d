use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::application::use_cases::project_query::utilization_rate;
use crate::domain::project::{ProgramComponent, Project, ProjectStatus};
use crate::infrastructure::dataset::ReferenceData;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactHeadline {
    pub villages_covered: usize,
    pub total_beneficiaries: i64,
    pub utilization_rate: f64,
    pub completed_projects: usize,
}

/// Program-wide outcome row; always computed over the full seed, the
/// component filter only narrows the headline block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOutcome {
    pub component: ProgramComponent,
    pub projects: usize,
    pub completed: usize,
    pub beneficiaries: i64,
    pub invested_crore: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateReach {
    pub name: String,
    pub projects: usize,
    pub completion_rate: f64,
    pub beneficiaries: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub headline: ImpactHeadline,
    pub component_outcomes: Vec<ComponentOutcome>,
    pub state_reach: Vec<StateReach>,
}

const CRORE: f64 = 10_000_000.0;

pub struct ImpactUseCase {
    data: Arc<ReferenceData>,
}

impl ImpactUseCase {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn build(&self, component: Option<ProgramComponent>) -> ImpactReport {
        let filtered: Vec<&Project> = self
            .data
            .projects()
            .iter()
            .filter(|p| component.map_or(true, |c| p.component == c))
            .collect();

        ImpactReport {
            headline: Self::headline(&filtered),
            component_outcomes: self.component_outcomes(),
            state_reach: self.state_reach(&filtered),
        }
    }

    fn headline(filtered: &[&Project]) -> ImpactHeadline {
        let villages: HashSet<&str> = filtered.iter().map(|p| p.village_id.as_str()).collect();
        let allocated: i64 = filtered.iter().map(|p| p.funds_allocated).sum();
        let utilized: i64 = filtered.iter().map(|p| p.funds_utilized).sum();
        ImpactHeadline {
            villages_covered: villages.len(),
            total_beneficiaries: filtered.iter().map(|p| p.beneficiaries).sum(),
            utilization_rate: utilization_rate(allocated, utilized),
            completed_projects: filtered
                .iter()
                .filter(|p| p.status == ProjectStatus::Completed)
                .count(),
        }
    }

    fn component_outcomes(&self) -> Vec<ComponentOutcome> {
        ProgramComponent::ALL
            .iter()
            .map(|&component| {
                let rows: Vec<&Project> = self
                    .data
                    .projects()
                    .iter()
                    .filter(|p| p.component == component)
                    .collect();
                let invested: i64 = rows.iter().map(|p| p.funds_utilized).sum();
                ComponentOutcome {
                    component,
                    projects: rows.len(),
                    completed: rows
                        .iter()
                        .filter(|p| p.status == ProjectStatus::Completed)
                        .count(),
                    beneficiaries: rows.iter().map(|p| p.beneficiaries).sum(),
                    invested_crore: invested as f64 / CRORE,
                }
            })
            .collect()
    }

    /// Top six states by completion rate among those with projects in the
    /// filtered set.
    fn state_reach(&self, filtered: &[&Project]) -> Vec<StateReach> {
        let mut rows: Vec<StateReach> = self
            .data
            .states()
            .iter()
            .filter_map(|state| {
                let in_state: Vec<&&Project> = filtered
                    .iter()
                    .filter(|p| p.state_id == state.id)
                    .collect();
                if in_state.is_empty() {
                    return None;
                }
                let completed = in_state
                    .iter()
                    .filter(|p| p.status == ProjectStatus::Completed)
                    .count();
                Some(StateReach {
                    name: state.name.clone(),
                    projects: in_state.len(),
                    completion_rate: completed as f64 / in_state.len() as f64 * 100.0,
                    beneficiaries: in_state.iter().map(|p| p.beneficiaries).sum(),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.completion_rate
                .partial_cmp(&a.completion_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(6);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> ImpactUseCase {
        ImpactUseCase::new(Arc::new(ReferenceData::seeded()))
    }

    #[test]
    fn unfiltered_headline_counts_distinct_villages() {
        let report = use_case().build(None);
        // p7 and p10 share village v25, so ten projects cover nine villages.
        assert_eq!(report.headline.villages_covered, 9);
        assert_eq!(report.headline.total_beneficiaries, 10_480);
        assert_eq!(report.headline.completed_projects, 4);
    }

    #[test]
    fn component_filter_narrows_the_headline() {
        let report = use_case().build(Some(ProgramComponent::SkillDevelopment));
        assert_eq!(report.headline.villages_covered, 2);
        assert_eq!(report.headline.total_beneficiaries, 750);
        assert_eq!(report.headline.completed_projects, 1);
    }

    #[test]
    fn component_outcomes_stay_program_wide() {
        let filtered = use_case().build(Some(ProgramComponent::SkillDevelopment));
        assert_eq!(filtered.component_outcomes.len(), 5);
        let infra = filtered
            .component_outcomes
            .iter()
            .find(|o| o.component == ProgramComponent::InfrastructureDevelopment)
            .unwrap();
        assert_eq!(infra.projects, 2);
        assert_eq!(infra.beneficiaries, 5700);
        assert!((infra.invested_crore - 1.83).abs() < 1e-9);
    }

    #[test]
    fn state_reach_ranks_by_completion_rate() {
        let report = use_case().build(None);
        assert_eq!(report.state_reach.len(), 6);
        for pair in report.state_reach.windows(2) {
            assert!(pair[0].completion_rate >= pair[1].completion_rate);
        }
        // Four states have their single project completed.
        assert!((report.state_reach[0].completion_rate - 100.0).abs() < f64::EPSILON);
    }
}
