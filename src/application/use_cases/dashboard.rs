use std::sync::Arc;

use serde::Serialize;

use crate::application::use_cases::project_query::{
    utilization_rate, ProjectAggregates, ProjectFilter, ProjectQueryUseCase,
};
use crate::domain::project::{ProgramComponent, Project};
use crate::infrastructure::dataset::ReferenceData;
use crate::shared::format;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCount {
    pub component: ProgramComponent,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePerformance {
    pub name: String,
    pub allocated_crore: f64,
    pub utilized_crore: f64,
    pub utilization_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub stats: ProjectAggregates,
    pub component_distribution: Vec<ComponentCount>,
    pub top_states: Vec<StatePerformance>,
    pub summary: String,
}

const CRORE: f64 = 10_000_000.0;

pub struct DashboardUseCase {
    data: Arc<ReferenceData>,
    query: ProjectQueryUseCase,
}

impl DashboardUseCase {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        let query = ProjectQueryUseCase::new(Arc::clone(&data));
        Self { data, query }
    }

    pub fn build(&self, filter: &ProjectFilter) -> DashboardReport {
        let matched = self.query.filter(filter);
        let stats = ProjectQueryUseCase::aggregate_over(&matched);

        let component_distribution = ProgramComponent::ALL
            .iter()
            .map(|&component| ComponentCount {
                component,
                label: component.short_label().to_string(),
                count: matched.iter().filter(|p| p.component == component).count(),
            })
            .collect();

        let top_states = self.top_states(&matched);
        let summary = Self::summary(&stats, &top_states);

        DashboardReport {
            stats,
            component_distribution,
            top_states,
            summary,
        }
    }

    /// Top five states by utilization rate among those with any allocation
    /// in the filtered set.
    fn top_states(&self, matched: &[&Project]) -> Vec<StatePerformance> {
        let mut rows: Vec<StatePerformance> = self
            .data
            .states()
            .iter()
            .filter_map(|state| {
                let allocated: i64 = matched
                    .iter()
                    .filter(|p| p.state_id == state.id)
                    .map(|p| p.funds_allocated)
                    .sum();
                if allocated == 0 {
                    return None;
                }
                let utilized: i64 = matched
                    .iter()
                    .filter(|p| p.state_id == state.id)
                    .map(|p| p.funds_utilized)
                    .sum();
                Some(StatePerformance {
                    name: state.name.clone(),
                    allocated_crore: allocated as f64 / CRORE,
                    utilized_crore: utilized as f64 / CRORE,
                    utilization_rate: utilization_rate(allocated, utilized),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.utilization_rate
                .partial_cmp(&a.utilization_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(5);
        rows
    }

    fn summary(stats: &ProjectAggregates, top_states: &[StatePerformance]) -> String {
        let mut summary = format!(
            "Analysis shows strong project implementation with {}% fund utilization rate across {} projects.",
            format::percent(stats.utilization_rate),
            stats.total_projects
        );
        if let Some(leader) = top_states.first() {
            summary.push_str(&format!(
                " {} leads with {:.0}% utilization, demonstrating effective project execution with ₹{:.1}Cr deployed.",
                leader.name, leader.utilization_rate, leader.utilized_crore
            ));
        }
        summary.push_str(&format!(
            " The program has reached {} beneficiaries, with {} projects successfully completed. Continued monitoring recommended for {} ongoing initiatives.",
            format::grouped(stats.total_beneficiaries),
            stats.completed_projects,
            stats.ongoing_projects
        ));
        summary
    }
}
