use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::project::{ProgramComponent, Project, ProjectStatus};
use crate::infrastructure::dataset::ReferenceData;

/// Zero or more predicates, all of which must hold. The search term is a
/// case-insensitive substring match across the joined state/district/
/// village/agency names and the component label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    pub state_id: Option<String>,
    pub district_id: Option<String>,
    pub village_id: Option<String>,
    pub component: Option<ProgramComponent>,
    pub status: Option<ProjectStatus>,
    pub search: Option<String>,
}

/// A project row with display names joined in. Missing lookups leave the
/// name empty rather than failing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub state_name: Option<String>,
    pub district_name: Option<String>,
    pub village_name: Option<String>,
    pub agency_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub projects: Vec<ProjectView>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Sums and counts over a filtered set, re-derived from scratch on every
/// request. The dataset is small enough that nothing is cached.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAggregates {
    pub total_projects: usize,
    pub total_allocated: i64,
    pub total_utilized: i64,
    pub total_beneficiaries: i64,
    pub pending_projects: usize,
    pub ongoing_projects: usize,
    pub completed_projects: usize,
    pub delayed_projects: usize,
    pub utilization_rate: f64,
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 100 × utilized/allocated, pinned to 0 when nothing is allocated so the
/// ratio is never NaN.
pub fn utilization_rate(allocated: i64, utilized: i64) -> f64 {
    if allocated > 0 {
        utilized as f64 / allocated as f64 * 100.0
    } else {
        0.0
    }
}

pub struct ProjectQueryUseCase {
    data: Arc<ReferenceData>,
}

impl ProjectQueryUseCase {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn filter<'a>(&'a self, filter: &ProjectFilter) -> Vec<&'a Project> {
        self.data
            .projects()
            .iter()
            .filter(|project| self.matches(project, filter))
            .collect()
    }

    fn matches(&self, project: &Project, filter: &ProjectFilter) -> bool {
        if let Some(state_id) = &filter.state_id {
            if &project.state_id != state_id {
                return false;
            }
        }
        if let Some(district_id) = &filter.district_id {
            if &project.district_id != district_id {
                return false;
            }
        }
        if let Some(village_id) = &filter.village_id {
            if &project.village_id != village_id {
                return false;
            }
        }
        if let Some(component) = filter.component {
            if project.component != component {
                return false;
            }
        }
        if let Some(status) = filter.status {
            if project.status != status {
                return false;
            }
        }
        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            let needle = term.to_lowercase();
            let mut haystacks: Vec<String> =
                vec![project.component.label().to_lowercase()];
            if let Some(state) = self.data.state_by_id(&project.state_id) {
                haystacks.push(state.name.to_lowercase());
            }
            if let Some(district) = self.data.district_by_id(&project.district_id) {
                haystacks.push(district.name.to_lowercase());
            }
            if let Some(village) = self.data.village_by_id(&project.village_id) {
                haystacks.push(village.name.to_lowercase());
            }
            if let Some(agency) = self.data.agency_by_id(&project.agency_id) {
                haystacks.push(agency.name.to_lowercase());
            }
            if !haystacks.iter().any(|h| h.contains(&needle)) {
                return false;
            }
        }
        true
    }

    pub fn view(&self, project: &Project) -> ProjectView {
        ProjectView {
            project: project.clone(),
            state_name: self.data.state_by_id(&project.state_id).map(|s| s.name.clone()),
            district_name: self
                .data
                .district_by_id(&project.district_id)
                .map(|d| d.name.clone()),
            village_name: self
                .data
                .village_by_id(&project.village_id)
                .map(|v| v.name.clone()),
            agency_name: self
                .data
                .agency_by_id(&project.agency_id)
                .map(|a| a.name.clone()),
        }
    }

    /// One page of filtered projects, ordered by seed (id) order. Pages are
    /// 1-based; out-of-range requests clamp into the valid range.
    pub fn page(&self, filter: &ProjectFilter, page: usize, per_page: usize) -> ProjectPage {
        let per_page = per_page.max(1);
        let matched = self.filter(filter);
        let total = matched.len();
        let total_pages = total.div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));
        let start = (page - 1) * per_page;
        let projects = matched
            .iter()
            .skip(start)
            .take(per_page)
            .map(|p| self.view(p))
            .collect();
        ProjectPage {
            projects,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    pub fn aggregate(&self, filter: &ProjectFilter) -> ProjectAggregates {
        let matched = self.filter(filter);
        Self::aggregate_over(&matched)
    }

    pub fn aggregate_over(projects: &[&Project]) -> ProjectAggregates {
        let total_allocated: i64 = projects.iter().map(|p| p.funds_allocated).sum();
        let total_utilized: i64 = projects.iter().map(|p| p.funds_utilized).sum();
        let count_with = |status: ProjectStatus| {
            projects.iter().filter(|p| p.status == status).count()
        };
        ProjectAggregates {
            total_projects: projects.len(),
            total_allocated,
            total_utilized,
            total_beneficiaries: projects.iter().map(|p| p.beneficiaries).sum(),
            pending_projects: count_with(ProjectStatus::Pending),
            ongoing_projects: count_with(ProjectStatus::Ongoing),
            completed_projects: count_with(ProjectStatus::Completed),
            delayed_projects: count_with(ProjectStatus::Delayed),
            utilization_rate: utilization_rate(total_allocated, total_utilized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn use_case() -> ProjectQueryUseCase {
        ProjectQueryUseCase::new(Arc::new(ReferenceData::seeded()))
    }

    #[test]
    fn empty_filter_returns_everything() {
        let uc = use_case();
        assert_eq!(uc.filter(&ProjectFilter::default()).len(), 10);
    }

    #[test]
    fn filters_are_conjunctive_subsets() {
        let uc = use_case();
        let all_ids: HashSet<String> = uc
            .filter(&ProjectFilter::default())
            .iter()
            .map(|p| p.id.clone())
            .collect();

        let filter = ProjectFilter {
            component: Some(ProgramComponent::ScStHostels),
            status: Some(ProjectStatus::Ongoing),
            ..ProjectFilter::default()
        };
        let matched = uc.filter(&filter);
        assert_eq!(matched.len(), 1);
        for project in &matched {
            assert!(all_ids.contains(&project.id));
            assert_eq!(project.component, ProgramComponent::ScStHostels);
            assert_eq!(project.status, ProjectStatus::Ongoing);
        }
    }

    #[test]
    fn karnataka_yields_exactly_p1() {
        let uc = use_case();
        let filter = ProjectFilter {
            state_id: Some("11".to_string()),
            ..ProjectFilter::default()
        };
        let matched = uc.filter(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "p1");

        let aggregates = uc.aggregate(&filter);
        assert_eq!(aggregates.total_allocated, 5_000_000);
        assert_eq!(aggregates.total_utilized, 4_800_000);
        assert!((aggregates.utilization_rate - 96.0).abs() < f64::EPSILON);
    }

    #[test]
    fn search_spans_joined_names_and_component() {
        let uc = use_case();

        // Village name.
        let by_village = uc.filter(&ProjectFilter {
            search: Some("yelahanka".to_string()),
            ..ProjectFilter::default()
        });
        assert_eq!(by_village.len(), 1);
        assert_eq!(by_village[0].id, "p1");

        // Component label, case-insensitive.
        let by_component = uc.filter(&ProjectFilter {
            search: Some("SKILL".to_string()),
            ..ProjectFilter::default()
        });
        let ids: Vec<&str> = by_component.iter().map(|p| p.id.as_str()).collect();
        assert!(ids.contains(&"p3"));
        assert!(ids.contains(&"p8"));

        // Agency name.
        let by_agency = uc.filter(&ProjectFilter {
            search: Some("housing board".to_string()),
            ..ProjectFilter::default()
        });
        assert_eq!(by_agency.len(), 1);
        assert_eq!(by_agency[0].id, "p9");
    }

    #[test]
    fn search_with_no_hits_is_empty_not_error() {
        let uc = use_case();
        let matched = uc.filter(&ProjectFilter {
            search: Some("zanzibar".to_string()),
            ..ProjectFilter::default()
        });
        assert!(matched.is_empty());
    }

    #[test]
    fn utilization_guard_against_zero_allocation() {
        assert_eq!(utilization_rate(0, 0), 0.0);
        assert_eq!(utilization_rate(0, 500), 0.0);
        assert!((utilization_rate(200, 100) - 50.0).abs() < f64::EPSILON);
        assert!(utilization_rate(0, 0).is_finite());
    }

    #[test]
    fn filtered_sums_match_manual_restriction() {
        let uc = use_case();
        let filter = ProjectFilter {
            status: Some(ProjectStatus::Ongoing),
            ..ProjectFilter::default()
        };
        let aggregates = uc.aggregate(&filter);

        let data = ReferenceData::seeded();
        let expected_allocated: i64 = data
            .projects()
            .iter()
            .filter(|p| p.status == ProjectStatus::Ongoing)
            .map(|p| p.funds_allocated)
            .sum();
        assert_eq!(aggregates.total_allocated, expected_allocated);
        assert_eq!(aggregates.ongoing_projects, aggregates.total_projects);
    }

    #[test]
    fn ten_projects_fit_one_default_page() {
        let uc = use_case();
        let page = uc.page(&ProjectFilter::default(), 1, DEFAULT_PAGE_SIZE);
        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.projects.len(), 10);
    }

    #[test]
    fn adjacent_pages_neither_overlap_nor_skip() {
        let uc = use_case();
        let mut seen: Vec<String> = Vec::new();
        for page_number in 1..=4 {
            let page = uc.page(&ProjectFilter::default(), page_number, 3);
            assert_eq!(page.total_pages, 4);
            for view in &page.projects {
                assert!(
                    !seen.contains(&view.project.id),
                    "duplicate row {} across pages",
                    view.project.id
                );
                seen.push(view.project.id.clone());
            }
        }
        assert_eq!(seen.len(), 10, "pagination dropped rows");
    }

    #[test]
    fn out_of_range_page_clamps() {
        let uc = use_case();
        let page = uc.page(&ProjectFilter::default(), 99, 3);
        assert_eq!(page.page, 4);
        assert_eq!(page.projects.len(), 1);

        let empty = uc.page(
            &ProjectFilter {
                search: Some("nothing matches".to_string()),
                ..ProjectFilter::default()
            },
            5,
            10,
        );
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.page, 1);
        assert!(empty.projects.is_empty());
    }

    #[test]
    fn views_join_display_names() {
        let uc = use_case();
        let page = uc.page(
            &ProjectFilter {
                state_id: Some("11".to_string()),
                ..ProjectFilter::default()
            },
            1,
            10,
        );
        let view = &page.projects[0];
        assert_eq!(view.state_name.as_deref(), Some("Karnataka"));
        assert_eq!(view.district_name.as_deref(), Some("Bangalore Urban"));
        assert_eq!(view.village_name.as_deref(), Some("Yelahanka"));
        assert_eq!(view.agency_name.as_deref(), Some("National SC/ST Hub"));
    }
}
