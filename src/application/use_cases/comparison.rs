use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::use_cases::project_query::utilization_rate;
use crate::domain::error::{AppError, Result};
use crate::domain::project::{Project, ProjectStatus};
use crate::infrastructure::dataset::ReferenceData;

/// The comparison view works at either granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionType {
    State,
    District,
}

/// At most this many regions can sit side by side, matching the page.
pub const MAX_REGIONS: usize = 3;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionComparison {
    pub id: String,
    pub name: String,
    pub total_projects: usize,
    pub allocated_crore: f64,
    pub utilized_crore: f64,
    pub utilization_rate: f64,
    pub completed: usize,
    pub ongoing: usize,
    pub beneficiaries: i64,
}

/// Axis maxima for radar-style scaling, floored at 1 so a client never
/// divides by zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMaxima {
    pub allocated_crore: f64,
    pub utilized_crore: f64,
    pub projects: f64,
    pub beneficiaries: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub region_type: RegionType,
    pub regions: Vec<RegionComparison>,
    pub maxima: ComparisonMaxima,
}

const CRORE: f64 = 10_000_000.0;

pub struct ComparisonUseCase {
    data: Arc<ReferenceData>,
}

impl ComparisonUseCase {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn compare(&self, region_type: RegionType, region_ids: &[String]) -> Result<ComparisonReport> {
        if region_ids.len() > MAX_REGIONS {
            return Err(AppError::ValidationError(format!(
                "At most {} regions can be compared",
                MAX_REGIONS
            )));
        }

        let regions = region_ids
            .iter()
            .map(|id| self.region(region_type, id))
            .collect::<Vec<_>>();
        let maxima = Self::maxima(&regions);

        Ok(ComparisonReport {
            region_type,
            regions,
            maxima,
        })
    }

    fn region(&self, region_type: RegionType, region_id: &str) -> RegionComparison {
        let matched: Vec<&Project> = self
            .data
            .projects()
            .iter()
            .filter(|p| match region_type {
                RegionType::State => p.state_id == region_id,
                RegionType::District => p.district_id == region_id,
            })
            .collect();

        // Unknown ids degrade to an unnamed, empty region, the same way a
        // missed lookup renders blank on the page.
        let name = match region_type {
            RegionType::State => self.data.state_by_id(region_id).map(|s| s.name.clone()),
            RegionType::District => self.data.district_by_id(region_id).map(|d| d.name.clone()),
        }
        .unwrap_or_default();

        let allocated: i64 = matched.iter().map(|p| p.funds_allocated).sum();
        let utilized: i64 = matched.iter().map(|p| p.funds_utilized).sum();

        RegionComparison {
            id: region_id.to_string(),
            name,
            total_projects: matched.len(),
            allocated_crore: allocated as f64 / CRORE,
            utilized_crore: utilized as f64 / CRORE,
            utilization_rate: utilization_rate(allocated, utilized),
            completed: matched
                .iter()
                .filter(|p| p.status == ProjectStatus::Completed)
                .count(),
            ongoing: matched
                .iter()
                .filter(|p| p.status == ProjectStatus::Ongoing)
                .count(),
            beneficiaries: matched.iter().map(|p| p.beneficiaries).sum(),
        }
    }

    fn maxima(regions: &[RegionComparison]) -> ComparisonMaxima {
        let max_of = |values: &mut dyn Iterator<Item = f64>| values.fold(1.0_f64, f64::max);
        ComparisonMaxima {
            allocated_crore: max_of(&mut regions.iter().map(|r| r.allocated_crore)),
            utilized_crore: max_of(&mut regions.iter().map(|r| r.utilized_crore)),
            projects: max_of(&mut regions.iter().map(|r| r.total_projects as f64)),
            beneficiaries: max_of(&mut regions.iter().map(|r| r.beneficiaries as f64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> ComparisonUseCase {
        ComparisonUseCase::new(Arc::new(ReferenceData::seeded()))
    }

    #[test]
    fn compares_states_side_by_side() {
        let report = use_case()
            .compare(
                RegionType::State,
                &["11".to_string(), "7".to_string()],
            )
            .unwrap();
        assert_eq!(report.regions.len(), 2);

        let karnataka = &report.regions[0];
        assert_eq!(karnataka.name, "Karnataka");
        assert_eq!(karnataka.total_projects, 1);
        assert!((karnataka.allocated_crore - 0.5).abs() < 1e-9);
        assert!((karnataka.utilization_rate - 96.0).abs() < f64::EPSILON);

        let gujarat = &report.regions[1];
        assert_eq!(gujarat.name, "Gujarat");
        assert_eq!(gujarat.beneficiaries, 3200);
        assert_eq!(gujarat.completed, 1);
    }

    #[test]
    fn district_granularity_uses_district_ids() {
        let report = use_case()
            .compare(RegionType::District, &["d21".to_string()])
            .unwrap();
        let mumbai = &report.regions[0];
        assert_eq!(mumbai.name, "Mumbai");
        assert_eq!(mumbai.total_projects, 1);
        assert_eq!(mumbai.ongoing, 1);
    }

    #[test]
    fn maxima_never_fall_below_one() {
        let report = use_case().compare(RegionType::State, &[]).unwrap();
        assert_eq!(report.maxima.projects, 1.0);
        assert_eq!(report.maxima.beneficiaries, 1.0);
        assert_eq!(report.maxima.allocated_crore, 1.0);
    }

    #[test]
    fn selection_is_capped() {
        let ids: Vec<String> = ["1", "2", "3", "4"].iter().map(|s| s.to_string()).collect();
        assert!(use_case().compare(RegionType::State, &ids).is_err());
    }

    #[test]
    fn unknown_region_degrades_to_empty() {
        let report = use_case()
            .compare(RegionType::State, &["999".to_string()])
            .unwrap();
        let region = &report.regions[0];
        assert_eq!(region.name, "");
        assert_eq!(region.total_projects, 0);
        assert_eq!(region.utilization_rate, 0.0);
    }
}
