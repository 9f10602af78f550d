use std::sync::Arc;

use serde::Serialize;

use crate::application::use_cases::project_query::{
    ProjectAggregates, ProjectFilter, ProjectQueryUseCase,
};
use crate::domain::project::{ProgramComponent, ProjectStatus};
use crate::infrastructure::dataset::ReferenceData;

/// Center of India, the map's resting position.
pub const INDIA_CENTER: (f64, f64) = (20.5937, 78.9629);
pub const COUNTRY_ZOOM: u8 = 5;
pub const STATE_ZOOM: u8 = 7;
pub const DISTRICT_ZOOM: u8 = 10;

/// One pin on the map. Coordinates come from the project's village; a
/// project whose village has no coordinates simply produces no marker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMarker {
    pub project_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub village_name: String,
    pub district_name: Option<String>,
    pub state_name: Option<String>,
    pub agency_name: Option<String>,
    pub component: ProgramComponent,
    pub status: ProjectStatus,
    pub funds_allocated: i64,
    pub funds_utilized: i64,
    pub beneficiaries: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictCoverage {
    pub district_id: String,
    pub district_name: Option<String>,
    pub state_name: Option<String>,
    pub projects: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFocus {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewReport {
    pub markers: Vec<ProjectMarker>,
    pub stats: ProjectAggregates,
    pub districts_covered: Vec<DistrictCoverage>,
    pub focus: MapFocus,
    /// Tile template for the client; this service never fetches tiles.
    pub tile_url_template: String,
}

pub struct MapViewUseCase {
    data: Arc<ReferenceData>,
    query: ProjectQueryUseCase,
    tile_url_template: String,
}

impl MapViewUseCase {
    pub fn new(data: Arc<ReferenceData>, tile_url_template: String) -> Self {
        let query = ProjectQueryUseCase::new(Arc::clone(&data));
        Self {
            data,
            query,
            tile_url_template,
        }
    }

    pub fn build(&self, filter: &ProjectFilter) -> MapViewReport {
        let matched = self.query.filter(filter);

        let markers = matched
            .iter()
            .filter_map(|project| {
                let village = self.data.village_by_id(&project.village_id)?;
                let (latitude, longitude) = village.latitude.zip(village.longitude)?;
                Some(ProjectMarker {
                    project_id: project.id.clone(),
                    latitude,
                    longitude,
                    village_name: village.name.clone(),
                    district_name: self
                        .data
                        .district_by_id(&project.district_id)
                        .map(|d| d.name.clone()),
                    state_name: self
                        .data
                        .state_by_id(&project.state_id)
                        .map(|s| s.name.clone()),
                    agency_name: self
                        .data
                        .agency_by_id(&project.agency_id)
                        .map(|a| a.name.clone()),
                    component: project.component,
                    status: project.status,
                    funds_allocated: project.funds_allocated,
                    funds_utilized: project.funds_utilized,
                    beneficiaries: project.beneficiaries,
                })
            })
            .collect();

        let mut districts_covered: Vec<DistrictCoverage> = Vec::new();
        for project in &matched {
            if let Some(existing) = districts_covered
                .iter_mut()
                .find(|c| c.district_id == project.district_id)
            {
                existing.projects += 1;
                continue;
            }
            let district = self.data.district_by_id(&project.district_id);
            districts_covered.push(DistrictCoverage {
                district_id: project.district_id.clone(),
                district_name: district.map(|d| d.name.clone()),
                state_name: district
                    .and_then(|d| self.data.state_by_id(&d.state_id))
                    .map(|s| s.name.clone()),
                projects: 1,
            });
        }

        MapViewReport {
            markers,
            stats: ProjectQueryUseCase::aggregate_over(&matched),
            districts_covered,
            focus: self.focus(filter),
            tile_url_template: self.tile_url_template.clone(),
        }
    }

    /// District selection wins over state selection; otherwise the map
    /// rests on the whole country.
    fn focus(&self, filter: &ProjectFilter) -> MapFocus {
        if let Some(district) = filter
            .district_id
            .as_deref()
            .and_then(|id| self.data.district_by_id(id))
        {
            return MapFocus {
                latitude: district.latitude,
                longitude: district.longitude,
                zoom: DISTRICT_ZOOM,
            };
        }
        if let Some(state_id) = filter.state_id.as_deref() {
            let districts = self.data.districts_of(state_id);
            if !districts.is_empty() {
                let count = districts.len() as f64;
                return MapFocus {
                    latitude: districts.iter().map(|d| d.latitude).sum::<f64>() / count,
                    longitude: districts.iter().map(|d| d.longitude).sum::<f64>() / count,
                    zoom: STATE_ZOOM,
                };
            }
        }
        MapFocus {
            latitude: INDIA_CENTER.0,
            longitude: INDIA_CENTER.1,
            zoom: COUNTRY_ZOOM,
        }
    }
}
