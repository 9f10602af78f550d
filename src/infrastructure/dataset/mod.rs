//! In-process reference data. The portal never creates, mutates, or
//! deletes any of these records; everything is seeded once at startup and
//! shared read-only across handlers.

pub mod seed;

use std::collections::HashMap;

use crate::domain::agency::Agency;
use crate::domain::project::Project;
use crate::domain::region::{District, State, Village};

pub struct ReferenceData {
    states: Vec<State>,
    districts: Vec<District>,
    villages: Vec<Village>,
    agencies: Vec<Agency>,
    projects: Vec<Project>,
    state_index: HashMap<String, usize>,
    district_index: HashMap<String, usize>,
    village_index: HashMap<String, usize>,
    agency_index: HashMap<String, usize>,
}

impl ReferenceData {
    pub fn seeded() -> Self {
        Self::new(
            seed::states(),
            seed::districts(),
            seed::villages(),
            seed::agencies(),
            seed::projects(),
        )
    }

    pub fn new(
        states: Vec<State>,
        districts: Vec<District>,
        villages: Vec<Village>,
        agencies: Vec<Agency>,
        projects: Vec<Project>,
    ) -> Self {
        let state_index = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let district_index = districts
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();
        let village_index = villages
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        let agency_index = agencies
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
        Self {
            states,
            districts,
            villages,
            agencies,
            projects,
            state_index,
            district_index,
            village_index,
            agency_index,
        }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn districts_of(&self, state_id: &str) -> Vec<&District> {
        self.districts
            .iter()
            .filter(|d| d.state_id == state_id)
            .collect()
    }

    pub fn villages(&self) -> &[Village] {
        &self.villages
    }

    pub fn villages_of(&self, district_id: &str) -> Vec<&Village> {
        self.villages
            .iter()
            .filter(|v| v.district_id == district_id)
            .collect()
    }

    pub fn agencies(&self) -> &[Agency] {
        &self.agencies
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn state_by_id(&self, id: &str) -> Option<&State> {
        self.state_index.get(id).map(|&i| &self.states[i])
    }

    pub fn district_by_id(&self, id: &str) -> Option<&District> {
        self.district_index.get(id).map(|&i| &self.districts[i])
    }

    pub fn village_by_id(&self, id: &str) -> Option<&Village> {
        self.village_index.get(id).map(|&i| &self.villages[i])
    }

    pub fn agency_by_id(&self, id: &str) -> Option<&Agency> {
        self.agency_index.get(id).map(|&i| &self.agencies[i])
    }
}
