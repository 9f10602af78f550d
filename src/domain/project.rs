use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five fixed PM-AJAY program categories a project is classified under.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramComponent {
    #[serde(rename = "Adarsh Gram Yojana")]
    AdarshGramYojana,
    #[serde(rename = "SC/ST Hostels")]
    ScStHostels,
    #[serde(rename = "Skill Development")]
    SkillDevelopment,
    #[serde(rename = "Infrastructure Development")]
    InfrastructureDevelopment,
    #[serde(rename = "NGO Community Projects")]
    NgoCommunityProjects,
}

impl ProgramComponent {
    pub const ALL: [ProgramComponent; 5] = [
        ProgramComponent::AdarshGramYojana,
        ProgramComponent::ScStHostels,
        ProgramComponent::SkillDevelopment,
        ProgramComponent::InfrastructureDevelopment,
        ProgramComponent::NgoCommunityProjects,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProgramComponent::AdarshGramYojana => "Adarsh Gram Yojana",
            ProgramComponent::ScStHostels => "SC/ST Hostels",
            ProgramComponent::SkillDevelopment => "Skill Development",
            ProgramComponent::InfrastructureDevelopment => "Infrastructure Development",
            ProgramComponent::NgoCommunityProjects => "NGO Community Projects",
        }
    }

    /// Abbreviated label used by the dashboard bar chart.
    pub fn short_label(&self) -> &'static str {
        match self {
            ProgramComponent::AdarshGramYojana => "Adarsh Gram",
            ProgramComponent::ScStHostels => "SC/ST Hostels",
            ProgramComponent::SkillDevelopment => "Skill Dev.",
            ProgramComponent::InfrastructureDevelopment => "Infrastructure Dev.",
            ProgramComponent::NgoCommunityProjects => "NGO Community Proj.",
        }
    }

    pub fn parse(label: &str) -> Option<ProgramComponent> {
        ProgramComponent::ALL
            .iter()
            .copied()
            .find(|c| c.label() == label)
    }
}

impl fmt::Display for ProgramComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Pending,
    Ongoing,
    Completed,
    Delayed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Pending,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
        ProjectStatus::Delayed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Delayed => "delayed",
        }
    }

    pub fn parse(label: &str) -> Option<ProjectStatus> {
        ProjectStatus::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A funded unit of work tied to one state/district/village/agency.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub component: ProgramComponent,
    pub state_id: String,
    pub district_id: String,
    pub village_id: String,
    pub agency_id: String,
    pub status: ProjectStatus,
    pub funds_allocated: i64,
    pub funds_utilized: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub beneficiaries: i64,
}
