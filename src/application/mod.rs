pub mod use_cases;

pub use use_cases::comparison::ComparisonUseCase;
pub use use_cases::complaint_intake::ComplaintIntakeUseCase;
pub use use_cases::dashboard::DashboardUseCase;
pub use use_cases::grievance::GrievanceUseCase;
pub use use_cases::impact::ImpactUseCase;
pub use use_cases::map_view::MapViewUseCase;
pub use use_cases::project_query::ProjectQueryUseCase;
pub use use_cases::proposal_wizard::ProposalWizardUseCase;
