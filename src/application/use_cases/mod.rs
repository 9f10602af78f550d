pub mod comparison;
pub mod complaint_intake;
pub mod dashboard;
pub mod grievance;
pub mod impact;
pub mod map_view;
pub mod project_query;
pub mod proposal_wizard;
