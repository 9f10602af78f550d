use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::{
    ComparisonUseCase, ComplaintIntakeUseCase, DashboardUseCase, GrievanceUseCase, ImpactUseCase,
    MapViewUseCase, ProjectQueryUseCase, ProposalWizardUseCase,
};
use crate::domain::complaint::COMPLAINT_TYPES;
use crate::domain::error::AppError;
use crate::domain::project::ProgramComponent;
use crate::infrastructure::clock::ServerClock;
use crate::infrastructure::config::PortalConfig;
use crate::infrastructure::dataset::ReferenceData;
use crate::infrastructure::supabase::ComplaintSink;

pub mod forms;
pub mod views;

pub struct HttpState {
    pub data: Arc<ReferenceData>,
    pub projects: ProjectQueryUseCase,
    pub dashboard: DashboardUseCase,
    pub comparison: ComparisonUseCase,
    pub impact: ImpactUseCase,
    pub map_view: MapViewUseCase,
    pub wizard: ProposalWizardUseCase,
    pub grievances: GrievanceUseCase,
    pub complaints: ComplaintIntakeUseCase,
    pub clock: ServerClock,
}

impl HttpState {
    pub fn new(
        data: Arc<ReferenceData>,
        sink: Arc<dyn ComplaintSink>,
        config: &PortalConfig,
    ) -> Self {
        Self {
            projects: ProjectQueryUseCase::new(Arc::clone(&data)),
            dashboard: DashboardUseCase::new(Arc::clone(&data)),
            comparison: ComparisonUseCase::new(Arc::clone(&data)),
            impact: ImpactUseCase::new(Arc::clone(&data)),
            map_view: MapViewUseCase::new(Arc::clone(&data), config.tile_url_template.clone()),
            wizard: ProposalWizardUseCase::new(Arc::clone(&data)),
            grievances: GrievanceUseCase::new(),
            complaints: ComplaintIntakeUseCase::new(sink),
            clock: ServerClock::new(),
            data,
        }
    }
}

/// One place that turns a domain error into a response, so every handler
/// reports failures the same way.
pub(crate) fn error_response(err: &AppError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        AppError::ValidationError(_) => HttpResponse::BadRequest().json(body),
        AppError::NotFound(_) => HttpResponse::NotFound().json(body),
        AppError::SubmissionError(_) => HttpResponse::BadGateway().json(body),
        AppError::Internal(_) | AppError::ConfigError(_) => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictQuery {
    pub state_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageQuery {
    pub district_id: Option<String>,
}

#[get("/states")]
async fn list_states(data: web::Data<HttpState>) -> impl Responder {
    HttpResponse::Ok().json(data.data.states())
}

#[get("/districts")]
async fn list_districts(
    data: web::Data<HttpState>,
    query: web::Query<DistrictQuery>,
) -> impl Responder {
    match &query.state_id {
        Some(state_id) => HttpResponse::Ok().json(data.data.districts_of(state_id)),
        None => HttpResponse::Ok().json(data.data.districts()),
    }
}

#[get("/villages")]
async fn list_villages(
    data: web::Data<HttpState>,
    query: web::Query<VillageQuery>,
) -> impl Responder {
    match &query.district_id {
        Some(district_id) => HttpResponse::Ok().json(data.data.villages_of(district_id)),
        None => HttpResponse::Ok().json(data.data.villages()),
    }
}

#[get("/agencies")]
async fn list_agencies(data: web::Data<HttpState>) -> impl Responder {
    HttpResponse::Ok().json(data.data.agencies())
}

#[get("/components")]
async fn list_components() -> impl Responder {
    let labels: Vec<&str> = ProgramComponent::ALL.iter().map(|c| c.label()).collect();
    HttpResponse::Ok().json(labels)
}

#[get("/complaint-types")]
async fn list_complaint_types() -> impl Responder {
    HttpResponse::Ok().json(COMPLAINT_TYPES)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatasetCounts {
    states: usize,
    districts: usize,
    villages: usize,
    agencies: usize,
    projects: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    server_time: String,
    uptime_seconds: i64,
    dataset: DatasetCounts,
}

#[get("/status")]
async fn status(data: web::Data<HttpState>) -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        server_time: data.clock.now().to_rfc3339(),
        uptime_seconds: data.clock.uptime_seconds(),
        dataset: DatasetCounts {
            states: data.data.states().len(),
            districts: data.data.districts().len(),
            villages: data.data.villages().len(),
            agencies: data.data.agencies().len(),
            projects: data.data.projects().len(),
        },
    })
}

pub fn start_server(state: Arc<HttpState>, config: &PortalConfig) -> std::io::Result<Server> {
    state.clock.start();
    let state = web::Data::from(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Public read-only portal data

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(list_states)
                .service(list_districts)
                .service(list_villages)
                .service(list_agencies)
                .service(list_components)
                .service(list_complaint_types)
                .service(status)
                .service(views::list_projects)
                .service(views::dashboard)
                .service(views::comparison)
                .service(views::impact)
                .service(views::map_view)
                .service(forms::start_wizard)
                .service(forms::get_wizard)
                .service(forms::wizard_next)
                .service(forms::wizard_back)
                .service(forms::wizard_fields)
                .service(forms::wizard_submit)
                .service(forms::submit_grievance)
                .service(forms::submit_complaint),
        )
    })
    .bind(config.bind())?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::infrastructure::supabase::UnconfiguredSink;

    fn test_state() -> web::Data<HttpState> {
        let config = PortalConfig::default();
        let data = Arc::new(ReferenceData::seeded());
        web::Data::new(HttpState::new(data, Arc::new(UnconfiguredSink), &config))
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new().app_data($state.clone()).service(
                    web::scope("/api")
                        .service(list_states)
                        .service(status)
                        .service(views::list_projects)
                        .service(views::dashboard)
                        .service(forms::start_wizard)
                        .service(forms::wizard_next)
                        .service(forms::submit_complaint),
                ),
            )
        };
    }

    #[actix_web::test]
    async fn states_endpoint_serves_the_seed() {
        let app = test_app!(test_state()).await;
        let req = test::TestRequest::get().uri("/api/states").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 28);
        assert_eq!(body[10]["name"], "Karnataka");
    }

    #[actix_web::test]
    async fn projects_endpoint_paginates_and_joins() {
        let app = test_app!(test_state()).await;
        let req = test::TestRequest::get()
            .uri("/api/projects?stateId=11")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["projects"][0]["id"], "p1");
        assert_eq!(body["projects"][0]["stateName"], "Karnataka");
    }

    #[actix_web::test]
    async fn unknown_status_label_is_a_bad_request() {
        let app = test_app!(test_state()).await;
        let req = test::TestRequest::get()
            .uri("/api/projects?status=paused")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn dashboard_reports_utilization() {
        let app = test_app!(test_state()).await;
        let req = test::TestRequest::get()
            .uri("/api/dashboard?stateId=11")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["stats"]["totalProjects"], 1);
        assert!((body["stats"]["utilizationRate"].as_f64().unwrap() - 96.0).abs() < 1e-9);
    }

    #[actix_web::test]
    async fn wizard_round_trip_over_http() {
        let state = test_state();
        let app = test_app!(state).await;

        let req = test::TestRequest::post()
            .uri("/api/proposals/sessions")
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created["step"], 1);

        let session_id = created["sessionId"].as_str().unwrap();
        let req = test::TestRequest::post()
            .uri(&format!("/api/proposals/sessions/{}/next", session_id))
            .to_request();
        let advanced: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(advanced["step"], 2);
    }

    #[actix_web::test]
    async fn complaint_without_backend_maps_to_bad_gateway() {
        let app = test_app!(test_state()).await;
        let req = test::TestRequest::post()
            .uri("/api/complaints")
            .set_json(serde_json::json!({
                "citizenName": "Asha Verma",
                "citizenEmail": "asha@example.com",
                "citizenPhone": "+91 98765 43210",
                "state": "Karnataka",
                "district": "Mysore",
                "complaintType": "Project Delay",
                "subject": "Work stalled",
                "description": "No activity on site since June."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn status_endpoint_counts_the_dataset() {
        let app = test_app!(test_state()).await;
        let req = test::TestRequest::get().uri("/api/status").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["dataset"]["projects"], 10);
        assert_eq!(body["dataset"]["districts"], 100);
    }
}
