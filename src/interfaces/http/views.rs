use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::debug;

use crate::application::use_cases::comparison::RegionType;
use crate::application::use_cases::project_query::{ProjectFilter, DEFAULT_PAGE_SIZE};
use crate::domain::error::{AppError, Result};
use crate::domain::project::{ProgramComponent, ProjectStatus};

use super::{error_response, HttpState};

/// Query shape shared by every filtered view. Component and status arrive
/// as their display labels, exactly as the select boxes submit them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub state_id: Option<String>,
    pub district_id: Option<String>,
    pub village_id: Option<String>,
    pub component: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

fn parse_filter(query: &FilterQuery) -> Result<ProjectFilter> {
    let component = match query.component.as_deref().filter(|c| !c.is_empty()) {
        Some(label) => Some(ProgramComponent::parse(label).ok_or_else(|| {
            AppError::ValidationError(format!("Unknown component {}", label))
        })?),
        None => None,
    };
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(label) => Some(ProjectStatus::parse(label).ok_or_else(|| {
            AppError::ValidationError(format!("Unknown status {}", label))
        })?),
        None => None,
    };
    Ok(ProjectFilter {
        state_id: query.state_id.clone().filter(|s| !s.is_empty()),
        district_id: query.district_id.clone().filter(|s| !s.is_empty()),
        village_id: query.village_id.clone().filter(|s| !s.is_empty()),
        component,
        status,
        search: query.search.clone().filter(|s| !s.is_empty()),
    })
}

#[get("/projects")]
pub async fn list_projects(
    data: web::Data<HttpState>,
    query: web::Query<FilterQuery>,
) -> impl Responder {
    let filter = match parse_filter(&query) {
        Ok(filter) => filter,
        Err(err) => return error_response(&err),
    };
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE);
    debug!(page, per_page, "Listing projects");
    HttpResponse::Ok().json(data.projects.page(&filter, page, per_page))
}

#[get("/dashboard")]
pub async fn dashboard(
    data: web::Data<HttpState>,
    query: web::Query<FilterQuery>,
) -> impl Responder {
    match parse_filter(&query) {
        Ok(filter) => HttpResponse::Ok().json(data.dashboard.build(&filter)),
        Err(err) => error_response(&err),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonQuery {
    pub region_type: RegionType,
    /// Comma-separated region ids, e.g. `ids=11,7,23`.
    #[serde(default)]
    pub ids: String,
}

#[get("/comparison")]
pub async fn comparison(
    data: web::Data<HttpState>,
    query: web::Query<ComparisonQuery>,
) -> impl Responder {
    let ids: Vec<String> = query
        .ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    match data.comparison.compare(query.region_type, &ids) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => error_response(&err),
    }
}

#[get("/impact")]
pub async fn impact(data: web::Data<HttpState>, query: web::Query<FilterQuery>) -> impl Responder {
    let component = match query.component.as_deref().filter(|c| !c.is_empty()) {
        Some(label) => match ProgramComponent::parse(label) {
            Some(component) => Some(component),
            None => {
                return error_response(&AppError::ValidationError(format!(
                    "Unknown component {}",
                    label
                )))
            }
        },
        None => None,
    };
    HttpResponse::Ok().json(data.impact.build(component))
}

#[get("/map")]
pub async fn map_view(
    data: web::Data<HttpState>,
    query: web::Query<FilterQuery>,
) -> impl Responder {
    match parse_filter(&query) {
        Ok(filter) => HttpResponse::Ok().json(data.map_view.build(&filter)),
        Err(err) => error_response(&err),
    }
}
