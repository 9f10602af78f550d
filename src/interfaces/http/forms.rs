use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::info;
use uuid::Uuid;

use crate::application::use_cases::grievance::GrievanceSubmission;
use crate::application::use_cases::proposal_wizard::ProposalUpdate;
use crate::domain::complaint::ComplaintSubmission;
use crate::domain::error::AppError;

use super::{error_response, HttpState};

fn parse_session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::ValidationError(format!("Invalid session id {}", raw)))
}

#[post("/proposals/sessions")]
pub async fn start_wizard(data: web::Data<HttpState>) -> impl Responder {
    let view = data.wizard.start();
    info!(session_id = %view.session_id, "Proposal wizard started");
    HttpResponse::Created().json(view)
}

#[get("/proposals/sessions/{id}")]
pub async fn get_wizard(data: web::Data<HttpState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    match data.wizard.get(id) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => error_response(&err),
    }
}

#[post("/proposals/sessions/{id}/next")]
pub async fn wizard_next(data: web::Data<HttpState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    match data.wizard.next(id) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => error_response(&err),
    }
}

#[post("/proposals/sessions/{id}/back")]
pub async fn wizard_back(data: web::Data<HttpState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    match data.wizard.back(id) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => error_response(&err),
    }
}

#[post("/proposals/sessions/{id}/fields")]
pub async fn wizard_fields(
    data: web::Data<HttpState>,
    path: web::Path<String>,
    update: web::Json<ProposalUpdate>,
) -> impl Responder {
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    match data.wizard.update(id, update.into_inner()) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => error_response(&err),
    }
}

#[post("/proposals/sessions/{id}/submit")]
pub async fn wizard_submit(data: web::Data<HttpState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(err) => return error_response(&err),
    };
    match data.wizard.submit(id) {
        Ok(receipt) => {
            info!(proposal_id = %receipt.proposal_id, "Proposal submitted");
            HttpResponse::Ok().json(receipt)
        }
        Err(err) => error_response(&err),
    }
}

#[post("/grievances")]
pub async fn submit_grievance(
    data: web::Data<HttpState>,
    submission: web::Json<GrievanceSubmission>,
) -> impl Responder {
    match data.grievances.submit(&submission) {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(err) => error_response(&err),
    }
}

#[post("/complaints")]
pub async fn submit_complaint(
    data: web::Data<HttpState>,
    submission: web::Json<ComplaintSubmission>,
) -> impl Responder {
    match data.complaints.submit(&submission).await {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(err) => error_response(&err),
    }
}
