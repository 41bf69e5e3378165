use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::application_dto::{
        ApplicantListResponse, ApplicationListQuery, ApplicationListResponse, ApplicationResponse,
        CreateApplicationPayload, UpdateApplicationStatusPayload,
    },
    error::Result,
    utils::validation::parse_optional_id,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/applications",
    params(
        ("jobId" = String, Query, description = "Job whose applicants to list")
    ),
    responses(
        (status = 200, description = "Applicants, most recent first", body = Json<ApplicantListResponse>),
        (status = 400, description = "Missing or malformed jobId")
    )
)]
#[axum::debug_handler]
pub async fn list_applicants(
    State(state): State<AppState>,
    query: std::result::Result<Query<ApplicationListQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let job_id = parse_optional_id(query.job_id.as_deref(), "jobId")?;
    let applicants = state.application_service.list_applicants(job_id).await?;
    Ok(Json(ApplicantListResponse::from(applicants)))
}

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = CreateApplicationPayload,
    responses(
        (status = 200, description = "Application submitted", body = Json<ApplicationResponse>),
        (status = 400, description = "Invalid payload or already applied")
    )
)]
#[axum::debug_handler]
pub async fn create_application(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateApplicationPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let application = state.application_service.apply(payload).await?;
    Ok(Json(ApplicationResponse::from(application)))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = Json<ApplicationResponse>),
        (status = 400, description = "Invalid status or application already decided"),
        (status = 403, description = "Caller does not own the job"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    payload: std::result::Result<Json<UpdateApplicationStatusPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let application = state.application_service.update_status(id, payload).await?;
    Ok(Json(ApplicationResponse::from(application)))
}

#[utoipa::path(
    get,
    path = "/api/workers/{id}/applications",
    params(
        ("id" = Uuid, Path, description = "Worker ID")
    ),
    responses(
        (status = 200, description = "The worker's applications", body = Json<ApplicationListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_worker_applications(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(worker_id) = id?;
    let applications = state.application_service.list_for_worker(worker_id).await?;
    Ok(Json(ApplicationListResponse::from(applications)))
}
