use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{CreateJobPayload, JobListQuery, JobListResponse, JobResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("recruiterId" = Option<String>, Query, description = "Only jobs posted by this recruiter"),
        ("skill" = Option<String>, Query, description = "Case-insensitive substring of the required skill")
    ),
    responses(
        (status = 200, description = "Jobs, newest first", body = Json<JobListResponse>),
        (status = 400, description = "Malformed recruiterId")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    query: std::result::Result<Query<JobListQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    let jobs = state.job_service.list(query.into_filter()?).await?;
    Ok(Json(JobListResponse::from(jobs)))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 200, description = "Job created", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Poster is not a recruiter")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateJobPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = Json<JobResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(JobResponse::from(job)))
}
