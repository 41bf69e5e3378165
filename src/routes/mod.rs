pub mod applications;
pub mod auth;
pub mod health;
pub mod jobs;
pub mod seed;

use axum::{
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        jobs::list_jobs,
        jobs::create_job,
        jobs::get_job,
        applications::list_applicants,
        applications::create_application,
        applications::update_application_status,
        applications::list_worker_applications,
        auth::register,
        auth::login,
        seed::seed,
    ),
    tags((name = "marketplace", description = "Job marketplace API"))
)]
pub struct ApiDoc;

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Every API route. The seed route is only mounted when `enable_seed` is set.
pub fn router(state: AppState, enable_seed: bool) -> Router {
    let mut api = Router::new()
        .route("/api/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/api/jobs/:id", get(jobs::get_job))
        .route(
            "/api/applications",
            get(applications::list_applicants).post(applications::create_application),
        )
        .route(
            "/api/applications/:id/status",
            patch(applications::update_application_status),
        )
        .route(
            "/api/workers/:id/applications",
            get(applications::list_worker_applications),
        )
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/openapi.json", get(openapi_json))
        .route("/health", get(health::health));

    if enable_seed {
        api = api.route("/api/seed", post(seed::seed));
    }

    api.with_state(state)
}
