use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::seed_dto::{SeedCredentials, SeedResponse},
    error::Result,
    services::seed_service::{DEMO_PASSWORD, DEMO_RECRUITER_EMAIL, DEMO_WORKER_EMAIL},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "Demo data replaced", body = Json<SeedResponse>)
    )
)]
#[axum::debug_handler]
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let summary = state.seed_service.run().await?;
    Ok(Json(SeedResponse {
        success: true,
        message: "Database seeded with demo data".to_string(),
        summary,
        credentials: SeedCredentials {
            recruiter: format!("{} / {}", DEMO_RECRUITER_EMAIL, DEMO_PASSWORD),
            worker: format!("{} / {}", DEMO_WORKER_EMAIL, DEMO_PASSWORD),
        },
    }))
}
