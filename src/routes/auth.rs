use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

use validator::Validate;

use crate::{
    dto::auth_dto::{AuthResponse, LoginPayload, RegisterPayload, MISSING_FIELDS_MESSAGE},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 200, description = "User registered", body = Json<AuthResponse>),
        (status = 400, description = "Missing fields, invalid role or email already registered")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|_| Error::BadRequest(MISSING_FIELDS_MESSAGE.to_string()))?;
    let user = state.account_service.register(payload).await?;
    Ok(Json(AuthResponse::from(user)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Credentials accepted", body = Json<AuthResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    let user = state.account_service.login(payload).await?;
    Ok(Json(AuthResponse::from(user)))
}
