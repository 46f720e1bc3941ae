use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{Credentials, StatusResponse},
        services::CredentialStore,
    },
    error::AuthError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register).options(preflight))
        .route("/login", post(login).options(preflight))
}

/// The body is taken raw so that a missing content type or broken JSON both
/// end up as `InvalidInput` instead of an extractor rejection.
#[instrument(skip(store, body))]
pub async fn register(
    State(store): State<CredentialStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), AuthError> {
    let creds = Credentials::from_body(&body)?;
    store.register_user(&creds.email, &creds.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::success("Registration successful")),
    ))
}

#[instrument(skip(store, body))]
pub async fn login(
    State(store): State<CredentialStore>,
    body: Bytes,
) -> Result<Json<StatusResponse>, AuthError> {
    let creds = Credentials::from_body(&body)?;
    store.authenticate(&creds.email, &creds.password).await?;
    Ok(Json(StatusResponse::success("Login successful")))
}

/// CORS preflight. The allow-* headers are added by the app-wide layer.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
