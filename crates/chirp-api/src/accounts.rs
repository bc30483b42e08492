use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use chirp_types::Account;

use crate::state::{AppState, blocking};

/// POST /register: 200 with the stored account (including its new id),
/// 400 on any rejection.
pub async fn register(
    State(state): State<AppState>,
    Json(candidate): Json<Account>,
) -> Result<impl IntoResponse, StatusCode> {
    let account = blocking(&state, move |s| s.accounts.register(&candidate))
        .await?
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(Json(account))
}

/// POST /login: 200 with the matching account, 401 otherwise.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Account>,
) -> Result<impl IntoResponse, StatusCode> {
    let account = blocking(&state, move |s| s.accounts.login(&credentials))
        .await?
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    Ok(Json(account))
}
