use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use chirp_types::Message;
use chirp_types::api::UpdateMessageRequest;

use crate::state::{AppState, blocking};

/// Absent messages are answered with 200 and an empty body, not 404.
fn json_or_empty(message: Option<Message>) -> Response {
    match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

pub async fn create_message(
    State(state): State<AppState>,
    Json(candidate): Json<Message>,
) -> Result<impl IntoResponse, StatusCode> {
    let message = blocking(&state, move |s| s.messages.create(&candidate))
        .await?
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(Json(message))
}

pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let messages = blocking(&state, |s| s.messages.list_all()).await?;
    Ok(Json(messages))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let message = blocking(&state, move |s| s.messages.get_by_id(message_id)).await?;
    Ok(json_or_empty(message))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let message = blocking(&state, move |s| s.messages.delete_by_id(message_id)).await?;
    Ok(json_or_empty(message))
}

/// PATCH /messages/{id}. Only `text` from the body is used.
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let message = blocking(&state, move |s| s.messages.update_by_id(message_id, &req.text))
        .await?
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(Json(message))
}

pub async fn list_account_messages(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse, StatusCode> {
    let messages = blocking(&state, move |s| s.messages.list_by_account(account_id)).await?;
    Ok(Json(messages))
}
