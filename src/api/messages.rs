use crate::api::AppState;
use crate::api::schemas::messages::{Message as MessageSchema, MessageUpdate, NewMessage};
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<NewMessage>,
) -> Result<impl IntoResponse> {
    let message = state
        .message_service
        .create(payload.posted_by, payload.message_text, payload.time_posted_epoch)
        .await?;
    Ok(Json(MessageSchema::from(message)))
}

pub async fn get_all_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.message_service.get_all().await?;
    Ok(Json(messages.into_iter().map(MessageSchema::from).collect::<Vec<_>>()))
}

/// A missing id is not an error here: the contract is 200 with an empty
/// body, distinguishing absence by payload rather than status.
pub async fn get_message(State(state): State<AppState>, Path(message_id): Path<i64>) -> Result<Response> {
    let message = state.message_service.get_by_id(message_id).await?;
    Ok(match message {
        Some(m) => Json(MessageSchema::from(m)).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// Returns the pre-deletion record, or 200 with an empty body if the id was
/// already gone.
pub async fn delete_message(State(state): State<AppState>, Path(message_id): Path<i64>) -> Result<Response> {
    let deleted = state.message_service.delete(message_id).await?;
    Ok(match deleted {
        Some(m) => Json(MessageSchema::from(m)).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Json(payload): Json<MessageUpdate>,
) -> Result<impl IntoResponse> {
    let updated = state.message_service.update(message_id, payload.message_text).await?;
    Ok(Json(MessageSchema::from(updated)))
}

pub async fn get_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let messages = state.message_service.get_by_user(account_id).await?;
    Ok(Json(messages.into_iter().map(MessageSchema::from).collect::<Vec<_>>()))
}
