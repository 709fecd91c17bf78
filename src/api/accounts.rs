use crate::api::AppState;
use crate::api::schemas::accounts::{Account as AccountSchema, Credentials};
use crate::error::Result;
use axum::{Json, extract::State, response::IntoResponse};

/// Registers a new account and echoes the stored record, generated id
/// included.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<impl IntoResponse> {
    let account = state.account_service.register(payload.username, payload.password).await?;
    Ok(Json(AccountSchema::from(account)))
}

pub async fn login(State(state): State<AppState>, Json(payload): Json<Credentials>) -> Result<impl IntoResponse> {
    let account = state.account_service.login(payload.username, payload.password).await?;
    Ok(Json(AccountSchema::from(account)))
}
