//! Public reads: no session required, actor is always `None`.

use axum::{Json, extract::State, response::IntoResponse};

use crate::error::ApiError;
use crate::{AppState, run_blocking};

/// Home: the latest notices.
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notices = run_blocking(move || state.core.latest_notices(None, 5)).await?;
    Ok(Json(notices))
}

pub async fn facilities(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let facilities = run_blocking(move || state.core.list_facilities(None)).await?;
    Ok(Json(facilities))
}

pub async fn achievements(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let achievements = run_blocking(move || state.core.list_achievements(None)).await?;
    Ok(Json(achievements))
}

pub async fn alumni(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let alumni = run_blocking(move || state.core.list_alumni(None)).await?;
    Ok(Json(alumni))
}
