use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use hostelhub_types::api::Claims;
use hostelhub_types::models::RegistrationState;

use crate::error::ApiError;
use crate::{AppState, load_actor, run_blocking};

pub async fn list(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let events = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.list_events(Some(&actor))
    })
    .await?;

    Ok(Json(events))
}

pub async fn toggle_registration(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.toggle_event_registration(Some(&actor), event_id)
    })
    .await?;

    Ok(Json(json!({
        "registered": outcome == RegistrationState::Registered,
    })))
}
