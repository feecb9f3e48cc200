use axum::{Extension, Json, extract::State, response::IntoResponse};

use hostelhub_types::api::{Claims, ProfileRequest};

use crate::error::ApiError;
use crate::{AppState, load_actor, run_blocking};

pub async fn get(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let account = run_blocking(move || load_actor(&state, claims.sub)).await?;
    Ok(Json(account))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.update_own_profile(Some(&actor), &req)?;
        // return the fresh record for re-rendering
        load_actor(&state, claims.sub)
    })
    .await?;

    Ok(Json(account))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.dashboard_stats(Some(&actor))
    })
    .await?;

    Ok(Json(stats))
}

pub async fn announcements(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let announcements = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.recent_announcements(Some(&actor), 5)
    })
    .await?;

    Ok(Json(announcements))
}
