use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use hostelhub_types::api::{Claims, ComplaintRequest};

use crate::error::ApiError;
use crate::{AppState, load_actor, run_blocking};

pub async fn submit(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ComplaintRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let complaint = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.submit_complaint(Some(&actor), &req)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(complaint)))
}

pub async fn mine(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let complaints = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.my_complaints(Some(&actor))
    })
    .await?;

    Ok(Json(complaints))
}
