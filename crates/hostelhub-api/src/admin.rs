//! Admin surface. Handlers here only shuttle payloads; the admin role check
//! happens inside the core, uniformly with every other operation.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use hostelhub_types::api::{
    AchievementRequest, AdminEditProfileRequest, AllowListRequest, AlumniRequest,
    AnnouncementRequest, Claims, ComplaintCommentRequest, ComplaintStatusRequest, EventRequest,
    FacilityRequest, NoticeRequest,
};

use crate::error::ApiError;
use crate::{AppState, load_actor, run_blocking};

// -- Complaints --

pub async fn list_complaints(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let complaints = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.admin_list_complaints(Some(&actor))
    })
    .await?;
    Ok(Json(complaints))
}

pub async fn update_complaint_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ComplaintStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let status = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.update_complaint_status(Some(&actor), id, &req)
    })
    .await?;
    Ok(Json(json!({ "status": status })))
}

pub async fn update_complaint_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ComplaintCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.update_complaint_comment(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Announcements --

pub async fn add_announcement(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AnnouncementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let announcement = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.add_announcement(Some(&actor), &req)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

pub async fn edit_announcement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AnnouncementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.edit_announcement(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.delete_announcement(Some(&actor), id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Notices --

pub async fn add_notice(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<NoticeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let notice = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.add_notice(Some(&actor), &req)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(notice)))
}

pub async fn edit_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<NoticeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.edit_notice(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.delete_notice(Some(&actor), id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Facilities --

pub async fn add_facility(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<FacilityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let facility = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.add_facility(Some(&actor), &req)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(facility)))
}

pub async fn edit_facility(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<FacilityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.edit_facility(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_facility(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.delete_facility(Some(&actor), id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Achievements --

pub async fn add_achievement(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AchievementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let achievement = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.add_achievement(Some(&actor), &req)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

pub async fn edit_achievement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AchievementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.edit_achievement(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_achievement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.delete_achievement(Some(&actor), id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Alumni --

pub async fn add_alumni(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AlumniRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let alumni = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.add_alumni(Some(&actor), &req)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(alumni)))
}

pub async fn edit_alumni(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AlumniRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.edit_alumni(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_alumni(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.delete_alumni(Some(&actor), id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// -- Events --

pub async fn add_event(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<EventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.add_event(Some(&actor), &req)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn edit_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<EventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.edit_event(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.delete_event(Some(&actor), id)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn event_registrations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let registrations = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.event_registrations(Some(&actor), id)
    })
    .await?;
    Ok(Json(registrations))
}

// -- Users and allow-list --

pub async fn list_users(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let users = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.admin_list_accounts(Some(&actor))
    })
    .await?;
    Ok(Json(users))
}

pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AdminEditProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.admin_edit_account(Some(&actor), id, &req)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_allowed_student(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AllowListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = run_blocking(move || {
        let actor = load_actor(&state, claims.sub)?;
        state.core.add_allowed_email(Some(&actor), &req)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "email": email }))))
}
