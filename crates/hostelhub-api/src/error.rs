use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use hostelhub_core::CoreError;

/// HTTP-facing wrapper around the core taxonomy. Every core failure is
/// recoverable, so each maps to a status plus a JSON body the client can
/// render; validation failures carry their per-field violations.
#[derive(Debug)]
pub struct ApiError(CoreError);

impl ApiError {
    pub fn internal() -> Self {
        ApiError(CoreError::Internal(anyhow::anyhow!("internal error")))
    }

    fn status_code(&self) -> StatusCode {
        match &self.0 {
            CoreError::AuthenticationRequired | CoreError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            CoreError::InsufficientRole | CoreError::NotOwner => StatusCode::FORBIDDEN,
            CoreError::Validation(_) | CoreError::InvalidStatus(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CoreError::DuplicateIdentity(_)
            | CoreError::AlreadyListed
            | CoreError::StoreConflict => StatusCode::CONFLICT,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match &self.0 {
            CoreError::AuthenticationRequired => "authentication_required",
            CoreError::InvalidCredentials => "invalid_credentials",
            CoreError::InsufficientRole => "insufficient_role",
            CoreError::NotOwner => "not_owner",
            CoreError::Validation(_) => "validation_failure",
            CoreError::DuplicateIdentity(_) => "duplicate_identity",
            CoreError::AlreadyListed => "already_listed",
            CoreError::NotFound(_) => "not_found",
            CoreError::InvalidStatus(_) => "invalid_status",
            CoreError::StoreConflict => "store_conflict",
            CoreError::Internal(_) => "internal",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let CoreError::Internal(ref e) = self.0 {
            error!("Internal error: {:#}", e);
        }

        let mut body = json!({
            "error": self.kind(),
            "message": self.0.to_string(),
        });
        if let CoreError::Validation(ref violations) = self.0 {
            body["violations"] = json!(violations);
        }

        (self.status_code(), Json(body)).into_response()
    }
}
