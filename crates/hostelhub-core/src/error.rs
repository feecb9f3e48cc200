use thiserror::Error;

use hostelhub_types::api::Violation;

pub type CoreResult<T> = Result<T, CoreError>;

/// Every failure the core reports. Nothing here is fatal: authorization and
/// validation outcomes go back to the caller as data so the delivery layer
/// can re-render input with per-field messages, and benign unique-key races
/// are mapped before they surface.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("authentication required")]
    AuthenticationRequired,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("you do not have permission to perform this action")]
    InsufficientRole,

    #[error("you do not own this record")]
    NotOwner,

    #[error("validation failed")]
    Validation(Vec<Violation>),

    #[error("{0} is already in use")]
    DuplicateIdentity(&'static str),

    #[error("this email is already on the allow-list")]
    AlreadyListed,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("'{0}' is not a valid complaint status")]
    InvalidStatus(String),

    #[error("a concurrent write conflicted with this one")]
    StoreConflict,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(violations: Vec<Violation>) -> Self {
        CoreError::Validation(violations)
    }
}
