pub mod admin;
pub mod auth;
pub mod complaints;
pub mod error;
pub mod events;
pub mod middleware;
pub mod profile;
pub mod public;

use std::sync::Arc;

use tracing::error;

use hostelhub_core::{Core, CoreError};
use hostelhub_types::models::Account;

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub core: Core,
    pub jwt_secret: String,
}

/// Re-read the actor's account for this request. A valid token whose account
/// has since disappeared is treated as unauthenticated.
pub(crate) fn load_actor(state: &AppStateInner, user_id: i64) -> Result<Account, CoreError> {
    state
        .core
        .account_by_id(user_id)?
        .ok_or(CoreError::AuthenticationRequired)
}

/// Run a blocking core operation off the async runtime.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::internal()
        })?
        .map_err(ApiError::from)
}
