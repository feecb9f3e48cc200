use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use jsonwebtoken::{EncodingKey, Header, encode};

use hostelhub_types::api::{
    Claims, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

use crate::error::ApiError;
use crate::{AppState, run_blocking};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let core_state = state.clone();
    let account = run_blocking(move || core_state.core.register_account(&req)).await?;

    let token = create_token(&state.jwt_secret, account.id, &account.username)
        .map_err(|_| ApiError::internal())?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: account.id,
            token,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let core_state = state.clone();
    let account =
        run_blocking(move || core_state.core.authenticate(&req.email, &req.password)).await?;

    let token = create_token(&state.jwt_secret, account.id, &account.username)
        .map_err(|_| ApiError::internal())?;

    Ok(Json(LoginResponse {
        user_id: account.id,
        username: account.username,
        role: account.role,
        token,
    }))
}

fn create_token(secret: &str, user_id: i64, username: &str) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::days(30)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}
