use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use super::AppState;

/// Register a new user
pub async fn register(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let email = payload.email.trim().to_lowercase();
    if state.repository.get_user_by_email(&email).await?.is_some() {
        return Err(AppError::AlreadyRegistered(email));
    }

    let password_hash = state.auth_service.hash_password(&payload.password).await?;
    let user = state
        .repository
        .create_user(payload.username.trim(), &email, &password_hash)
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Login to get JWT token
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let invalid = || AppError::Unauthorized("Email or password is not valid".to_string());

    let email = payload.email.trim().to_lowercase();
    let user = state
        .repository
        .get_user_by_email(&email)
        .await?
        .ok_or_else(invalid)?;

    if !state
        .auth_service
        .verify_password(&payload.password, &user.password_hash)
        .await?
    {
        return Err(invalid());
    }

    let token = state
        .auth_service
        .generate_token(&user.id.to_string(), &user.username, &user.email)?;

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
    }))
}

/// Current user, straight from the verified token
pub async fn current(auth: AuthUser) -> AppResult<impl IntoResponse> {
    let id = auth.user_id()?;
    let AuthUser(claims) = auth;

    Ok(Json(UserResponse {
        id,
        username: claims.username,
        email: claims.email,
    }))
}
