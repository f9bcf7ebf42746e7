use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub sub: String, // User ID
    pub username: String,
    pub email: String,
    pub exp: i64, // Expiration time as Unix timestamp
    pub iat: i64, // Issued at time as Unix timestamp
}

/// JWT authentication service
#[derive(Clone)]
pub struct AuthService {
    secret: String,
    expiration_minutes: i64,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(secret: String, expiration_minutes: i64) -> Self {
        Self {
            secret,
            expiration_minutes,
        }
    }

    /// Generate a JWT token for a user
    pub fn generate_token(&self, user_id: &str, username: &str, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let exp = Duration::try_minutes(self.expiration_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "Token lifetime of {} minutes is out of range",
                    self.expiration_minutes
                ))
            })?;

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    /// Validate a JWT token and return claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::new(Algorithm::HS256),
        )?
        .claims;

        Ok(claims)
    }

    /// Hash a plaintext password for storage.
    ///
    /// bcrypt is CPU bound, so it runs on the blocking pool.
    pub async fn hash_password(&self, password: &str) -> AppResult<String> {
        let password = password.to_string();
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))??;
        Ok(hash)
    }

    /// Check a plaintext password against a stored hash
    pub async fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))??;
        Ok(matches)
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authenticated caller, extracted from the bearer token.
///
/// Handlers that take this extractor are private routes: a missing, malformed,
/// or expired token rejects the request with `401` before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> AppResult<uuid::Uuid> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::Unauthorized("Token subject is not a valid user id".to_string()))
    }
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized("User is not authorized or token is missing".to_string())
            })?;

        let token = bearer_token(value).ok_or_else(|| {
            AppError::Unauthorized("Authorization header must use the Bearer scheme".to_string())
        })?;

        let claims = state.auth_service.validate_token(token)?;
        Ok(AuthUser(claims))
    }
}
