use serde::Deserialize;

/// Longest accepted access token lifetime (one year)
pub const MAX_JWT_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JWT secret key for token signing and validation
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub jwt_expiration_minutes: i64,
}

impl AuthConfig {
    /// Validate authentication configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters for security".to_string());
        }

        if self.jwt_expiration_minutes < 1 {
            return Err("JWT_EXPIRATION_MINUTES must be at least 1".to_string());
        }

        if self.jwt_expiration_minutes > MAX_JWT_EXPIRATION_MINUTES {
            return Err(format!(
                "JWT_EXPIRATION_MINUTES must be at most {}",
                MAX_JWT_EXPIRATION_MINUTES
            ));
        }

        Ok(())
    }
}
