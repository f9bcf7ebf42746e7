mod auth;
mod body;
mod cors;
mod database;
mod server;

pub use auth::{AuthConfig, MAX_JWT_EXPIRATION_MINUTES};
pub use body::HttpConfig;
pub use cors::{CorsPolicy, ALLOWED_HEADERS, ALLOWED_METHODS, ALLOWED_ORIGINS};
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use std::env;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub http: HttpConfig,
    pub cors: CorsPolicy,
}

/// Read `key` from the environment, falling back to `default`, and parse it.
fn env_or<T: FromStr>(key: &str, default: &str) -> AppResult<T> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid {}", key)))
}

fn require_env(key: &str) -> AppResult<String> {
    env::var(key).map_err(|_| AppError::MissingEnvVar(key.to_string()))
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads the process environment only; the binary loads `.env` once at
    /// startup before calling this.
    pub fn from_env() -> AppResult<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_or("PORT", &DEFAULT_PORT.to_string())?;
        let environment = env::var("APP_ENV")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let database = DatabaseConfig {
            url: require_env("DATABASE_URL")?,
            max_connections: env_or("DB_MAX_CONNECTIONS", "10")?,
            min_connections: env_or("DB_MIN_CONNECTIONS", "1")?,
            acquire_timeout_seconds: env_or("DB_ACQUIRE_TIMEOUT_SECONDS", "30")?,
        };

        let auth = AuthConfig {
            jwt_secret: require_env("JWT_SECRET")?,
            jwt_expiration_minutes: env_or("JWT_EXPIRATION_MINUTES", "15")?,
        };

        let http = HttpConfig {
            max_body_bytes: env_or(
                "MAX_BODY_BYTES",
                &HttpConfig::default().max_body_bytes.to_string(),
            )?,
        };

        let config = Config {
            server: ServerConfig {
                host,
                port,
                environment,
            },
            database,
            auth,
            http,
            cors: CorsPolicy::default(),
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.server.validate().map_err(AppError::Configuration)?;
        self.database.validate().map_err(AppError::Configuration)?;
        self.auth.validate().map_err(AppError::Configuration)?;
        self.http.validate().map_err(AppError::Configuration)?;
        self.cors.validate().map_err(AppError::Configuration)?;
        Ok(())
    }
}
