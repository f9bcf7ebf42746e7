use crate::auth::AuthService;
use crate::db::Repository;
use std::time::Instant;

/// Application state shared across all HTTP handlers.
///
/// This struct is wrapped in `Arc` and shared across all request handlers
/// via Axum's State extraction. The repository is the only shared resource
/// and is read-only once constructed.
#[derive(Clone)]
pub struct AppState {
    /// Database repository for user and contact operations
    pub repository: Repository,

    /// JWT authentication service for token generation and validation
    pub auth_service: AuthService,

    /// Deployment environment name reported by `/health`
    pub environment: String,

    /// When the server started, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    pub fn new(repository: Repository, auth_service: AuthService, environment: String) -> Self {
        Self {
            repository,
            auth_service,
            environment,
            started_at: Instant::now(),
        }
    }
}
