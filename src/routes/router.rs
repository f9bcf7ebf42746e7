use crate::config::{CorsPolicy, HttpConfig};
use crate::error::{panic_response, AppError};
use crate::middleware::{options_short_circuit, request_logger};
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, Uri};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use super::contact_handlers;
use super::health;
use super::user_handlers;
use super::AppState;

/// Create application router
pub fn create_router(state: Arc<AppState>, cors: &CorsPolicy, http: &HttpConfig) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/ping", get(health::ping));

    // Collection path is served with and without the trailing slash
    let contact_collection =
        get(contact_handlers::list_contacts).post(contact_handlers::create_contact);
    let contact_routes = Router::new()
        .route("/api/contacts", contact_collection.clone())
        .route("/api/contacts/", contact_collection)
        .route(
            "/api/contacts/{id}",
            get(contact_handlers::get_contact)
                .put(contact_handlers::update_contact)
                .delete(contact_handlers::delete_contact),
        );

    let user_routes = Router::new()
        .route("/register", post(user_handlers::register))
        .route("/login", post(user_handlers::login))
        .route("/current", get(user_handlers::current));

    let routes = Router::new()
        .merge(health_routes)
        .merge(contact_routes)
        .nest("/api/users", user_routes)
        .with_state(state);

    apply_pipeline(routes, cors, http)
}

/// Wrap `routes` in the request pipeline.
///
/// Stages run top to bottom: CORS, plain `OPTIONS` short-circuit, body limit
/// for JSON parsing, request logger, then the routes. Failures end in the error handler: handlers return
/// `AppError`, unmatched requests hit the JSON fallbacks and panics are caught
/// by the innermost layer. Every error response still passes back out through
/// the logger and CORS.
pub fn apply_pipeline(routes: Router, cors: &CorsPolicy, http: &HttpConfig) -> Router {
    routes
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(cors.layer())
                .layer(middleware::from_fn(options_short_circuit))
                .layer(DefaultBodyLimit::max(http.max_body_bytes))
                .layer(middleware::from_fn(request_logger))
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
