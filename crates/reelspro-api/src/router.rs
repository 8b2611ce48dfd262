//! Route definitions for the ReelsPro HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(reel_routes())
        .merge(saved_routes())
        .merge(notification_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Reel CRUD, feed, and engagement endpoints
fn reel_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reels",
            get(handlers::reel::list_reels).post(handlers::reel::create_reel),
        )
        .route("/reels/likes", post(handlers::interaction::toggle_like))
        .route("/reels/comment", post(handlers::interaction::add_comment))
        .route("/reels/{id}", get(handlers::reel::get_reel))
        .route("/reels/{id}/share", post(handlers::reel::share_reel))
}

/// Saved-reel set endpoints
fn saved_routes() -> Router<AppState> {
    Router::new().route(
        "/saved-reels",
        get(handlers::interaction::list_saved).post(handlers::interaction::toggle_save),
    )
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new().route(
        "/notifications",
        get(handlers::notification::list_notifications),
    )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}
