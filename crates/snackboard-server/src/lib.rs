//! snackboard-server
//!
//! The HTTP surface: attendee catalog + feedback routes, admin catalog CRUD,
//! and the wiring (state, error mapping, request logging, CORS).

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Attendee-facing
        .route("/categories", get(routes::categories::list_categories))
        .route("/catalog/{year}", get(routes::catalog::get_catalog))
        .route("/feedback", post(routes::feedback::submit_feedback))
        // Admin
        .route("/feedback/{year}", get(routes::feedback::list_feedback))
        .route("/snacks", get(routes::snacks::list_snacks))
        .route("/snacks", post(routes::snacks::create_snack))
        .route("/snacks/{id}", put(routes::snacks::update_snack))
        .route("/snacks/{id}", delete(routes::snacks::delete_snack))
        .route("/snacks/{id}/years/{year}", put(routes::snacks::toggle_year))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
