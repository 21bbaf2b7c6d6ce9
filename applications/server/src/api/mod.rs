/// API route modules
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Routes mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/add-user", post(users::create_user))
        .route("/users", get(users::list_users))
        .route("/user/:id", get(users::get_user))
        .route("/update-user/:id", put(users::update_user))
        .route("/delete-user/:id", delete(users::delete_user))
}

/// Full application router with tracing and CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome))
        .nest("/api", api_routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
