use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{self, users},
    infra::app_state::AppState,
};

pub mod v1 {
    pub const USERS: &str = "/v1/users";
    pub const HEALTH: &str = "/health";
}

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new().route(v1::USERS, get(users::list_users))
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(v1::HEALTH, get(handlers::health))
        .merge(create_v1_router())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
