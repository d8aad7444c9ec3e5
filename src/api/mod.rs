use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    api::{ad::ad_routes, cors::cors_layer, game::game_routes, health::health_routes},
    models::app_state::AppState,
};

pub mod ad;
pub mod cors;
pub mod game;
pub mod health;
pub mod validation;

pub fn app_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/games", game_routes(state.clone()))
        .nest("/ads", ad_routes(state.clone()))
        .nest("/health", health_routes(state))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
