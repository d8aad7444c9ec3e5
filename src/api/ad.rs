use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    db,
    models::{app_state::AppState, error::ServerError},
};

pub fn ad_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/{ad_id}/discord", get(get_ad_discord))
        .with_state(state)
}

async fn get_ad_discord(
    State(state): State<Arc<AppState>>,
    Path(ad_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let discord = db::ad::get_ad_contact(state.get_pool(), ad_id).await?;
    Ok((StatusCode::OK, Json(json!({ "discord": discord }))))
}
