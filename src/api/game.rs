use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    api::validation::ValidatedJson,
    db,
    models::{
        ad::{AdResponse, CreateAdRequest, NewAd},
        app_state::AppState,
        error::ServerError,
    },
};

pub fn game_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_games))
        .route("/{game_id}/ads", get(list_game_ads).post(create_game_ad))
        .with_state(state)
}

async fn list_games(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ServerError> {
    let games = db::game::list_games(state.get_pool()).await?;
    Ok((StatusCode::OK, Json(games)))
}

async fn list_game_ads(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let ads = db::ad::list_ads_for_game(state.get_pool(), game_id).await?;

    let response = ads
        .into_iter()
        .map(AdResponse::from_summary)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            ServerError::Internal(format!("Stored ad for game {} is corrupt: {}", game_id, e))
        })?;

    debug!("Listed {} ads for game {}", response.len(), game_id);
    Ok((StatusCode::OK, Json(response)))
}

async fn create_game_ad(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CreateAdRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let new_ad = NewAd::from_request(request)
        .map_err(|e| ServerError::Api(StatusCode::BAD_REQUEST, e.to_string()))?;

    let ad = db::ad::create_ad(state.get_pool(), game_id, &new_ad).await?;

    info!("Created ad {} for game {}", ad.id, game_id);
    Ok((StatusCode::CREATED, Json(ad)))
}
