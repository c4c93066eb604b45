use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::{get, post},
};
use tracing::{info, instrument};

use crate::error::SearchError;
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/restaurants/search", get(search_restaurants))
        .route("/api/revalidate", post(revalidate))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching restaurants, at most 20", body = SearchResponse),
        (status = 400, description = "Query contains forbidden characters", body = SearchResponse),
        (status = 429, description = "Rate limit exceeded", body = SearchResponse),
        (status = 500, description = "Search failed", body = SearchResponse),
        (status = 503, description = "Search disabled", body = SearchResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, SearchError> {
    let query = params.q.unwrap_or_default();
    let results = state.gateway.search(&query).await?;

    Ok(Json(SearchResponse {
        data: Some(results.into_iter().map(Restaurant::from).collect()),
        error: None,
    }))
}

#[utoipa::path(
    post,
    path = "/api/revalidate",
    request_body = RevalidateRequest,
    responses(
        (status = 200, description = "Cached searches evicted", body = RevalidateResponse),
    ),
    tag = "cache"
)]
#[instrument(skip(state))]
pub async fn revalidate(
    State(state): State<AppState>,
    Json(payload): Json<RevalidateRequest>,
) -> Json<RevalidateResponse> {
    let evicted = state.gateway.revalidate_tag(&payload.tag);
    info!(tag = %payload.tag, evicted, "revalidated search cache");

    Json(RevalidateResponse { evicted })
}
