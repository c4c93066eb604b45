use axum::Router;
use dotenvy::dotenv;
use resfinder_restaurant_service::PgRestaurantStore;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod cache;
mod clock;
mod config;
mod error;
mod gateway;
mod handlers;
mod models;
mod portal;
mod rate_limit;
mod render;
mod view;

#[cfg(test)]
mod testing;

use clock::SystemClock;
use config::EnvSettings;
use gateway::{CACHE_TTL, SearchGateway};
use handlers::{ApiDoc, AppState, page_router, search_router};

fn app(state: AppState) -> Router {
    Router::new()
        .merge(page_router())
        .merge(search_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let gateway = Arc::new(SearchGateway::new(
        Arc::new(EnvSettings),
        Arc::new(PgRestaurantStore::default()),
        Arc::new(SystemClock),
    ));

    // Expired entries are otherwise only dropped when their key is looked up again.
    let sweeper = gateway.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CACHE_TTL);
        loop {
            interval.tick().await;
            sweeper.evict_expired();
        }
    });

    let state = AppState { gateway };

    let listener = tokio::net::TcpListener::bind(config::bind_addr()).await?;
    info!("ResFinder listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
