pub mod page;
pub mod search;

pub use page::router as page_router;
pub use search::router as search_router;

use std::sync::Arc;
use utoipa::OpenApi;

use crate::gateway::SearchGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<SearchGateway>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        search::search_restaurants,
        search::revalidate,
    ),
    components(
        schemas(
            crate::models::Restaurant,
            crate::models::SearchResponse,
            crate::models::RevalidateRequest,
            crate::models::RevalidateResponse,
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant search endpoints"),
        (name = "cache", description = "Search cache maintenance")
    ),
    info(
        title = "ResFinder",
        description = "Find a direct link to a restaurant's reservation page",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
