use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use tracing::instrument;

use crate::models::SearchParams;
use crate::render;
use crate::view::SearchView;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let mut view = SearchView::default();

    if let Some(q) = params.q {
        view.set_query(q);
        if let Some(query) = view.submit() {
            let outcome = state.gateway.search(&query).await;
            view.complete(outcome);
        }
    }

    Html(render::page(&view))
}
