use axum::{http::StatusCode, response::Json};
use resfinder_restaurant_service::StoreError;
use tokio::task::JoinError;

use crate::models::SearchResponse;

const GENERIC_FAILURE: &str = "Search failed. Please try again later.";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search is temporarily unavailable")]
    Disabled,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,
    #[error("Invalid search query")]
    InvalidQuery,
    #[error("Search error: {0}")]
    Store(#[from] StoreError),
    #[error("Search task failed: {0}")]
    Task(#[from] JoinError),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::Disabled => StatusCode::SERVICE_UNAVAILABLE,
            SearchError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            SearchError::InvalidQuery => StatusCode::BAD_REQUEST,
            SearchError::MissingDatabaseUrl | SearchError::Store(_) | SearchError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to users. Internal failures collapse to a generic one.
    pub fn public_message(&self) -> String {
        match self {
            SearchError::MissingDatabaseUrl | SearchError::Store(_) | SearchError::Task(_) => {
                GENERIC_FAILURE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl axum::response::IntoResponse for SearchError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(SearchResponse {
            data: None,
            error: Some(self.public_message()),
        });

        (self.status_code(), body).into_response()
    }
}
