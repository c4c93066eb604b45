use resfinder_restaurant_service::models::Restaurant;
use tracing::error;

use crate::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Results,
    Empty,
}

/// State behind the search page.
///
/// Only one search runs at a time: `submit` refuses while a previous one has
/// not completed, so a slow response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct SearchView {
    pub search_query: String,
    pub results: Vec<Restaurant>,
    pub is_loading: bool,
    pub has_searched: bool,
}

impl SearchView {
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Starts a search and returns the query to run, or `None` when there is
    /// nothing to do.
    pub fn submit(&mut self) -> Option<String> {
        if self.is_loading || self.search_query.trim().is_empty() {
            return None;
        }

        self.is_loading = true;
        self.has_searched = true;
        Some(self.search_query.clone())
    }

    pub fn complete(&mut self, outcome: Result<Vec<Restaurant>, SearchError>) {
        self.results = match outcome {
            Ok(results) => results,
            Err(e) => {
                error!(error = %e, "search failed");
                Vec::new()
            }
        };
        self.is_loading = false;
    }

    pub fn state(&self) -> ViewState {
        if self.is_loading {
            ViewState::Loading
        } else if !self.results.is_empty() {
            ViewState::Results
        } else if self.has_searched {
            ViewState::Empty
        } else {
            ViewState::Idle
        }
    }
}
