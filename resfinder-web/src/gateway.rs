use resfinder_restaurant_service::{models::Restaurant, search_pattern, RestaurantStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::cache::TtlCache;
use crate::clock::Clock;
use crate::config::Settings;
use crate::error::SearchError;
use crate::rate_limit::RateLimiter;

pub const RESULT_LIMIT: i64 = 20;
pub const RATE_LIMIT: u32 = 10;
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);
pub const CACHE_TTL: Duration = Duration::from_secs(300);
pub const CACHE_TAG: &str = "restaurants";

const MIN_QUERY_LEN: usize = 2;
const MAX_QUERY_LEN: usize = 100;
const FORBIDDEN_CHARS: [char; 7] = ['<', '>', '{', '}', '[', ']', '\\'];

// Callers are not told apart; everyone shares one quota.
const RATE_LIMIT_KEY: &str = "anonymous";

pub struct SearchGateway {
    settings: Arc<dyn Settings>,
    store: Arc<dyn RestaurantStore>,
    limiter: RateLimiter,
    cache: TtlCache<Vec<Restaurant>>,
}

impl SearchGateway {
    pub fn new(
        settings: Arc<dyn Settings>,
        store: Arc<dyn RestaurantStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            store,
            limiter: RateLimiter::new(RATE_LIMIT, RATE_LIMIT_WINDOW, clock.clone()),
            cache: TtlCache::new(CACHE_TTL, clock),
        }
    }

    /// Looks up restaurants whose name, location or aliases contain `query`.
    ///
    /// Every call that gets past the kill switch counts against the rate
    /// limit, including cache hits and queries outside the length bounds.
    /// Queries shorter than 2 or longer than 100 characters after trimming
    /// yield an empty list rather than an error.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Restaurant>, SearchError> {
        if self.settings.search_disabled() {
            return Err(SearchError::Disabled);
        }

        if !self.limiter.check(RATE_LIMIT_KEY) {
            warn!("search rate limit exceeded");
            return Err(SearchError::RateLimited);
        }

        let database_url = self.settings.database_url().ok_or_else(|| {
            error!("DATABASE_URL is not set");
            SearchError::MissingDatabaseUrl
        })?;

        let query = query.trim();
        if query.contains(&FORBIDDEN_CHARS[..]) {
            return Err(SearchError::InvalidQuery);
        }

        let len = query.chars().count();
        if !(MIN_QUERY_LEN..=MAX_QUERY_LEN).contains(&len) {
            return Ok(Vec::new());
        }

        let key = cache_key(query);
        if let Some(hit) = self.cache.get(&key) {
            debug!(results = hit.len(), "search cache hit");
            return Ok(hit);
        }

        let store = Arc::clone(&self.store);
        let pattern = search_pattern(query);
        let results = tokio::task::spawn_blocking(move || {
            store.search(&database_url, &pattern, RESULT_LIMIT)
        })
        .await
        .map_err(|e| {
            error!(error = %e, "search task failed");
            SearchError::Task(e)
        })?
        .map_err(|e| {
            error!(error = %e, "search error");
            SearchError::Store(e)
        })?;

        self.cache.insert(key, results.clone(), &[CACHE_TAG]);
        debug!(
            results = results.len(),
            cached = self.cache.len(),
            "search results cached"
        );

        Ok(results)
    }

    /// Drops every cached search carrying `tag`.
    pub fn revalidate_tag(&self, tag: &str) -> usize {
        self.cache.revalidate_tag(tag)
    }

    pub fn evict_expired(&self) {
        self.cache.evict_expired();
    }
}

fn cache_key(query: &str) -> String {
    format!("restaurant-search-{query}")
}
