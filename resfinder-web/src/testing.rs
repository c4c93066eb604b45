//! In-memory stand-ins for the gateway's collaborators.

use resfinder_restaurant_service::{models::Restaurant, QueryError, RestaurantStore, StoreError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

use crate::config::Settings;

pub fn restaurant(name: &str, location: &str, aliases: Option<&str>, portal: &str) -> Restaurant {
    Restaurant {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: location.to_string(),
        aliases: aliases.map(str::to_string),
        booking_url: format!("https://book.example.com/{}", name.to_lowercase().replace(' ', "-")),
        booking_portal: portal.to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub struct FixedSettings {
    pub database_url: Option<String>,
    pub search_disabled: bool,
}

impl Default for FixedSettings {
    fn default() -> Self {
        Self {
            database_url: Some("postgres://test@localhost/resfinder".to_string()),
            search_disabled: false,
        }
    }
}

impl Settings for FixedSettings {
    fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    fn search_disabled(&self) -> bool {
        self.search_disabled
    }
}

/// Evaluates `%term%` patterns the way `ILIKE` would for plain terms and
/// records every call.
pub struct MemoryStore {
    rows: Vec<Restaurant>,
    calls: AtomicUsize,
    fail_next: AtomicBool,
    last_call: Mutex<Option<(String, String)>>,
}

impl MemoryStore {
    pub fn new(rows: Vec<Restaurant>) -> Self {
        Self {
            rows,
            calls: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
            last_call: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn last_pattern(&self) -> Option<String> {
        self.last_call.lock().unwrap().as_ref().map(|(_, p)| p.clone())
    }

    pub fn last_database_url(&self) -> Option<String> {
        self.last_call.lock().unwrap().as_ref().map(|(u, _)| u.clone())
    }
}

impl RestaurantStore for MemoryStore {
    fn search(
        &self,
        database_url: &str,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<Restaurant>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((database_url.to_string(), pattern.to_string()));

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Query(QueryError::BrokenTransactionManager));
        }

        let term = pattern.trim_matches('%').to_lowercase();
        let matches = |field: &str| field.to_lowercase().contains(&term);

        let mut found: Vec<_> = self
            .rows
            .iter()
            .filter(|r| {
                matches(&r.name)
                    || matches(&r.location)
                    || r.aliases.as_deref().is_some_and(matches)
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found.truncate(limit as usize);
        Ok(found)
    }
}
