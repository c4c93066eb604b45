use chrono::{DateTime, Utc};
use resfinder_restaurant_service::models;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free-text query matched against name, location and aliases
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    /// Unique identifier for the restaurant
    pub id: Uuid,
    /// Name of the restaurant
    pub name: String,
    /// Neighbourhood or city
    pub location: String,
    /// Alternative names, if any
    pub aliases: Option<String>,
    /// Link to the reservation page
    pub booking_url: String,
    /// Reservation service behind `booking_url` (e.g. "Resy")
    pub booking_portal: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<models::Restaurant> for Restaurant {
    fn from(r: models::Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            location: r.location,
            aliases: r.aliases,
            booking_url: r.booking_url,
            booking_portal: r.booking_portal,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Every search answers with this shape; exactly one side is set.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// Matching restaurants, ordered by name; null on error
    pub data: Option<Vec<Restaurant>>,
    /// Human-readable failure; null on success
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RevalidateRequest {
    /// Cache tag to evict (e.g. "restaurants")
    pub tag: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RevalidateResponse {
    /// Number of cached searches dropped
    pub evicted: usize,
}
