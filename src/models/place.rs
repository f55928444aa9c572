//! Travel destination records as shipped in the static catalog
//!
//! Field names follow the catalog JSON (camelCase). The descriptive fields
//! and sub-record lists are opaque to the query layer; only `name` and
//! `coordinates` ever drive a computation.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// One travel destination and its descriptive/associated data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_season: String,
    #[serde(default)]
    pub suggested_days: String,
    #[serde(default)]
    pub travel_tips: String,
    /// Image paths/URLs in display order
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub places_to_visit: Vec<PointOfInterest>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub rentals: Vec<Rental>,
}

/// A sight or activity at a destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A vehicle rental option (field `type` in the catalog JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub contact: String,
}

/// A place annotated with its distance from a query origin
///
/// Transient view: created by a single ranking call and discarded once the
/// response is produced, never persisted. Serializes as the place fields
/// plus a `distance` key, matching what the frontend expects.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlace {
    #[serde(flatten)]
    pub place: Place,
    /// Great-circle distance from the query origin in kilometers
    pub distance: f64,
}
