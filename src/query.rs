//! Query façade: the validated entry points the HTTP boundary calls
//!
//! Raw query-string values are parsed and validated here; nothing untyped
//! ever reaches the distance or ranking code.

use std::sync::Arc;

use tracing::debug;

use crate::Result;
use crate::catalog::Catalog;
use crate::error::TripScoutError;
use crate::models::{Coordinates, Place, RankedPlace};
use crate::ranking;

/// Result-count bound applied to nearby queries when none is given
pub const DEFAULT_NEARBY_LIMIT: usize = 5;

/// Read-only query surface over the shared catalog
///
/// Holds the catalog behind an `Arc`: constructed once at startup and
/// shared by reference into every request, never reassigned.
#[derive(Debug, Clone)]
pub struct PlaceQueryService {
    catalog: Arc<Catalog>,
}

impl PlaceQueryService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Full catalog, unranked, in catalog order
    #[must_use]
    pub fn get_all(&self) -> &[Place] {
        self.catalog.places()
    }

    /// Case-insensitive exact-name lookup
    pub fn get_by_name(&self, name: &str) -> Result<&Place> {
        self.catalog
            .find_by_name(name)
            .ok_or_else(|| TripScoutError::not_found(name))
    }

    /// Top-N places closest to the supplied origin
    ///
    /// `raw_limit` falls back to [`DEFAULT_NEARBY_LIMIT`] when absent or
    /// unparsable; absent or invalid coordinates are errors.
    pub fn get_nearby(
        &self,
        raw_lat: Option<&str>,
        raw_lng: Option<&str>,
        raw_limit: Option<&str>,
    ) -> Result<Vec<RankedPlace>> {
        let origin = parse_origin(raw_lat, raw_lng)?;
        let limit = parse_limit(raw_limit);
        debug!(
            "Nearby query from ({}) with limit {limit}",
            origin.format_coordinates()
        );
        ranking::rank(self.catalog.places(), &origin, Some(limit))
    }

    /// The whole catalog ranked by distance from the supplied origin
    pub fn get_sorted_by_distance(
        &self,
        raw_lat: Option<&str>,
        raw_lng: Option<&str>,
    ) -> Result<Vec<RankedPlace>> {
        let origin = parse_origin(raw_lat, raw_lng)?;
        debug!(
            "Sorted-by-distance query from ({})",
            origin.format_coordinates()
        );
        ranking::rank(self.catalog.places(), &origin, None)
    }
}

fn parse_origin(raw_lat: Option<&str>, raw_lng: Option<&str>) -> Result<Coordinates> {
    let latitude = parse_coordinate("lat", raw_lat)?;
    let longitude = parse_coordinate("lng", raw_lng)?;
    let origin = Coordinates::new(latitude, longitude);
    origin.validate()?;
    Ok(origin)
}

fn parse_coordinate(name: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| TripScoutError::missing_parameter(name))?;

    raw.parse::<f64>().map_err(|_| {
        TripScoutError::invalid_coordinate(format!("{name} is not a number: {raw:?}"))
    })
}

/// Absent or unparsable limits fall back to the default rather than erroring
fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_NEARBY_LIMIT)
}
