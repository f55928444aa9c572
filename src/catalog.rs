//! Static place catalog: load-once storage and name lookup
//!
//! The catalog is read from a JSON file exactly once, at startup, and is
//! immutable for the lifetime of the process. A failed load is fatal; the
//! service must never answer queries from a partial or absent catalog.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::Result;
use crate::error::TripScoutError;
use crate::models::Place;

/// Immutable collection of travel destinations
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Load the catalog from a JSON file (an array of place objects)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            TripScoutError::catalog_load(format!("cannot read {}: {e}", path.display()))
        })?;
        let places: Vec<Place> = serde_json::from_str(&data).map_err(|e| {
            TripScoutError::catalog_load(format!("malformed catalog {}: {e}", path.display()))
        })?;

        let catalog = Self::from_places(places)?;
        info!("Loaded {} places from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Build a catalog from already-deserialized places
    pub fn from_places(places: Vec<Place>) -> Result<Self> {
        if places.is_empty() {
            return Err(TripScoutError::catalog_load("catalog contains no places"));
        }
        if let Some(place) = places.iter().find(|p| p.name.trim().is_empty()) {
            return Err(TripScoutError::catalog_load(format!(
                "place at {} has an empty name",
                place.coordinates.format_coordinates()
            )));
        }

        warn_on_duplicate_names(&places);
        Ok(Self { places })
    }

    /// All places in their original catalog order
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Case-insensitive exact-name lookup
    ///
    /// If several entries share a name (a data-quality anomaly, warned about
    /// at load time), the first in catalog order wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Place> {
        let wanted = name.to_lowercase();
        self.places.iter().find(|p| p.name.to_lowercase() == wanted)
    }
}

/// Duplicate names are tolerated (first match wins on lookup) but flagged
fn warn_on_duplicate_names(places: &[Place]) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for place in places {
        if let Some(first) = seen.insert(place.name.to_lowercase(), place.name.as_str()) {
            warn!(
                "Duplicate place name in catalog: {:?} also appears as {:?}; lookups return the first entry",
                place.name, first
            );
        }
    }
}
