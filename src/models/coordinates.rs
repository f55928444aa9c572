//! Geographic coordinates with boundary validation

use serde::{Deserialize, Serialize};

use crate::error::TripScoutError;

/// A (latitude, longitude) pair in decimal degrees
///
/// Serialized as `lat`/`lng` to match the catalog JSON and the wire format
/// the frontend consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are finite and within valid degree ranges
    ///
    /// Catalog data is trusted static input and is not validated; every
    /// user-supplied coordinate must pass through here before any distance
    /// computation.
    pub fn validate(&self) -> Result<(), TripScoutError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(TripScoutError::invalid_coordinate(format!(
                "coordinates must be finite numbers, got ({}, {})",
                self.latitude, self.longitude
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(TripScoutError::invalid_coordinate(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(TripScoutError::invalid_coordinate(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Format as a human-readable coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(27.0360, 88.2627)]
    fn test_valid_coordinates(#[case] lat: f64, #[case] lng: f64) {
        assert!(Coordinates::new(lat, lng).validate().is_ok());
    }

    #[rstest]
    #[case(90.1, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(200.0, 88.3)]
    #[case(0.0, 180.5)]
    #[case(0.0, -181.0)]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NEG_INFINITY, 0.0)]
    fn test_invalid_coordinates(#[case] lat: f64, #[case] lng: f64) {
        let err = Coordinates::new(lat, lng).validate().unwrap_err();
        assert!(matches!(err, TripScoutError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_serde_field_names() {
        let coords: Coordinates = serde_json::from_str(r#"{"lat": 27.0, "lng": 88.26}"#).unwrap();
        assert_eq!(coords.latitude, 27.0);
        assert_eq!(coords.longitude, 88.26);

        let json = serde_json::to_value(coords).unwrap();
        assert_eq!(json["lat"], 27.0);
        assert_eq!(json["lng"], 88.26);
    }

    #[test]
    fn test_format_coordinates() {
        let coords = Coordinates::new(27.0360, 88.2627);
        assert_eq!(coords.format_coordinates(), "27.0360, 88.2627");
    }
}
