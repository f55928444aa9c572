//! Great-circle distance between coordinate pairs
//!
//! Haversine formula over a spherical Earth. The intermediate term is
//! clamped to [0, 1]: floating-point error can push it marginally past 1.0
//! for antipodal points, which would feed NaN into the inverse step.

use crate::models::Coordinates;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers
///
/// Pure function; symmetric, and zero for coincident points.
#[must_use]
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
