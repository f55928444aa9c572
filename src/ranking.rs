//! Geo-ranked views over the place catalog
//!
//! A ranking is a full scan: the catalog is small and bounded, so there is
//! no spatial index. Results are ordered by non-decreasing distance, and
//! equal distances keep their catalog order (stable sort) so rankings are
//! deterministic.

use crate::Result;
use crate::geo;
use crate::models::{Coordinates, Place, RankedPlace};

/// Rank every place by great-circle distance from `origin`
///
/// The origin is validated before any distance is computed. `limit`
/// truncates the sorted result; `Some(0)` yields an empty ranking, a limit
/// beyond the catalog size yields the whole catalog, and `None` applies no
/// bound. The catalog itself is never mutated.
pub fn rank(
    catalog: &[Place],
    origin: &Coordinates,
    limit: Option<usize>,
) -> Result<Vec<RankedPlace>> {
    origin.validate()?;

    let mut ranked: Vec<RankedPlace> = catalog
        .iter()
        .map(|place| RankedPlace {
            place: place.clone(),
            distance: geo::distance_km(origin, &place.coordinates),
        })
        .collect();

    // total_cmp keeps the comparison total; sort_by is stable, so ties
    // preserve catalog order.
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TripScoutError;

    fn test_place(name: &str, lat: f64, lng: f64) -> Place {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "coordinates": {"lat": lat, "lng": lng},
        }))
        .unwrap()
    }

    fn equator_catalog() -> Vec<Place> {
        vec![
            test_place("A", 0.0, 0.0),
            test_place("B", 0.0, 1.0),
            test_place("C", 0.0, 2.0),
        ]
    }

    #[test]
    fn test_ranking_is_monotonic() {
        let catalog = vec![
            test_place("Far", 50.0, 50.0),
            test_place("Near", 1.0, 1.0),
            test_place("Mid", 20.0, 20.0),
            test_place("Origin", 0.0, 0.0),
        ];
        let ranked = rank(&catalog, &Coordinates::new(0.0, 0.0), None).unwrap();

        assert_eq!(ranked.len(), 4);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        assert_eq!(ranked[0].place.name, "Origin");
        assert_eq!(ranked[3].place.name, "Far");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // East and West are equidistant from the origin; North ties too.
        let catalog = vec![
            test_place("East", 0.0, 1.0),
            test_place("West", 0.0, -1.0),
            test_place("North", 1.0, 0.0),
        ];
        let ranked = rank(&catalog, &Coordinates::new(0.0, 0.0), None).unwrap();

        let names: Vec<&str> = ranked.iter().map(|r| r.place.name.as_str()).collect();
        assert_eq!(names, vec!["East", "West", "North"]);
    }

    #[test]
    fn test_limit_zero_returns_empty() {
        let ranked = rank(&equator_catalog(), &Coordinates::new(0.0, 0.0), Some(0)).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_limit_beyond_catalog_returns_everything() {
        let ranked = rank(&equator_catalog(), &Coordinates::new(0.0, 0.0), Some(1000)).unwrap();
        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_limit_truncates_after_sorting() {
        let ranked = rank(&equator_catalog(), &Coordinates::new(0.0, 2.0), Some(2)).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].place.name, "C");
        assert_eq!(ranked[1].place.name, "B");
    }

    #[test]
    fn test_empty_catalog_ranks_to_empty() {
        let ranked = rank(&[], &Coordinates::new(0.0, 0.0), None).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let err = rank(&equator_catalog(), &Coordinates::new(200.0, 88.3), None).unwrap_err();
        assert!(matches!(err, TripScoutError::InvalidCoordinate { .. }));

        let err = rank(&equator_catalog(), &Coordinates::new(f64::NAN, 0.0), None).unwrap_err();
        assert!(matches!(err, TripScoutError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_distances_are_annotated() {
        let ranked = rank(&equator_catalog(), &Coordinates::new(0.0, 0.0), Some(2)).unwrap();
        assert_eq!(ranked[0].place.name, "A");
        assert_eq!(ranked[0].distance, 0.0);
        assert_eq!(ranked[1].place.name, "B");
        assert!((ranked[1].distance - 111.2).abs() < 0.1);
    }
}
