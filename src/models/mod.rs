//! Data models for the place catalog and ranked query results

mod coordinates;
mod place;

pub use coordinates::Coordinates;
pub use place::{Hotel, Place, PointOfInterest, RankedPlace, Rental, Restaurant};
