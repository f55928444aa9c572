//! `TripScout` - Travel destination catalog and geo-ranked discovery
//!
//! This library provides the core functionality for serving a static
//! catalog of travel destinations: great-circle distance computation,
//! geo-ranked queries, name lookup, and the HTTP boundary exposing them.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod query;
pub mod ranking;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::TripScoutConfig;
pub use error::TripScoutError;
pub use models::{Coordinates, Hotel, Place, PointOfInterest, RankedPlace, Rental, Restaurant};
pub use query::PlaceQueryService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripScoutError>;
