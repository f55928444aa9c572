//! Error types and handling for the `TripScout` service

use thiserror::Error;

/// Main error type for the `TripScout` service
#[derive(Error, Debug)]
pub enum TripScoutError {
    /// A required query parameter was absent
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    /// A coordinate was present but non-finite or out of range
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Name lookup matched no catalog entry
    #[error("Place not found: {name}")]
    NotFound { name: String },

    /// Startup-time catalog load failure; fatal, never served around
    #[error("Catalog load failure: {message}")]
    CatalogLoad { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripScoutError {
    /// Create a new missing-parameter error
    pub fn missing_parameter<S: Into<String>>(name: S) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create a new invalid-coordinate error
    pub fn invalid_coordinate<S: Into<String>>(message: S) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a new catalog load error
    pub fn catalog_load<S: Into<String>>(message: S) -> Self {
        Self::CatalogLoad {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message, suitable for a response body
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripScoutError::MissingParameter { .. } => {
                "Latitude and longitude are required".to_string()
            }
            TripScoutError::InvalidCoordinate { message } => {
                format!("Invalid coordinate: {message}")
            }
            TripScoutError::NotFound { .. } => "Place not found".to_string(),
            TripScoutError::CatalogLoad { .. } => {
                "Place catalog is unavailable. The service cannot answer queries.".to_string()
            }
            TripScoutError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripScoutError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let missing_err = TripScoutError::missing_parameter("lat");
        assert!(matches!(missing_err, TripScoutError::MissingParameter { .. }));

        let coord_err = TripScoutError::invalid_coordinate("latitude out of range");
        assert!(matches!(coord_err, TripScoutError::InvalidCoordinate { .. }));

        let lookup_err = TripScoutError::not_found("Atlantis");
        assert!(matches!(lookup_err, TripScoutError::NotFound { .. }));
    }

    #[test]
    fn test_user_messages() {
        let missing_err = TripScoutError::missing_parameter("lng");
        assert_eq!(missing_err.user_message(), "Latitude and longitude are required");

        let coord_err = TripScoutError::invalid_coordinate("latitude 200 out of range");
        assert!(coord_err.user_message().contains("latitude 200"));

        let lookup_err = TripScoutError::not_found("Atlantis");
        assert_eq!(lookup_err.user_message(), "Place not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TripScoutError = io_err.into();
        assert!(matches!(err, TripScoutError::Io { .. }));
    }
}
