//! Error types for the geo crate.
//!
//! The coordinate transforms themselves never fail; these errors only come
//! from parsing POI payloads, datum names and alignment configuration.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur at the parsing and configuration edges.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Datum name that is neither WGS-84 nor GCJ-02
    #[error("Unknown datum: {0}")]
    UnknownDatum(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Alignment configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error code for integration with host error reporting.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// JSON parsing error
    JsonParsing = 10001,
    /// Unknown datum name
    UnknownDatum = 10002,
    /// Configuration error
    Config = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::UnknownDatum(_) => GeoErrorCode::UnknownDatum,
            GeoError::Json(_) => GeoErrorCode::JsonParsing,
            GeoError::Config(_) => GeoErrorCode::Config,
        }
    }
}
