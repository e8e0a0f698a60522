// crates/aeropath-core/src/error.rs
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the travel log.
///
/// Statistics and the query pipeline never fail; these variants only come
/// from input validation, id lookups and file transport.
#[derive(Debug, Error)]
pub enum TravelLogError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("City not found: {0}")]
    CityNotFound(Uuid),

    #[error("Collection not found: {0}")]
    CollectionNotFound(Uuid),

    #[error("Default collection cannot be deleted: {0}")]
    DefaultCollection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TravelLogError>;
