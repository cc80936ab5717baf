//! Error types for address encoding and decoding.

use thiserror::Error;

/// Coordinate axis named in [`QuadTreeError::InvalidCoordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Error, Debug)]
pub enum QuadTreeError {
    /// Latitude or longitude outside the WGS84 range, or not finite.
    #[error("{axis} {value} is not within the allowed range")]
    InvalidCoordinate { axis: Axis, value: f64 },

    #[error("Invalid depth: {0} (expected 1..=26)")]
    InvalidDepth(i64),

    #[error("Invalid quad tree address: {0:?}")]
    InvalidAddress(String),

    #[error("Quad tree address must have a depth of at least {required}, got {actual}")]
    InsufficientDepth { required: usize, actual: usize },

    #[error("Invalid packed quad tree value: {0:#018x}")]
    InvalidEncoding(u64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuadTreeError>;
