// crates/geohash-core/src/error.rs
use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

/// Which coordinate axis a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Inclusive valid range for this axis, in degrees.
    pub const fn range(self) -> (f64, f64) {
        match self {
            Axis::Latitude => (-90.0, 90.0),
            Axis::Longitude => (-180.0, 180.0),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Errors produced by geohash encoding, decoding and claim checks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeohashError {
    #[error("geohash is empty")]
    EmptyInput,

    #[error("invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("{axis} {value} is outside the valid range")]
    OutOfRangeCoordinate { axis: Axis, value: f64 },

    #[error("precision must be at least one character")]
    InvalidPrecision,

    #[error("claim is {distance_km:.3} km away from the badge location (limit {max_distance_km} km)")]
    TooFar {
        distance_km: f64,
        max_distance_km: f64,
    },

    #[error("invalid claim policy: {0}")]
    InvalidPolicy(String),

    #[error("rounded coordinate is not a number: {0}")]
    Number(#[from] ParseFloatError),
}

pub type Result<T> = std::result::Result<T, GeohashError>;
