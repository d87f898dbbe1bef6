// crates/geohash-core/src/coord.rs
use crate::error::{Axis, GeohashError, Result};
use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both axes are finite and inside their ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Rejects non-finite or out-of-range values, naming the offending axis.
    pub fn validate(&self) -> Result<()> {
        check_axis(Axis::Latitude, self.latitude)?;
        check_axis(Axis::Longitude, self.longitude)
    }

    /// Encodes this position; see [`crate::encode()`].
    pub fn encode(&self, precision: usize) -> Result<String> {
        crate::encode::encode(self.latitude, self.longitude, precision)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

fn check_axis(axis: Axis, value: f64) -> Result<()> {
    let (min, max) = axis.range();
    // NaN fails `contains`, so it is rejected here too
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        log::warn!("Rejecting {axis} {value}: outside [{min}, {max}]");
        Err(GeohashError::OutOfRangeCoordinate { axis, value })
    }
}

/// The cell covered by a geohash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Bounds {
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&point.longitude)
    }
}
