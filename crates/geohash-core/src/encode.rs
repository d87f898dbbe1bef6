// crates/geohash-core/src/encode.rs

//! # Encoder
//!
//! Latitude/longitude to geohash by interleaved interval bisection.
//! Global bit 0 (and every even bit) refines longitude, odd bits refine
//! latitude. Five bits, most significant first, make one symbol.

use crate::alphabet::{self, BIT_MASKS};
use crate::coord::Coordinate;
use crate::error::{GeohashError, Result};
use crate::interval::Interval;

/// Characters produced by [`encode_default`].
pub const DEFAULT_PRECISION: usize = 12;

// Upfront capacity is bounded so an absurd `precision` cannot overflow it.
const MAX_PREALLOCATED: usize = 64;

/// Encodes a position into a geohash of exactly `precision` characters.
///
/// A coordinate lying exactly on a midpoint goes to the lower half.
///
/// # Errors
/// - [`GeohashError::OutOfRangeCoordinate`] for non-finite values, latitudes
///   outside [-90, 90] or longitudes outside [-180, 180].
/// - [`GeohashError::InvalidPrecision`] when `precision` is zero.
///
/// There is no upper bound on `precision`. Past about 20 characters the hash
/// stops gaining resolution, and a huge value simply takes a long time.
///
/// # Examples
/// ```rust
/// use geohash_core::encode;
///
/// assert_eq!(encode(57.64911, 10.40744, 6).unwrap(), "u4pruy");
/// ```
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    Coordinate::new(latitude, longitude).validate()?;
    if precision == 0 {
        return Err(GeohashError::InvalidPrecision);
    }

    let mut lat = Interval::LATITUDE;
    let mut lon = Interval::LONGITUDE;
    let mut hash = String::with_capacity(precision.min(MAX_PREALLOCATED));
    let mut even = true;

    while hash.len() < precision {
        let mut value = 0u8;
        for mask in BIT_MASKS {
            let (interval, target) = if even {
                (&mut lon, longitude)
            } else {
                (&mut lat, latitude)
            };
            let upper = target > interval.mid();
            if upper {
                value |= mask;
            }
            interval.halve(upper);
            even = !even;
        }
        hash.push(alphabet::symbol(value));
    }

    Ok(hash)
}

/// Encodes with [`DEFAULT_PRECISION`] (12 characters, 60 bits).
pub fn encode_default(latitude: f64, longitude: f64) -> Result<String> {
    encode(latitude, longitude, DEFAULT_PRECISION)
}
