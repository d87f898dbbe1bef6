// crates/geohash-core/src/lib.rs

//! # geohash-core
//!
//! Geohash encoding and decoding for badge locations.
//!
//! - [`encode()`] turns a latitude/longitude into a base-32 geohash.
//! - [`decode_exactly`] returns the cell center with its error margins.
//! - [`decode()`] rounds the center to the decimals the hash really resolves.
//! - [`distance`] and [`claim`] compare a claimant's position with a badge's
//!   stored geohash.
//!
//! ```rust
//! use geohash_core::prelude::*;
//!
//! let hash = encode(57.64911, 10.40744, 6)?;
//! assert_eq!(hash, "u4pruy");
//!
//! let exact = decode_exactly(&hash)?;
//! assert!((exact.latitude - 57.64911).abs() <= exact.latitude_error);
//! # Ok::<(), GeohashError>(())
//! ```

pub mod alphabet;
pub mod claim;
pub mod coord;
pub mod decode;
pub mod distance;
pub mod encode;
pub mod error;
mod interval;
pub mod prelude;

// Re-exports
pub use crate::claim::{ClaimCheck, ClaimPolicy};
pub use crate::coord::{Bounds, Coordinate};
pub use crate::decode::{decode, decode_bounds, decode_display, decode_exactly, ExactDecode};
pub use crate::distance::{approximate_distance, haversine, haversine_distance};
pub use crate::encode::{encode, encode_default, DEFAULT_PRECISION};
pub use crate::error::{Axis, GeohashError, Result};
