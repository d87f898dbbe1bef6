//! geohash-core prelude: bring common types and functions into scope.

pub use crate::alphabet::{validate, BASE32};
pub use crate::claim::{ClaimCheck, ClaimPolicy};
pub use crate::coord::{Bounds, Coordinate};
pub use crate::decode::{decode, decode_bounds, decode_display, decode_exactly, ExactDecode};
pub use crate::distance::{approximate_distance, haversine, haversine_distance};
pub use crate::encode::{encode, encode_default, DEFAULT_PRECISION};
pub use crate::error::{Axis, GeohashError, Result};
