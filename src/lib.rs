//! geohash-rs: umbrella crate for the demos.
//!
//! Re-exports [`geohash_core`] so `use geohash_rs::prelude::*;` brings the
//! encoder, decoders, distances and claim policy into scope.

pub use geohash_core::*;
