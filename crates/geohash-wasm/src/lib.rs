//! geohash-wasm — WebAssembly bindings for geohash-core
//!
//! This crate exposes the geohash encoder/decoder to the badge forms running
//! in the browser: the map picker encodes the selected position before a
//! badge is saved, and the edit form decodes the stored `geohash` field to
//! place the marker again.
//!
//! What it provides
//! ----------------
//! - Panic hook + console banner on module load (via `#[wasm_bindgen(start)]`)
//! - `encode(lat, lon, precision?)` -> string
//! - `decode(hash)` -> `[lat, lon]`, rounded to the hash's precision
//! - `decode_exactly(hash)` -> `{ latitude, longitude, latitude_error, longitude_error }`
//! - `decode_bounds(hash)` -> `{ min_latitude, max_latitude, min_longitude, max_longitude }`
//! - `approximate_distance(a, b)`, `haversine_distance(a, b)` in meters
//! - `check_claim(badge, lat, lon, max_km?)` -> claim summary or a thrown error
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { encode, decode } from 'geohash-wasm';
//!
//! async function main() {
//!   await init();
//!   const hash = encode(57.64911, 10.40744, 6); // "u4pruy"
//!   const [lat, lon] = decode(hash);           // [57.65, 10.4]
//!   console.log(hash, lat, lon);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Invalid input throws a JS `Error` carrying the core error message
//!   (e.g. `invalid geohash character 'a' at position 3`).
//! - Objects are produced with `serde-wasm-bindgen`, so field names match the
//!   Rust structs.
use geohash_core::{ClaimPolicy, GeohashError, DEFAULT_PRECISION};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing geohash WASM module...".into());
}

// Convert core errors into thrown JS errors.
fn js_err(e: GeohashError) -> JsError {
    JsError::new(&e.to_string())
}

fn js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/* --------------------------------------------------------------------------
   Encoding
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn encode(latitude: f64, longitude: f64, precision: Option<usize>) -> Result<String, JsError> {
    geohash_core::encode(
        latitude,
        longitude,
        precision.unwrap_or(DEFAULT_PRECISION),
    )
    .map_err(js_err)
}

/* --------------------------------------------------------------------------
   Decoding
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn decode(geohash: &str) -> Result<js_sys::Array, JsError> {
    let (lat, lon) = geohash_core::decode(geohash).map_err(js_err)?;
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lon));
    Ok(pair)
}

#[wasm_bindgen]
pub fn decode_exactly(geohash: &str) -> Result<JsValue, JsError> {
    let exact = geohash_core::decode_exactly(geohash).map_err(js_err)?;
    js_value(&exact)
}

#[wasm_bindgen]
pub fn decode_bounds(geohash: &str) -> Result<JsValue, JsError> {
    let bounds = geohash_core::decode_bounds(geohash).map_err(js_err)?;
    js_value(&bounds)
}

/* --------------------------------------------------------------------------
   Distances & claims
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn approximate_distance(a: &str, b: &str) -> Result<f64, JsError> {
    geohash_core::approximate_distance(a, b).map_err(js_err)
}

#[wasm_bindgen]
pub fn haversine_distance(a: &str, b: &str) -> Result<f64, JsError> {
    geohash_core::haversine_distance(a, b).map_err(js_err)
}

#[wasm_bindgen]
pub fn check_claim(
    badge_geohash: &str,
    latitude: f64,
    longitude: f64,
    max_km: Option<f64>,
) -> Result<JsValue, JsError> {
    let policy = max_km.map_or_else(ClaimPolicy::default, ClaimPolicy::with_max_distance_km);
    let check = policy
        .check(badge_geohash, latitude, longitude)
        .map_err(js_err)?;
    js_value(&check)
}
