#![allow(clippy::useless_conversion)]

//! Python bindings for geohash-core.
//!
//! ```python
//! import geohash_py as gh
//!
//! gh.encode(57.64911, 10.40744, 6)        # 'u4pruy'
//! gh.decode("u4pruy")                     # (57.65, 10.4)
//! gh.check_claim("u33dc0", 52.5163, 13.3777)
//! ```

use geohash_core::{ClaimPolicy, GeohashError, DEFAULT_PRECISION};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyModule;
use serde::Serialize;

// Provide a single helper to convert geohash-core Results into PyResult
// while avoiding per-call mapping. Due to Rust orphan rules we cannot
// implement `From<GeohashError> for PyErr` in this crate, so we add an
// extension trait and use `.into_py()?` at call sites.
trait IntoPyResult<T> {
    fn into_py(self) -> PyResult<T>;
}

impl<T> IntoPyResult<T> for geohash_core::Result<T> {
    fn into_py(self) -> PyResult<T> {
        self.map_err(|e| match e {
            GeohashError::Number(_) => PyRuntimeError::new_err(e.to_string()),
            _ => PyValueError::new_err(e.to_string()),
        })
    }
}

fn to_py<'py, T: Serialize + ?Sized>(
    py: Python<'py>,
    value: &T,
) -> PyResult<Bound<'py, pyo3::PyAny>> {
    // Serialize to JSON string, then parse in Python via json.loads to get native dict/list
    let s = serde_json::to_string(value)
        .map_err(|e| PyErr::new::<PyRuntimeError, _>(format!("serde error: {e}")))?;
    let json_mod = PyModule::import_bound(py, "json")?;
    let loads = json_mod.getattr("loads")?;
    let obj = loads.call1((s,))?;
    Ok(obj)
}

/// Encode latitude/longitude into a geohash (default 12 characters).
#[pyfunction]
#[pyo3(signature = (latitude, longitude, precision = DEFAULT_PRECISION))]
fn encode(latitude: f64, longitude: f64, precision: usize) -> PyResult<String> {
    geohash_core::encode(latitude, longitude, precision).into_py()
}

/// Decode a geohash into a (latitude, longitude) tuple rounded to its precision.
#[pyfunction]
fn decode(geohash: &str) -> PyResult<(f64, f64)> {
    geohash_core::decode(geohash).into_py()
}

/// Decode a geohash into (latitude, longitude, latitude_error, longitude_error).
#[pyfunction]
fn decode_exactly(geohash: &str) -> PyResult<(f64, f64, f64, f64)> {
    let d = geohash_core::decode_exactly(geohash).into_py()?;
    Ok((d.latitude, d.longitude, d.latitude_error, d.longitude_error))
}

/// Cell bounds of a geohash as a dict.
#[pyfunction]
fn decode_bounds<'py>(py: Python<'py>, geohash: &str) -> PyResult<Bound<'py, pyo3::PyAny>> {
    let bounds = geohash_core::decode_bounds(geohash).into_py()?;
    to_py(py, &bounds)
}

/// Distance in meters estimated from the shared prefix of two geohashes.
#[pyfunction]
fn approximate_distance(a: &str, b: &str) -> PyResult<f64> {
    geohash_core::approximate_distance(a, b).into_py()
}

/// Great-circle distance in meters between two geohashes.
#[pyfunction]
fn haversine_distance(a: &str, b: &str) -> PyResult<f64> {
    geohash_core::haversine_distance(a, b).into_py()
}

/// Check a badge claim; returns a dict or raises ValueError when too far.
#[pyfunction]
#[pyo3(signature = (badge_geohash, latitude, longitude, max_km = geohash_core::claim::DEFAULT_MAX_DISTANCE_KM))]
fn check_claim<'py>(
    py: Python<'py>,
    badge_geohash: &str,
    latitude: f64,
    longitude: f64,
    max_km: f64,
) -> PyResult<Bound<'py, pyo3::PyAny>> {
    let check = ClaimPolicy::with_max_distance_km(max_km)
        .check(badge_geohash, latitude, longitude)
        .into_py()?;
    to_py(py, &check)
}

/// Python module entry point
#[pymodule]
fn geohash_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(decode_exactly, m)?)?;
    m.add_function(wrap_pyfunction!(decode_bounds, m)?)?;
    m.add_function(wrap_pyfunction!(approximate_distance, m)?)?;
    m.add_function(wrap_pyfunction!(haversine_distance, m)?)?;
    m.add_function(wrap_pyfunction!(check_claim, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
