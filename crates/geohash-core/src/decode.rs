// crates/geohash-core/src/decode.rs

//! # Decoders
//!
//! [`decode_exactly`] replays the encoder's bisection and returns the cell
//! center together with its half-widths. [`decode()`] rounds that center to the
//! decimals the hash actually resolves, so callers never display more digits
//! than were encoded.

use crate::alphabet::{self, BIT_MASKS};
use crate::coord::{Bounds, Coordinate};
use crate::error::Result;
use crate::interval::Interval;
use serde::{Deserialize, Serialize};

/// Upper bound on decimals produced by display rounding; f64 carries no more.
pub const MAX_DISPLAY_DIGITS: usize = 17;

// Enough decimals to print any f64 without loss.
const EXACT_DIGITS: usize = 1074;

/// Cell center of a geohash plus the half-width of the cell on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExactDecode {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_error: f64,
    pub longitude_error: f64,
}

impl ExactDecode {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_latitude: self.latitude - self.latitude_error,
            max_latitude: self.latitude + self.latitude_error,
            min_longitude: self.longitude - self.longitude_error,
            max_longitude: self.longitude + self.longitude_error,
        }
    }
}

/// Decodes a geohash into its cell center and error margins.
///
/// The whole input is validated before any arithmetic happens.
///
/// # Errors
/// [`GeohashError::EmptyInput`](crate::GeohashError::EmptyInput) for `""` and
/// [`GeohashError::InvalidCharacter`](crate::GeohashError::InvalidCharacter)
/// for anything outside the geohash alphabet.
///
/// # Examples
/// ```rust
/// use geohash_core::decode_exactly;
///
/// let d = decode_exactly("ezs42").unwrap();
/// assert!((d.latitude - 42.6).abs() < d.latitude_error);
/// assert!((d.longitude + 5.6).abs() < d.longitude_error);
/// ```
pub fn decode_exactly(hash: &str) -> Result<ExactDecode> {
    let symbols = alphabet::symbols(hash)?;

    let mut lat = Interval::LATITUDE;
    let mut lon = Interval::LONGITUDE;
    let mut lat_err = 90.0_f64;
    let mut lon_err = 180.0_f64;
    let mut even = true;

    for value in symbols {
        for mask in BIT_MASKS {
            let upper = value & mask != 0;
            if even {
                lon_err /= 2.0;
                lon.halve(upper);
            } else {
                lat_err /= 2.0;
                lat.halve(upper);
            }
            even = !even;
        }
    }

    Ok(ExactDecode {
        latitude: lat.mid(),
        longitude: lon.mid(),
        latitude_error: lat_err,
        longitude_error: lon_err,
    })
}

/// Decodes a geohash into `(latitude, longitude)` rounded to the decimals
/// its precision justifies.
///
/// # Examples
/// ```rust
/// use geohash_core::decode;
///
/// // 15 latitude bits resolve two decimals, 15 longitude bits only one
/// let (lat, lon) = decode("u4pruy").unwrap();
/// assert_eq!((lat, lon), (57.65, 10.4));
/// ```
pub fn decode(hash: &str) -> Result<(f64, f64)> {
    let (lat, lon) = decode_display(hash)?;
    Ok((lat.parse()?, lon.parse()?))
}

/// Like [`decode()`], but returns the trimmed decimal strings.
pub fn decode_display(hash: &str) -> Result<(String, String)> {
    let exact = decode_exactly(hash)?;
    Ok((
        format_with_error(exact.latitude, exact.latitude_error),
        format_with_error(exact.longitude, exact.longitude_error),
    ))
}

/// Returns the cell covered by `hash`.
pub fn decode_bounds(hash: &str) -> Result<Bounds> {
    decode_exactly(hash).map(|d| d.bounds())
}

/// Decimals worth printing for a value known to within `error`.
///
/// `max(1, round(-log10(error))) - 1`, capped at [`MAX_DISPLAY_DIGITS`].
pub fn display_digits(error: f64) -> usize {
    let wanted = (-error.log10()).round().max(1.0) - 1.0;
    if wanted >= MAX_DISPLAY_DIGITS as f64 {
        MAX_DISPLAY_DIGITS
    } else {
        wanted as usize
    }
}

/// Formats `value` with [`display_digits`] decimals and strips trailing zeros.
pub fn format_with_error(value: f64, error: f64) -> String {
    let fixed = to_fixed(value, display_digits(error));
    trim_fraction(&fixed).to_string()
}

/// Fixed-point formatting that rounds ties away from zero.
///
/// Works on the exact decimal expansion of `value`, so a binary midpoint such
/// as `0.25` becomes `"0.3"` at one decimal.
fn to_fixed(value: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&d| d >= b'5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && kept.iter().any(|&d| d != b'0') {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&d| d as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&d| d as char));
    }
    out
}

// "42.600" -> "42.6", "10.0" -> "10", "100" stays "100"
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
