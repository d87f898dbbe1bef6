//! Basic usage example for geohash-rs
//!
//! This example demonstrates how to:
//! - Encode a position at different precisions
//! - Decode a geohash exactly and with display rounding
//! - Inspect the cell bounds of a geohash

use geohash_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geohash-rs Basic Usage Example ===\n");

    // Example 1: Encode at increasing precision
    println!("--- Example 1: Encode Aalborg at several precisions ---");
    let (lat, lon) = (57.64911, 10.40744);
    for precision in [1, 3, 6, 9, 12] {
        println!("{precision:>2}: {}", encode(lat, lon, precision)?);
    }
    println!();

    // Example 2: Exact decode with error margins
    println!("--- Example 2: Exact decode ---");
    let exact = decode_exactly("ezs42")?;
    println!(
        "ezs42 -> {}, {} (± {}, ± {})",
        exact.latitude, exact.longitude, exact.latitude_error, exact.longitude_error
    );
    println!();

    // Example 3: Rounded decode keeps only meaningful digits
    println!("--- Example 3: Rounded decode ---");
    for hash in ["u", "u4p", "u4pruy", "u4pruydqqvj8"] {
        let (lat, lon) = decode(hash)?;
        println!("{hash:>12} -> {lat}, {lon}");
    }
    println!();

    // Example 4: Cell bounds
    println!("--- Example 4: Bounds ---");
    let b = decode_bounds("u4pruy")?;
    println!(
        "u4pruy covers lat {}..{} lon {}..{}",
        b.min_latitude, b.max_latitude, b.min_longitude, b.max_longitude
    );

    Ok(())
}
