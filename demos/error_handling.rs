//! Error handling example for geohash-rs
//!
//! This example demonstrates the errors returned for bad input

use geohash_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geohash-rs Error Handling Example ===\n");

    // Example 1: Out-of-range coordinates are rejected, never clamped
    println!("--- Example 1: Encoding invalid coordinates ---");
    let points = [(91.0, 0.0), (0.0, -181.0), (f64::NAN, 0.0)];
    for (lat, lon) in points {
        match encode(lat, lon, 6) {
            Ok(hash) => println!("  Encoded: {hash}"),
            Err(e) => println!("  Rejected ({lat}, {lon}): {e}"),
        }
    }
    println!();

    // Example 2: Characters outside the alphabet fail fast
    println!("--- Example 2: Decoding invalid geohashes ---");
    for hash in ["", "u4pa", "U4PRUY", "ezs42"] {
        match decode(hash) {
            Ok((lat, lon)) => println!("  {hash:?} -> {lat}, {lon}"),
            Err(e) => println!("  {hash:?}: {e}"),
        }
    }
    println!();

    // Example 3: Zero precision
    println!("--- Example 3: Zero precision ---");
    if let Err(e) = encode(10.0, 10.0, 0) {
        println!("  {e}");
    }

    Ok(())
}
