//! Badge claim example for geohash-rs
//!
//! A badge stores the geohash of the place it belongs to. Claims report the
//! claimant's position and are accepted only inside the policy radius.

use geohash_rs::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    println!("=== geohash-rs Badge Claim Example ===\n");

    let badge = encode(52.5200, 13.4050, 9)?; // Berlin
    println!("Badge geohash: {badge}\n");

    let policy = ClaimPolicy::default();
    let claims = [
        ("Brandenburg Gate", 52.5163, 13.3777),
        ("Potsdam", 52.3906, 13.0645),
        ("Paris", 48.8566, 2.3522),
    ];

    for (name, lat, lon) in claims {
        match policy.check(&badge, lat, lon) {
            Ok(check) => println!(
                "✓ {name}: {} is {:.1} km away",
                check.claim_geohash, check.distance_km
            ),
            Err(GeohashError::TooFar { distance_km, .. }) => {
                println!("✗ {name}: {distance_km:.1} km is too far")
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
