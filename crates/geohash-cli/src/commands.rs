use crate::args::Commands;
use geohash_core::prelude::*;
use serde_json::{json, Value};

/// What a command produced, in both human and JSON form.
#[derive(Debug)]
pub struct Output {
    pub text: String,
    pub json: Value,
}

impl Output {
    pub fn render(&self, as_json: bool) -> String {
        if as_json {
            self.json.to_string()
        } else {
            self.text.clone()
        }
    }
}

pub fn run(command: &Commands) -> Result<Output> {
    match command {
        Commands::Encode {
            latitude,
            longitude,
            precision,
        } => {
            let hash = encode(*latitude, *longitude, *precision)?;
            log::info!("Encoded ({latitude}, {longitude}) at precision {precision}");
            Ok(Output {
                text: hash.clone(),
                json: json!({ "geohash": hash }),
            })
        }

        Commands::Decode {
            geohash,
            exact: false,
        } => {
            let (lat_text, lon_text) = decode_display(geohash)?;
            let lat: f64 = lat_text.parse()?;
            let lon: f64 = lon_text.parse()?;
            Ok(Output {
                text: format!("{lat_text}, {lon_text}"),
                json: json!({ "latitude": lat, "longitude": lon }),
            })
        }

        Commands::Decode {
            geohash,
            exact: true,
        } => {
            let d = decode_exactly(geohash)?;
            Ok(Output {
                text: format!(
                    "{}, {} (± {}, ± {})",
                    d.latitude, d.longitude, d.latitude_error, d.longitude_error
                ),
                json: json!(d),
            })
        }

        Commands::Bounds { geohash } => {
            let b = decode_bounds(geohash)?;
            Ok(Output {
                text: format!(
                    "latitude  {} .. {}\nlongitude {} .. {}",
                    b.min_latitude, b.max_latitude, b.min_longitude, b.max_longitude
                ),
                json: json!(b),
            })
        }

        Commands::Distance { from, to } => {
            let approx_m = approximate_distance(from, to)?;
            let meters = haversine_distance(from, to)?;
            Ok(Output {
                text: format!("{:.3} km (prefix estimate ~{approx_m} m)", meters / 1000.0),
                json: json!({ "haversine_m": meters, "approximate_m": approx_m }),
            })
        }

        Commands::Claim {
            badge,
            latitude,
            longitude,
            max_km,
            precision,
        } => {
            let policy = ClaimPolicy {
                max_distance_km: *max_km,
                precision: *precision,
            };
            let check = policy.check(badge, *latitude, *longitude)?;
            Ok(Output {
                text: format!(
                    "accepted: {} is {:.3} km from {badge}",
                    check.claim_geohash, check.distance_km
                ),
                json: json!(check),
            })
        }
    }
}
