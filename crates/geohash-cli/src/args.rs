use clap::{ArgAction, Parser, Subcommand};
use geohash_core::DEFAULT_PRECISION;

/// CLI arguments for geohash-cli
#[derive(Debug, Parser)]
#[command(
    name = "geohash",
    version,
    about = "Encode, decode and compare geohashes; check location-bound badge claims"
)]
pub struct CliArgs {
    /// Print every result as a single JSON object
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode a latitude/longitude pair
    Encode {
        /// Latitude in degrees (-90 to 90)
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        /// Longitude in degrees (-180 to 180)
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        /// Number of geohash characters
        #[arg(short = 'p', long = "precision", default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Decode a geohash to a rounded latitude/longitude
    Decode {
        /// Geohash to decode (e.g. u4pruy)
        geohash: String,
        /// Print the unrounded center and error margins instead
        #[arg(long = "exact")]
        exact: bool,
    },

    /// Show the cell covered by a geohash
    Bounds {
        geohash: String,
    },

    /// Distance between two geohashes
    Distance {
        from: String,
        to: String,
    },

    /// Check whether a claim position is close enough to a badge's geohash
    Claim {
        /// Geohash stored on the badge
        badge: String,
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        /// Maximum accepted distance in kilometers
        #[arg(long = "max-km", default_value_t = geohash_core::claim::DEFAULT_MAX_DISTANCE_KM)]
        max_km: f64,
        /// Characters used when encoding the claim position
        #[arg(short = 'p', long = "precision", default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },
}
