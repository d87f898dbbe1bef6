// crates/geohash-core/src/distance.rs

//! Distances between geohashes, in meters.

use crate::alphabet;
use crate::coord::Coordinate;
use crate::decode::decode;
use crate::error::Result;

/// Mean Earth radius used by [`haversine`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate cell-to-cell distance keyed by the number of shared leading
/// characters. Longer shared prefixes are treated as 10.
const PREFIX_DISTANCE_M: [f64; 11] = [
    20_000_000.0,
    5_003_530.0,
    625_441.0,
    123_264.0,
    19_545.0,
    3_803.0,
    610.0,
    118.0,
    19.0,
    3.71,
    0.6,
];

/// Number of leading characters `a` and `b` share.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// Rough distance between two geohashes from their shared prefix alone.
///
/// Both hashes are validated first. The result is a step function and only
/// gives the order of magnitude.
pub fn approximate_distance(a: &str, b: &str) -> Result<f64> {
    alphabet::validate(a)?;
    alphabet::validate(b)?;
    let matching = common_prefix_len(a, b).min(PREFIX_DISTANCE_M.len() - 1);
    Ok(PREFIX_DISTANCE_M[matching])
}

/// Great-circle distance between the display-rounded centers of two geohashes.
pub fn haversine_distance(a: &str, b: &str) -> Result<f64> {
    let from: Coordinate = decode(a)?.into();
    let to: Coordinate = decode(b)?.into();
    Ok(haversine(from, to))
}

/// Great-circle distance between two positions on a spherical Earth.
pub fn haversine(from: Coordinate, to: Coordinate) -> f64 {
    let phi_1 = from.latitude.to_radians();
    let phi_2 = to.latitude.to_radians();
    let d_phi = (to.latitude - from.latitude).to_radians();
    let d_lambda = (to.longitude - from.longitude).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi_1.cos() * phi_2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeohashError;

    #[test]
    fn prefix_table_lookup() {
        assert_eq!(approximate_distance("u4pruy", "ezs42").unwrap(), 20_000_000.0);
        assert_eq!(approximate_distance("u4pruy", "u4pr").unwrap(), 19_545.0);
        assert_eq!(approximate_distance("u4pruy", "u4pruy").unwrap(), 610.0);
        assert_eq!(
            approximate_distance("u4pruydqqvjw", "u4pruydqqvjw").unwrap(),
            0.6
        );
    }

    #[test]
    fn approximate_distance_validates_both_sides() {
        assert_eq!(
            approximate_distance("u4pruy", ""),
            Err(GeohashError::EmptyInput)
        );
        assert!(approximate_distance("u4pa", "u4pr").is_err());
    }

    #[test]
    fn haversine_known_distance() {
        // Berlin to Paris is about 878 km
        let berlin = Coordinate::new(52.5200, 13.4050);
        let paris = Coordinate::new(48.8566, 2.3522);
        let km = haversine(berlin, paris) / 1000.0;
        assert!((km - 878.0).abs() < 10.0, "got {km}");
        assert_eq!(haversine(berlin, berlin), 0.0);
    }

    #[test]
    fn antipodal_points_are_half_a_circumference_apart() {
        let half = std::f64::consts::PI * EARTH_RADIUS_M;

        let m = haversine(Coordinate::new(-82.0, 0.0), Coordinate::new(82.0, 180.0));
        assert!(m.is_finite(), "got {m}");
        assert!((m - half).abs() < 1.0, "got {m}");

        // "01" centers on (-82, -174) and "un" on (82, 6).
        let m = haversine_distance("01", "un").unwrap();
        assert!(m.is_finite(), "got {m}");
        assert!((m - half).abs() < 1.0, "got {m}");
    }

    #[test]
    fn haversine_between_hashes_is_symmetric() {
        let ab = haversine_distance("u33dc0", "u09tvw").unwrap();
        let ba = haversine_distance("u09tvw", "u33dc0").unwrap();
        assert!((ab - ba).abs() < 1e-6);
        assert!(ab > 800_000.0 && ab < 900_000.0, "got {ab}");
    }

    #[test]
    fn identical_hashes_are_zero_apart() {
        assert_eq!(haversine_distance("ezs42", "ezs42").unwrap(), 0.0);
    }
}
