// crates/geohash-core/src/claim.rs

//! # Claim proximity
//!
//! A badge may carry the geohash of the place where it can be claimed. A
//! claim reports the claimant's latitude/longitude; it is accepted only when
//! the claim lies strictly within [`ClaimPolicy::max_distance_km`] of the
//! badge location.
//!
//! ```rust
//! use geohash_core::{ClaimPolicy, GeohashError};
//!
//! let policy = ClaimPolicy::default(); // 50 km
//! let badge = geohash_core::encode(52.5200, 13.4050, 9).unwrap(); // Berlin
//!
//! let near = policy.check(&badge, 52.5163, 13.3777).unwrap(); // Brandenburg Gate
//! assert!(near.distance_km < 5.0);
//!
//! let far = policy.check(&badge, 48.8566, 2.3522); // Paris
//! assert!(matches!(far, Err(GeohashError::TooFar { .. })));
//! ```

use crate::alphabet;
use crate::distance::{approximate_distance, haversine_distance};
use crate::encode::{encode, DEFAULT_PRECISION};
use crate::error::{GeohashError, Result};
use serde::{Deserialize, Serialize};

/// Radius used by [`ClaimPolicy::default`].
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Settings for accepting location-bound badge claims.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimPolicy {
    /// Claims at or beyond this distance are rejected.
    pub max_distance_km: f64,
    /// Characters used when encoding the claimant's position.
    pub precision: usize,
}

impl Default for ClaimPolicy {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Outcome of an accepted claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimCheck {
    pub claim_geohash: String,
    pub distance_km: f64,
    pub approximate_distance_m: f64,
}

impl ClaimPolicy {
    pub fn with_max_distance_km(max_distance_km: f64) -> Self {
        Self {
            max_distance_km,
            ..Self::default()
        }
    }

    /// Rejects radii that are not finite and positive, and a zero precision.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_distance_km.is_finite() && self.max_distance_km > 0.0) {
            return Err(GeohashError::InvalidPolicy(format!(
                "max_distance_km must be a positive number, got {}",
                self.max_distance_km
            )));
        }
        if self.precision == 0 {
            return Err(GeohashError::InvalidPolicy(
                "precision must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a policy from JSON; missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(s: &str) -> Result<Self> {
        let policy: Self =
            serde_json::from_str(s).map_err(|e| GeohashError::InvalidPolicy(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Checks a claim made at (`latitude`, `longitude`) against the badge's geohash.
    pub fn check(&self, badge_geohash: &str, latitude: f64, longitude: f64) -> Result<ClaimCheck> {
        self.validate()?;
        alphabet::validate(badge_geohash)?;

        let claim_geohash = encode(latitude, longitude, self.precision)?;
        log::debug!("Claim geohash: {claim_geohash} (badge {badge_geohash})");

        let approximate_distance_m = approximate_distance(&claim_geohash, badge_geohash)?;
        let distance_km = haversine_distance(&claim_geohash, badge_geohash)? / 1000.0;
        log::debug!(
            "Claim distance: ~{approximate_distance_m} m by prefix, {distance_km:.3} km by haversine"
        );

        if distance_km < self.max_distance_km {
            Ok(ClaimCheck {
                claim_geohash,
                distance_km,
                approximate_distance_m,
            })
        } else {
            Err(GeohashError::TooFar {
                distance_km,
                max_distance_km: self.max_distance_km,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Axis;

    const BERLIN: &str = "u33dc0";

    #[test]
    fn default_policy() {
        let p = ClaimPolicy::default();
        assert_eq!(p.max_distance_km, 50.0);
        assert_eq!(p.precision, 12);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn nearby_claim_is_accepted() {
        let check = ClaimPolicy::default().check(BERLIN, 52.5163, 13.3777).unwrap();
        assert_eq!(check.claim_geohash.len(), 12);
        assert!(check.claim_geohash.starts_with("u33"));
        assert!(check.distance_km < 5.0, "{}", check.distance_km);
    }

    #[test]
    fn distant_claim_is_rejected() {
        let err = ClaimPolicy::default()
            .check(BERLIN, 48.8566, 2.3522)
            .unwrap_err();
        match err {
            GeohashError::TooFar {
                distance_km,
                max_distance_km,
            } => {
                assert!(distance_km > 800.0);
                assert_eq!(max_distance_km, 50.0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn antipodal_claim_has_a_finite_distance() {
        // "01" and "un" have antipodal centers.
        let default_err = ClaimPolicy::default().check("un", -82.0, -174.0).unwrap_err();
        match default_err {
            GeohashError::TooFar { distance_km, .. } => {
                assert!(distance_km.is_finite(), "got {distance_km}");
                assert!(distance_km > 20_000.0, "got {distance_km}");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let whole_globe = ClaimPolicy {
            max_distance_km: 30_000.0,
            precision: 2,
        };
        let ok = whole_globe.check("un", -82.0, -174.0).unwrap();
        assert_eq!(ok.claim_geohash, "01");
        assert!((ok.distance_km - 20_015.086).abs() < 0.01, "got {}", ok.distance_km);
    }

    #[test]
    fn radius_boundary_is_exclusive() {
        let policy = ClaimPolicy::with_max_distance_km(1.0);
        // Same cell: zero distance is inside any positive radius.
        let exact = crate::decode::decode_exactly(BERLIN).unwrap();
        let ok = policy.check(BERLIN, exact.latitude, exact.longitude).unwrap();
        assert!(ok.distance_km < 1.0);

        let tiny = ClaimPolicy::with_max_distance_km(f64::MIN_POSITIVE);
        assert!(matches!(
            tiny.check(BERLIN, 52.0, 13.0),
            Err(GeohashError::TooFar { .. })
        ));
    }

    #[test]
    fn bad_inputs_fail_before_measuring() {
        let policy = ClaimPolicy::default();
        assert_eq!(policy.check("", 0.0, 0.0), Err(GeohashError::EmptyInput));
        assert_eq!(
            policy.check(BERLIN, 95.0, 0.0),
            Err(GeohashError::OutOfRangeCoordinate {
                axis: Axis::Latitude,
                value: 95.0
            })
        );
        let broken = ClaimPolicy {
            max_distance_km: -1.0,
            precision: 12,
        };
        assert!(matches!(
            broken.check(BERLIN, 52.5, 13.4),
            Err(GeohashError::InvalidPolicy(_))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn policy_from_json_fills_defaults() {
        let p = ClaimPolicy::from_json(r#"{"max_distance_km": 5}"#).unwrap();
        assert_eq!(p.max_distance_km, 5.0);
        assert_eq!(p.precision, 12);

        assert!(ClaimPolicy::from_json(r#"{"precision": 0}"#).is_err());
        assert!(ClaimPolicy::from_json("not json").is_err());
    }
}
