use geohash_core::prelude::*;
use proptest::prelude::*;

fn latitude() -> impl Strategy<Value = f64> {
    -90.0f64..=90.0
}

fn longitude() -> impl Strategy<Value = f64> {
    -180.0f64..=180.0
}

fn geohash(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(BASE32.to_vec()), 1..=max_len)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

// Property: the decoded cell always contains the encoded position
proptest! {
    #[test]
    fn prop_round_trip_within_error(lat in latitude(), lon in longitude(), precision in 1usize..=12) {
        let hash = encode(lat, lon, precision).unwrap();
        let d = decode_exactly(&hash).unwrap();
        prop_assert!((d.latitude - lat).abs() <= d.latitude_error, "{} vs {} ± {}", lat, d.latitude, d.latitude_error);
        prop_assert!((d.longitude - lon).abs() <= d.longitude_error, "{} vs {} ± {}", lon, d.longitude, d.longitude_error);
    }

    #[test]
    fn prop_output_length_and_alphabet(lat in latitude(), lon in longitude(), precision in 1usize..=20) {
        let hash = encode(lat, lon, precision).unwrap();
        prop_assert_eq!(hash.len(), precision);
        prop_assert!(hash.bytes().all(|b| BASE32.contains(&b)));
    }

    #[test]
    fn prop_longer_hashes_extend_shorter_ones(lat in latitude(), lon in longitude(), precision in 1usize..=11) {
        let short = encode(lat, lon, precision).unwrap();
        let long = encode(lat, lon, precision + 1).unwrap();
        prop_assert!(long.starts_with(&short));
    }

    #[test]
    fn prop_errors_shrink_with_precision(hash in geohash(12)) {
        let shorter = decode_exactly(&hash[..hash.len() - 1]);
        let full = decode_exactly(&hash).unwrap();
        if let Ok(shorter) = shorter {
            prop_assert!(full.latitude_error < shorter.latitude_error);
            prop_assert!(full.longitude_error < shorter.longitude_error);
        }
    }

    #[test]
    fn prop_decode_is_deterministic(hash in geohash(12)) {
        prop_assert_eq!(decode(&hash).unwrap(), decode(&hash).unwrap());
        prop_assert_eq!(decode_display(&hash).unwrap(), decode_display(&hash).unwrap());
    }

    #[test]
    fn prop_decode_stays_in_world(hash in geohash(16)) {
        let (lat, lon) = decode(&hash).unwrap();
        prop_assert!((-90.0..=90.0).contains(&lat));
        prop_assert!((-180.0..=180.0).contains(&lon));
    }

    #[test]
    fn prop_reencoding_the_center_is_stable(hash in geohash(12)) {
        let d = decode_exactly(&hash).unwrap();
        prop_assert_eq!(encode(d.latitude, d.longitude, hash.len()).unwrap(), hash);
    }
}
