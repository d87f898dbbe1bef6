// crates/geohash-core/src/alphabet.rs

//! # Base-32 symbol table
//!
//! Geohash uses its own base-32 alphabet: digits plus lowercase letters
//! without `a`, `i`, `l` and `o`. Each symbol carries 5 bits.

use crate::error::{GeohashError, Result};
use once_cell::sync::Lazy;

/// The 32 geohash symbols, indexed by their 5-bit value.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits carried by a single geohash character.
pub const BITS_PER_CHAR: usize = 5;

/// Bit masks of one symbol, most significant first.
pub(crate) const BIT_MASKS: [u8; BITS_PER_CHAR] = [16, 8, 4, 2, 1];

const INVALID: u8 = u8::MAX;

// ASCII byte -> symbol value, INVALID for everything outside the alphabet.
static DECODE_MAP: Lazy<[u8; 128]> = Lazy::new(|| {
    let mut map = [INVALID; 128];
    for (value, &symbol) in BASE32.iter().enumerate() {
        map[symbol as usize] = value as u8;
    }
    map
});

/// Returns the symbol for a 5-bit value (only the low 5 bits are used).
#[inline]
pub fn symbol(value: u8) -> char {
    BASE32[(value & 0x1f) as usize] as char
}

/// Returns the 5-bit value of `c`, or `None` when `c` is not a geohash symbol.
///
/// Matching is case-sensitive: `'B'` is not the same symbol as `'b'`.
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_MAP[c as usize] {
        INVALID => None,
        v => Some(v),
    }
}

/// Checks that `hash` is non-empty and made only of geohash symbols.
///
/// # Examples
/// ```rust
/// use geohash_core::alphabet::validate;
/// use geohash_core::GeohashError;
///
/// assert!(validate("u4pruy").is_ok());
/// assert_eq!(validate(""), Err(GeohashError::EmptyInput));
/// ```
pub fn validate(hash: &str) -> Result<()> {
    symbols(hash).map(|_| ())
}

/// Validates `hash` and returns the 5-bit value of every character.
pub(crate) fn symbols(hash: &str) -> Result<Vec<u8>> {
    if hash.is_empty() {
        return Err(GeohashError::EmptyInput);
    }
    hash.chars()
        .enumerate()
        .map(|(position, character)| {
            index_of(character).ok_or(GeohashError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_inverse_of_alphabet() {
        for (value, &c) in BASE32.iter().enumerate() {
            assert_eq!(index_of(c as char), Some(value as u8));
            assert_eq!(symbol(value as u8), c as char);
        }
    }

    #[test]
    fn excluded_letters_are_rejected() {
        for c in ['a', 'i', 'l', 'o', 'A', 'B', ' ', '-', 'é'] {
            assert_eq!(index_of(c), None, "{c:?} should not be a symbol");
        }
    }

    #[test]
    fn validate_reports_first_bad_character() {
        assert_eq!(
            validate("u4pa"),
            Err(GeohashError::InvalidCharacter {
                character: 'a',
                position: 3
            })
        );
        assert_eq!(
            validate("ézs"),
            Err(GeohashError::InvalidCharacter {
                character: 'é',
                position: 0
            })
        );
    }
}
