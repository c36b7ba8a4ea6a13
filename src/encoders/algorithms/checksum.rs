//! Mod-37 check symbols.
//!
//! The check symbol is the encoded value modulo 37, appended after the last
//! digit. Because 37 is prime and larger than the base, any single wrong
//! symbol or swap of two adjacent symbols changes it.

use super::math::{decode, decode_big, encode, encode_big, low_digit, parse_decimal};
use crate::core::config::DecodeOptions;
use crate::core::symbols::{CHECKSUM_BASE, SYMBOLS};
use num_bigint::BigUint;

pub use super::errors::CrockfordError;

/// The check symbol for `number`.
pub fn checksum_symbol(number: u64) -> char {
    SYMBOLS[(number % u64::from(CHECKSUM_BASE)) as usize]
}

/// The check symbol for an arbitrary-precision `number`.
pub fn checksum_symbol_big(number: &BigUint) -> char {
    SYMBOLS[modulo_big(number) as usize]
}

/// Encode `number` followed by its check symbol.
///
/// ```
/// assert_eq!(crockford_base32::encode_with_checksum(1234), "16JD");
/// ```
pub fn encode_with_checksum(number: u64) -> String {
    let mut encoded = encode(number);
    encoded.push(checksum_symbol(number));
    encoded
}

pub fn encode_big_with_checksum(number: &BigUint) -> String {
    let mut encoded = encode_big(number);
    encoded.push(checksum_symbol_big(number));
    encoded
}

/// Encode a base-10 string followed by its check symbol.
pub fn encode_decimal_with_checksum(input: &str) -> Result<String, CrockfordError> {
    parse_decimal(input).map(|number| encode_big_with_checksum(&number))
}

/// Decode a string whose last symbol is a check symbol.
///
/// The body is decoded with `options`. The check symbol is always validated on
/// its own against the checksum alphabet with default normalization, whatever
/// mode the caller asked for.
pub fn decode_with_checksum(encoded: &str, options: &DecodeOptions) -> Result<u64, CrockfordError> {
    let (body, checksum) = split_checksum(encoded);

    let value = decode(body, options)?;
    verify(checksum, body, value % u64::from(CHECKSUM_BASE))?;

    Ok(value)
}

pub fn decode_big_with_checksum(
    encoded: &str,
    options: &DecodeOptions,
) -> Result<BigUint, CrockfordError> {
    let (body, checksum) = split_checksum(encoded);

    let value = decode_big(body, options)?;
    verify(checksum, body, u64::from(modulo_big(&value)))?;

    Ok(value)
}

/// Check that `checksum` encodes `modulo`.
fn verify(checksum: &str, body: &str, modulo: u64) -> Result<(), CrockfordError> {
    let checksum_value = decode(checksum, &DecodeOptions::new().checksum(true))?;

    if checksum_value != modulo {
        return Err(CrockfordError::checksum_mismatch(
            checksum.chars().next().unwrap_or_default(),
            body,
        ));
    }

    Ok(())
}

/// `number mod 37`. The remainder always fits in a single 32-bit digit.
fn modulo_big(number: &BigUint) -> u32 {
    low_digit(&(number % CHECKSUM_BASE))
}

/// Split off the last character. An empty input yields two empty halves.
fn split_checksum(encoded: &str) -> (&str, &str) {
    match encoded.char_indices().last() {
        Some((index, _)) => encoded.split_at(index),
        None => (encoded, encoded),
    }
}
