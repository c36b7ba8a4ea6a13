use crate::core::config::DecodeOptions;
use crate::core::symbols::{self, Alphabet, BASE, SYMBOLS};
use crate::encoders::normalize::normalize;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

pub use super::errors::CrockfordError;

/// Encode `number` as Crockford Base32, most significant symbol first.
///
/// ```
/// assert_eq!(crockford_base32::encode(1234), "16J");
/// assert_eq!(crockford_base32::encode(0), "0");
/// ```
pub fn encode(number: u64) -> String {
    // u64::MAX needs 13 symbols
    let mut result = Vec::with_capacity(13);
    let mut value = number;
    loop {
        result.push(SYMBOLS[(value % u64::from(BASE)) as usize]);
        value /= u64::from(BASE);
        if value == 0 {
            break;
        }
    }
    result.iter().rev().collect()
}

/// Encode an arbitrary-precision `number`.
pub fn encode_big(number: &BigUint) -> String {
    let base = BigUint::from(BASE);
    let mut result = Vec::with_capacity((number.bits() as usize).div_ceil(5).max(1));
    let mut value = number.clone();
    loop {
        let (quotient, remainder) = value.div_rem(&base);
        result.push(SYMBOLS[low_digit(&remainder) as usize]);
        if quotient.is_zero() {
            break;
        }
        value = quotient;
    }
    result.iter().rev().collect()
}

/// Encode a number given as a base-10 string.
///
/// Surrounding whitespace is ignored. Anything other than ASCII digits fails
/// with [`CrockfordError::InvalidInput`], including signs and decimal points.
pub fn encode_decimal(input: &str) -> Result<String, CrockfordError> {
    parse_decimal(input).map(|number| encode_big(&number))
}

pub(crate) fn parse_decimal(input: &str) -> Result<BigUint, CrockfordError> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CrockfordError::invalid_input(input));
    }
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| CrockfordError::invalid_input(input))
}

/// Decode `encoded` into a `u64`.
///
/// Fails with [`CrockfordError::Overflow`] as soon as the value needs more
/// than 64 bits; use [`decode_big`] for those.
pub fn decode(encoded: &str, options: &DecodeOptions) -> Result<u64, CrockfordError> {
    let digits = symbol_values(encoded, options)?;

    let mut total: u64 = 0;
    for &digit in significant(&digits) {
        total = total
            .checked_mul(u64::from(BASE))
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .ok_or_else(|| CrockfordError::overflow(encoded))?;
    }

    Ok(total)
}

/// Decode `encoded` into an arbitrary-precision integer.
///
/// The input is normalized per `options.mode` first. With `options.is_checksum`
/// the input must be a single symbol from the 37-symbol checksum alphabet.
pub fn decode_big(encoded: &str, options: &DecodeOptions) -> Result<BigUint, CrockfordError> {
    let digits = symbol_values(encoded, options)?;

    // Least significant symbol first, weighting each by the next power of 32.
    let mut total = BigUint::zero();
    let mut offset = BigUint::one();
    for &digit in significant(&digits).iter().rev() {
        total += &offset * digit;
        offset *= BASE;
    }

    Ok(total)
}

/// Normalize and validate `encoded`, returning the value of each symbol.
fn symbol_values(encoded: &str, options: &DecodeOptions) -> Result<Vec<u32>, CrockfordError> {
    if encoded.is_empty() {
        return Err(CrockfordError::EmptyInput);
    }

    let normalized = normalize(encoded, options)?;

    let alphabet = if options.is_checksum {
        let length = normalized.chars().count();
        if length > 1 {
            return Err(CrockfordError::invalid_checksum_length(&normalized, length));
        }
        Alphabet::Checksum
    } else {
        Alphabet::Encoding
    };

    classify(&normalized, alphabet)
}

/// Digits with leading zeros dropped.
fn significant(digits: &[u32]) -> &[u32] {
    let start = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    &digits[start..]
}

/// Map each symbol of a normalized string to its value.
fn classify(normalized: &str, alphabet: Alphabet) -> Result<Vec<u32>, CrockfordError> {
    if normalized.is_empty() {
        return Err(CrockfordError::invalid_characters(normalized, None, 0));
    }

    normalized
        .chars()
        .enumerate()
        .map(|(position, c)| {
            symbols::value_of(c, alphabet).ok_or_else(|| {
                CrockfordError::invalid_characters(normalized, Some(c), position)
            })
        })
        .collect()
}

/// Lowest 32-bit digit of `value`. Zero has no digits, so it maps to 0.
pub(crate) fn low_digit(value: &BigUint) -> u32 {
    value.iter_u32_digits().next().unwrap_or(0)
}
