//! Crockford Base32 for integers.
//!
//! Encodes non-negative integers with Douglas Crockford's 32-symbol alphabet,
//! optionally followed by a mod-37 check symbol, and decodes strings typed back
//! in by people: case is ignored, `I`/`L` read as `1`, `O` reads as `0` and
//! hyphens are skipped.
//!
//! ```
//! use crockford_base32::{decode, decode_with_checksum, encode, encode_with_checksum, DecodeOptions};
//!
//! assert_eq!(encode(1234), "16J");
//! assert_eq!(encode_with_checksum(1234), "16JD");
//!
//! let options = DecodeOptions::new();
//! assert_eq!(decode("16j", &options).unwrap(), 1234);
//! assert_eq!(decode_with_checksum("16J-D", &options).unwrap(), 1234);
//! ```
//!
//! Normalization can warn through the `log` facade or refuse sloppy input:
//!
//! ```
//! use crockford_base32::{decode, CrockfordError, DecodeOptions};
//!
//! let err = decode("io", &DecodeOptions::strict()).unwrap_err();
//! assert!(matches!(err, CrockfordError::NormalizationRequired { .. }));
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::config::{DecodeOptions, NormalizeMode};
pub use crate::core::symbols::{Alphabet, BASE, CHECKSUM_BASE, SYMBOLS, symbol_of, value_of};
pub use crate::encoders::algorithms::{ConfigError, CrockfordError};
pub use crate::encoders::checksum::{
    checksum_symbol, checksum_symbol_big, decode_big_with_checksum, decode_with_checksum,
    encode_big_with_checksum, encode_decimal_with_checksum, encode_with_checksum,
};
pub use crate::encoders::chunked::{SEPARATOR, chunk};
pub use crate::encoders::math::{decode, decode_big, encode, encode_big, encode_decimal};
pub use crate::encoders::normalize::{Correction, Normalized, normalize, normalize_report};

pub use num_bigint::BigUint;
