//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use crockford_base32::prelude::*;
//!
//! let encoded = encode_with_checksum(42);
//! assert_eq!(decode_with_checksum(&encoded, &DecodeOptions::new()).unwrap(), 42);
//! ```

pub use crate::{
    // Options
    DecodeOptions,
    NormalizeMode,

    CrockfordError,

    // Core encoding/decoding
    decode,
    decode_with_checksum,
    encode,
    encode_with_checksum,

    // Input handling
    chunk,
    normalize,
};
