use thiserror::Error;

/// Longest input echoed back inside an error message.
const MAX_DISPLAY_LEN: usize = 60;

/// Errors raised while encoding, normalizing or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrockfordError {
    /// The textual number to encode is not a non-negative decimal integer.
    #[error("error: cannot encode '{input}': not a non-negative integer")]
    InvalidInput { input: String },

    /// The string to decode is empty.
    #[error("error: cannot decode empty input")]
    EmptyInput,

    /// Strict normalization found input that needed correcting.
    #[error("error: '{original}' is not normalized\n\nhint: did you mean '{corrected}'?")]
    NormalizationRequired { original: String, corrected: String },

    /// A checksum must be exactly one symbol.
    #[error("error: checksum '{input}' is {length} characters, expected 1")]
    InvalidChecksumLength { input: String, length: usize },

    /// The input contains a character outside the selected alphabet.
    ///
    /// `character` is `None` when normalization left nothing to decode.
    #[error("{}", invalid_characters_message(.input, .character, .position))]
    InvalidCharacters {
        input: String,
        character: Option<char>,
        position: usize,
    },

    /// The checksum digit does not match the decoded value.
    #[error("error: checksum '{checksum}' does not match '{body}'")]
    ChecksumMismatch { checksum: char, body: String },

    /// The decoded value does not fit in the requested integer type.
    #[error("error: '{input}' is too large to decode into a 64-bit integer")]
    Overflow { input: String },
}

impl CrockfordError {
    pub(crate) fn invalid_input(input: &str) -> Self {
        CrockfordError::InvalidInput {
            input: truncate(input),
        }
    }

    pub(crate) fn normalization_required(original: &str, corrected: &str) -> Self {
        CrockfordError::NormalizationRequired {
            original: truncate(original),
            corrected: truncate(corrected),
        }
    }

    pub(crate) fn invalid_checksum_length(input: &str, length: usize) -> Self {
        CrockfordError::InvalidChecksumLength {
            input: truncate(input),
            length,
        }
    }

    pub(crate) fn checksum_mismatch(checksum: char, body: &str) -> Self {
        CrockfordError::ChecksumMismatch {
            checksum,
            body: truncate(body),
        }
    }

    pub(crate) fn overflow(input: &str) -> Self {
        CrockfordError::Overflow {
            input: truncate(input),
        }
    }

    pub(crate) fn invalid_characters(input: &str, character: Option<char>, position: usize) -> Self {
        CrockfordError::InvalidCharacters {
            input: truncate(input),
            character,
            position,
        }
    }
}

fn invalid_characters_message(input: &str, character: &Option<char>, position: &usize) -> String {
    match character {
        Some(c) => format!(
            "error: invalid character '{}' at position {} in '{}'",
            c, position, input
        ),
        None => format!("error: '{}' contains no symbols to decode", input),
    }
}

fn truncate(input: &str) -> String {
    match input.char_indices().nth(MAX_DISPLAY_LEN) {
        Some((end, _)) => format!("{}...", &input[..end]),
        None => input.to_string(),
    }
}

/// Errors raised while loading [`DecodeOptions`](crate::DecodeOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error: invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("error: invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
}
