use crate::encoders::algorithms::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// How normalization reacts when user input needed correcting.
///
/// Input is corrected by upper-casing, mapping `I`/`L` to `1` and `O` to `0`,
/// and dropping `-` separators.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// Correct, and log a warning for each kind of correction made.
    Warn,
    /// Refuse input that would need correcting.
    Strict,
    /// Correct silently. Unrecognized mode names fall back to this.
    // serde requires the catch-all to be the last variant
    #[default]
    #[serde(other)]
    Silent,
}

impl NormalizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizeMode::Silent => "silent",
            NormalizeMode::Warn => "warn",
            NormalizeMode::Strict => "strict",
        }
    }
}

impl From<&str> for NormalizeMode {
    fn from(s: &str) -> Self {
        match s {
            "warn" => NormalizeMode::Warn,
            "strict" => NormalizeMode::Strict,
            _ => NormalizeMode::Silent,
        }
    }
}

/// Per-call options for normalization and decoding.
///
/// Every key is optional when loading from TOML or JSON:
///
/// ```
/// use crockford_base32::{DecodeOptions, NormalizeMode};
///
/// let options = DecodeOptions::from_toml_str("mode = \"strict\"").unwrap();
/// assert_eq!(options.mode, NormalizeMode::Strict);
/// assert!(!options.is_checksum);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DecodeOptions {
    /// Normalization policy.
    pub mode: NormalizeMode,
    /// Validate the input as a lone checksum digit rather than an encoded value.
    pub is_checksum: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the given normalization mode.
    pub fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Options that validate a single checksum digit.
    pub fn checksum(mut self, is_checksum: bool) -> Self {
        self.is_checksum = is_checksum;
        self
    }

    /// Shorthand for `DecodeOptions::new().with_mode(NormalizeMode::Warn)`.
    pub fn warn() -> Self {
        Self::new().with_mode(NormalizeMode::Warn)
    }

    /// Shorthand for `DecodeOptions::new().with_mode(NormalizeMode::Strict)`.
    pub fn strict() -> Self {
        Self::new().with_mode(NormalizeMode::Strict)
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from a JSON object.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DecodeOptions::new();
        assert_eq!(options.mode, NormalizeMode::Silent);
        assert!(!options.is_checksum);
    }

    #[test]
    fn test_builder() {
        let options = DecodeOptions::strict().checksum(true);
        assert_eq!(options.mode, NormalizeMode::Strict);
        assert!(options.is_checksum);
        assert_eq!(DecodeOptions::warn().mode, NormalizeMode::Warn);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(NormalizeMode::from("warn"), NormalizeMode::Warn);
        assert_eq!(NormalizeMode::from("strict"), NormalizeMode::Strict);
        assert_eq!(NormalizeMode::from(""), NormalizeMode::Silent);
        assert_eq!(NormalizeMode::from("STRICT"), NormalizeMode::Silent);
    }

    #[test]
    fn test_load_toml() {
        let options = DecodeOptions::from_toml_str("mode = \"warn\"\nis_checksum = true").unwrap();
        assert_eq!(options, DecodeOptions::warn().checksum(true));

        let empty = DecodeOptions::from_toml_str("").unwrap();
        assert_eq!(empty, DecodeOptions::default());
    }

    #[test]
    fn test_load_json() {
        let options = DecodeOptions::from_json_str(r#"{"mode": "strict"}"#).unwrap();
        assert_eq!(options, DecodeOptions::strict());
    }

    #[test]
    fn test_unknown_mode_is_silent() {
        let options = DecodeOptions::from_json_str(r#"{"mode": "loud"}"#).unwrap();
        assert_eq!(options.mode, NormalizeMode::Silent);
    }

    #[test]
    fn test_every_mode_name_loads() {
        for (name, mode) in [
            ("silent", NormalizeMode::Silent),
            ("warn", NormalizeMode::Warn),
            ("strict", NormalizeMode::Strict),
            ("", NormalizeMode::Silent),
        ] {
            let options = DecodeOptions::from_toml_str(&format!("mode = \"{}\"", name)).unwrap();
            assert_eq!(options.mode, mode, "mode {:?}", name);
            assert_eq!(NormalizeMode::from(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            DecodeOptions::from_toml_str("mode = "),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            DecodeOptions::from_json_str(r#"{"is_checksum": "yes"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_serialize_mode() {
        let json = serde_json::to_string(&DecodeOptions::strict()).unwrap();
        assert_eq!(json, r#"{"mode":"strict","is_checksum":false}"#);
        assert_eq!(NormalizeMode::Warn.as_str(), "warn");
    }
}
