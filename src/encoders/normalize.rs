//! Canonicalization of user-transcribed input.
//!
//! Crockford strings are meant to be read aloud and typed back in, so decoding
//! forgives the mistakes people make: lowercase letters, `I`/`L` typed for `1`,
//! `O` typed for `0`, and hyphens inserted for readability.

use crate::core::config::{DecodeOptions, NormalizeMode};
use crate::encoders::algorithms::errors::CrockfordError;

const LOG_TARGET: &str = "crockford_base32::normalize";

/// A kind of correction applied during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Lowercase letters were upper-cased.
    CaseFolded,
    /// Ambiguous letters were replaced by digits or hyphens removed.
    SymbolsReplaced,
}

impl Correction {
    pub fn description(&self) -> &'static str {
        match self {
            Correction::CaseFolded => "converted to uppercase",
            Correction::SymbolsReplaced => "ambiguous characters replaced and hyphens removed",
        }
    }
}

/// Outcome of normalizing a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    value: String,
    corrections: Vec<Correction>,
}

impl Normalized {
    /// The normalized string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// Corrections that were needed, in the order they were applied.
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    /// Whether the input was already in canonical form.
    pub fn is_unchanged(&self) -> bool {
        self.corrections.is_empty()
    }
}

/// Normalize `input`, returning the canonical string.
///
/// ```
/// use crockford_base32::{DecodeOptions, normalize};
///
/// assert_eq!(normalize("1o-il", &DecodeOptions::new()).unwrap(), "1011");
/// assert!(normalize("1o-il", &DecodeOptions::strict()).is_err());
/// ```
pub fn normalize(input: &str, options: &DecodeOptions) -> Result<String, CrockfordError> {
    normalize_report(input, options).map(Normalized::into_string)
}

/// Normalize `input` and report which corrections were made.
///
/// In [`NormalizeMode::Warn`] each correction category also emits one
/// `log::warn!` record. In [`NormalizeMode::Strict`] any needed correction is an
/// error instead.
pub fn normalize_report(input: &str, options: &DecodeOptions) -> Result<Normalized, CrockfordError> {
    let folded = input.to_uppercase();
    let corrected: String = folded.chars().filter_map(replace_ambiguous).collect();

    let mut corrections = Vec::new();
    if folded != input {
        corrections.push(Correction::CaseFolded);
    }
    if corrected != folded {
        corrections.push(Correction::SymbolsReplaced);
    }

    if !corrections.is_empty() {
        match options.mode {
            NormalizeMode::Silent => {}
            NormalizeMode::Warn => {
                for correction in &corrections {
                    log::warn!(
                        target: LOG_TARGET,
                        "'{}' {}: using '{}'",
                        input,
                        correction.description(),
                        corrected
                    );
                }
            }
            NormalizeMode::Strict => {
                return Err(CrockfordError::normalization_required(input, &corrected));
            }
        }
    }

    Ok(Normalized {
        value: corrected,
        corrections,
    })
}

fn replace_ambiguous(c: char) -> Option<char> {
    match c {
        'I' | 'L' => Some('1'),
        'O' => Some('0'),
        '-' => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_input_untouched() {
        let result = normalize_report("16J", &DecodeOptions::strict()).unwrap();
        assert_eq!(result.as_str(), "16J");
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_case_fold_only() {
        let result = normalize_report("16j", &DecodeOptions::new()).unwrap();
        assert_eq!(result.as_str(), "16J");
        assert_eq!(result.corrections(), &[Correction::CaseFolded]);
    }

    #[test]
    fn test_replacements_only() {
        let result = normalize_report("1-0IL", &DecodeOptions::new()).unwrap();
        assert_eq!(result.as_str(), "1011");
        assert_eq!(result.corrections(), &[Correction::SymbolsReplaced]);
    }

    #[test]
    fn test_both_categories() {
        let result = normalize_report("io", &DecodeOptions::warn()).unwrap();
        assert_eq!(result.as_str(), "10");
        assert_eq!(
            result.corrections(),
            &[Correction::CaseFolded, Correction::SymbolsReplaced]
        );
    }

    #[test]
    fn test_strict_rejects() {
        let err = normalize("abc", &DecodeOptions::strict()).unwrap_err();
        assert_eq!(
            err,
            CrockfordError::NormalizationRequired {
                original: "abc".to_string(),
                corrected: "ABC".to_string(),
            }
        );
    }

    #[test]
    fn test_hyphens_only() {
        assert_eq!(normalize("---", &DecodeOptions::new()).unwrap(), "");
        assert_eq!(normalize("AB-CD-EF", &DecodeOptions::new()).unwrap(), "ABCDEF");
    }

    #[test]
    fn test_idempotent() {
        let options = DecodeOptions::new();
        for s in ["", "io", "1-o-L", "Hello-World", "zz*~$=u", "16J!", "ß"] {
            let once = normalize(s, &options).unwrap();
            let twice = normalize(&once, &options).unwrap();
            assert_eq!(once, twice, "normalize not idempotent for {:?}", s);
        }
    }
}
