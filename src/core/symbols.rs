//! The Crockford symbol set.
//!
//! Values 0-31 are the encoding alphabet: the ten digits followed by the
//! uppercase letters minus `I`, `L`, `O` and `U`. Values 32-36 only ever
//! appear as a trailing checksum digit.

use std::sync::LazyLock;

/// Number of symbols used for ordinary digits.
pub const BASE: u32 = 32;

/// Modulus of the checksum digit, and the size of the checksum alphabet.
pub const CHECKSUM_BASE: u32 = 37;

/// Symbols indexed by value. The first 32 form the encoding alphabet.
pub const SYMBOLS: [char; CHECKSUM_BASE as usize] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'J', 'K', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X', 'Y', 'Z', '*', '~', '$', '=',
    'U',
];

const INVALID: u8 = u8::MAX;

/// Reverse lookup from ASCII code to symbol value.
static VALUES: LazyLock<[u8; 128]> = LazyLock::new(|| {
    let mut table = [INVALID; 128];
    for (value, &symbol) in SYMBOLS.iter().enumerate() {
        table[symbol as usize] = value as u8;
    }
    table
});

/// Which set of symbols a position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// The 32 encoding symbols.
    Encoding,
    /// All 37 symbols, valid only as a checksum digit.
    Checksum,
}

impl Alphabet {
    /// Number of symbols in this alphabet.
    pub fn size(self) -> u32 {
        match self {
            Alphabet::Encoding => BASE,
            Alphabet::Checksum => CHECKSUM_BASE,
        }
    }

    /// The symbols of this alphabet in value order.
    pub fn symbols(self) -> &'static [char] {
        &SYMBOLS[..self.size() as usize]
    }
}

/// Maps a symbol to its value, or `None` when `c` is not in `alphabet`.
///
/// Lowercase letters and the ambiguous `I`, `L`, `O` are not accepted here;
/// they are folded away by normalization before classification.
pub fn value_of(c: char, alphabet: Alphabet) -> Option<u32> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit);
    }
    if !c.is_ascii() {
        return None;
    }
    match VALUES[c as usize] {
        INVALID => None,
        value if u32::from(value) < alphabet.size() => Some(u32::from(value)),
        _ => None,
    }
}

/// Symbol for `value`, or `None` when the value is outside `alphabet`.
pub fn symbol_of(value: u32, alphabet: Alphabet) -> Option<char> {
    alphabet.symbols().get(value as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_inverse() {
        for value in 0..CHECKSUM_BASE {
            let symbol = symbol_of(value, Alphabet::Checksum).unwrap();
            assert_eq!(value_of(symbol, Alphabet::Checksum), Some(value));
        }
    }

    #[test]
    fn test_encoding_alphabet_excludes_ambiguous_letters() {
        let symbols: String = Alphabet::Encoding.symbols().iter().collect();
        assert_eq!(symbols, "0123456789ABCDEFGHJKMNPQRSTVWXYZ");
        for c in ['I', 'L', 'O', 'U'] {
            assert_eq!(value_of(c, Alphabet::Encoding), None);
        }
    }

    #[test]
    fn test_checksum_only_symbols() {
        assert_eq!(value_of('*', Alphabet::Checksum), Some(32));
        assert_eq!(value_of('~', Alphabet::Checksum), Some(33));
        assert_eq!(value_of('$', Alphabet::Checksum), Some(34));
        assert_eq!(value_of('=', Alphabet::Checksum), Some(35));
        assert_eq!(value_of('U', Alphabet::Checksum), Some(36));
        assert_eq!(value_of('U', Alphabet::Encoding), None);
        assert_eq!(symbol_of(32, Alphabet::Encoding), None);
    }

    #[test]
    fn test_rejects_non_symbols() {
        assert_eq!(value_of('!', Alphabet::Checksum), None);
        assert_eq!(value_of('a', Alphabet::Checksum), None);
        assert_eq!(value_of('é', Alphabet::Checksum), None);
        // to_digit(10) only accepts ASCII digits
        assert_eq!(value_of('٣', Alphabet::Checksum), None);
    }
}
