/// Separator inserted between groups. Normalization strips it again on decode.
pub const SEPARATOR: char = '-';

/// Insert a hyphen after every `size` symbols, counting from the left.
///
/// A `size` of zero, or one at least as long as the input, returns it unchanged.
///
/// ```
/// use crockford_base32::{chunk, decode, DecodeOptions};
///
/// let grouped = chunk("3ZZK4WRQ", 4);
/// assert_eq!(grouped, "3ZZK-4WRQ");
/// assert_eq!(decode(&grouped, &DecodeOptions::new()), decode("3ZZK4WRQ", &DecodeOptions::new()));
/// ```
pub fn chunk(encoded: &str, size: usize) -> String {
    if size == 0 {
        return encoded.to_string();
    }

    let mut result = String::with_capacity(encoded.len() + encoded.len() / size);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % size == 0 {
            result.push(SEPARATOR);
        }
        result.push(c);
    }
    result
}
