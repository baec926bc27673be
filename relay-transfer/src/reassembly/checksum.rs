//! Fixed-width fragment checksum.
//!
//! Not cryptographic: a cheap mixing hash used to catch accidental
//! fragment corruption, rendered at a fixed width so stored checksums
//! are comparable byte-for-byte.

/// Rendered checksum width in bytes.
pub const CHECKSUM_LENGTH: usize = 30;

const SEED: u64 = 7;
const CHAR_MULTIPLIER: u64 = 31;
const SCRAMBLE_MULTIPLIER: u64 = 53;

/// Checksum of `input`, exactly [`CHECKSUM_LENGTH`] bytes of lowercase
/// hex padded with `#`. The empty string checksums to the empty string,
/// which doubles as the "unverified" marker on a fragment.
pub fn checksum(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut state = SEED;
    for (offset, ch) in input.char_indices() {
        state = state.wrapping_add((ch as u64).wrapping_mul(CHAR_MULTIPLIER));
        state ^= (state << 5) ^ (state >> 3);
        state = state.wrapping_mul(SCRAMBLE_MULTIPLIER);
        state ^= offset as u64;
    }

    let mut digest = format!("{state:x}");
    if digest.len() > CHECKSUM_LENGTH {
        digest.truncate(CHECKSUM_LENGTH);
    } else {
        let padding = CHECKSUM_LENGTH - digest.len();
        digest.extend(std::iter::repeat('#').take(padding));
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_inputs_have_fixed_width() {
        for input in ["x", "test", "a much longer input string", "你好，世界"] {
            assert_eq!(checksum(input).len(), CHECKSUM_LENGTH, "input: {input}");
        }
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(checksum(""), "");
    }

    #[test]
    fn deterministic() {
        assert_eq!(checksum("fragment"), checksum("fragment"));
    }

    #[test]
    fn case_sensitive() {
        assert_ne!(checksum("Test"), checksum("test"));
    }

    #[test]
    fn nearby_inputs_differ() {
        assert_ne!(checksum("abcdefg"), checksum("abcdeFg"));
        assert_ne!(checksum("test1"), checksum("test2"));
    }
}
