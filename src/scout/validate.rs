//! Username shape validation
//!
//! Mirrors the rule the lookup service enforces so obviously bad input
//! never reaches the network.

/// Shortest accepted username (inclusive)
pub const MIN_LEN: usize = 2;

/// Longest accepted username (inclusive)
pub const MAX_LEN: usize = 30;

/// Message shown in the error slot when validation rejects the input
pub const INVALID_USERNAME: &str = "Use 2-30 characters: letters, numbers, underscore, or dot.";

/// Check a candidate username.
///
/// Surrounding whitespace is ignored. The remainder must be 2-30 characters,
/// each an ASCII letter, digit, underscore or dot.
pub fn validate(raw: &str) -> bool {
    let candidate = raw.trim();
    let len = candidate.chars().count();

    (MIN_LEN..=MAX_LEN).contains(&len) && candidate.chars().all(is_username_char)
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_lengths() {
        assert!(validate("ab"));
        assert!(validate(&"a".repeat(30)));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(!validate(""));
        assert!(!validate("a"));
        assert!(!validate(&"a".repeat(31)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(validate("  john.doe_99 \t"));
        // Whitespace does not count toward the minimum length
        assert!(!validate("  a  "));
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        for bad in ["john-doe", "john doe", "john@doe", "jöhn", "名前名前", "a/b", "ab\n c"] {
            assert!(!validate(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn accepts_every_allowed_character() {
        let alphabet: String = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .chain(['_', '.'])
            .collect();

        for chunk in alphabet.as_bytes().chunks(MAX_LEN) {
            let candidate = std::str::from_utf8(chunk).unwrap_or_default();
            if candidate.len() >= MIN_LEN {
                assert!(validate(candidate), "{candidate:?} should be accepted");
            }
        }
    }
}
