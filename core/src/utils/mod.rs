//! Utility functions and helpers

use rand::Rng;

/// Alphabet used for generated identifiers; every character is URL-safe
pub const ID_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated identifiers
pub const ID_LENGTH: usize = 21;

/// Generate a short random URL-safe identifier.
///
/// 21 symbols from a 64 character alphabet give 126 bits of randomness,
/// drawn from the thread-local CSPRNG.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();

        assert_eq!(id.len(), ID_LENGTH);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn test_generate_id_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<&u8> = ID_ALPHABET.iter().collect();
        assert_eq!(unique.len(), ID_ALPHABET.len());
    }
}
