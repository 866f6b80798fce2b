//! Short code generation and validation utilities.
//!
//! Generated codes draw uniformly from lowercase ASCII letters and digits.
//! Uniqueness is not a property of the generator; callers retry on collision.

use crate::domain::errors::RegistryError;
use rand::Rng;

/// Alphabet used for generated codes.
const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Minimum length of any short code, generated or custom.
pub const MIN_CODE_LENGTH: usize = 4;

/// Maximum length of any short code, generated or custom.
pub const MAX_CODE_LENGTH: usize = 10;

/// Codes shadowed by fixed single-segment routes under `/shorturls`.
const RESERVED_CODES: &[&str] = &["allurls"];

/// Generates a random short code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-supplied short code.
///
/// # Rules
///
/// - Length: 4-10 characters
/// - Cannot be a reserved route name
///
/// Any other characters are accepted; clients percent-encode them when
/// resolving.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidShortcode`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), RegistryError> {
    let length = code.chars().count();
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        return Err(RegistryError::invalid_shortcode(format!(
            "got {length} characters"
        )));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(RegistryError::invalid_shortcode(format!(
            "'{code}' is reserved"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 6);
        assert_eq!(generate_code(MAX_CODE_LENGTH).len(), 10);
    }

    #[test]
    fn test_generate_code_uses_alphabet() {
        let code = generate_code(64);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(DEFAULT_CODE_LENGTH)).collect();
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_generated_code_passes_validation() {
        for _ in 0..100 {
            assert!(validate_custom_code(&generate_code(DEFAULT_CODE_LENGTH)).is_ok());
        }
    }

    #[test]
    fn test_validate_length_bounds() {
        assert!(validate_custom_code("abcd").is_ok());
        assert!(validate_custom_code("abcdefghij").is_ok());
        assert!(validate_custom_code("abc").is_err());
        assert!(validate_custom_code("abcdefghijk").is_err());
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        assert!(validate_custom_code("ключик").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_symbols_allowed() {
        assert!(validate_custom_code("My-Link_1").is_ok());
    }

    #[test]
    fn test_validate_accepts_any_characters() {
        assert!(validate_custom_code("ab cd").is_ok());
        assert!(validate_custom_code("ab/cd").is_ok());
        assert!(validate_custom_code("ab?cd").is_ok());
        assert!(validate_custom_code("stats").is_ok());
    }

    #[test]
    fn test_validate_rejects_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_validate_error_kind() {
        let err = validate_custom_code("abc").unwrap_err();
        assert_eq!(err.kind(), "invalid_shortcode");
        assert!(err.to_string().contains("4-10 characters"));
    }
}
