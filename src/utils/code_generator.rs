//! Short code generation and validation utilities.
//!
//! Codes are 6 to 8 ASCII alphanumeric characters and case-sensitive.
//! Generated codes are always [`GENERATED_CODE_LENGTH`] characters long.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Alphabet used for generated codes (26 upper + 26 lower + 10 digits).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of codes produced by [`generate_code`].
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Shape every stored code must have.
pub static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code regex is valid"));

/// Generates a random short code.
///
/// Each character is drawn independently and uniformly from [`CHARSET`] using
/// the thread-local RNG. Codes are identifiers, not secrets, so a fast
/// non-cryptographic generator is fine.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns `true` if `code` has a valid shape.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a caller-supplied short code.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless the code is 6-8 ASCII letters or digits.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if is_valid_code(code) {
        Ok(())
    } else {
        Err(AppError::bad_request("Invalid code format"))
    }
}
