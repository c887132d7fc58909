//! Short code generation and custom-code validation.
//!
//! Generation draws uniformly from the 62 alphanumerics. The generator is
//! purely a source of candidates; uniqueness is the link service's concern,
//! backed by the storage-level unique constraint.

use std::sync::Mutex;

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AppError;

/// Default length of generated codes.
///
/// 62^6 candidate codes keep the collision probability negligible for any
/// realistic store size.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Bounds on custom code length.
pub const MIN_CODE_LENGTH: usize = 3;
pub const MAX_CODE_LENGTH: usize = 10;

/// Codes that collide with routing paths and can never be used as short
/// links. Matched case-insensitively.
pub const RESERVED_CODES: &[&str] = &[
    "admin", "login", "logout", "register", "my-urls", "stats", "api",
];

/// Random short code source with an explicitly seeded, injectable RNG.
///
/// Production seeds from OS entropy via [`CodeGenerator::new`]; tests use
/// [`CodeGenerator::with_seed`] for reproducible output.
pub struct CodeGenerator {
    length: usize,
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Creates a generator seeded from OS entropy.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a generator with a fixed seed, for deterministic tests.
    pub fn with_seed(length: usize, seed: u64) -> Self {
        Self {
            length,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws one random alphanumeric candidate code.
    ///
    /// The draw is pure: no storage lookup, no reserved-word check. Callers
    /// filter candidates through [`is_reserved`] and the store.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..self.length)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

/// Returns true if the code matches a reserved word, ignoring case.
pub fn is_reserved(code: &str) -> bool {
    let lowered = code.to_ascii_lowercase();
    RESERVED_CODES.contains(&lowered.as_str())
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 3-10 characters
/// - Allowed characters: ASCII letters, digits, hyphens
/// - Cannot be a reserved routing word (case-insensitive)
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] on a charset/length violation and
/// [`AppError::ReservedCode`] for reserved words.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < MIN_CODE_LENGTH || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::InvalidCode {
            reason: format!(
                "must be {}-{} characters, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                code.len()
            ),
        });
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(AppError::InvalidCode {
            reason: "only letters, digits, and hyphens are allowed".to_string(),
        });
    }

    if is_reserved(code) {
        return Err(AppError::ReservedCode {
            code: code.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_configured_length() {
        let generator = CodeGenerator::with_seed(6, 42);
        assert_eq!(generator.generate().len(), 6);

        let generator = CodeGenerator::with_seed(10, 42);
        assert_eq!(generator.generate().len(), 10);
    }

    #[test]
    fn test_generate_alphanumeric_only() {
        let generator = CodeGenerator::with_seed(DEFAULT_CODE_LENGTH, 1);
        for _ in 0..100 {
            let code = generator.generate();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let a = CodeGenerator::with_seed(6, 7);
        let b = CodeGenerator::with_seed(6, 7);
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_generate_rarely_collides() {
        let generator = CodeGenerator::with_seed(6, 99);
        let mut codes = HashSet::new();
        for _ in 0..1000 {
            codes.insert(generator.generate());
        }
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_accepts_minimum_length() {
        assert!(validate_custom_code("abc").is_ok());
    }

    #[test]
    fn test_validate_accepts_maximum_length() {
        assert!(validate_custom_code("abcde12345").is_ok());
    }

    #[test]
    fn test_validate_accepts_hyphens_and_mixed_case() {
        assert!(validate_custom_code("My-Link-1").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_custom_code("ab").unwrap_err();
        assert!(matches!(err, AppError::InvalidCode { .. }));
    }

    #[test]
    fn test_validate_too_long() {
        let err = validate_custom_code("abcdef12345").unwrap_err();
        assert!(matches!(err, AppError::InvalidCode { .. }));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_rejects_invalid_characters() {
        for code in ["my_code", "my code", "my.code", "código", "a/b/c"] {
            let err = validate_custom_code(code).unwrap_err();
            assert!(matches!(err, AppError::InvalidCode { .. }), "{code}");
        }
    }

    #[test]
    fn test_validate_rejects_reserved_words() {
        for &reserved in RESERVED_CODES {
            let err = validate_custom_code(reserved).unwrap_err();
            assert!(
                matches!(err, AppError::ReservedCode { .. }),
                "reserved code '{reserved}' accepted"
            );
        }
    }

    #[test]
    fn test_validate_reserved_is_case_insensitive() {
        for code in ["Admin", "ADMIN", "aDmIn", "Stats", "API"] {
            let err = validate_custom_code(code).unwrap_err();
            assert!(matches!(err, AppError::ReservedCode { .. }), "{code}");
        }
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("admin"));
        assert!(is_reserved("My-Urls"));
        assert!(!is_reserved("adminx"));
    }
}
