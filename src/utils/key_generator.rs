//! Key generation strategies.
//!
//! - Random fixed-length alphanumeric codes for short links ([`RandomCodeGenerator`])
//! - Sequential numeric IDs for users ([`next_sequential_id`])

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 8;

/// Source of candidate short codes.
///
/// Uniqueness is not guaranteed here; callers insert through the store and
/// draw again on collision.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws codes uniformly from `[a-zA-Z0-9]`.
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code(self.length)
    }
}

/// Generates a random alphanumeric code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Next ID for a store currently holding `count` records.
pub fn next_sequential_id(count: usize) -> u64 {
    count as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = RandomCodeGenerator::default().generate();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code(CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_custom_length() {
        assert_eq!(RandomCodeGenerator::new(12).generate().len(), 12);
        assert!(generate_code(0).is_empty());
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(CODE_LENGTH)).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_full_alphabet() {
        let seen: HashSet<char> = (0..2000)
            .flat_map(|_| generate_code(CODE_LENGTH).chars().collect::<Vec<_>>())
            .collect();

        assert!(seen.iter().any(|c| c.is_ascii_lowercase()));
        assert!(seen.iter().any(|c| c.is_ascii_uppercase()));
        assert!(seen.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_next_sequential_id() {
        assert_eq!(next_sequential_id(0), 1);
        assert_eq!(next_sequential_id(2), 3);
    }
}
