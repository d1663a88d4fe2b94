//! Short code generation utilities.
//!
//! Provides the production [`CodeGenerator`] implementation: uniform random
//! draws from the 62-symbol alphanumeric alphabet.

use rand::distr::{Alphanumeric, SampleString};

use crate::domain::codegen::CodeGenerator;

/// Default length of generated short codes.
///
/// Six alphanumeric characters give 62^6 (about 56.8 billion) candidates,
/// which vastly exceeds any realistic registry size.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates fixed-length random alphanumeric short codes.
///
/// Each character is drawn independently and uniformly from `A-Z`, `a-z`
/// and `0-9`. The generator produces raw candidates only; collision checks
/// happen in the registry.
///
/// # Examples
///
/// ```
/// use shortcode::domain::codegen::CodeGenerator;
/// use shortcode::utils::code_generator::AlphanumericCodeGenerator;
///
/// let generator = AlphanumericCodeGenerator::default();
/// let code = generator.generate();
///
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Debug, Clone)]
pub struct AlphanumericCodeGenerator {
    length: usize,
}

impl AlphanumericCodeGenerator {
    /// Creates a generator producing codes of the given length.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Returns the configured code length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for AlphanumericCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for AlphanumericCodeGenerator {
    fn generate(&self) -> String {
        Alphanumeric.sample_string(&mut rand::rng(), self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_not_empty() {
        let code = AlphanumericCodeGenerator::default().generate();
        assert!(!code.is_empty());
    }

    #[test]
    fn test_generate_code_has_default_length() {
        let code = AlphanumericCodeGenerator::default().generate();
        assert_eq!(code.len(), DEFAULT_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_honors_custom_length() {
        let generator = AlphanumericCodeGenerator::new(10);
        assert_eq!(generator.generate().len(), 10);
        assert_eq!(generator.length(), 10);
    }

    #[test]
    fn test_generate_code_alphanumeric_characters_only() {
        let generator = AlphanumericCodeGenerator::default();

        for _ in 0..100 {
            let code = generator.generate();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = AlphanumericCodeGenerator::default();
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            let code = generator.generate();
            codes.insert(code);
        }

        assert_eq!(codes.len(), 1000);
    }
}
