//! Code-generation trait for short code candidates.

/// Strategy for producing short code candidates.
///
/// Implementations return one raw candidate per call and know nothing about
/// which codes are already taken; uniqueness is enforced in exactly one
/// place, the retry loop in [`crate::registry::Registry::shorten`]. Keeping
/// the generator uniqueness-blind lets a test double force collision
/// sequences and verify the retry behavior.
///
/// # Implementations
///
/// - [`crate::utils::code_generator::AlphanumericCodeGenerator`] - uniform
///   random draws from the 62-symbol alphanumeric alphabet
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate short code.
    fn generate(&self) -> String;
}
