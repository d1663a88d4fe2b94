//! The registry owning the short code to long URL mapping.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::codegen::CodeGenerator;
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::utils::code_generator::AlphanumericCodeGenerator;

/// Maximum candidate draws per registration before giving up.
const MAX_ATTEMPTS: usize = 10;

/// In-memory registry mapping short codes to long URLs.
///
/// The registry owns exactly one mapping. Entries are added only by
/// [`Registry::shorten`] and are never removed or mutated afterwards.
///
/// # Deduplication
///
/// Shortening a URL that is already registered returns the existing entry,
/// so repeated calls with the same input yield the same code for the
/// lifetime of the registry. The check is a linear scan over current
/// entries; no reverse index is maintained.
///
/// # Code Generation
///
/// Codes come from an injectable [`CodeGenerator`] strategy. The registry
/// draws candidates until one is absent from the mapping, bounded by a
/// retry budget. Uniqueness is enforced here and only here; generators stay
/// uniqueness-blind so tests can substitute deterministic doubles.
///
/// # Concurrency
///
/// The mapping sits behind a single [`RwLock`]: `shorten` holds the write
/// lock across its scan, uniqueness check and insert, so two concurrent
/// calls cannot both pass the scan and both insert. `resolve` takes the
/// read lock. The registry is `Send + Sync` and can be shared behind an
/// `Arc` without further locking.
pub struct Registry<G = AlphanumericCodeGenerator> {
    links: RwLock<HashMap<String, Link>>,
    generator: G,
}

impl Registry<AlphanumericCodeGenerator> {
    /// Creates an empty registry with the default 6-character generator.
    pub fn new() -> Self {
        Self::with_generator(AlphanumericCodeGenerator::default())
    }

    /// Creates an empty registry generating codes of the given length.
    pub fn with_code_length(length: usize) -> Self {
        Self::with_generator(AlphanumericCodeGenerator::new(length))
    }
}

impl Default for Registry<AlphanumericCodeGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CodeGenerator> Registry<G> {
    /// Creates an empty registry with a custom code-generation strategy.
    pub fn with_generator(generator: G) -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            generator,
        }
    }

    /// Shortens a long URL, returning its registered entry.
    ///
    /// Any string is accepted as-is: empty strings, non-URL text and
    /// unicode are all stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeSpaceExhausted`] if no unused code was found
    /// within the retry budget. Never happens at realistic registry sizes
    /// with the default code length.
    pub fn shorten(&self, long_url: &str) -> Result<Link, AppError> {
        let mut links = self.links.write();

        if let Some(existing) = links.values().find(|link| link.long_url == long_url) {
            tracing::debug!(code = %existing.code, "URL already registered, reusing code");
            return Ok(existing.clone());
        }

        let code = Self::next_unused_code(&links, &self.generator)?;
        let link = Link::new(code.clone(), long_url.to_string(), Utc::now());
        links.insert(code, link.clone());

        tracing::debug!(code = %link.code, "registered new short link");
        Ok(link)
    }

    /// Resolves a short code to its original long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code has no entry. The error
    /// message carries the offending code.
    pub fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.links
            .read()
            .get(code)
            .map(|link| link.long_url.clone())
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Returns the number of registered links.
    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    /// Returns true if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }

    /// Returns a snapshot of all registered links, oldest first.
    pub fn links(&self) -> Vec<Link> {
        let mut links: Vec<Link> = self.links.read().values().cloned().collect();
        links.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.code.cmp(&b.code)));
        links
    }

    /// Draws candidates until one is absent from the mapping.
    ///
    /// Rejection sampling with a retry budget, the single place where code
    /// uniqueness is enforced.
    fn next_unused_code(links: &HashMap<String, Link>, generator: &G) -> Result<String, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = generator.generate();

            if !links.contains_key(&candidate) {
                return Ok(candidate);
            }

            tracing::debug!(code = %candidate, attempt, "generated code already taken, retrying");
        }

        Err(AppError::CodeSpaceExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
