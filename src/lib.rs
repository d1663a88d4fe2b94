//! # Shortcode
//!
//! A fast, in-memory URL shortening registry with collision-safe code generation.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the code-generation trait
//! - **Registry** ([`registry`]) - The owning component holding the code-to-URL mapping
//! - **Utilities** ([`utils`]) - The production alphanumeric code generator
//!
//! ## Features
//!
//! - Fixed-length alphanumeric short codes (6 characters by default, configurable)
//! - Deduplication: shortening the same URL twice yields the same code
//! - Collision retry with a bounded rejection-sampling loop
//! - Injectable code-generation strategy for deterministic tests
//! - Thread-safe: the registry can be shared behind an `Arc` as-is
//!
//! ## Quick Start
//!
//! ```
//! use shortcode::prelude::*;
//!
//! let registry = Registry::new();
//!
//! let link = registry.shorten("https://www.rust-lang.org/learn").unwrap();
//! assert_eq!(link.code.len(), 6);
//!
//! let long_url = registry.resolve(&link.code).unwrap();
//! assert_eq!(long_url, "https://www.rust-lang.org/learn");
//! ```
//!
//! ## Configuration
//!
//! The CLI binary loads its settings from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod domain;
pub mod error;
pub mod registry;
pub mod utils;

pub mod config;

pub use error::AppError;
pub use registry::Registry;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::codegen::CodeGenerator;
    pub use crate::domain::entities::Link;
    pub use crate::error::AppError;
    pub use crate::registry::Registry;
    pub use crate::utils::code_generator::AlphanumericCodeGenerator;
}
