//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A registered short code / long URL mapping
//!
//! Entities are plain data structures without business logic. All entities
//! include unit tests demonstrating their construction and usage.

pub mod link;

pub use link::Link;
