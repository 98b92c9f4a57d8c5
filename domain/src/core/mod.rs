//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: an opaque gateway model identifier
//! - [`error::DomainError`]: domain-level errors
//! - [`string::truncate`]: character-safe truncation

pub mod error;
pub mod model;
pub mod string;
