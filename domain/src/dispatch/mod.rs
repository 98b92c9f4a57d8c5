//! Fan-out dispatch domain
//!
//! Which backends are asked, and what a completed fan-out looks like.

pub mod backend;
pub mod value_objects;
