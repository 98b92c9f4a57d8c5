//! Application-level configuration.
//!
//! - [`DispatchConfig`]: backends and default instructions for every fan-out

pub mod dispatch_config;

pub use dispatch_config::DispatchConfig;
