//! Config Module
//!
//! Settings for the demo window and frame loop.

pub mod demo_config;

pub use demo_config::{ConfigError, DemoConfig};
