/// Module containing environment variable helpers used by the configuration
pub mod config;
/// Module containing utilities for generating resource identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use id::*;
pub use logger::*;
