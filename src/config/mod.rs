//! Configuration module for the Driverays API
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use driverays_api::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("driverays.toml")).unwrap();
//! println!("Cache TTL: {}s", config.cache.ttl_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CacheConfig, Config, RateLimitConfig, ServerConfig, UpstreamConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
