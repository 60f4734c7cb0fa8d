//! Shared types, error model, and configuration for headingfix.
//!
//! This crate is the foundation depended on by the other headingfix crates.
//! It provides:
//! - [`HeadingFixError`]: the unified error type
//! - Domain types ([`JobRange`], [`HeadingChange`])
//! - Configuration ([`DisambiguatorConfig`], config loading and validation)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    DEFAULT_HEADING_LEVEL, DEFAULT_HEADINGS, DEFAULT_SEPARATOR, DisambiguatorConfig, load_config,
    load_config_from, parse_config,
};
pub use error::{HeadingFixError, Result};
pub use types::{HeadingChange, JobRange};
