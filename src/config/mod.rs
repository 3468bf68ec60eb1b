//! Configuration module for transit-pass.
//!
//! Loads ticket labels, display timings and the store location from
//! `~/.config/transit-pass/config.toml`, falling back to defaults.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, DisplayConfig, StoreConfig, TicketLabels};
