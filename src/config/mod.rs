//! Configuration module for Roster
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROSTER_*)
//! 3. Explicit `--config` file, or `./roster.toml`
//! 4. User config (~/.config/roster/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{ColorMode, Config, LogConfig, LogLevel, OutputConfig, StorageConfig};
