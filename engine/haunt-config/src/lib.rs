//! Centralized configuration loading from config.toml.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`HAUNT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! HAUNT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     HAUNT_COMMON_LOG_LEVEL=debug
//!     HAUNT_COMMON_OUTPUT_PATH=/tmp/hunt.txt
//!     HAUNT_HUNT_FEAR_MAX=5
//!     HAUNT_HUNT_HUNTER_NAMES=Ray,Egon
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
