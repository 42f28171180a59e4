//! Default configuration values loaded from config.defaults.toml.
//!
//! The shared TOML file is embedded at compile time, so the binary and any
//! other tooling agree on the same defaults.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    hunt: HuntDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    output_path: String,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct HuntDefaults {
    boredom_max: u32,
    fear_max: u32,
    hunter_wait_us: u64,
    ghost_wait_us: u64,
    hunter_names: Vec<String>,
}

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn output_path() -> &'static str {
    &DEFAULTS.common.output_path
}
pub fn seed() -> u64 {
    DEFAULTS.common.seed
}

// Hunt
pub fn boredom_max() -> u32 {
    DEFAULTS.hunt.boredom_max
}
pub fn fear_max() -> u32 {
    DEFAULTS.hunt.fear_max
}
pub fn hunter_wait_us() -> u64 {
    DEFAULTS.hunt.hunter_wait_us
}
pub fn ghost_wait_us() -> u64 {
    DEFAULTS.hunt.ghost_wait_us
}
pub fn hunter_names() -> &'static [String] {
    &DEFAULTS.hunt.hunter_names
}
