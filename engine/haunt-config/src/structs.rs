//! Configuration struct definitions.

use crate::defaults;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_output_path() -> String {
    defaults::output_path().into()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_boredom_max() -> u32 {
    defaults::boredom_max()
}
fn d_fear_max() -> u32 {
    defaults::fear_max()
}
fn d_hunter_wait_us() -> u64 {
    defaults::hunter_wait_us()
}
fn d_ghost_wait_us() -> u64 {
    defaults::ghost_wait_us()
}
fn d_hunter_names() -> Vec<String> {
    defaults::hunter_names().to_vec()
}

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub hunt: HuntConfig,
    /// Where the file-level values came from. Filled in by the loader.
    #[serde(skip)]
    pub source: ConfigSource,
    /// `HAUNT_*` variables that replaced a value, in the order applied.
    #[serde(skip)]
    pub overrides: Vec<&'static str>,
}

/// Which layer supplied the configuration before env overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// No config.toml was found.
    #[default]
    Defaults,
    /// Values read from this file.
    File(PathBuf),
    /// The file exists but could not be read or parsed; defaults were used.
    Fallback { path: PathBuf, reason: String },
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => f.write_str("built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Fallback { path, reason } => {
                write!(f, "built-in defaults ({} unusable: {})", path.display(), reason)
            }
        }
    }
}

/// Settings that are not specific to the simulation itself
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Event log file, truncated at the start of every run.
    #[serde(default = "d_output_path")]
    pub output_path: String,
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            output_path: defaults::output_path().into(),
            seed: defaults::seed(),
        }
    }
}

/// Thresholds, pacing and party for one hunt
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HuntConfig {
    #[serde(default = "d_boredom_max")]
    pub boredom_max: u32,
    #[serde(default = "d_fear_max")]
    pub fear_max: u32,
    #[serde(default = "d_hunter_wait_us")]
    pub hunter_wait_us: u64,
    #[serde(default = "d_ghost_wait_us")]
    pub ghost_wait_us: u64,
    #[serde(default = "d_hunter_names")]
    pub hunter_names: Vec<String>,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            boredom_max: defaults::boredom_max(),
            fear_max: defaults::fear_max(),
            hunter_wait_us: defaults::hunter_wait_us(),
            ghost_wait_us: defaults::ghost_wait_us(),
            hunter_names: defaults::hunter_names().to_vec(),
        }
    }
}
