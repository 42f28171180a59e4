//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::{CentralConfig, ConfigSource};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",      // Current directory
    "../config.toml",   // Parent directory (when running from subdirectory)
    "/app/config.toml", // Docker container
];

/// Load the central configuration.
///
/// The file is the one named by `HAUNT_CONFIG` if that exists, otherwise the
/// first of [`CONFIG_SEARCH_PATHS`] that exists. `HAUNT_*` overrides are
/// applied on top, and [`CentralConfig::source`] records which layer won.
pub fn load_config() -> CentralConfig {
    match locate_config_file() {
        Some(path) => load_from_path(&path),
        None => {
            debug!("No config.toml found, using built-in defaults");
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Load configuration from a specific path.
///
/// A file that cannot be read or parsed falls back to the defaults and is
/// reported as [`ConfigSource::Fallback`].
pub fn load_from_path(path: &Path) -> CentralConfig {
    let config = match read_config_file(path) {
        Ok(mut config) => {
            info!("Loading config from {}", path.display());
            config.source = ConfigSource::File(path.to_path_buf());
            config
        }
        Err(reason) => {
            warn!("Ignoring {}: {}, using defaults", path.display(), reason);
            CentralConfig {
                source: ConfigSource::Fallback {
                    path: path.to_path_buf(),
                    reason,
                },
                ..CentralConfig::default()
            }
        }
    };
    apply_env_overrides(config)
}

fn locate_config_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("HAUNT_CONFIG") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        warn!(
            "HAUNT_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    CONFIG_SEARCH_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

fn read_config_file(path: &Path) -> Result<CentralConfig, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("read failed: {}", e))?;
    toml::from_str(&content).map_err(|e| format!("parse failed: {}", e))
}

macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
            $config.overrides.push($key);
        }
    };
    // Parseable field (u32, u64, ...)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key).map(|s| s.parse()) {
            Ok(Ok(v)) => {
                $config.$section.$field = v;
                $config.overrides.push($key);
            }
            Ok(Err(_)) => warn!("Ignoring {}: not a valid number", $key),
            Err(_) => {}
        }
    };
    // Comma separated list of strings
    ($config:expr, $section:ident . $field:ident, $key:expr, list) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            $config.overrides.push($key);
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: HAUNT_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "HAUNT_COMMON_LOG_LEVEL");
    env_override!(config, common.output_path, "HAUNT_COMMON_OUTPUT_PATH");
    env_override!(config, common.seed, "HAUNT_COMMON_SEED", parse);

    // Hunt
    env_override!(config, hunt.boredom_max, "HAUNT_HUNT_BOREDOM_MAX", parse);
    env_override!(config, hunt.fear_max, "HAUNT_HUNT_FEAR_MAX", parse);
    env_override!(
        config,
        hunt.hunter_wait_us,
        "HAUNT_HUNT_HUNTER_WAIT_US",
        parse
    );
    env_override!(
        config,
        hunt.ghost_wait_us,
        "HAUNT_HUNT_GHOST_WAIT_US",
        parse
    );
    env_override!(
        config,
        hunt.hunter_names,
        "HAUNT_HUNT_HUNTER_NAMES",
        list
    );

    config
}
