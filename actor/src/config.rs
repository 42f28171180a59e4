//! Configuration for the hunt runner
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use clap::Parser;
use haunt_config::{load_config, CentralConfig, ConfigSource};
use haunt_core::{EvidenceKind, GhostClass, HuntRules, Roster, MAX_HUNTERS};
use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_hunters() -> Vec<String> {
    std::env::var("HAUNT_HUNTERS")
        .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_else(|_| CENTRAL_CONFIG.hunt.hunter_names.clone())
}

fn default_seed() -> u64 {
    std::env::var("HAUNT_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(CENTRAL_CONFIG.common.seed)
}

fn default_boredom_max() -> u32 {
    std::env::var("HAUNT_BOREDOM_MAX")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(CENTRAL_CONFIG.hunt.boredom_max)
}

fn default_fear_max() -> u32 {
    std::env::var("HAUNT_FEAR_MAX")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(CENTRAL_CONFIG.hunt.fear_max)
}

fn default_hunter_wait_us() -> u64 {
    std::env::var("HAUNT_HUNTER_WAIT_US")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(CENTRAL_CONFIG.hunt.hunter_wait_us)
}

fn default_ghost_wait_us() -> u64 {
    std::env::var("HAUNT_GHOST_WAIT_US")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(CENTRAL_CONFIG.hunt.ghost_wait_us)
}

fn default_output_path() -> String {
    std::env::var("HAUNT_OUTPUT_PATH")
        .unwrap_or_else(|_| CENTRAL_CONFIG.common.output_path.clone())
}

fn default_log_level() -> String {
    std::env::var("HAUNT_LOG_LEVEL").unwrap_or_else(|_| CENTRAL_CONFIG.common.log_level.clone())
}

/// Where the central config came from, and which `HAUNT_*` keys overrode it.
pub fn central_source() -> (&'static ConfigSource, &'static [&'static str]) {
    (&CENTRAL_CONFIG.source, &CENTRAL_CONFIG.overrides)
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "haunt")]
#[command(about = "Run a ghost hunt with one ghost and up to four hunters")]
#[command(
    long_about = "Runs one ghost and up to four hunters on their own threads in a
13-room house. Hunters collect the evidence their equipment detects and win
once any of them has every kind the ghost leaves.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Hunter names, comma separated (at most four)
    #[arg(long, value_delimiter = ',', default_values_t = default_hunters())]
    pub hunters: Vec<String>,

    /// Equipment per hunter, in the same order as --hunters (names or 0-3).
    /// Dealt at random without repeats when omitted.
    #[arg(long, value_delimiter = ',')]
    pub equipment: Vec<EvidenceKind>,

    /// Ghost class to place (random when omitted)
    #[arg(long)]
    pub ghost: Option<GhostClass>,

    /// Seed for every random choice (0 picks one from the clock)
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Boredom at which an actor gives up
    #[arg(long, default_value_t = default_boredom_max())]
    pub boredom_max: u32,

    /// Fear at which a hunter flees
    #[arg(long, default_value_t = default_fear_max())]
    pub fear_max: u32,

    /// Pause between hunter ticks in microseconds
    #[arg(long, default_value_t = default_hunter_wait_us())]
    pub hunter_wait_us: u64,

    /// Pause between ghost ticks in microseconds
    #[arg(long, default_value_t = default_ghost_wait_us())]
    pub ghost_wait_us: u64,

    /// Event log file, truncated at the start of the run
    #[arg(long, default_value_t = default_output_path())]
    pub output_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Print the final report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.hunters.is_empty() {
            return Err(anyhow!("hunters cannot be empty"));
        }

        if self.hunters.len() > MAX_HUNTERS {
            return Err(anyhow!(
                "hunters accepts at most {} names, got {}",
                MAX_HUNTERS,
                self.hunters.len()
            ));
        }

        if self.hunters.iter().any(|name| name.trim().is_empty()) {
            return Err(anyhow!("hunters cannot contain an empty name"));
        }

        let mut seen = HashSet::new();
        if let Some(name) = self.hunters.iter().find(|name| !seen.insert(name.trim())) {
            return Err(anyhow!("hunters contains '{}' more than once", name));
        }

        if !self.equipment.is_empty() {
            if self.equipment.len() != self.hunters.len() {
                return Err(anyhow!(
                    "equipment needs one entry per hunter ({}), got {}",
                    self.hunters.len(),
                    self.equipment.len()
                ));
            }
            let mut kinds = HashSet::new();
            if let Some(kind) = self.equipment.iter().find(|kind| !kinds.insert(**kind)) {
                return Err(anyhow!("equipment assigns {} more than once", kind));
            }
        }

        if self.boredom_max == 0 {
            return Err(anyhow!("boredom_max must be greater than 0"));
        }

        if self.fear_max == 0 {
            return Err(anyhow!("fear_max must be greater than 0"));
        }

        if self.output_path.is_empty() {
            return Err(anyhow!("output_path cannot be empty"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn hunter_pause(&self) -> Duration {
        Duration::from_micros(self.hunter_wait_us)
    }

    pub fn ghost_pause(&self) -> Duration {
        Duration::from_micros(self.ghost_wait_us)
    }

    pub fn rules(&self) -> HuntRules {
        HuntRules::default()
            .with_boredom_max(self.boredom_max)
            .with_fear_max(self.fear_max)
            .with_pauses(self.hunter_pause(), self.ghost_pause())
    }

    /// The configured seed, or one taken from the clock when it is 0.
    pub fn resolved_seed(&self) -> u64 {
        if self.seed != 0 {
            return self.seed;
        }
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(1)
            .max(1)
    }

    /// Build the party, dealing equipment at random unless it was given.
    pub fn roster<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Roster> {
        let roster = if self.equipment.is_empty() {
            Roster::deal(&self.hunters, rng)?
        } else {
            Roster::assign(&self.hunters, &self.equipment)?
        };
        Ok(roster)
    }
}
