//! Tests for the configuration module.

use super::*;
use std::io::Write as _;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.common.output_path, "./output.txt");
    assert_eq!(config.common.seed, 0);
    assert_eq!(config.hunt.boredom_max, 100);
    assert_eq!(config.hunt.fear_max, 10);
    assert_eq!(config.hunt.hunter_wait_us, 5000);
    assert_eq!(config.hunt.ghost_wait_us, 600);
    assert_eq!(
        config.hunt.hunter_names,
        vec!["Ray", "Egon", "Peter", "Winston"]
    );
}

#[test]
fn test_haunt_env_overrides() {
    std::env::set_var("HAUNT_HUNT_FEAR_MAX", "3");
    std::env::set_var("HAUNT_COMMON_OUTPUT_PATH", "/tmp/hunt.txt");
    std::env::set_var("HAUNT_HUNT_HUNTER_NAMES", "Janine, Louis,,");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.hunt.fear_max, 3);
    assert_eq!(config.common.output_path, "/tmp/hunt.txt");
    assert_eq!(config.hunt.hunter_names, vec!["Janine", "Louis"]);
    for key in [
        "HAUNT_HUNT_FEAR_MAX",
        "HAUNT_COMMON_OUTPUT_PATH",
        "HAUNT_HUNT_HUNTER_NAMES",
    ] {
        assert!(config.overrides.contains(&key), "{} not recorded", key);
    }

    std::env::remove_var("HAUNT_HUNT_FEAR_MAX");
    std::env::remove_var("HAUNT_COMMON_OUTPUT_PATH");
    std::env::remove_var("HAUNT_HUNT_HUNTER_NAMES");
}

#[test]
fn test_invalid_numeric_override_is_ignored() {
    std::env::set_var("HAUNT_HUNT_GHOST_WAIT_US", "soon");
    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.hunt.ghost_wait_us, 600);
    assert!(!config.overrides.contains(&"HAUNT_HUNT_GHOST_WAIT_US"));
    std::env::remove_var("HAUNT_HUNT_GHOST_WAIT_US");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "debug"
seed = 42

[hunt]
boredom_max = 20
hunter_names = ["Ray", "Egon"]
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.common.seed, 42);
    assert_eq!(config.hunt.boredom_max, 20);
    assert_eq!(config.hunt.hunter_names, vec!["Ray", "Egon"]);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[hunt]
fear_max = 4
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.hunt.fear_max, 4);
    assert_eq!(config.hunt.boredom_max, 100); // Default
    assert_eq!(config.common.output_path, "./output.txt"); // Default
}

#[test]
fn test_load_from_path_reads_file() {
    let path = std::env::temp_dir().join(format!("haunt-config-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[hunt]\nboredom_max = 7").unwrap();
    }

    let config = load_from_path(&path);
    assert_eq!(config.hunt.boredom_max, 7);
    assert_eq!(config.source, ConfigSource::File(path.clone()));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_from_missing_path_uses_defaults() {
    let path = std::path::Path::new("/nonexistent/haunt/config.toml");
    let config = load_from_path(path);
    assert_eq!(config.hunt.ghost_wait_us, 600);
    match &config.source {
        ConfigSource::Fallback { path: p, reason } => {
            assert_eq!(p.as_path(), path);
            assert!(reason.starts_with("read failed"), "{}", reason);
        }
        other => panic!("expected fallback, got {:?}", other),
    }
}

#[test]
fn test_unparsable_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join(format!("haunt-config-bad-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[hunt]\nboredom_max = \"lots\"").unwrap();
    }

    let config = load_from_path(&path);
    assert_eq!(config.hunt.boredom_max, 100);
    match &config.source {
        ConfigSource::Fallback { reason, .. } => {
            assert!(reason.starts_with("parse failed"), "{}", reason)
        }
        other => panic!("expected fallback, got {:?}", other),
    }
    assert!(config.source.to_string().starts_with("built-in defaults ("));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_default_config_reports_builtin_source() {
    let config = CentralConfig::default();
    assert_eq!(config.source, ConfigSource::Defaults);
    assert_eq!(config.source.to_string(), "built-in defaults");
    assert!(config.overrides.is_empty());
}
