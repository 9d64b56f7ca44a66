use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use codefolio::config::Config;
use codefolio::error::{ConfigError, Error};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("codefolio-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_valid_file() {
    let toml = r#"
[network]
graphql_url = "https://folio.example.com/graphql"

[storage]
state_path = "/tmp/codefolio-state.json"

[logging]
level = "debug"
format = "json"
"#;

    let path = write_temp_config(toml);
    let config = Config::load(&path).expect("valid config loads");
    let _ = fs::remove_file(&path);

    assert_eq!(config.network.graphql_url, "https://folio.example.com/graphql");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.state_path(),
        PathBuf::from("/tmp/codefolio-state.json")
    );
}

#[test]
fn config_rejects_empty_endpoint() {
    let toml = r#"
[network]
graphql_url = ""
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::MissingField {
            field: "graphql_url",
        })) => {}
        other => panic!("expected missing graphql_url, got {other:?}"),
    }
}

#[test]
fn config_rejects_unparseable_endpoint() {
    let toml = r#"
[network]
graphql_url = "not a url"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "graphql_url",
            ..
        })) => {}
        other => panic!("expected invalid graphql_url, got {other:?}"),
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = Config::load_or_default("/nonexistent/codefolio.toml").expect("defaults");
    assert_eq!(config.network.graphql_url, "http://localhost:4000/graphql");
    assert_eq!(config.logging.level, "info");
    assert!(config.storage.state_path.is_none());
}

#[test]
fn partial_file_fills_in_defaults() {
    let toml = r#"
[logging]
level = "warn"
format = "pretty"
"#;

    let path = write_temp_config(toml);
    let config = Config::load(&path).expect("partial config loads");
    let _ = fs::remove_file(&path);

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.network.graphql_url, "http://localhost:4000/graphql");
}
