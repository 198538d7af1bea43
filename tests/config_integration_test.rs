//! Integration tests for configuration loading.
//!
//! Verifies file loading, environment override precedence, and that
//! invalid configurations are fatal at load time.

use std::io::Write;

use tempfile::NamedTempFile;

use conveyor::infrastructure::config::ConfigLoader;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{yaml}").unwrap();
    file.flush().unwrap();
    file
}

const VALID_YAML: &str = r#"
poller:
  site: acme
  user: ci-bot@example.com
  token: file-token
  jql: "project = CI ORDER BY updated"
notifier:
  webhook_url: https://hooks.example.com/services/T000/B000/XXX
"#;

#[test]
fn test_load_from_file() {
    let file = write_config(VALID_YAML);
    let config = ConfigLoader::load_from_file(file.path()).expect("config should load");

    assert_eq!(config.poller.site, "acme");
    assert_eq!(config.poller.token, "file-token");
    // Defaults fill the unspecified keys.
    assert_eq!(config.poller.poll_interval_secs, 10);
    assert!(config.poller.poll_at_launch);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let file = write_config(VALID_YAML);

    // Use a key no other test asserts on; tests share the process
    // environment and run in parallel.
    std::env::set_var("CONVEYOR_POLLER__CATEGORY", "from-env");
    let config = ConfigLoader::load_from_file(file.path()).expect("config should load");
    std::env::remove_var("CONVEYOR_POLLER__CATEGORY");

    assert_eq!(config.poller.category.as_deref(), Some("from-env"));
    // Non-overridden keys keep their file values.
    assert_eq!(config.poller.site, "acme");
    assert_eq!(config.poller.token, "file-token");
}

#[test]
fn test_missing_credentials_are_fatal() {
    let file = write_config(
        r#"
poller:
  site: acme
notifier:
  webhook_url: https://hooks.example.com/services/T000/B000/XXX
"#,
    );

    let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("user"), "got: {err:#}");
}

#[test]
fn test_invalid_webhook_url_is_fatal() {
    let file = write_config(
        r#"
poller:
  site: acme
  user: ci-bot@example.com
  token: secret
  jql: "project = CI"
notifier:
  webhook_url: hooks.example.com/no-scheme
"#,
    );

    let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("webhook_url"), "got: {err:#}");
}
