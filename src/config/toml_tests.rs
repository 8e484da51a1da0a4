//! Tests for TOML configuration parsing.

use tempfile::TempDir;

use super::toml::{TomlConfig, default_config_template};
use crate::config::ConfigError;

const FULL_CONFIG: &str = r#"
fromMe = "pi@example.com"
toWhom = "me@example.com"
username = "pi@example.com"
password = "hunter2"
mail_server = "smtp.example.com:587"
use_tls = true
ip_file_path = "last_ip.txt"
debug = false
"#;

#[test]
fn parses_full_config_with_creds_json_key_names() {
    let config = TomlConfig::parse(FULL_CONFIG).unwrap();

    assert_eq!(config.from_me.as_deref(), Some("pi@example.com"));
    assert_eq!(config.to_whom.as_deref(), Some("me@example.com"));
    assert_eq!(config.username.as_deref(), Some("pi@example.com"));
    assert_eq!(config.password.as_deref(), Some("hunter2"));
    assert_eq!(config.mail_server.as_deref(), Some("smtp.example.com:587"));
    assert_eq!(config.use_tls, Some(true));
    assert_eq!(config.ip_file_path.as_deref(), Some("last_ip.txt"));
    assert_eq!(config.debug, Some(false));
}

#[test]
fn parses_partial_config_as_options() {
    let config = TomlConfig::parse("fromMe = \"pi@example.com\"\n").unwrap();

    assert_eq!(config.from_me.as_deref(), Some("pi@example.com"));
    assert!(config.to_whom.is_none());
    assert!(config.mail_server.is_none());
}

#[test]
fn empty_config_parses_to_all_none() {
    let config = TomlConfig::parse("").unwrap();

    assert!(config.from_me.is_none());
    assert!(config.use_tls.is_none());
    assert!(config.debug.is_none());
}

#[test]
fn unknown_keys_are_rejected() {
    let result = TomlConfig::parse("from_me = \"wrong spelling\"\n");
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let result = TomlConfig::parse("fromMe = not quoted");
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn load_reads_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ipmail.toml");
    std::fs::write(&path, FULL_CONFIG).unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.use_tls, Some(true));
}

#[test]
fn load_reports_missing_file_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nonexistent.toml");

    let result = TomlConfig::load(&path);

    match result {
        Err(ConfigError::FileRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected FileRead error, got {other:?}"),
    }
}

#[test]
fn default_template_is_valid_toml() {
    let template = default_config_template();
    let config = TomlConfig::parse(&template).unwrap();

    // Template ships with everything commented out
    assert!(config.from_me.is_none());
    assert!(config.mail_server.is_none());
}

#[test]
fn default_template_documents_every_key() {
    let template = default_config_template();

    for key in [
        "fromMe",
        "toWhom",
        "username",
        "password",
        "mail_server",
        "use_tls",
        "ip_file_path",
        "debug",
    ] {
        assert!(template.contains(key), "template missing key {key}");
    }
}
