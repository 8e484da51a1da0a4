//! Tests for configuration validation and merging.

use std::path::PathBuf;

use tempfile::TempDir;

use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use crate::config::{ConfigError, field};

fn full_toml() -> TomlConfig {
    TomlConfig::parse(
        r#"
fromMe = "pi@example.com"
toWhom = "me@example.com"
username = "pi@example.com"
password = "hunter2"
mail_server = "smtp.example.com:587"
use_tls = true
ip_file_path = "last_ip.txt"
debug = false
"#,
    )
    .unwrap()
}

fn bare_cli() -> Cli {
    Cli::parse_from_iter(["ipmail"])
}

mod required_fields {
    use super::*;

    #[test]
    fn full_config_validates() {
        let config = ValidatedConfig::from_raw(&bare_cli(), &full_toml()).unwrap();

        assert_eq!(config.from_me, "pi@example.com");
        assert_eq!(config.to_whom, "me@example.com");
        assert_eq!(config.username, "pi@example.com");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.smtp_host, "smtp.example.com");
        assert_eq!(config.smtp_port, 587);
        assert!(config.use_tls);
        assert_eq!(config.state_file, PathBuf::from("last_ip.txt"));
        assert!(!config.debug);
    }

    #[test]
    fn each_missing_key_is_reported_by_name() {
        let cases: &[(&str, &str)] = &[
            ("fromMe", field::FROM_ME),
            ("toWhom", field::TO_WHOM),
            ("username", field::USERNAME),
            ("password", field::PASSWORD),
            ("mail_server", field::MAIL_SERVER),
            ("use_tls", field::USE_TLS),
            ("ip_file_path", field::IP_FILE_PATH),
            ("debug", field::DEBUG),
        ];

        for (key, expected_field) in cases {
            let mut toml = full_toml();
            match *key {
                "fromMe" => toml.from_me = None,
                "toWhom" => toml.to_whom = None,
                "username" => toml.username = None,
                "password" => toml.password = None,
                "mail_server" => toml.mail_server = None,
                "use_tls" => toml.use_tls = None,
                "ip_file_path" => toml.ip_file_path = None,
                "debug" => toml.debug = None,
                _ => unreachable!(),
            }

            let result = ValidatedConfig::from_raw(&bare_cli(), &toml);
            match result {
                Err(ConfigError::MissingRequired { field: f, .. }) => {
                    assert_eq!(f, *expected_field, "wrong field for missing {key}");
                }
                other => panic!("Expected MissingRequired for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_ip_file_path_is_ok_with_cli_override() {
        let mut toml = full_toml();
        toml.ip_file_path = None;

        let cli = Cli::parse_from_iter(["ipmail", "/tmp/state.txt"]);
        let config = ValidatedConfig::from_raw(&cli, &toml).unwrap();

        assert_eq!(config.state_file, PathBuf::from("/tmp/state.txt"));
    }
}

mod mail_server {
    use super::*;

    fn with_server(server: &str) -> Result<ValidatedConfig, ConfigError> {
        let mut toml = full_toml();
        toml.mail_server = Some(server.to_string());
        ValidatedConfig::from_raw(&bare_cli(), &toml)
    }

    #[test]
    fn host_and_port_are_split() {
        let config = with_server("smtp.gmail.com:587").unwrap();
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 587);
    }

    #[test]
    fn bare_host_defaults_to_port_25() {
        let config = with_server("mail.example.com").unwrap();
        assert_eq!(config.smtp_host, "mail.example.com");
        assert_eq!(config.smtp_port, 25);
    }

    #[test]
    fn empty_value_is_invalid() {
        assert!(matches!(
            with_server(""),
            Err(ConfigError::InvalidMailServer { .. })
        ));
    }

    #[test]
    fn missing_host_is_invalid() {
        assert!(matches!(
            with_server(":587"),
            Err(ConfigError::InvalidMailServer { .. })
        ));
    }

    #[test]
    fn non_numeric_port_is_invalid() {
        assert!(matches!(
            with_server("smtp.example.com:sub"),
            Err(ConfigError::InvalidMailServer { .. })
        ));
    }

    #[test]
    fn out_of_range_port_is_invalid() {
        assert!(matches!(
            with_server("smtp.example.com:70000"),
            Err(ConfigError::InvalidMailServer { .. })
        ));
    }
}

mod precedence_and_flags {
    use super::*;

    #[test]
    fn cli_positional_beats_ip_file_path() {
        let cli = Cli::parse_from_iter(["ipmail", "/override/state.txt"]);
        let config = ValidatedConfig::from_raw(&cli, &full_toml()).unwrap();

        assert_eq!(config.state_file, PathBuf::from("/override/state.txt"));
    }

    #[test]
    fn dry_run_comes_from_cli() {
        let cli = Cli::parse_from_iter(["ipmail", "--dry-run"]);
        let config = ValidatedConfig::from_raw(&cli, &full_toml()).unwrap();

        assert!(config.dry_run);
    }

    #[test]
    fn verbose_set_by_cli_flag() {
        let cli = Cli::parse_from_iter(["ipmail", "--verbose"]);
        let config = ValidatedConfig::from_raw(&cli, &full_toml()).unwrap();

        assert!(config.verbose);
    }

    #[test]
    fn verbose_set_by_config_debug_flag() {
        let mut toml = full_toml();
        toml.debug = Some(true);

        let config = ValidatedConfig::from_raw(&bare_cli(), &toml).unwrap();

        assert!(config.debug);
        assert!(config.verbose);
    }
}

mod display {
    use super::*;

    #[test]
    fn display_never_contains_the_password() {
        let config = ValidatedConfig::from_raw(&bare_cli(), &full_toml()).unwrap();
        let rendered = config.to_string();

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("smtp.example.com:587"));
        assert!(rendered.contains("last_ip.txt"));
    }
}

mod init {
    use super::*;

    #[test]
    fn write_default_config_creates_parseable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ipmail.toml");

        write_default_config(&path).unwrap();

        let config = TomlConfig::load(&path).unwrap();
        assert!(config.from_me.is_none());
    }

    #[test]
    fn write_default_config_reports_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("ipmail.toml");

        let result = write_default_config(&path);
        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}

mod load {
    use super::*;

    #[test]
    fn load_reads_config_named_by_cli() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ipmail.toml");
        std::fs::write(
            &path,
            r#"
fromMe = "pi@x"
toWhom = "me@x"
username = "pi@x"
password = "pw"
mail_server = "smtp.x:587"
use_tls = false
ip_file_path = "state.txt"
debug = false
"#,
        )
        .unwrap();

        let cli = Cli::parse_from_iter(["ipmail", "--config", path.to_str().unwrap()]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.from_me, "pi@x");
        assert_eq!(config.smtp_port, 587);
    }

    #[test]
    fn load_fails_loudly_when_config_missing() {
        let cli = Cli::parse_from_iter(["ipmail", "--config", "/nonexistent/ipmail.toml"]);

        let result = ValidatedConfig::load(&cli);
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}
