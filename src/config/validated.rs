//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// All required keys are present and `mail_server` has been split into a
/// host and a port. Immutable for the lifetime of the run.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and a parsed
/// TOML config, or [`ValidatedConfig::load`] to read the file named by the
/// CLI first.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Sender address.
    pub from_me: String,

    /// Recipient address.
    pub to_whom: String,

    /// SMTP authentication username.
    pub username: String,

    /// SMTP authentication password.
    pub password: String,

    /// Mail server host.
    pub smtp_host: String,

    /// Mail server port.
    pub smtp_port: u16,

    /// Upgrade with STARTTLS before authenticating.
    pub use_tls: bool,

    /// Path of the state file (CLI positional wins over `ip_file_path`).
    pub state_file: PathBuf,

    /// Debug logging enabled via the config file.
    pub debug: bool,

    /// Dry-run mode (log the notification without sending).
    pub dry_run: bool,

    /// Verbose logging requested (CLI flag or config `debug`).
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    // Never prints credentials.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ from: {}, to: {}, server: {}:{}, use_tls: {}, state_file: {}, \
             dry_run: {}, debug: {} }}",
            self.from_me,
            self.to_whom,
            self.smtp_host,
            self.smtp_port,
            self.use_tls,
            self.state_file.display(),
            self.dry_run,
            self.debug,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and a parsed
    /// TOML config.
    ///
    /// The CLI's positional state-file argument takes precedence over the
    /// file's `ip_file_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required key is absent or `mail_server` is
    /// not a valid `host:port`.
    pub fn from_raw(cli: &Cli, toml: &TomlConfig) -> Result<Self, ConfigError> {
        let from_me = require(&toml.from_me, field::FROM_ME, "Set the sender address")?;
        let to_whom = require(&toml.to_whom, field::TO_WHOM, "Set the recipient address")?;
        let username = require(&toml.username, field::USERNAME, "Set the SMTP username")?;
        let password = require(&toml.password, field::PASSWORD, "Set the SMTP password")?;

        let mail_server = require(
            &toml.mail_server,
            field::MAIL_SERVER,
            "Set the mail server as host:port",
        )?;
        let (smtp_host, smtp_port) = parse_mail_server(&mail_server)?;

        let use_tls = toml.use_tls.ok_or_else(|| {
            ConfigError::missing(field::USE_TLS, "Set whether to upgrade with STARTTLS")
        })?;

        let debug = toml
            .debug
            .ok_or_else(|| ConfigError::missing(field::DEBUG, "Set the debug flag"))?;

        let state_file = Self::resolve_state_file(cli, toml)?;

        Ok(Self {
            from_me,
            to_whom,
            username,
            password,
            smtp_host,
            smtp_port,
            use_tls,
            state_file,
            debug,
            dry_run: cli.dry_run,
            verbose: cli.verbose || debug,
        })
    }

    /// Loads the config file named by the CLI and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = TomlConfig::load(&cli.config)?;
        Self::from_raw(cli, &toml)
    }

    fn resolve_state_file(cli: &Cli, toml: &TomlConfig) -> Result<PathBuf, ConfigError> {
        // CLI positional takes precedence
        if let Some(ref path) = cli.state_file {
            return Ok(path.clone());
        }

        toml.ip_file_path.as_ref().map(PathBuf::from).ok_or_else(|| {
            ConfigError::missing(
                field::IP_FILE_PATH,
                "Set the state file path, or pass one as the STATE_FILE argument",
            )
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn require(
    value: &Option<String>,
    field: &'static str,
    hint: &'static str,
) -> Result<String, ConfigError> {
    value
        .clone()
        .ok_or_else(|| ConfigError::missing(field, hint))
}

/// Splits `host:port` into its parts; a bare host gets port 25.
fn parse_mail_server(value: &str) -> Result<(String, u16), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidMailServer {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let Some((host, port)) = value.rsplit_once(':') else {
        if value.is_empty() {
            return Err(invalid("host must not be empty"));
        }
        return Ok((value.to_string(), defaults::SMTP_PORT));
    };

    if host.is_empty() {
        return Err(invalid("host must not be empty"));
    }

    let port = port
        .parse::<u16>()
        .map_err(|_| invalid("port must be a number between 1 and 65535"))?;

    Ok((host.to_string(), port))
}
