//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. The key
//! spellings (`fromMe`, `toWhom`, ...) match the `creds.json` layout this
//! tool replaces, so existing values can be carried over one-to-one.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Raw configuration structure from the TOML file.
///
/// All fields are optional so that presence checks can produce precise
/// missing-key errors during validation instead of opaque serde failures.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Sender address.
    #[serde(rename = "fromMe")]
    pub from_me: Option<String>,

    /// Recipient address.
    #[serde(rename = "toWhom")]
    pub to_whom: Option<String>,

    /// Username for SMTP authentication.
    pub username: Option<String>,

    /// Password for SMTP authentication.
    pub password: Option<String>,

    /// Mail server as `host:port` (port optional, defaults to 25).
    pub mail_server: Option<String>,

    /// Upgrade the connection with STARTTLS before authenticating.
    pub use_tls: Option<bool>,

    /// Path of the state file recording the last-known address list.
    pub ip_file_path: Option<String>,

    /// Enable debug logging.
    pub debug: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ipmail configuration file
# All keys are required.

# Sender address (some providers, e.g. Gmail, override this with the
# authenticated account)
# fromMe = "pi@example.com"

# Recipient of the notification
# toWhom = "me@example.com"

# SMTP authentication (for Gmail, use an app-specific password)
# username = "pi@example.com"
# password = "app-specific-password"

# Mail server as host:port; the port defaults to 25 when omitted.
# For Gmail use "smtp.gmail.com:587".
# mail_server = "smtp.example.com:587"

# Upgrade the connection with STARTTLS before authenticating.
# Must be true for Gmail.
# use_tls = true

# File that records the previously seen address list, one per line.
# Overridable with the STATE_FILE positional argument.
# ip_file_path = "last_ip.txt"

# Enable debug logging
# debug = false
"#
    .to_string()
}
