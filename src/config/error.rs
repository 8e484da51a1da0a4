//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant is fatal: all downstream steps depend on a complete
/// configuration, so a missing or malformed file aborts before any probing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required configuration key.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid `mail_server` value.
    #[error("Invalid mail_server '{value}': {reason}")]
    InvalidMailServer {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// These are the config file's key spellings, so error messages point at
/// the exact key to add.
pub mod field {
    /// Sender address key.
    pub const FROM_ME: &str = "fromMe";
    /// Recipient address key.
    pub const TO_WHOM: &str = "toWhom";
    /// SMTP username key.
    pub const USERNAME: &str = "username";
    /// SMTP password key.
    pub const PASSWORD: &str = "password";
    /// Mail server `host:port` key.
    pub const MAIL_SERVER: &str = "mail_server";
    /// STARTTLS flag key.
    pub const USE_TLS: &str = "use_tls";
    /// State file path key.
    pub const IP_FILE_PATH: &str = "ip_file_path";
    /// Debug flag key.
    pub const DEBUG: &str = "debug";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
