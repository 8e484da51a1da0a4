//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "ipmail.toml";

/// Default SMTP port when `mail_server` carries no explicit port.
pub const SMTP_PORT: u16 = 25;
