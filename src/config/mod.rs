//! Configuration layer for ipmail.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! All mail settings live in the config file; the CLI contributes only the
//! optional positional state-file override (which beats `ip_file_path`),
//! the config file path itself, and the `--dry-run`/`--verbose` flags.
//!
//! Every config key is required. The file is the program's credential
//! store, so a partially filled file fails loudly at startup instead of
//! probing with incomplete mail settings.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
