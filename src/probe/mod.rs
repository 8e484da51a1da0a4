//! Probing the host's current interface addresses.
//!
//! The probe is the most environment-coupled part of the program: it spawns
//! the platform's interface-listing command and scrapes its text output.
//! The [`AddressProber`] trait keeps that fragility behind a narrow seam so
//! the pipeline can be tested with mock probers.

mod command;
pub mod parse;

pub use command::CommandProber;

use thiserror::Error;

/// What a probe run produced.
///
/// `raw_output` is carried along so the notification body can include the
/// full command output for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Extracted IPv4 addresses, loopback removed, in command output order.
    pub addresses: Vec<String>,

    /// The unmodified stdout of the interface-listing command.
    pub raw_output: String,
}

/// Error type for probe operations.
///
/// Every variant is fatal to the run: without a trustworthy address list
/// there is no safe notify-or-not decision, and mailing a garbage list is
/// worse than exiting.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The interface-listing command could not be spawned.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        /// The command that failed to start.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited with a failure status.
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        /// The command that failed.
        command: String,
        /// Its exit status.
        status: std::process::ExitStatus,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// The command produced output that is not valid UTF-8.
    #[error("'{command}' produced non-UTF-8 output")]
    InvalidUtf8 {
        /// The command whose output was rejected.
        command: String,
    },

    /// No interface address could be found in the command output.
    ///
    /// Distinguishes "the parser understood nothing" from a host that
    /// genuinely has no non-loopback address (the latter yields an empty
    /// list, not an error).
    #[error("Could not find any interface address in '{command}' output")]
    UnrecognizedOutput {
        /// The command whose output was not understood.
        command: String,
    },

    /// The command did not finish within the probe timeout.
    #[error("'{command}' did not finish within {timeout_secs}s")]
    Timeout {
        /// The command that timed out.
        command: String,
        /// The configured bound in seconds.
        timeout_secs: u64,
    },
}

/// Trait for listing the host's current IPv4 addresses.
///
/// # Design
///
/// - The single seam between the pipeline and the OS
/// - Enables dependency injection for testing with mock implementations
/// - The production implementation is [`CommandProber`]
pub trait AddressProber: Send + Sync {
    /// Probes the current interface addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the command cannot be run, times out,
    /// fails, or its output cannot be understood.
    fn probe(&self) -> impl std::future::Future<Output = Result<ProbeReport, ProbeError>> + Send;
}
