//! Subprocess-backed address prober.

use std::io::ErrorKind;
use std::process::Output;
use std::time::Duration;

use tokio::process::Command;

use super::parse;
use super::{AddressProber, ProbeError, ProbeReport};

/// Default bound on the interface-listing subprocess.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Interface-listing commands to try, in order.
///
/// On unix, `ip addr` (iproute2) is preferred; `ifconfig` is the fallback
/// for hosts that never got iproute2 (older BSDs, stripped containers).
#[cfg(not(windows))]
const CANDIDATES: &[(&str, &[&str])] = &[("ip", &["addr"]), ("ifconfig", &[])];

#[cfg(windows)]
const CANDIDATES: &[(&str, &[&str])] = &[("ipconfig", &[])];

/// Probes addresses by spawning the platform's interface-listing command
/// and scraping its stdout.
///
/// The subprocess runs under a bounded timeout so a wedged command cannot
/// hang the run forever.
#[derive(Debug, Clone)]
pub struct CommandProber {
    timeout: Duration,
}

impl Default for CommandProber {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CommandProber {
    /// Creates a prober with a custom subprocess timeout.
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Runs one candidate command under the timeout.
    async fn run_command(&self, program: &str, args: &[&str]) -> Result<Output, ProbeError> {
        let mut command = Command::new(program);
        command.args(args);

        match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(source)) => Err(ProbeError::Spawn {
                command: program.to_string(),
                source,
            }),
            Err(_) => Err(ProbeError::Timeout {
                command: program.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }),
        }
    }

    /// Turns a finished command into a probe report.
    fn report_from_output(command: &str, output: Output) -> Result<ProbeReport, ProbeError> {
        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw_output = String::from_utf8(output.stdout).map_err(|_| ProbeError::InvalidUtf8 {
            command: command.to_string(),
        })?;

        Self::report_from_stdout(command, raw_output)
    }

    /// Extracts the address list from command stdout.
    ///
    /// Zero matches means the parser did not understand the output at all,
    /// which is fatal; an empty list after loopback removal is a valid
    /// result (a host with only loopback).
    fn report_from_stdout(command: &str, raw_output: String) -> Result<ProbeReport, ProbeError> {
        let extracted = parse::extract(&raw_output);
        if extracted.is_empty() {
            return Err(ProbeError::UnrecognizedOutput {
                command: command.to_string(),
            });
        }

        Ok(ProbeReport {
            addresses: parse::without_loopback(extracted),
            raw_output,
        })
    }
}

impl AddressProber for CommandProber {
    async fn probe(&self) -> Result<ProbeReport, ProbeError> {
        let mut not_installed: Option<ProbeError> = None;

        for (program, args) in CANDIDATES {
            match self.run_command(program, args).await {
                Ok(output) => return Self::report_from_output(program, output),
                // A missing binary is only fatal once every candidate is gone
                Err(ProbeError::Spawn { command, source })
                    if source.kind() == ErrorKind::NotFound =>
                {
                    tracing::debug!("'{command}' not installed, trying next candidate");
                    not_installed = Some(ProbeError::Spawn { command, source });
                }
                Err(e) => return Err(e),
            }
        }

        Err(not_installed.expect("CANDIDATES is non-empty, so at least one spawn was attempted"))
    }
}
