//! One-shot pipeline execution.
//!
//! The whole program is a single pass: load previous state, probe current
//! addresses, notify if they differ, persist the current list, exit.

use thiserror::Error;

use ipmail::config::ValidatedConfig;
use ipmail::mail::{MailError, MailSender, Notification, SmtpMailer};
use ipmail::probe::{AddressProber, CommandProber, ProbeError, ProbeReport};
use ipmail::state::{FileStateStore, LoadResult, StateStore};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
///
/// Only the fatal cases appear here: a failed probe leaves no safe
/// notify-or-not decision. Mail and state-write failures are logged inside
/// the pipeline and deliberately do not abort the run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The interface probe failed.
    #[error("Failed to probe interface addresses: {0}")]
    Probe(#[source] ProbeError),

    /// The SMTP mailer could not be constructed from configuration.
    #[error("Failed to set up the mailer: {0}")]
    Mailer(#[source] MailError),
}

/// Executes one run of the pipeline with production components.
///
/// # Errors
///
/// Returns an error if the mailer cannot be constructed or the probe fails.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let prober = CommandProber::default();
    let mailer = SmtpMailer::from_config(&config).map_err(RunError::Mailer)?;
    let store = FileStateStore::new(&config.state_file);

    run_once(&config, &prober, &mailer, &store).await
}

/// The pipeline, generic over its seams so tests can inject mocks.
async fn run_once<P, M, S>(
    config: &ValidatedConfig,
    prober: &P,
    mailer: &M,
    store: &S,
) -> Result<(), RunError>
where
    P: AddressProber,
    M: MailSender,
    S: StateStore,
{
    let previous = load_previous(store);

    let report = prober.probe().await.map_err(RunError::Probe)?;
    tracing::debug!(
        previous = ?previous,
        current = ?report.addresses,
        "Address lists compared"
    );

    if should_notify(&previous, &report.addresses) {
        let notification = compose(config, &report);
        deliver(&notification, mailer, config.dry_run).await;
    } else {
        tracing::info!("Addresses unchanged, no notification sent");
    }

    // Written even when the mail failed or nothing was sent.
    if let Err(e) = store.save(&report.addresses).await {
        tracing::warn!("Failed to save state: {e}");
    }

    Ok(())
}

/// Loads the previous address list, treating absent or unreadable state
/// as an empty list.
fn load_previous(store: &impl StateStore) -> Vec<String> {
    match store.load() {
        LoadResult::Loaded(addresses) => addresses,
        LoadResult::NotFound => {
            tracing::info!("No previous state found, treating this as a first run");
            Vec::new()
        }
        LoadResult::Unreadable { reason } => {
            tracing::warn!("State file unreadable ({reason}), treating previous list as empty");
            Vec::new()
        }
    }
}

/// Returns true when a notification should be sent.
///
/// Sends exactly when no previous list exists or the lists differ. The
/// comparison is order-sensitive sequence equality: re-enumerating the same
/// addresses in a different order triggers a notification. That is
/// intentional, a cheap form of drift detection.
#[must_use]
pub fn should_notify(previous: &[String], current: &[String]) -> bool {
    previous.is_empty() || previous != current
}

/// Builds the notification from configuration and the probe result.
fn compose(config: &ValidatedConfig, report: &ProbeReport) -> Notification {
    let host = hostname::get().map_or_else(
        |_| "unknown-host".to_string(),
        |h| h.to_string_lossy().into_owned(),
    );

    Notification::compose(
        &config.from_me,
        &config.to_whom,
        &host,
        &report.addresses,
        &report.raw_output,
    )
}

/// Sends the notification; failures are logged and swallowed.
async fn deliver<M: MailSender>(notification: &Notification, mailer: &M, dry_run: bool) {
    tracing::info!("Address change detected, notifying {}", notification.to);
    tracing::debug!(subject = %notification.subject, "Composed notification");

    if dry_run {
        tracing::info!("Dry-run: skipping mail delivery");
        return;
    }

    match mailer.send(notification).await {
        Ok(()) => tracing::info!("Notification mail sent"),
        Err(e) => tracing::error!("Mail delivery failed, state is still updated: {e}"),
    }
}
