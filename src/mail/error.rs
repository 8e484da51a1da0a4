//! Error types for mail delivery.

use thiserror::Error;

/// Error type for composing and sending notification mail.
///
/// Delivery failures are non-fatal to the run: the pipeline logs them and
/// still persists the current address list.
#[derive(Debug, Error)]
pub enum MailError {
    /// A configured mail address could not be parsed.
    #[error("Invalid mail address '{address}': {source}")]
    InvalidAddress {
        /// The offending address string.
        address: String,
        /// Underlying parse error.
        #[source]
        source: lettre::address::AddressError,
    },

    /// The mail message could not be assembled.
    #[error("Failed to build mail message: {0}")]
    Message(#[source] lettre::error::Error),

    /// Connection, STARTTLS upgrade, authentication, or transmission failed.
    #[error("SMTP error: {0}")]
    Transport(#[source] lettre::transport::smtp::Error),
}
