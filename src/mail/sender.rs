//! Mail sender trait and SMTP implementation.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::ValidatedConfig;

use super::{MailError, Notification};

/// Trait for delivering a notification.
///
/// This abstraction keeps the pipeline testable: production uses
/// [`SmtpMailer`], tests inject mocks that record what would have been sent.
pub trait MailSender: Send + Sync {
    /// Sends the notification.
    ///
    /// One attempt, no retry: mail retry/backoff is deliberately out of
    /// scope, the next address change will notify again.
    ///
    /// # Errors
    ///
    /// Returns [`MailError`] if the message cannot be built or transmitted.
    fn send(
        &self,
        notification: &Notification,
    ) -> impl std::future::Future<Output = Result<(), MailError>> + Send;
}

/// SMTP-backed implementation of [`MailSender`].
///
/// Connection sequence mirrors classic mail submission: connect to the
/// configured host and port, upgrade with STARTTLS before authenticating
/// when `use_tls` is set, then authenticate with username/password and
/// transmit.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the mailer from validated configuration.
    ///
    /// No connection is opened here; lettre connects lazily on send.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS parameters for the configured host
    /// cannot be constructed.
    pub fn from_config(config: &ValidatedConfig) -> Result<Self, MailError> {
        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(MailError::Transport)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport })
    }
}

impl MailSender for SmtpMailer {
    async fn send(&self, notification: &Notification) -> Result<(), MailError> {
        let message = build_message(notification)?;

        self.transport
            .send(message)
            .await
            .map_err(MailError::Transport)?;

        Ok(())
    }
}

/// Assembles the lettre message from a notification.
fn build_message(notification: &Notification) -> Result<Message, MailError> {
    let from = parse_mailbox(&notification.from)?;
    let to = parse_mailbox(&notification.to)?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(notification.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(notification.body.clone())
        .map_err(MailError::Message)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| MailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification() -> Notification {
        Notification::compose(
            "pi@example.com",
            "me@example.com",
            "raspberrypi",
            &["192.168.1.5".to_string()],
            "inet 192.168.1.5/24\n",
        )
    }

    #[test]
    fn build_message_accepts_plain_addresses() {
        let message = build_message(&notification());
        assert!(message.is_ok());
    }

    #[test]
    fn build_message_rejects_malformed_from_address() {
        let mut n = notification();
        n.from = "not an address".to_string();

        let result = build_message(&n);

        assert!(matches!(
            result,
            Err(MailError::InvalidAddress { address, .. }) if address == "not an address"
        ));
    }

    #[test]
    fn build_message_rejects_malformed_recipient() {
        let mut n = notification();
        n.to = "@@".to_string();

        assert!(build_message(&n).is_err());
    }

    #[test]
    fn message_carries_subject_and_body() {
        let message = build_message(&notification()).unwrap();
        let rendered = String::from_utf8(message.formatted()).unwrap();

        assert!(rendered.contains("192.168.1.5"));
        assert!(rendered.contains("raspberrypi"));
    }
}
