//! Mail layer: notification composition and SMTP delivery.
//!
//! This module provides:
//! - The notification value built from a probe result ([`Notification`])
//! - A sender abstraction for testability ([`MailSender`])
//! - The lettre-backed SMTP implementation ([`SmtpMailer`])

mod error;
mod notification;
mod sender;

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;

pub use error::MailError;
pub use notification::Notification;
pub use sender::{MailSender, SmtpMailer};
