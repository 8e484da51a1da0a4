//! Notification message composition.

/// A notification about the host's current address list.
///
/// Constructed fresh each run from the probe result; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Sender address (some providers override this with the
    /// authenticated account).
    pub from: String,

    /// Recipient address.
    pub to: String,

    /// Subject line.
    pub subject: String,

    /// Plain-text body.
    pub body: String,
}

impl Notification {
    /// Composes the notification for the given address list.
    ///
    /// Subject: `{from}: {host} has ip(s): {space-joined addresses}`.
    /// Body: the host name, the indented address list, and the raw command
    /// output appended for diagnostics.
    #[must_use]
    pub fn compose(
        from: &str,
        to: &str,
        host: &str,
        addresses: &[String],
        raw_output: &str,
    ) -> Self {
        let subject = format!("{from}: {host} has ip(s): {}", addresses.join(" "));
        let body = format!(
            "{host} has ip(s):\n    {}\n\nOutput of command:\n{raw_output}",
            addresses.join("\n    ")
        );

        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject,
            body,
        }
    }
}
