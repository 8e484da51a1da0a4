//! Dotted-quad address syntax.
//!
//! The state file and the probe parser share one definition of what counts
//! as an IPv4 address: four 1-3 digit decimal octets. The pattern is
//! deliberately lenient about octet range so that the state file round-trips
//! exactly what was written, octet values are never re-interpreted.

use std::sync::LazyLock;

use regex::Regex;

/// Anchored full-line dotted-quad pattern.
static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("dotted-quad pattern is valid")
});

/// The loopback address, stripped from probe results as noise.
pub const LOOPBACK: &str = "127.0.0.1";

/// Returns true if the whole string is a dotted-quad IPv4 address.
#[must_use]
pub fn is_dotted_quad(s: &str) -> bool {
    DOTTED_QUAD.is_match(s)
}
