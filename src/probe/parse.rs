//! Extraction of IPv4 addresses from interface-listing command output.
//!
//! Two output families are understood:
//! - unix: iproute2 `inet 192.0.2.1/24 ...` and legacy ifconfig
//!   `inet addr:192.0.2.1  Bcast:...` lines
//! - windows: ipconfig `IPv4 Address. . . . . . . . . . . : 192.0.2.1`

use std::sync::LazyLock;

use regex::Regex;

use crate::addr;

/// Matches both iproute2 (`inet x.x.x.x/len`) and legacy ifconfig
/// (`inet addr:x.x.x.x`) address lines.
static UNIX_INET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"inet (?:addr:)?(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})")
        .expect("unix inet pattern is valid")
});

/// Matches ipconfig IPv4 address lines.
static WINDOWS_IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"IPv4 Address[\. ]*: (\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})")
        .expect("windows ipv4 pattern is valid")
});

/// Extracts IPv4 addresses from unix `ip addr`/`ifconfig` output,
/// in output order, duplicates preserved.
#[must_use]
pub fn extract_unix(output: &str) -> Vec<String> {
    extract_with(&UNIX_INET, output)
}

/// Extracts IPv4 addresses from windows `ipconfig` output,
/// in output order, duplicates preserved.
#[must_use]
pub fn extract_windows(output: &str) -> Vec<String> {
    extract_with(&WINDOWS_IPV4, output)
}

/// Extracts addresses with the pattern for the current platform.
#[must_use]
pub fn extract(output: &str) -> Vec<String> {
    #[cfg(windows)]
    {
        extract_windows(output)
    }
    #[cfg(not(windows))]
    {
        extract_unix(output)
    }
}

/// Removes the loopback address from an extracted list.
///
/// `127.0.0.1` is always present on a healthy host and carries no signal.
#[must_use]
pub fn without_loopback(addresses: Vec<String>) -> Vec<String> {
    addresses
        .into_iter()
        .filter(|address| address != addr::LOOPBACK)
        .collect()
}

fn extract_with(pattern: &Regex, output: &str) -> Vec<String> {
    pattern
        .captures_iter(output)
        .map(|captures| captures[1].to_string())
        .collect()
}
