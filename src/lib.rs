//! ipmail: IP-change email notifier.
//!
//! A library for detecting changes in the host's IPv4 address list
//! between runs and mailing a notification when they occur.

pub mod addr;
pub mod config;
pub mod mail;
pub mod probe;
pub mod state;
