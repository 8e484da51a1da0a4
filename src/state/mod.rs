//! Address-list persistence for detecting changes across runs.
//!
//! This module provides abstractions for storing and retrieving the
//! last-known IPv4 address list between program executions.

mod file;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use file::FileStateStore;

use std::io;

use thiserror::Error;

/// Result of loading the previous address list from persistent storage.
///
/// Explicitly models all valid states to avoid ambiguity:
/// - Successfully loaded a previous list
/// - No state file exists (first run)
/// - State file exists but could not be read
#[derive(Debug, Clone)]
pub enum LoadResult {
    /// Successfully loaded previously saved addresses.
    ///
    /// The list may be empty when the file held no well-formed addresses.
    Loaded(Vec<String>),

    /// No state file exists (first run or explicitly deleted).
    NotFound,

    /// State file exists but could not be read.
    /// The run should continue with an empty previous list and overwrite
    /// the file on save.
    Unreadable {
        /// Reason for the failure (for logging/debugging).
        reason: String,
    },
}

impl LoadResult {
    /// Returns the loaded addresses, or an empty vec for `NotFound`/`Unreadable`.
    #[must_use]
    pub fn into_addresses(self) -> Vec<String> {
        match self {
            Self::Loaded(addresses) => addresses,
            Self::NotFound | Self::Unreadable { .. } => Vec::new(),
        }
    }

    /// Returns `true` if state was successfully loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Errors that can occur when writing state.
///
/// Only covers write-side errors; read-side issues are modeled as
/// [`LoadResult`] variants so the read path can degrade gracefully.
/// Callers are expected to treat a write failure as best-effort: losing
/// the state file only costs one extra notification on the next run.
#[derive(Debug, Error)]
pub enum StateError {
    /// Failed to write the state file.
    #[error("Failed to write state file: {0}")]
    Write(#[source] io::Error),
}

/// Abstraction for persisting the address list between program runs.
///
/// Implementations should:
/// - Use atomic writes to prevent corruption from crashes
/// - Handle missing files gracefully (return `LoadResult::NotFound`)
/// - Degrade gracefully on read errors (return `LoadResult::Unreadable`)
pub trait StateStore: Send + Sync {
    /// Loads the previously saved address list.
    fn load(&self) -> LoadResult;

    /// Saves the current address list for the next run.
    ///
    /// Implementations should use atomic write semantics (write to temp
    /// file, then rename) so the file is either fully written or untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save(
        &self,
        addresses: &[String],
    ) -> impl std::future::Future<Output = Result<(), StateError>> + Send;
}
