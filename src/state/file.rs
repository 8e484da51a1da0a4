//! Plain-text state file implementation.
//!
//! Format: one dotted-quad IPv4 address per line, `\n`-terminated.
//! The format is the same on every platform so a state file written on one
//! host can be read on another.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::addr;

use super::{LoadResult, StateError, StateStore};

/// File-based implementation of [`StateStore`].
///
/// # Reading
///
/// Each line is trimmed of surrounding whitespace and kept only if the
/// whole line is a dotted-quad address; anything else is silently dropped.
/// A missing file is `LoadResult::NotFound`, not an error.
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename to prevent corruption:
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
///
/// This ensures the file is either fully written or not written at all.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Creates a new file-based state store at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the state file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extracts well-formed addresses from state file content.
    fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| addr::is_dotted_quad(line))
            .map(ToString::to_string)
            .collect()
    }

    /// Renders an address list as state file content.
    fn render(addresses: &[String]) -> String {
        let mut content = addresses.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        content
    }

    /// Performs the blocking save operation.
    ///
    /// Separated out so it can be wrapped in `spawn_blocking`.
    fn save_blocking(path: &Path, content: &str) -> Result<(), StateError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StateError::Write)?;
            }
        }

        // Append .tmp instead of replacing the extension to avoid conflicts
        // (e.g., last_ip.txt -> last_ip.txt.tmp, not last_ip.tmp)
        let temp_path = PathBuf::from(format!("{}.tmp", path.display()));

        std::fs::write(&temp_path, content).map_err(StateError::Write)?;

        // Atomic rename (on most filesystems)
        std::fs::rename(&temp_path, path).map_err(StateError::Write)?;

        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> LoadResult {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => LoadResult::Loaded(Self::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => LoadResult::NotFound,
            Err(e) => LoadResult::Unreadable {
                reason: format!("Failed to read file: {e}"),
            },
        }
    }

    async fn save(&self, addresses: &[String]) -> Result<(), StateError> {
        let path = self.path.clone();
        let content = Self::render(addresses);

        // Use spawn_blocking to avoid blocking the async runtime
        tokio::task::spawn_blocking(move || Self::save_blocking(&path, &content))
            .await
            .expect("spawn_blocking task panicked")
    }
}
