//! Single-line mailbox files
//!
//! A mailbox file is a named, single-value slot backed by a plain-text file.
//! The station software and this bridge hand state to each other through
//! these files (a correlation id, an init status, a test verdict), one value
//! per file, at most one line per value.
//!
//! Every operation here is advisory: the calling test station must never be
//! blocked or crashed by a missing or mangled mailbox, so failures are
//! logged and degraded (a bad read becomes "absent") instead of propagated.

use std::fs;
use std::path::{Path, PathBuf};

/// File name of the mailbox carrying the correlation id between
/// `--initialize` and `--set-output`.
pub const UUID_MAILBOX: &str = "jts_temp_received_uuid.txt";

/// File name of the mailbox carrying the PASS/FAIL init status back to the
/// calling station software.
pub const STATUS_MAILBOX: &str = "jts_init_response_status.txt";

/// File name of the mailbox carrying the P/F test verdict.
pub const RESULT_MAILBOX: &str = "jts_status_to_send.txt";

/// A single-value slot backed by a text file
///
/// Holds at most one line of content. A file with more than one line is
/// treated as invalid content, not as multiple values: reads of it fail
/// rather than pick a line.
#[derive(Debug, Clone)]
pub struct MailboxFile {
    path: PathBuf,
}

impl MailboxFile {
    /// Create a mailbox resolved against the given base directory
    pub fn new(base_dir: &Path, file_name: &str) -> Self {
        Self {
            path: base_dir.join(file_name),
        }
    }

    /// The full path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the single line of content, if any
    ///
    /// Returns `None` when the file is absent, unreadable, empty, or holds
    /// more than one line. Never creates the file.
    pub fn read(&self) -> Option<String> {
        info!("Reading from '{}'", self.path.display());
        if !self.path.exists() {
            warn!("'{}' file not found", self.file_name());
            return None;
        }
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                error!("Failed to read '{}': {}", self.path.display(), e);
                return None;
            }
        };
        let lines: Vec<&str> = contents.lines().collect();
        if lines.len() == 1 {
            let value = lines[0].to_string();
            info!("Successfully read: '{}'", value);
            Some(value)
        } else {
            // Multi-line content is never partially trusted; the whole
            // read counts as failed.
            warn!(
                "Expected exactly one line in '{}', found {}",
                self.file_name(),
                lines.len()
            );
            None
        }
    }

    /// Create or overwrite the file with exactly `contents`
    ///
    /// Errors are logged, never propagated; callers must not assume the
    /// write succeeded.
    pub fn write(&self, contents: &str) {
        info!("Writing to '{}'", self.path.display());
        if !self.path.exists() {
            info!("creating '{}' file...", self.file_name());
        }
        match fs::write(&self.path, contents) {
            Ok(()) => info!("Successfully written!"),
            Err(e) => error!("Failed to write '{}': {}", self.path.display(), e),
        }
    }

    /// Truncate the file to empty if it exists; no-op otherwise
    pub fn clear(&self) {
        info!("Clearing contents of '{}' file...", self.path.display());
        if !self.path.exists() {
            warn!("'{}' file not found, nothing to clear", self.file_name());
            return;
        }
        match fs::write(&self.path, "") {
            Ok(()) => info!("Successfully cleared!"),
            Err(e) => error!("Failed to clear '{}': {}", self.path.display(), e),
        }
    }

    /// Remove the file if present; no-op otherwise
    pub fn delete(&self) {
        info!("Deleting '{}' file...", self.path.display());
        if !self.path.exists() {
            warn!("'{}' file not found", self.file_name());
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => info!("Successfully deleted!"),
            Err(e) => error!("Failed to delete '{}': {}", self.path.display(), e),
        }
    }

    fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<invalid>")
    }
}

/// Resolve the directory the production mailboxes live in
///
/// Mailboxes sit beside the executable so the calling station software can
/// find them without configuration. Falls back to the current directory
/// when the executable path cannot be determined.
pub fn default_mailbox_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        },
        Err(e) => {
            warn!("Failed to locate executable: {}. Using current directory", e);
            PathBuf::from(".")
        }
    }
}
