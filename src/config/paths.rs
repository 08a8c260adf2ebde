//! Path management for the expense tracker
//!
//! Every file the tracker touches lives in one directory, the current working
//! directory unless `--dir` (or `EXPENSE_TRACKER_DIR`) says otherwise.

use std::path::{Path, PathBuf};

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the store, audit log and settings
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create TrackerPaths rooted at the given directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create TrackerPaths rooted at the current working directory
    pub fn current_dir() -> Self {
        Self::with_base_dir(".")
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the expense store (expenses.json)
    pub fn store_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("expenses.audit.log")
    }

    /// Get the path to the optional settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.json")
    }

}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::current_dir()
    }
}
