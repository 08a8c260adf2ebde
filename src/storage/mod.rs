//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes plus the audit trail of
//! every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use log::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{Settings, TrackerPaths};
use crate::error::ExpenseError;
use crate::models::{Category, Expense};

/// Main storage coordinator: the expense collection, its file, and the audit log
pub struct ExpenseStore {
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl ExpenseStore {
    /// Create a new, empty ExpenseStore
    pub fn new(paths: TrackerPaths, settings: &Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            expenses: ExpenseRepository::new(paths.store_file()),
            audit,
        }
    }

    /// The fixed category list, in menu order
    pub fn categories(&self) -> &'static [Category] {
        Category::all()
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        match self.expenses.load() {
            Ok(count) => {
                info!(
                    "Loaded {} expenses from {}",
                    count,
                    self.expenses.path().display()
                );
                Ok(())
            }
            Err(e) => {
                warn!("Error loading expenses: {}", e);
                Err(e)
            }
        }
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        match self.expenses.save() {
            Ok(()) => {
                debug!(
                    "Saved {} expenses to {}",
                    self.expenses.count(),
                    self.expenses.path().display()
                );
                Ok(())
            }
            Err(e) => {
                warn!("Error saving expenses: {}", e);
                Err(e)
            }
        }
    }

    /// Record an added expense in the audit log
    pub fn log_create(&self, expense: &Expense) {
        self.audit(AuditEntry::create(expense));
    }

    /// Record a deleted expense in the audit log
    pub fn log_delete(&self, expense: &Expense) {
        self.audit(AuditEntry::delete(expense));
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!("Failed to write audit entry for {}: {}", entry.entity_id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{ExpenseId, Money};
    use tempfile::TempDir;

    fn sample() -> Expense {
        Expense::new(
            ExpenseId::from_raw(1),
            "2025-03-01",
            Money::new(4.5),
            Category::Food,
            "coffee",
        )
    }

    #[test]
    fn test_store_starts_empty_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store =
            ExpenseStore::new(TrackerPaths::with_base_dir(temp_dir.path()), &Settings::default());

        store.load_all().unwrap();
        assert!(store.expenses.is_empty());
        assert_eq!(store.categories().len(), 7);
    }

    #[test]
    fn test_save_all_writes_store_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        let mut store = ExpenseStore::new(paths.clone(), &Settings::default());

        store.expenses.insert(sample());
        store.save_all().unwrap();

        assert!(paths.store_file().exists());
    }

    #[test]
    fn test_audit_entries_written_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let store =
            ExpenseStore::new(TrackerPaths::with_base_dir(temp_dir.path()), &Settings::default());

        store.log_create(&sample());
        store.log_delete(&sample());

        let entries = store.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Delete);
    }

    #[test]
    fn test_audit_disabled_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let store = ExpenseStore::new(paths.clone(), &settings);

        store.log_create(&sample());

        assert!(store.audit_logger().is_none());
        assert!(!paths.audit_log().exists());
    }
}
