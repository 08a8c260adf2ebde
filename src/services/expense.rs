//! Expense service
//!
//! Business logic for the expense collection: validated creation, listing,
//! filtering, summarizing and deletion. Every mutation is persisted right
//! away; a failed save is reported back to the caller as a warning rather
//! than undoing the in-memory change.

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use log::warn;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::reports::ExpenseSummary;
use crate::storage::ExpenseStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

/// Validated input for creating a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub amount: Money,
    pub category: Category,
    pub description: String,
}

/// Which field to filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Date,
    Category,
}

impl FromStr for FilterMode {
    type Err = ExpenseError;

    /// Only the exact lowercase keywords are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "category" => Ok(Self::Category),
            other => Err(ExpenseError::InvalidFilter(other.to_string())),
        }
    }
}

/// A filter over the expense collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseFilter {
    /// Expenses on exactly this calendar day
    Date(NaiveDate),
    /// Expenses in exactly this category
    Category(Category),
}

impl ExpenseFilter {
    /// Check whether an expense passes the filter
    ///
    /// A stored date that no longer parses never matches a date filter.
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::Date(day) => match expense.parsed_date() {
                Ok(date) => date == *day,
                Err(e) => {
                    warn!("Skipping expense {} with unreadable date: {}", expense.id, e);
                    false
                }
            },
            Self::Category(category) => expense.category == *category,
        }
    }
}

/// Outcome of a mutation: the result plus the save error, if persisting failed
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub save_error: Option<ExpenseError>,
}

impl<T> Persisted<T> {
    /// Check if the change reached the disk
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Add an expense, stamping it with the current time
    pub fn add(&mut self, input: NewExpense) -> Persisted<Expense> {
        self.add_at(input, Utc::now().timestamp_millis())
    }

    /// Add an expense as if created at `now_millis`
    pub fn add_at(&mut self, input: NewExpense, now_millis: i64) -> Persisted<Expense> {
        let id = ExpenseId::allocate(now_millis, self.store.expenses.ids());
        let expense = Expense::new(
            id,
            input.date,
            input.amount,
            input.category,
            input.description,
        );

        self.store.expenses.insert(expense.clone());
        let save_error = self.store.save_all().err();
        self.store.log_create(&expense);

        Persisted {
            value: expense,
            save_error,
        }
    }

    /// List all expenses in entry order
    pub fn list(&self) -> &[Expense] {
        self.store.expenses.get_all()
    }

    /// List the expenses passing a filter, in entry order
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        self.list().iter().filter(|e| filter.matches(e)).collect()
    }

    /// Summarize the collection; `None` when it is empty
    pub fn summarize(&self) -> Option<ExpenseSummary> {
        ExpenseSummary::generate(self.list())
    }

    /// Delete every expense with the given ID
    ///
    /// Nothing is written when no expense matches.
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Persisted<Vec<Expense>>> {
        let removed = self.store.expenses.delete(id);
        if removed.is_empty() {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }

        let save_error = self.store.save_all().err();
        for expense in &removed {
            self.store.log_delete(expense);
        }

        Ok(Persisted {
            value: removed,
            save_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::models::parse_date;
    use crate::storage::ExpenseRepository;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        let mut store = ExpenseStore::new(paths, &Settings::default());
        store.load_all().unwrap();
        (temp_dir, store)
    }

    fn input(date: &str, amount: &str, category: &str, description: &str) -> NewExpense {
        parse_date(date).unwrap();
        NewExpense {
            date: date.to_string(),
            amount: Money::parse(amount).unwrap(),
            category: Category::parse_selection(category).unwrap(),
            description: description.to_string(),
        }
    }

    fn reload(temp_dir: &TempDir) -> ExpenseRepository {
        let mut repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo.load().unwrap();
        repo
    }

    #[test]
    fn test_filter_mode_is_exact() {
        assert_eq!("date".parse::<FilterMode>().unwrap(), FilterMode::Date);
        assert_eq!(
            "category".parse::<FilterMode>().unwrap(),
            FilterMode::Category
        );
        assert!("Date".parse::<FilterMode>().is_err());
        assert!(" date".parse::<FilterMode>().is_err());
        assert!(matches!(
            "amount".parse::<FilterMode>(),
            Err(ExpenseError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_add_appends_and_persists() {
        let (temp_dir, mut store) = create_test_store();
        let mut service = ExpenseService::new(&mut store);

        let result = service.add(input("2025-03-01", "12.50", "1", "lunch"));
        assert!(result.is_saved());

        let expense = result.value;
        assert_eq!(service.list(), &[expense.clone()]);
        assert_eq!(expense.description, "lunch");

        let on_disk = reload(&temp_dir);
        assert_eq!(on_disk.get_all(), service.list());
    }

    #[test]
    fn test_add_in_same_millisecond_gets_distinct_ids() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = ExpenseService::new(&mut store);

        let first = service.add_at(input("2025-03-01", "1", "1", "a"), 1_000).value;
        let second = service.add_at(input("2025-03-01", "2", "1", "b"), 1_000).value;

        assert_eq!(first.id.as_i64(), 1_000);
        assert_eq!(second.id.as_i64(), 1_001);
    }

    #[test]
    fn test_add_is_audited() {
        let (_temp_dir, mut store) = create_test_store();
        let expense = ExpenseService::new(&mut store)
            .add(input("2025-03-01", "3", "2", "milk"))
            .value;

        let entries = store.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, expense.id.to_string());
    }

    #[test]
    fn test_add_reports_save_failure_but_keeps_expense() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the store file should be makes the rename fail
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        std::fs::create_dir(paths.store_file()).unwrap();
        std::fs::write(paths.store_file().join("keep"), "").unwrap();
        let mut store = ExpenseStore::new(paths, &Settings::default());

        let mut service = ExpenseService::new(&mut store);
        let result = service.add(input("2025-03-01", "3", "2", "milk"));

        assert!(!result.is_saved());
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = ExpenseService::new(&mut store);

        let a = service.add_at(input("2025-03-01", "1", "1", "a"), 3).value;
        service.add_at(input("2025-03-01", "2", "5", "b"), 4);
        let c = service.add_at(input("2025-03-02", "3", "1", "c"), 5).value;

        let food = service.filter(&ExpenseFilter::Category(Category::Food));
        assert_eq!(food, vec![&a, &c]);
    }

    #[test]
    fn test_filter_by_date_is_single_day() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = ExpenseService::new(&mut store);

        service.add_at(input("2025-03-01", "1", "1", "a"), 1);
        let b = service.add_at(input("2025-03-02", "2", "1", "b"), 2).value;
        service.add_at(input("2025-03-03", "3", "1", "c"), 3);

        let day = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(service.filter(&ExpenseFilter::Date(day)), vec![&b]);

        let empty_day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(service.filter(&ExpenseFilter::Date(empty_day)).is_empty());
    }

    #[test]
    fn test_filter_by_date_skips_unreadable_dates() {
        let (_temp_dir, mut store) = create_test_store();
        let mut corrupt = Expense::new(
            ExpenseId::from_raw(1),
            "2025-03-02",
            Money::new(4.0),
            Category::Food,
            "hand edited",
        );
        corrupt.date = "2nd of March".into();
        store.expenses.insert(corrupt.clone());

        let mut service = ExpenseService::new(&mut store);
        let good = service.add_at(input("2025-03-02", "2", "1", "b"), 2).value;

        let day = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(service.filter(&ExpenseFilter::Date(day)), vec![&good]);
        assert!(!ExpenseFilter::Date(day).matches(&corrupt));
        assert!(ExpenseFilter::Category(Category::Food).matches(&corrupt));
    }

    #[test]
    fn test_summarize() {
        let (_temp_dir, mut store) = create_test_store();
        let mut service = ExpenseService::new(&mut store);
        assert!(service.summarize().is_none());

        service.add_at(input("2025-03-01", "12.50", "1", "lunch"), 1);
        service.add_at(input("2025-03-01", "80", "5", "phone"), 2);

        let summary = service.summarize().unwrap();
        assert_eq!(summary.total.value(), 92.5);
        assert_eq!(summary.by_category.len(), 2);
    }

    #[test]
    fn test_delete_existing() {
        let (temp_dir, mut store) = create_test_store();
        let mut service = ExpenseService::new(&mut store);

        let keep = service.add_at(input("2025-03-01", "1", "1", "keep"), 1).value;
        let gone = service.add_at(input("2025-03-01", "2", "1", "gone"), 2).value;

        let result = service.delete(gone.id).unwrap();
        assert!(result.is_saved());
        assert_eq!(result.value, vec![gone]);
        assert_eq!(service.list(), &[keep.clone()]);

        assert_eq!(reload(&temp_dir).get_all(), &[keep]);
    }

    #[test]
    fn test_delete_missing_changes_nothing() {
        let (temp_dir, mut store) = create_test_store();
        let mut service = ExpenseService::new(&mut store);
        service.add_at(input("2025-03-01", "1", "1", "keep"), 1);

        let before = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let err = service.delete(ExpenseId::from_raw(404)).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.list().len(), 1);
        let after = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(before, after);
    }
}
