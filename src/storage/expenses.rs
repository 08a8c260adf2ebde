//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file holds a bare
//! JSON array in entry order.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing file loads as an empty collection. On a read or parse
    /// failure the in-memory collection is left untouched.
    pub fn load(&mut self) -> Result<usize, ExpenseError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        self.data = expenses;
        Ok(self.data.len())
    }

    /// Save all expenses to disk, replacing the file
    pub fn save(&self) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, self.data.as_slice())
    }

    /// Get all expenses in entry order
    pub fn get_all(&self) -> &[Expense] {
        &self.data
    }

    /// Iterate over the ids in use
    pub fn ids(&self) -> impl Iterator<Item = ExpenseId> + '_ {
        self.data.iter().map(|e| e.id)
    }

    /// Append an expense
    pub fn insert(&mut self, expense: Expense) {
        self.data.push(expense);
    }

    /// Remove every expense with the given ID, returning the removed ones
    pub fn delete(&mut self, id: ExpenseId) -> Vec<Expense> {
        let (removed, kept): (Vec<Expense>, Vec<Expense>) = std::mem::take(&mut self.data)
            .into_iter()
            .partition(|e| e.id == id);
        self.data = kept;
        removed
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no expenses
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
