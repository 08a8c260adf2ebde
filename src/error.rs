//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Input errors are recoverable: the menu loop
//! prints them and returns to the main menu.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Date input that does not parse as YYYY-MM-DD
    #[error("Invalid date format (must be YYYY-MM-DD)")]
    InvalidDate(String),

    /// Amount input that is not a finite decimal number
    #[error("Invalid amount (must be a number)")]
    InvalidAmount(String),

    /// Category selection that is not an index into the category menu
    #[error("Invalid category selected")]
    InvalidCategory(String),

    /// Expense identifier that is not an integer
    #[error("Invalid ID (must be a number)")]
    InvalidId(String),

    /// Filter keyword other than "date" or "category"
    #[error("Invalid filter selected. Please enter \"date\" or \"category\"")]
    InvalidFilter(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Standard input reached end of file while a prompt was waiting
    #[error("Input closed")]
    InputClosed,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by malformed operator input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidAmount(_)
                | Self::InvalidCategory(_)
                | Self::InvalidId(_)
                | Self::InvalidFilter(_)
        )
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
