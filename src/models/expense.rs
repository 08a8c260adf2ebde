//! Expense model
//!
//! An expense is one recorded purchase. The date is stored as the text the
//! operator typed (validated as `YYYY-MM-DD` on entry), which keeps the store
//! file byte-for-byte faithful to what was entered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::ExpenseError;

/// The only accepted date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, ExpenseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidDate(input.to_string()))
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (creation time in milliseconds)
    pub id: ExpenseId,

    /// Date of the expense as entered, `YYYY-MM-DD`
    pub date: String,

    /// Amount spent
    pub amount: Money,

    /// Category of the expense
    pub category: Category,

    /// Free-form description
    pub description: String,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        date: impl Into<String>,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            amount,
            category,
            description: description.into(),
        }
    }

    /// Parse the stored date
    ///
    /// Records written by this program always parse; a hand-edited store file
    /// may not.
    pub fn parsed_date(&self) -> Result<NaiveDate, ExpenseError> {
        parse_date(&self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.amount, self.category, self.description
        )
    }
}
