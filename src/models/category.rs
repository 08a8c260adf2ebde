//! Expense categories
//!
//! The category list is closed and ordered. Operators pick a category by its
//! 1-based position in the menu, so the order of [`Category::all`] is part of
//! the interface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// One of the predefined expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Groceries,
    Transportation,
    Entertainment,
    Bills,
    Utilities,
    Other,
}

impl Category {
    /// Get all categories in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Groceries,
            Self::Transportation,
            Self::Entertainment,
            Self::Bills,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its 1-based menu position
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    /// Parse a menu selection typed by the operator
    pub fn parse_selection(input: &str) -> Result<Self, ExpenseError> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_menu_index)
            .ok_or_else(|| ExpenseError::InvalidCategory(input.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| ExpenseError::InvalidCategory(s.to_string()))
    }
}
