//! Expense identifiers
//!
//! Ids are millisecond timestamps taken when the expense is created. Two
//! expenses added within the same millisecond would collide, so allocation
//! never hands out a value at or below the largest id already in use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw identifier
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw identifier
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Allocate an id for a new expense
    ///
    /// Uses `now_millis` unless an existing id is equal or later, in which
    /// case the id after the largest existing one is used instead.
    pub fn allocate<I>(now_millis: i64, existing: I) -> Self
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        let next = existing
            .into_iter()
            .max()
            .map_or(now_millis, |max| now_millis.max(max.0.saturating_add(1)));
        Self(next)
    }

    /// Parse an id typed by the operator
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ExpenseError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
