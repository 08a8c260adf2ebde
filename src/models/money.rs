//! Money type for representing expense amounts
//!
//! Amounts are kept exactly as the operator entered them (a binary float) and
//! serialized as plain JSON numbers, so the store file stays readable by any
//! tool. Rounding to two decimals only happens for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::ExpenseError;

/// A monetary amount in the (single, unconverted) currency of the store
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a decimal value
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::new(12.5);
    /// assert_eq!(amount.to_string(), "$12.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw decimal value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse a money amount from operator input
    ///
    /// Accepts anything Rust reads as a finite `f64` ("12.50", "-3", "1e2"),
    /// ignoring surrounding whitespace. Infinities and NaN are rejected since
    /// they cannot be stored as JSON numbers.
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ExpenseError::InvalidAmount(s.to_string()))?;

        if !value.is_finite() {
            return Err(ExpenseError::InvalidAmount(s.to_string()));
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol and two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
