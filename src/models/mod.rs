//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: expenses,
//! their identifiers, categories and amounts.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::Category;
pub use expense::{parse_date, Expense, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::Money;
