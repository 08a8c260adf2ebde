//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persistence of every change.

pub mod expense;

pub use expense::{ExpenseFilter, ExpenseService, FilterMode, NewExpense, Persisted};
