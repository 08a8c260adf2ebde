//! Reports
//!
//! Read-only aggregations over the expense collection.

pub mod summary;

pub use summary::{CategoryTotal, ExpenseSummary};
