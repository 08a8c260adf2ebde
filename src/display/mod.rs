//! Display formatting for the terminal

pub mod expense;

pub use expense::{format_category_menu, format_expense_list, format_expense_row, format_summary};
