//! Expense display formatting
//!
//! Provides utilities for formatting expenses, category menus and summaries
//! for terminal display.

use crate::models::{Category, Expense};
use crate::reports::ExpenseSummary;

/// Format a single expense as one line
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "ID: {}, Date: {}, Amount: {}, Category: {}, Description: {}",
        expense.id,
        expense.date,
        expense.amount.format_with_symbol(currency_symbol),
        expense.category,
        expense.description
    )
}

/// Format a list of expenses under a heading, one line each
pub fn format_expense_list<'a, I>(heading: &str, expenses: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut output = String::new();
    output.push_str(heading);
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format the numbered category menu
pub fn format_category_menu(heading: &str, categories: &[Category]) -> String {
    let mut output = String::new();
    output.push_str(heading);
    output.push('\n');

    for (i, category) in categories.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, category));
    }

    output
}

/// Format the grand total followed by the per-category subtotals
pub fn format_summary(summary: &ExpenseSummary, currency_symbol: &str) -> String {
    let mut output = format!(
        "Total Expenses: {}\n",
        summary.total.format_with_symbol(currency_symbol)
    );
    output.push_str("Expenses by Category:\n");

    for line in &summary.by_category {
        output.push_str(&format!(
            "{}: {}\n",
            line.category,
            line.total.format_with_symbol(currency_symbol)
        ));
    }

    output
}
