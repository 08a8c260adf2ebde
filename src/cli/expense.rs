//! Expense commands
//!
//! One handler per menu action. Handlers ask their own follow-up questions
//! through the console and return input errors to the menu loop, which prints
//! them and carries on.

use std::io::{BufRead, Write};

use crate::display::{format_category_menu, format_expense_list, format_summary};
use crate::error::ExpenseResult;
use crate::models::{parse_date, Category, ExpenseId, Money};
use crate::services::{ExpenseFilter, ExpenseService, FilterMode, NewExpense, Persisted};
use crate::storage::ExpenseStore;

use super::console::Console;

/// Ask for a new expense, field by field, and record it
pub fn handle_add<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    let date = console.prompt("Enter the date (YYYY-MM-DD): ")?;
    parse_date(&date)?;

    let amount = Money::parse(&console.prompt("Enter an amount: ")?)?;

    console.print(&format_category_menu(
        "Select a category:",
        store.categories(),
    ))?;
    let category = Category::parse_selection(&console.prompt("Enter category number: ")?)?;

    let description = console.prompt("Enter the expense description: ")?;

    let result = ExpenseService::new(store).add(NewExpense {
        date,
        amount,
        category,
        description,
    });
    report_save_error(console, &result)?;
    console.say("Expense was added successfully.")
}

/// Print every expense
pub fn handle_list<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    currency_symbol: &str,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);
    let expenses = service.list();

    if expenses.is_empty() {
        return console.say("No expenses were found.");
    }

    console.print(&format_expense_list("Expenses:", expenses, currency_symbol))
}

/// Ask for a filter and print the matching expenses
pub fn handle_filter<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    currency_symbol: &str,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    let mode: FilterMode = console.prompt("Filter using (date/category): ")?.parse()?;

    let filter = match mode {
        FilterMode::Date => {
            let date = console.prompt("Enter the date (YYYY-MM-DD) of the expense: ")?;
            ExpenseFilter::Date(parse_date(&date)?)
        }
        FilterMode::Category => {
            console.print(&format_category_menu(
                "Select a category to filter by:",
                store.categories(),
            ))?;
            let selection = console.prompt("Enter category number: ")?;
            ExpenseFilter::Category(Category::parse_selection(&selection)?)
        }
    };

    let service = ExpenseService::new(store);
    let matches = service.filter(&filter);

    if matches.is_empty() {
        return console.say("There are no expenses that match the filter.");
    }

    console.print(&format_expense_list(
        "Filtered Expenses:",
        matches,
        currency_symbol,
    ))
}

/// Print the grand total and per-category totals
pub fn handle_summary<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    currency_symbol: &str,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    match ExpenseService::new(store).summarize() {
        Some(summary) => console.print(&format_summary(&summary, currency_symbol)),
        None => console.say("No expenses to summarize."),
    }
}

/// Ask for an id and delete the matching expense
pub fn handle_delete<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    let id = ExpenseId::parse(
        &console.prompt("Enter expense ID to delete (Use option 2 to view all IDs): ")?,
    )?;

    let result = ExpenseService::new(store).delete(id)?;
    report_save_error(console, &result)?;
    console.say("Expense deleted successfully.")
}

fn report_save_error<R: BufRead, W: Write, T>(
    console: &mut Console<R, W>,
    result: &Persisted<T>,
) -> ExpenseResult<()> {
    if let Some(e) = &result.save_error {
        console.say(format!("Error saving the expenses, try again: {}", e))?;
    }
    Ok(())
}
