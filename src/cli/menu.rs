//! Main menu loop

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::ExpenseStore;

use super::console::Console;
use super::expense::{handle_add, handle_delete, handle_filter, handle_list, handle_summary};

const MENU: &str = "\n--- Expense Tracker Menu ---\n\
                    1. Add an Expense\n\
                    2. View All Expenses\n\
                    3. Filter Expenses\n\
                    4. View Summary\n\
                    5. Delete Expense\n\
                    6. Exit\n";

/// Top-level menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Filter,
    Summary,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the operator's menu selection ("1" to "6")
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::ViewAll),
            "3" => Some(Self::Filter),
            "4" => Some(Self::Summary),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the operator exits or input ends
pub fn run<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    settings: &Settings,
    console: &mut Console<R, W>,
) -> ExpenseResult<()> {
    loop {
        console.print(MENU)?;

        let input = match console.prompt("Choose an option: ") {
            Ok(input) => input,
            Err(ExpenseError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            console.say("You have selected an invalid option. Please enter a number between 1 and 6.")?;
            continue;
        };

        let symbol = settings.currency_symbol.as_str();
        let result = match choice {
            MenuChoice::Add => handle_add(store, console),
            MenuChoice::ViewAll => handle_list(store, symbol, console),
            MenuChoice::Filter => handle_filter(store, symbol, console),
            MenuChoice::Summary => handle_summary(store, symbol, console),
            MenuChoice::Delete => handle_delete(store, console),
            MenuChoice::Exit => {
                console.say("Thanks for running the Application, Have a nice day!")?;
                return Ok(());
            }
        };

        match result {
            Ok(()) => {}
            Err(ExpenseError::InputClosed) => return Ok(()),
            Err(e) if e.is_invalid_input() || e.is_not_found() => {
                console.say(format_failure(choice, &e))?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn format_failure(choice: MenuChoice, err: &ExpenseError) -> String {
    match choice {
        MenuChoice::Add => format!("{}. Expense was not added.", err),
        _ => format!("{}.", err),
    }
}
