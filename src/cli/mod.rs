//! Interactive command-line interface
//!
//! This module contains the menu loop and its command handlers, bridging
//! terminal input with the service layer.

pub mod console;
pub mod expense;
pub mod menu;

pub use console::Console;
pub use expense::{handle_add, handle_delete, handle_filter, handle_list, handle_summary};
pub use menu::{run, MenuChoice};
