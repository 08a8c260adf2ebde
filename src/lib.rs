//! Expense Tracker - interactive terminal expense tracker
//!
//! This library provides the core functionality of the `expenses` binary: a
//! single-user tracker that records expenses in a JSON file and lets the
//! operator list, filter, summarize and delete them from a text menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and optional user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, categories, amounts)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Summaries over the collection
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Menu loop and interactive command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::cli::{self, Console};
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::current_dir();
//! let settings = Settings::load_or_default(&paths)?;
//! let mut store = ExpenseStore::new(paths, &settings);
//! store.load_all()?;
//! cli::run(&mut store, &settings, &mut Console::stdio())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
