//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Resolution of the store, audit log and settings file paths
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
