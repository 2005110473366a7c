//! # InkKit UI
//!
//! GTK-based user interface for InkKit.

pub mod gtk_app;
pub mod ui;

pub use inkkit_settings::{Config, SettingsManager};
