//! InkKit Settings Crate
//!
//! Handles application configuration and settings persistence: button
//! bindings, tap handling, floating toolbox contents and window geometry.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{ButtonSettings, Config, TapActionSettings, ToolboxSettings, UiSettings};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
