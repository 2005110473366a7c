//! Configuration and settings management for InkKit
//!
//! Configuration is organized into logical sections:
//! - UI preferences (window size)
//! - Button bindings (what each mouse/stylus/touch button does)
//! - Tap handling (stroke filter thresholds, whether a tap opens the toolbox)
//! - Floating toolbox contents (tool items per floating toolbar)
//!
//! Files are TOML or JSON, chosen by extension.

use crate::error::{SettingsError, SettingsResult};
use inkkit_core::{ButtonAction, ButtonId, TapFilter, ToolbarDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Tool items that can be placed on a toolbar.
pub const TOOL_ITEMS: &[&str] = &[
    "pen",
    "eraser",
    "highlighter",
    "hand",
    "select",
    "undo",
    "redo",
    "zoom_in",
    "zoom_out",
];

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 800,
        }
    }
}

/// Action bound to each configurable button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSettings {
    pub eraser: ButtonAction,
    pub middle: ButtonAction,
    pub right: ButtonAction,
    pub touch: ButtonAction,
    pub default: ButtonAction,
    pub stylus_primary: ButtonAction,
    pub stylus_secondary: ButtonAction,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            eraser: ButtonAction::Eraser,
            middle: ButtonAction::Hand,
            right: ButtonAction::FloatingToolbox,
            touch: ButtonAction::Hand,
            default: ButtonAction::Pen,
            stylus_primary: ButtonAction::None,
            stylus_secondary: ButtonAction::None,
        }
    }
}

impl ButtonSettings {
    pub fn action_for(&self, button: ButtonId) -> ButtonAction {
        match button {
            ButtonId::Eraser => self.eraser,
            ButtonId::Middle => self.middle,
            ButtonId::Right => self.right,
            ButtonId::Touch => self.touch,
            ButtonId::Default => self.default,
            ButtonId::StylusPrimary => self.stylus_primary,
            ButtonId::StylusSecondary => self.stylus_secondary,
        }
    }

    pub fn set_action(&mut self, button: ButtonId, action: ButtonAction) {
        let slot = match button {
            ButtonId::Eraser => &mut self.eraser,
            ButtonId::Middle => &mut self.middle,
            ButtonId::Right => &mut self.right,
            ButtonId::Touch => &mut self.touch,
            ButtonId::Default => &mut self.default,
            ButtonId::StylusPrimary => &mut self.stylus_primary,
            ButtonId::StylusSecondary => &mut self.stylus_secondary,
        };
        *slot = action;
    }

    /// Actions of all buttons in button index order.
    pub fn actions(&self) -> Vec<ButtonAction> {
        ButtonId::ALL.iter().map(|b| self.action_for(*b)).collect()
    }
}

/// Tap handling on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapActionSettings {
    /// Treat short, small strokes as taps
    pub stroke_filter_enabled: bool,
    /// Open the floating toolbox on a tap
    pub show_toolbox_on_tap: bool,
    /// Strokes shorter than this are tap candidates
    pub ignore_time_ms: u64,
    /// Strokes travelling less than this are tap candidates
    pub ignore_length_px: f64,
    /// Candidates starting this soon after the previous stroke are ink
    pub successive_time_ms: u64,
}

impl Default for TapActionSettings {
    fn default() -> Self {
        Self {
            stroke_filter_enabled: false,
            show_toolbox_on_tap: false,
            ignore_time_ms: 150,
            ignore_length_px: 1.0,
            successive_time_ms: 500,
        }
    }
}

impl TapActionSettings {
    /// A tap opens the toolbox only when filtering is on as well.
    pub fn shows_toolbox(&self) -> bool {
        self.stroke_filter_enabled && self.show_toolbox_on_tap
    }

    pub fn tap_filter(&self) -> TapFilter {
        TapFilter::new(
            self.ignore_time_ms,
            self.ignore_length_px,
            self.successive_time_ms,
        )
    }
}

/// Contents of the toolbars, keyed by toolbar settings name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxSettings {
    pub toolbars: BTreeMap<String, Vec<String>>,
}

impl Default for ToolboxSettings {
    fn default() -> Self {
        let mut toolbars = BTreeMap::new();
        toolbars.insert(
            "toolbarFloat1".to_string(),
            vec!["pen".to_string(), "eraser".to_string(), "highlighter".to_string()],
        );
        toolbars.insert(
            "toolbarFloat2".to_string(),
            vec!["undo".to_string(), "redo".to_string()],
        );
        Self { toolbars }
    }
}

impl ToolboxSettings {
    /// Items of the toolbar with the given definition.
    pub fn items(&self, toolbar: &ToolbarDefinition) -> &[String] {
        self.toolbars
            .get(toolbar.settings_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn push_item(&mut self, toolbar: &ToolbarDefinition, item: impl Into<String>) {
        self.toolbars
            .entry(toolbar.settings_name.to_string())
            .or_default()
            .push(item.into());
    }

    pub fn pop_item(&mut self, toolbar: &ToolbarDefinition) -> Option<String> {
        self.toolbars.get_mut(toolbar.settings_name)?.pop()
    }

    pub fn validate(&self) -> SettingsResult<()> {
        for (name, items) in &self.toolbars {
            ToolbarDefinition::from_settings_name(name)?;
            if let Some(item) = items.iter().find(|i| !TOOL_ITEMS.contains(&i.as_str())) {
                return Err(SettingsError::invalid(
                    format!("toolbox.toolbars.{}", name),
                    format!("unknown tool item '{}'", item),
                ));
            }
        }
        Ok(())
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI preferences
    pub ui: UiSettings,
    /// Button bindings
    pub buttons: ButtonSettings,
    /// Tap handling
    pub tap_action: TapActionSettings,
    /// Floating toolbox contents
    pub toolbox: ToolboxSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(SettingsError::invalid("ui", "window dimensions must be > 0"));
        }

        if self.tap_action.ignore_length_px < 0.0 {
            return Err(SettingsError::invalid(
                "tap_action.ignore_length_px",
                "must not be negative",
            ));
        }

        self.toolbox.validate()
    }

    /// Whether a tap on the canvas opens the floating toolbox.
    pub fn tap_shows_toolbox(&self) -> bool {
        self.tap_action.shows_toolbox()
    }
}
