//! Configurable input buttons and the actions bound to them.

use serde::{Deserialize, Serialize};

/// Number of configurable buttons.
pub const BUTTON_COUNT: usize = 7;

/// A configurable mouse, stylus or touch button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonId {
    /// Stylus eraser end
    Eraser = 0,
    /// Middle mouse button
    Middle = 1,
    /// Right mouse button
    Right = 2,
    /// Touchscreen contact
    Touch = 3,
    /// Primary mouse button / stylus tip
    Default = 4,
    /// First stylus barrel button
    StylusPrimary = 5,
    /// Second stylus barrel button
    StylusSecondary = 6,
}

impl ButtonId {
    /// All buttons in index order.
    pub const ALL: [ButtonId; BUTTON_COUNT] = [
        ButtonId::Eraser,
        ButtonId::Middle,
        ButtonId::Right,
        ButtonId::Touch,
        ButtonId::Default,
        ButtonId::StylusPrimary,
        ButtonId::StylusSecondary,
    ];

    /// Maps a GDK mouse button number (1 = primary, 2 = middle, 3 = secondary).
    pub fn from_mouse_button(button: u32) -> Option<Self> {
        match button {
            1 => Some(ButtonId::Default),
            2 => Some(ButtonId::Middle),
            3 => Some(ButtonId::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonId::Eraser => write!(f, "Eraser"),
            ButtonId::Middle => write!(f, "Middle Button"),
            ButtonId::Right => write!(f, "Right Button"),
            ButtonId::Touch => write!(f, "Touch"),
            ButtonId::Default => write!(f, "Default"),
            ButtonId::StylusPrimary => write!(f, "Stylus Button 1"),
            ButtonId::StylusSecondary => write!(f, "Stylus Button 2"),
        }
    }
}

/// Kind of device a press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Pen,
    Eraser,
    Touch,
}

impl ButtonId {
    /// Resolves the configurable button for a press of `button` on a device
    /// of kind `kind`.
    pub fn resolve(kind: PointerKind, button: u32) -> Option<Self> {
        match kind {
            PointerKind::Eraser => Some(ButtonId::Eraser),
            PointerKind::Touch => Some(ButtonId::Touch),
            PointerKind::Pen => match button {
                2 => Some(ButtonId::StylusPrimary),
                3 => Some(ButtonId::StylusSecondary),
                _ => Some(ButtonId::Default),
            },
            PointerKind::Mouse => Self::from_mouse_button(button),
        }
    }
}

/// Action triggered when a button is pressed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    /// Leave the current tool unchanged
    #[default]
    None,
    Pen,
    Eraser,
    Highlighter,
    Hand,
    Select,
    /// Open the floating toolbox under the pointer
    FloatingToolbox,
}

impl ButtonAction {
    pub fn opens_floating_toolbox(self) -> bool {
        self == ButtonAction::FloatingToolbox
    }
}

impl std::fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonAction::None => write!(f, "No Action"),
            ButtonAction::Pen => write!(f, "Pen"),
            ButtonAction::Eraser => write!(f, "Eraser"),
            ButtonAction::Highlighter => write!(f, "Highlighter"),
            ButtonAction::Hand => write!(f, "Hand"),
            ButtonAction::Select => write!(f, "Select"),
            ButtonAction::FloatingToolbox => write!(f, "Floating Toolbox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_buttons_in_discriminant_order() {
        for (i, button) in ButtonId::ALL.iter().enumerate() {
            assert_eq!(*button as usize, i);
        }
    }

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(ButtonId::from_mouse_button(1), Some(ButtonId::Default));
        assert_eq!(ButtonId::from_mouse_button(2), Some(ButtonId::Middle));
        assert_eq!(ButtonId::from_mouse_button(3), Some(ButtonId::Right));
        assert_eq!(ButtonId::from_mouse_button(8), None);
    }

    #[test]
    fn test_resolve_by_device() {
        assert_eq!(ButtonId::resolve(PointerKind::Eraser, 1), Some(ButtonId::Eraser));
        assert_eq!(ButtonId::resolve(PointerKind::Touch, 0), Some(ButtonId::Touch));
        assert_eq!(ButtonId::resolve(PointerKind::Pen, 1), Some(ButtonId::Default));
        assert_eq!(ButtonId::resolve(PointerKind::Pen, 2), Some(ButtonId::StylusPrimary));
        assert_eq!(ButtonId::resolve(PointerKind::Pen, 3), Some(ButtonId::StylusSecondary));
        assert_eq!(ButtonId::resolve(PointerKind::Mouse, 3), Some(ButtonId::Right));
        assert_eq!(ButtonId::resolve(PointerKind::Mouse, 9), None);
    }

    #[test]
    fn test_action_serde_names() {
        let json = serde_json::to_string(&ButtonAction::FloatingToolbox).unwrap();
        assert_eq!(json, "\"floating_toolbox\"");
        let action: ButtonAction = serde_json::from_str("\"hand\"").unwrap();
        assert_eq!(action, ButtonAction::Hand);
    }

    #[test]
    fn test_only_floating_toolbox_opens_toolbox() {
        assert!(ButtonAction::FloatingToolbox.opens_floating_toolbox());
        assert!(!ButtonAction::Pen.opens_floating_toolbox());
        assert!(!ButtonAction::None.opens_floating_toolbox());
    }
}
