//! Static toolbar definitions.
//!
//! Every toolbar container in the main window has a widget name and a key
//! under which its contents are stored in the settings file. Only the
//! containers listed in [`FLOATING_TOOLBARS`] live inside the floating
//! toolbox.

use crate::error::{Error, Result};

/// A toolbar container known to the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarDefinition {
    /// Widget name of the container.
    pub gui_name: &'static str,
    /// Key of the container's item list in the settings file.
    pub settings_name: &'static str,
    /// Whether the container is part of the floating toolbox.
    pub floating: bool,
}

pub const TOOLBAR_DEFINITIONS: &[ToolbarDefinition] = &[
    ToolbarDefinition {
        gui_name: "tbTop1",
        settings_name: "toolbarTop1",
        floating: false,
    },
    ToolbarDefinition {
        gui_name: "tbTop2",
        settings_name: "toolbarTop2",
        floating: false,
    },
    ToolbarDefinition {
        gui_name: "tbLeft1",
        settings_name: "toolbarLeft1",
        floating: false,
    },
    ToolbarDefinition {
        gui_name: "tbBottom1",
        settings_name: "toolbarBottom1",
        floating: false,
    },
    ToolbarDefinition {
        gui_name: "tbFloat1",
        settings_name: "toolbarFloat1",
        floating: true,
    },
    ToolbarDefinition {
        gui_name: "tbFloat2",
        settings_name: "toolbarFloat2",
        floating: true,
    },
    ToolbarDefinition {
        gui_name: "tbFloat3",
        settings_name: "toolbarFloat3",
        floating: true,
    },
    ToolbarDefinition {
        gui_name: "tbFloat4",
        settings_name: "toolbarFloat4",
        floating: true,
    },
];

/// Widget names of the containers inside the floating toolbox.
pub const FLOATING_TOOLBARS: &[&str] = &["tbFloat1", "tbFloat2", "tbFloat3", "tbFloat4"];

impl ToolbarDefinition {
    /// Looks up a definition by its settings key.
    pub fn from_settings_name(settings_name: &str) -> Result<&'static ToolbarDefinition> {
        TOOLBAR_DEFINITIONS
            .iter()
            .find(|def| def.settings_name == settings_name)
            .ok_or_else(|| Error::UnknownToolbar {
                name: settings_name.to_string(),
            })
    }

    /// Definitions of the floating-eligible containers, in table order.
    pub fn floating() -> impl Iterator<Item = &'static ToolbarDefinition> {
        TOOLBAR_DEFINITIONS.iter().filter(|def| def.floating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_list_matches_table() {
        let names: Vec<&str> = ToolbarDefinition::floating().map(|d| d.gui_name).collect();
        assert_eq!(names, FLOATING_TOOLBARS);
    }

    #[test]
    fn test_from_settings_name() {
        let def = ToolbarDefinition::from_settings_name("toolbarFloat2").unwrap();
        assert_eq!(def.gui_name, "tbFloat2");
        assert!(def.floating);

        assert!(!ToolbarDefinition::from_settings_name("toolbarTop1").unwrap().floating);
        assert_eq!(
            ToolbarDefinition::from_settings_name("tbFloat2"),
            Err(Error::UnknownToolbar {
                name: "tbFloat2".to_string()
            })
        );
    }
}
