//! Floating toolbars
//!
//! The toolbars that live inside the floating toolbox. Each one has a row of
//! tool buttons built from the settings, plus add/remove buttons that are
//! only visible while the user customizes the toolbox.

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Orientation};
use inkkit_core::ToolbarDefinition;
use inkkit_settings::Config;
use std::cell::RefCell;
use std::rc::Rc;

/// Customization request for a single toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEdit {
    AddItem,
    RemoveItem,
}

type ToolListener = std::boxed::Box<dyn Fn(&str)>;
type EditListener = std::boxed::Box<dyn Fn(&'static ToolbarDefinition, ToolbarEdit)>;

struct FloatingToolbar {
    definition: &'static ToolbarDefinition,
    items: Box,
    edit_controls: Box,
}

pub struct FloatingToolbars {
    pub widget: Box,
    bars: Vec<FloatingToolbar>,
    tool_listeners: Rc<RefCell<Vec<ToolListener>>>,
    edit_listeners: Rc<RefCell<Vec<EditListener>>>,
}

impl FloatingToolbars {
    pub fn new(config: &Config) -> Rc<Self> {
        let widget = Box::new(Orientation::Vertical, 2);
        widget.add_css_class("floating-toolbars");

        let edit_listeners: Rc<RefCell<Vec<EditListener>>> = Rc::new(RefCell::new(Vec::new()));
        let mut bars = Vec::new();

        for definition in ToolbarDefinition::floating() {
            let row = Box::new(Orientation::Horizontal, 2);
            row.set_widget_name(definition.gui_name);

            let items = Box::new(Orientation::Horizontal, 2);
            items.set_halign(Align::Start);
            row.append(&items);

            let edit_controls = Box::new(Orientation::Horizontal, 0);
            edit_controls.add_css_class("linked");
            let add = Button::from_icon_name("list-add-symbolic");
            add.set_tooltip_text(Some("Add a tool"));
            let remove = Button::from_icon_name("list-remove-symbolic");
            remove.set_tooltip_text(Some("Remove the last tool"));
            edit_controls.append(&add);
            edit_controls.append(&remove);
            edit_controls.set_visible(false);
            row.append(&edit_controls);

            for (button, edit) in [(add, ToolbarEdit::AddItem), (remove, ToolbarEdit::RemoveItem)] {
                let listeners = edit_listeners.clone();
                button.connect_clicked(move |_| {
                    for listener in listeners.borrow().iter() {
                        listener(definition, edit);
                    }
                });
            }

            widget.append(&row);
            bars.push(FloatingToolbar {
                definition,
                items,
                edit_controls,
            });
        }

        let toolbars = Rc::new(Self {
            widget,
            bars,
            tool_listeners: Rc::new(RefCell::new(Vec::new())),
            edit_listeners,
        });
        toolbars.populate(config);
        toolbars
    }

    /// Register a callback for clicks on tool items.
    pub fn connect_tool_activated<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        self.tool_listeners.borrow_mut().push(std::boxed::Box::new(callback));
    }

    /// Register a callback for add/remove requests while customizing.
    pub fn connect_edit<F>(&self, callback: F)
    where
        F: Fn(&'static ToolbarDefinition, ToolbarEdit) + 'static,
    {
        self.edit_listeners.borrow_mut().push(std::boxed::Box::new(callback));
    }

    /// Rebuild every toolbar's items from `config`.
    pub fn populate(&self, config: &Config) {
        for bar in &self.bars {
            while let Some(child) = bar.items.first_child() {
                bar.items.remove(&child);
            }

            for item in config.toolbox.items(bar.definition) {
                let button = Button::with_label(&tool_label(item));
                button.add_css_class("flat");
                let listeners = self.tool_listeners.clone();
                let item = item.clone();
                button.connect_clicked(move |_| {
                    for listener in listeners.borrow().iter() {
                        listener(&item);
                    }
                });
                bar.items.append(&button);
            }

            let empty = bar.items.first_child().is_none();
            bar.items.set_visible(!empty);
        }
    }

    /// Number of tool items in the toolbar named `gui_name`.
    pub fn item_count(&self, gui_name: &str) -> usize {
        self.bars
            .iter()
            .find(|bar| bar.definition.gui_name == gui_name)
            .map(|bar| count_children(&bar.items))
            .unwrap_or(0)
    }

    /// Show or hide the add/remove buttons.
    pub fn set_editing(&self, editing: bool) {
        for bar in &self.bars {
            bar.edit_controls.set_visible(editing);
        }
    }
}

fn count_children(container: &Box) -> usize {
    let mut count = 0;
    let mut child = container.first_child();
    while let Some(widget) = child {
        count += 1;
        child = widget.next_sibling();
    }
    count
}

/// Human readable label for a tool item id.
pub fn tool_label(item: &str) -> String {
    match item {
        "zoom_in" => "Zoom In".to_string(),
        "zoom_out" => "Zoom Out".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_label() {
        assert_eq!(tool_label("pen"), "Pen");
        assert_eq!(tool_label("zoom_in"), "Zoom In");
        assert_eq!(tool_label(""), "");
    }
}
