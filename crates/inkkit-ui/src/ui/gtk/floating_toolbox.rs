//! Floating toolbox overlay
//!
//! Puts the floating toolbox into the canvas overlay and connects it to
//! [`FloatingToolboxPositioner`]:
//! - `get-child-position` on the overlay runs the placement policy
//! - pointer leave hides the toolbox unless the user is customizing it
//! - tool clicks select the tool and dismiss the toolbox
//! - add/remove while customizing edit the settings and remeasure the box

use crate::ui::gtk::toolbars::{FloatingToolbars, ToolbarEdit};
use gtk4::prelude::*;
use gtk4::{gdk, Align, Box, EventControllerMotion, Label, Orientation, Overlay, Widget};
use inkkit_core::{
    ButtonAction, FloatingToolboxPositioner, Point, Rect, Size, ToolbarDefinition, ToolboxChrome,
    ToolboxHost,
};
use inkkit_settings::config::TOOL_ITEMS;
use inkkit_settings::SettingsManager;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Translate `(x, y)` from `widget` coordinates into its toplevel window.
pub fn to_window_point(widget: &impl IsA<Widget>, x: f64, y: f64) -> Point {
    let widget = widget.as_ref();
    widget
        .root()
        .and_then(|root| widget.translate_coordinates(&root, x, y))
        .map(|(wx, wy)| Point::new(wx as i32, wy as i32))
        .unwrap_or_else(|| Point::new(x as i32, y as i32))
}

/// The widgets the positioner drives.
pub struct GtkToolboxHost {
    overlay: Overlay,
    toolbox: Box,
    title: Label,
    placeholder: Label,
    content: Box,
    toolbars: Rc<FloatingToolbars>,
    settings: Rc<RefCell<SettingsManager>>,
}

impl ToolboxHost for GtkToolboxHost {
    fn to_overlay(&self, window_point: Point) -> Point {
        self.toolbox
            .root()
            .and_then(|root| {
                root.translate_coordinates(
                    &self.overlay,
                    f64::from(window_point.x),
                    f64::from(window_point.y),
                )
            })
            .map(|(x, y)| Point::new(x as i32, y as i32))
            .unwrap_or(window_point)
    }

    fn reference_origin(&self) -> Point {
        to_window_point(&self.content, 0.0, 0.0)
    }

    fn toolbar_item_count(&self, toolbar: &str) -> usize {
        self.toolbars.item_count(toolbar)
    }

    fn button_actions(&self) -> Vec<ButtonAction> {
        self.settings.borrow().config().buttons.actions()
    }

    fn tap_shows_toolbox(&self) -> bool {
        self.settings.borrow().config().tap_shows_toolbox()
    }

    fn reshow(&self, chrome: ToolboxChrome) {
        // Hiding first makes the overlay ask for the child position again.
        self.toolbox.set_visible(false);
        self.toolbox.set_visible(true);
        self.title.set_visible(chrome.title_visible);
        self.placeholder.set_visible(chrome.placeholder_visible);
        self.overlay.queue_allocate();
    }

    fn hide_toolbox(&self) {
        self.toolbox.set_visible(false);
    }
}

type Positioner = FloatingToolboxPositioner<GtkToolboxHost>;

pub struct FloatingToolbox {
    pub widget: Box,
    positioner: Rc<RefCell<Positioner>>,
    toolbars: Rc<FloatingToolbars>,
    settings: Rc<RefCell<SettingsManager>>,
}

impl FloatingToolbox {
    /// Adds the toolbox to `overlay`. `content` is the main content area used
    /// to place the toolbox while customizing.
    pub fn new(overlay: &Overlay, content: &Box, settings: Rc<RefCell<SettingsManager>>) -> Rc<Self> {
        let widget = Box::new(Orientation::Vertical, 4);
        widget.add_css_class("floating-toolbox");
        widget.set_halign(Align::Start);
        widget.set_valign(Align::Start);

        let title = Label::new(Some("Floating Toolbox"));
        title.add_css_class("heading");
        widget.append(&title);

        let toolbars = FloatingToolbars::new(settings.borrow().config());
        widget.append(&toolbars.widget);

        let placeholder = Label::new(Some("Use Customize Toolbars to add tools here"));
        placeholder.add_css_class("dim-label");
        widget.append(&placeholder);

        widget.set_visible(false);
        overlay.add_overlay(&widget);
        overlay.set_measure_overlay(&widget, false);

        let host = GtkToolboxHost {
            overlay: overlay.clone(),
            toolbox: widget.clone(),
            title,
            placeholder,
            content: content.clone(),
            toolbars: toolbars.clone(),
            settings: settings.clone(),
        };
        let positioner = Rc::new(RefCell::new(FloatingToolboxPositioner::new(host)));

        Self::connect_child_position(overlay, &widget, positioner.clone());

        let motion = EventControllerMotion::new();
        let leave_positioner = positioner.clone();
        motion.connect_leave(move |_| match leave_positioner.try_borrow_mut() {
            Ok(mut positioner) => positioner.handle_pointer_leave(),
            Err(_) => debug!("pointer left floating toolbox during an update"),
        });
        widget.add_controller(motion);

        let toolbox = Rc::new(Self {
            widget,
            positioner,
            toolbars,
            settings,
        });

        let weak = Rc::downgrade(&toolbox);
        toolbox.toolbars.connect_tool_activated(move |item| {
            if let Some(toolbox) = weak.upgrade() {
                toolbox.on_tool_activated(item);
            }
        });

        let weak = Rc::downgrade(&toolbox);
        toolbox.toolbars.connect_edit(move |definition, edit| {
            if let Some(toolbox) = weak.upgrade() {
                toolbox.on_toolbar_edit(definition, edit);
            }
        });

        toolbox
    }

    fn connect_child_position(overlay: &Overlay, toolbox: &Box, positioner: Rc<RefCell<Positioner>>) {
        let toolbox: Widget = toolbox.clone().upcast();
        overlay.connect_get_child_position(move |overlay, child| {
            if child != &toolbox {
                return None;
            }

            let Ok(mut positioner) = positioner.try_borrow_mut() else {
                warn!("floating toolbox layout requested during an update");
                return None;
            };

            // The overlay's own bounds always start at (0, 0).
            let container = Rect::new(0, 0, overlay.width(), overlay.height());
            let current = Size::new(child.width(), child.height());
            let rect = positioner.place(container, current, || {
                let (_, natural) = child.preferred_size();
                Size::new(natural.width(), natural.height())
            });

            Some(gdk::Rectangle::new(rect.x, rect.y, rect.width, rect.height))
        });
    }

    /// Register a callback for tool selection from the toolbox.
    pub fn connect_tool_selected<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        self.toolbars.connect_tool_activated(callback);
    }

    /// Show the toolbox centered on a point in window coordinates.
    pub fn show_at(&self, window_point: Point) {
        self.positioner.borrow_mut().show_at(window_point);
    }

    /// Enter customization. Returns `false` if the toolbox is not in use.
    pub fn show_for_configuration(&self) -> bool {
        self.toolbars.set_editing(true);
        let shown = self.positioner.borrow_mut().show_for_configuration();
        if !shown {
            self.toolbars.set_editing(false);
        }
        shown
    }

    /// Leave customization, or simply dismiss the toolbox.
    pub fn hide(&self) {
        self.toolbars.set_editing(false);
        self.positioner.borrow_mut().hide();
    }

    pub fn flag_recalculate_size_required(&self) {
        self.positioner.borrow_mut().flag_recalculate_size_required();
    }

    pub fn is_activated(&self) -> bool {
        self.positioner.borrow().is_activated()
    }

    fn on_tool_activated(&self, item: &str) {
        let Ok(mut positioner) = self.positioner.try_borrow_mut() else {
            return;
        };
        info!(tool = item, "tool selected from floating toolbox");
        if !positioner.is_configuring() {
            positioner.hide();
        }
    }

    fn on_toolbar_edit(&self, definition: &'static ToolbarDefinition, edit: ToolbarEdit) {
        {
            let mut settings = self.settings.borrow_mut();
            let toolbox = &mut settings.config_mut().toolbox;
            match edit {
                ToolbarEdit::AddItem => {
                    let next = TOOL_ITEMS[toolbox.items(definition).len() % TOOL_ITEMS.len()];
                    toolbox.push_item(definition, next);
                    info!(toolbar = definition.gui_name, item = next, "added tool");
                }
                ToolbarEdit::RemoveItem => {
                    if let Some(item) = toolbox.pop_item(definition) {
                        info!(toolbar = definition.gui_name, item = %item, "removed tool");
                    }
                }
            }
            if let Err(e) = settings.save() {
                warn!(error = %e, "failed to save toolbar changes");
            }
        }

        self.toolbars.populate(self.settings.borrow().config());

        let mut positioner = self.positioner.borrow_mut();
        if !positioner.refresh_configuration() {
            positioner.flag_recalculate_size_required();
        }
    }
}
