use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box, CssProvider, HeaderBar, Label, Orientation, Overlay, ToggleButton};
use libadwaita::Application as AdwApplication;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

use crate::ui::gtk::canvas::DrawingCanvas;
use crate::ui::gtk::floating_toolbox::FloatingToolbox;
use crate::ui::gtk::toolbars::tool_label;

use inkkit_settings::SettingsManager;

pub const APP_ID: &str = "io.github.inkkit.InkKit";

pub fn main() {
    let app = AdwApplication::builder().application_id(APP_ID).build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(|app| {
        if let Err(e) = SettingsManager::ensure_config_dir() {
            warn!(error = %e, "could not create config directory");
        }
        let settings = match SettingsManager::load_default_location() {
            Ok(manager) => manager,
            Err(e) => {
                warn!(error = %e, "no config location, settings will not persist");
                SettingsManager::load_or_default("config.toml")
            }
        };
        let (width, height) = {
            let ui = &settings.config().ui;
            (ui.window_width as i32, ui.window_height as i32)
        };
        let settings = Rc::new(RefCell::new(settings));

        let window = ApplicationWindow::builder()
            .application(app)
            .title("InkKit")
            .default_width(width)
            .default_height(height)
            .build();

        let header = HeaderBar::new();
        let customize = ToggleButton::with_label("Customize Toolbars");
        let tool_status = Label::new(Some("Tool: Pen"));
        tool_status.add_css_class("dim-label");
        header.pack_start(&customize);
        header.pack_end(&tool_status);
        window.set_titlebar(Some(&header));

        // Content area, also the reference point for the toolbox while
        // customizing.
        let content = Box::new(Orientation::Vertical, 0);
        let overlay = Overlay::new();
        overlay.set_hexpand(true);
        overlay.set_vexpand(true);
        content.append(&overlay);

        let toolbox = FloatingToolbox::new(&overlay, &content, settings.clone());
        let canvas = DrawingCanvas::new(toolbox.clone(), settings.clone());
        overlay.set_child(Some(&canvas.widget));

        toolbox.connect_tool_selected(move |item| {
            tool_status.set_text(&format!("Tool: {}", tool_label(item)));
        });

        let toolbox_clone = toolbox.clone();
        customize.connect_toggled(move |button| {
            if button.is_active() {
                if !toolbox_clone.show_for_configuration() {
                    info!("floating toolbox is not in use, nothing to customize");
                    button.set_active(false);
                }
            } else {
                toolbox_clone.hide();
            }
        });

        // Actions
        let customize_action = gio::SimpleAction::new("customize_toolbars", None);
        let customize_clone = customize.clone();
        customize_action.connect_activate(move |_, _| {
            customize_clone.set_active(!customize_clone.is_active());
        });
        app.add_action(&customize_action);

        let quit_action = gio::SimpleAction::new("quit", None);
        let window_clone = window.clone();
        quit_action.connect_activate(move |_, _| {
            window_clone.close();
        });
        app.add_action(&quit_action);

        app.set_accels_for_action("app.customize_toolbars", &["F9"]);
        app.set_accels_for_action("app.quit", &["<Control>q"]);

        window.set_child(Some(&content));
        info!(activated = toolbox.is_activated(), "main window ready");
        window.present();
    });

    let status = app.run();
    info!(?status, "application exited");
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/gtk/style.css"));

    match gtk4::gdk::Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => warn!("no display, skipping stylesheet"),
    }
}
