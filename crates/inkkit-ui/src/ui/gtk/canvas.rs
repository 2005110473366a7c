//! Drawing canvas
//!
//! A minimal ink surface. Besides drawing strokes it is where the floating
//! toolbox gets triggered: a button bound to the toolbox opens it under the
//! pointer, and so does a tap when tap handling is enabled.

use crate::ui::gtk::floating_toolbox::{to_window_point, FloatingToolbox};
use gtk4::prelude::*;
use gtk4::{gdk, DrawingArea, GestureClick, GestureDrag};
use inkkit_core::{ButtonAction, ButtonId, PointerKind, StrokeSample, TapFilter};
use inkkit_settings::SettingsManager;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[derive(Default)]
struct Ink {
    strokes: Vec<Vec<(f64, f64)>>,
    current: Option<ActiveStroke>,
}

struct ActiveStroke {
    start: (f64, f64),
    start_ms: u32,
    points: Vec<(f64, f64)>,
    length: f64,
}

pub struct DrawingCanvas {
    pub widget: DrawingArea,
}

fn pointer_kind(gesture: &impl IsA<gtk4::Gesture>) -> PointerKind {
    let gesture = gesture.as_ref();
    let is_eraser = gesture
        .current_event()
        .and_then(|event| event.device_tool())
        .is_some_and(|tool| tool.tool_type() == gdk::DeviceToolType::Eraser);
    if is_eraser {
        return PointerKind::Eraser;
    }

    match gesture.device().map(|device| device.source()) {
        Some(gdk::InputSource::Pen) => PointerKind::Pen,
        Some(gdk::InputSource::Touchscreen) => PointerKind::Touch,
        _ => PointerKind::Mouse,
    }
}

impl DrawingCanvas {
    pub fn new(toolbox: Rc<FloatingToolbox>, settings: Rc<RefCell<SettingsManager>>) -> Rc<Self> {
        let widget = DrawingArea::new();
        widget.set_hexpand(true);
        widget.set_vexpand(true);
        widget.add_css_class("ink-canvas");

        let ink = Rc::new(RefCell::new(Ink::default()));
        let tap_filter = Rc::new(RefCell::new(
            settings.borrow().config().tap_action.tap_filter(),
        ));

        let draw_ink = ink.clone();
        widget.set_draw_func(move |_, cr, _, _| {
            cr.set_source_rgb(0.1, 0.1, 0.3);
            cr.set_line_width(2.0);
            let ink = draw_ink.borrow();
            let active = ink.current.iter().map(|s| &s.points);
            for stroke in ink.strokes.iter().chain(active) {
                let mut points = stroke.iter();
                if let Some(&(x, y)) = points.next() {
                    cr.move_to(x, y);
                    for &(x, y) in points {
                        cr.line_to(x, y);
                    }
                    let _ = cr.stroke();
                }
            }
        });

        Self::connect_buttons(&widget, toolbox.clone(), settings.clone());
        Self::connect_strokes(&widget, ink, tap_filter, toolbox, settings);

        Rc::new(Self { widget })
    }

    fn connect_buttons(
        widget: &DrawingArea,
        toolbox: Rc<FloatingToolbox>,
        settings: Rc<RefCell<SettingsManager>>,
    ) {
        let click = GestureClick::new();
        click.set_button(0);
        let canvas = widget.clone();
        click.connect_pressed(move |gesture, _, x, y| {
            let Some(button) = ButtonId::resolve(pointer_kind(gesture), gesture.current_button())
            else {
                return;
            };
            let action = settings.borrow().config().buttons.action_for(button);
            debug!(%button, %action, "button pressed on canvas");
            if action == ButtonAction::FloatingToolbox {
                toolbox.show_at(to_window_point(&canvas, x, y));
            }
        });
        widget.add_controller(click);
    }

    fn connect_strokes(
        widget: &DrawingArea,
        ink: Rc<RefCell<Ink>>,
        tap_filter: Rc<RefCell<TapFilter>>,
        toolbox: Rc<FloatingToolbox>,
        settings: Rc<RefCell<SettingsManager>>,
    ) {
        let drag = GestureDrag::new();
        drag.set_button(gdk::BUTTON_PRIMARY);

        let begin_ink = ink.clone();
        let begin_settings = settings.clone();
        drag.connect_drag_begin(move |gesture, x, y| {
            let button = ButtonId::resolve(pointer_kind(gesture), gdk::BUTTON_PRIMARY);
            let draws = button.is_some_and(|b| {
                begin_settings.borrow().config().buttons.action_for(b) == ButtonAction::Pen
            });
            begin_ink.borrow_mut().current = draws.then(|| ActiveStroke {
                start: (x, y),
                start_ms: gesture.current_event_time(),
                points: vec![(x, y)],
                length: 0.0,
            });
        });

        let update_ink = ink.clone();
        let update_canvas = widget.clone();
        drag.connect_drag_update(move |_, dx, dy| {
            let mut ink = update_ink.borrow_mut();
            if let Some(stroke) = ink.current.as_mut() {
                let point = (stroke.start.0 + dx, stroke.start.1 + dy);
                if let Some(&(lx, ly)) = stroke.points.last() {
                    stroke.length += (point.0 - lx).hypot(point.1 - ly);
                }
                stroke.points.push(point);
                update_canvas.queue_draw();
            }
        });

        let end_canvas = widget.clone();
        drag.connect_drag_end(move |gesture, _, _| {
            let Some(stroke) = ink.borrow_mut().current.take() else {
                return;
            };
            let sample = StrokeSample {
                start_ms: u64::from(stroke.start_ms),
                end_ms: u64::from(gesture.current_event_time()),
                length_px: stroke.length,
            };

            let filtering = settings.borrow().config().tap_action.stroke_filter_enabled;
            if filtering && tap_filter.borrow_mut().classify(sample) {
                debug!(duration_ms = sample.duration_ms(), "tap on canvas");
                if settings.borrow().config().tap_shows_toolbox() {
                    let (x, y) = stroke.start;
                    toolbox.show_at(to_window_point(&end_canvas, x, y));
                }
            } else {
                ink.borrow_mut().strokes.push(stroke.points);
            }
            end_canvas.queue_draw();
        });

        widget.add_controller(drag);
    }
}
