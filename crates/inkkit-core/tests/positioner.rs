use inkkit_core::placement::ToolboxPlacementState;
use inkkit_core::{
    ButtonAction, FloatingToolboxPositioner, Point, Rect, Size, ToolboxChrome, ToolboxHost,
    BUTTON_COUNT, DEFAULT_ANCHOR,
};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    Reshow(ToolboxChrome),
    Hide,
}

/// Host whose overlay sits at (10, 20) inside the window.
#[derive(Default)]
struct RecordingHost {
    actions: Vec<ButtonAction>,
    tap_shows_toolbox: bool,
    items: RefCell<HashMap<String, usize>>,
    calls: RefCell<Vec<HostCall>>,
}

impl RecordingHost {
    fn idle() -> Self {
        Self {
            actions: vec![ButtonAction::None; BUTTON_COUNT],
            ..Default::default()
        }
    }

    fn with_items(toolbar: &str, count: usize) -> Self {
        let host = Self::idle();
        host.set_items(toolbar, count);
        host
    }

    fn set_items(&self, toolbar: &str, count: usize) {
        self.items.borrow_mut().insert(toolbar.to_string(), count);
    }

    fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }
}

impl ToolboxHost for RecordingHost {
    fn to_overlay(&self, window_point: Point) -> Point {
        window_point.offset(-10, -20)
    }

    fn reference_origin(&self) -> Point {
        Point::new(5, 60)
    }

    fn toolbar_item_count(&self, toolbar: &str) -> usize {
        self.items.borrow().get(toolbar).copied().unwrap_or(0)
    }

    fn button_actions(&self) -> Vec<ButtonAction> {
        self.actions.clone()
    }

    fn tap_shows_toolbox(&self) -> bool {
        self.tap_shows_toolbox
    }

    fn reshow(&self, chrome: ToolboxChrome) {
        self.calls.borrow_mut().push(HostCall::Reshow(chrome));
    }

    fn hide_toolbox(&self) {
        self.calls.borrow_mut().push(HostCall::Hide);
    }
}

const WINDOW: Rect = Rect::new(0, 0, 800, 600);

#[test]
fn test_initial_state() {
    let positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    assert_eq!(positioner.state(), ToolboxPlacementState::RecalcSize);
    assert_eq!(positioner.anchor(), DEFAULT_ANCHOR);
    assert_eq!(positioner.toolbars().len(), 4);
}

#[test]
fn test_not_activated_when_nothing_reaches_it() {
    let positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    assert!(!positioner.is_activated());
}

#[test]
fn test_activated_by_button_binding() {
    let mut host = RecordingHost::idle();
    host.actions[2] = ButtonAction::FloatingToolbox;
    let positioner = FloatingToolboxPositioner::new(host);
    assert!(positioner.is_activated());
}

#[test]
fn test_activated_by_tap() {
    let mut host = RecordingHost::idle();
    host.tap_shows_toolbox = true;
    let positioner = FloatingToolboxPositioner::new(host);
    assert!(positioner.is_activated());
}

#[test]
fn test_activated_by_items() {
    let positioner = FloatingToolboxPositioner::new(RecordingHost::with_items("tbFloat3", 2));
    assert!(positioner.is_activated());
    assert_eq!(positioner.count_items(), 2);
}

#[test]
fn test_count_ignores_non_floating_toolbars() {
    let host = RecordingHost::with_items("tbFloat1", 1);
    host.set_items("tbFloat4", 3);
    host.set_items("tbTop1", 10);
    let positioner = FloatingToolboxPositioner::new(host);
    assert_eq!(positioner.count_items(), 4);
}

#[test]
fn test_custom_toolbar_list() {
    let host = RecordingHost::with_items("palette", 5);
    let positioner = FloatingToolboxPositioner::with_toolbars(host, ["palette"]);
    assert_eq!(positioner.count_items(), 5);
}

#[test]
fn test_show_at_stores_overlay_anchor() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    positioner.show_at(Point::new(300, 250));
    assert_eq!(positioner.anchor(), Point::new(290, 230));
    assert_eq!(
        positioner.host().calls(),
        vec![HostCall::Reshow(ToolboxChrome {
            title_visible: false,
            placeholder_visible: true,
        })]
    );
}

#[test]
fn test_show_at_with_items_hides_placeholder() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::with_items("tbFloat1", 1));
    positioner.show_at(Point::new(0, 0));
    assert_eq!(
        positioner.host().calls(),
        vec![HostCall::Reshow(ToolboxChrome {
            title_visible: false,
            placeholder_visible: false,
        })]
    );
}

#[test]
fn test_show_for_configuration_noop_when_not_activated() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    assert!(!positioner.show_for_configuration());
    assert_eq!(positioner.state(), ToolboxPlacementState::RecalcSize);
    assert_eq!(positioner.anchor(), DEFAULT_ANCHOR);
    assert!(positioner.host().calls().is_empty());
}

#[test]
fn test_show_for_configuration() {
    let mut host = RecordingHost::idle();
    host.tap_shows_toolbox = true;
    let mut positioner = FloatingToolboxPositioner::new(host);

    assert!(positioner.show_for_configuration());
    assert_eq!(positioner.state(), ToolboxPlacementState::Configuration);
    assert_eq!(positioner.anchor(), Point::new(45, 100));
    assert_eq!(
        positioner.host().calls(),
        vec![HostCall::Reshow(ToolboxChrome {
            title_visible: true,
            placeholder_visible: false,
        })]
    );
}

#[test]
fn test_hide_after_configuration_resets_state() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::with_items("tbFloat1", 1));
    positioner.show_for_configuration();
    positioner.hide();
    assert_eq!(positioner.state(), ToolboxPlacementState::RecalcSize);
    assert_eq!(positioner.host().calls().last(), Some(&HostCall::Hide));
}

#[test]
fn test_hide_keeps_no_change() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    positioner.place(WINDOW, Size::default(), || Size::new(100, 40));
    assert_eq!(positioner.state(), ToolboxPlacementState::NoChange);
    positioner.hide();
    assert_eq!(positioner.state(), ToolboxPlacementState::NoChange);
}

#[test]
fn test_pointer_leave_hides_outside_configuration() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    positioner.show_at(Point::new(100, 100));
    positioner.handle_pointer_leave();
    assert_eq!(positioner.host().calls().last(), Some(&HostCall::Hide));
}

#[test]
fn test_pointer_leave_ignored_while_configuring() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::with_items("tbFloat1", 1));
    positioner.show_for_configuration();
    positioner.handle_pointer_leave();
    assert_eq!(positioner.state(), ToolboxPlacementState::Configuration);
    assert!(!positioner.host().calls().contains(&HostCall::Hide));
}

#[test]
fn test_place_worked_examples() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    positioner.show_at(Point::new(60, 70));
    let rect = positioner.place(WINDOW, Size::default(), || Size::new(100, 40));
    assert_eq!(rect, Rect::new(0, 30, 100, 40));
    assert_eq!(positioner.state(), ToolboxPlacementState::NoChange);

    let mut host = RecordingHost::idle();
    host.tap_shows_toolbox = true;
    let mut positioner = FloatingToolboxPositioner::new(host);
    positioner.show_for_configuration();
    assert_eq!(positioner.anchor(), Point::new(45, 100));
    let rect = positioner.place(WINDOW, Size::default(), || Size::new(60, 30));
    assert_eq!(rect, Rect::new(45, 100, 92, 50));
    assert_eq!(positioner.state(), ToolboxPlacementState::Configuration);
}

#[test]
fn test_no_change_reuses_allocation_until_flagged() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::idle());
    positioner.show_at(Point::new(410, 320));
    let first = positioner.place(WINDOW, Size::default(), || Size::new(100, 40));
    assert_eq!(first, Rect::new(350, 280, 100, 40));

    // The toolbox grew, but the allocation is kept.
    let current = Size::new(first.width, first.height);
    let second = positioner.place(WINDOW, current, || Size::new(200, 80));
    assert_eq!(second, first);

    positioner.flag_recalculate_size_required();
    assert_eq!(positioner.state(), ToolboxPlacementState::RecalcSize);
    let third = positioner.place(WINDOW, current, || Size::new(200, 80));
    assert_eq!(third, Rect::new(300, 260, 200, 80));
}

#[test]
fn test_removing_last_tool_keeps_configuration() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::with_items("tbFloat1", 1));
    assert!(positioner.show_for_configuration());

    // The only thing activating the toolbox was its last tool.
    positioner.host().set_items("tbFloat1", 0);
    assert!(!positioner.is_activated());

    assert!(positioner.refresh_configuration());
    assert_eq!(positioner.state(), ToolboxPlacementState::Configuration);
    assert_eq!(
        positioner.host().calls().last(),
        Some(&HostCall::Reshow(ToolboxChrome {
            title_visible: true,
            placeholder_visible: false,
        }))
    );

    positioner.handle_pointer_leave();
    assert!(!positioner.host().calls().contains(&HostCall::Hide));

    let rect = positioner.place(WINDOW, Size::new(92, 50), || Size::new(0, 0));
    assert_eq!(rect, Rect::new(45, 100, 50, 50));
    assert_eq!(positioner.state(), ToolboxPlacementState::Configuration);
}

#[test]
fn test_refresh_configuration_outside_configuration_is_noop() {
    let mut positioner = FloatingToolboxPositioner::new(RecordingHost::with_items("tbFloat1", 1));
    assert!(!positioner.refresh_configuration());
    assert_eq!(positioner.state(), ToolboxPlacementState::RecalcSize);
    assert!(positioner.host().calls().is_empty());
}
