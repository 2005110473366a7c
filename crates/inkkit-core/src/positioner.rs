//! Floating toolbox positioner
//!
//! Owns the toolbox anchor and placement state and decides when the toolbox
//! is shown, hidden or remeasured. Everything toolkit specific (coordinate
//! transforms, widget visibility, the settings store) is reached through
//! [`ToolboxHost`], so the same state machine drives the GTK front end and
//! the tests.
//!
//! State transitions:
//! - starts in `RecalcSize`
//! - the first normal layout pass moves it to `NoChange`
//! - `show_for_configuration` moves it to `Configuration`; toolbar edits
//!   while configuring keep it there (`refresh_configuration`)
//! - `hide` while configuring, or `flag_recalculate_size_required`, moves it
//!   back to `RecalcSize`

use crate::actions::ButtonAction;
use crate::geometry::{Point, Rect, Size};
use crate::placement::{compute_overlay_placement, ToolboxPlacementState};
use crate::toolbar::FLOATING_TOOLBARS;
use tracing::debug;

/// Anchor used before the toolbox was ever shown.
pub const DEFAULT_ANCHOR: Point = Point::new(200, 200);

/// Offset of the configuration anchor from the reference widget's origin.
pub const CONFIGURATION_OFFSET: i32 = 40;

/// Visibility of the auxiliary widgets inside the toolbox after a re-show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolboxChrome {
    /// The "Floating Toolbox" title, only useful while customizing.
    pub title_visible: bool,
    /// The hint shown while the toolbox has no items.
    pub placeholder_visible: bool,
}

/// Capabilities the positioner needs from the window hosting the toolbox.
pub trait ToolboxHost {
    /// Translates a point from toplevel window coordinates into overlay
    /// coordinates.
    fn to_overlay(&self, window_point: Point) -> Point;

    /// Origin of the main content area in toplevel window coordinates.
    fn reference_origin(&self) -> Point;

    /// Number of items in the toolbar container named `toolbar`.
    fn toolbar_item_count(&self, toolbar: &str) -> usize;

    /// Actions bound to every configurable button.
    fn button_actions(&self) -> Vec<ButtonAction>;

    /// Whether a tap on the canvas opens the toolbox.
    fn tap_shows_toolbox(&self) -> bool;

    /// Hides the toolbox, then shows it again with `chrome` applied, which
    /// forces a new layout pass.
    fn reshow(&self, chrome: ToolboxChrome);

    /// Hides the toolbox.
    fn hide_toolbox(&self);
}

/// Placement policy and visibility state of the floating toolbox.
pub struct FloatingToolboxPositioner<H> {
    host: H,
    toolbars: Vec<String>,
    anchor: Point,
    state: ToolboxPlacementState,
}

impl<H: ToolboxHost> FloatingToolboxPositioner<H> {
    /// Creates a positioner counting items in the default floating toolbars.
    pub fn new(host: H) -> Self {
        Self::with_toolbars(host, FLOATING_TOOLBARS.iter().copied())
    }

    /// Creates a positioner counting items in the given toolbar containers.
    pub fn with_toolbars<I, S>(host: H, toolbars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            host,
            toolbars: toolbars.into_iter().map(Into::into).collect(),
            anchor: DEFAULT_ANCHOR,
            state: ToolboxPlacementState::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> ToolboxPlacementState {
        self.state
    }

    /// Current anchor in overlay coordinates.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn toolbars(&self) -> &[String] {
        &self.toolbars
    }

    pub fn is_configuring(&self) -> bool {
        self.state == ToolboxPlacementState::Configuration
    }

    /// True if the user can reach the toolbox at all: a button opens it, a
    /// tap opens it, or it already holds tools.
    pub fn is_activated(&self) -> bool {
        if self
            .host
            .button_actions()
            .into_iter()
            .any(ButtonAction::opens_floating_toolbox)
        {
            return true;
        }

        if self.host.tap_shows_toolbox() {
            return true;
        }

        self.count_items() > 0
    }

    /// Total number of items across the floating toolbars.
    pub fn count_items(&self) -> usize {
        self.toolbars
            .iter()
            .map(|name| self.host.toolbar_item_count(name))
            .sum()
    }

    /// Shows the toolbox centered on `window_point` (toplevel coordinates).
    pub fn show_at(&mut self, window_point: Point) {
        self.anchor = self.host.to_overlay(window_point);
        debug!(
            x = self.anchor.x,
            y = self.anchor.y,
            state = %self.state,
            "showing floating toolbox"
        );
        self.show();
    }

    /// Shows the toolbox for toolbar customization, next to the top-left of
    /// the content area.
    ///
    /// Does nothing and returns `false` if the toolbox is not activated.
    pub fn show_for_configuration(&mut self) -> bool {
        if !self.is_activated() {
            debug!("floating toolbox not activated, skipping configuration view");
            return false;
        }

        self.anchor = self
            .host
            .reference_origin()
            .offset(CONFIGURATION_OFFSET, CONFIGURATION_OFFSET);
        self.state = ToolboxPlacementState::Configuration;
        debug!(
            x = self.anchor.x,
            y = self.anchor.y,
            "showing floating toolbox for configuration"
        );
        self.show();
        true
    }

    /// Re-shows the configuration view after its toolbars changed.
    ///
    /// Configuration placement always remeasures, so the state is kept and
    /// activation is not checked again: removing the last tool must not end
    /// customization. Returns `false` outside configuration mode.
    pub fn refresh_configuration(&mut self) -> bool {
        if !self.is_configuring() {
            return false;
        }
        debug!("refreshing floating toolbox configuration view");
        self.show();
        true
    }

    fn show(&self) {
        let configuring = self.is_configuring();
        let chrome = ToolboxChrome {
            title_visible: configuring,
            placeholder_visible: !(configuring || self.count_items() > 0),
        };
        self.host.reshow(chrome);
    }

    /// Hides the toolbox. Leaving configuration mode forces a remeasure on
    /// the next show.
    pub fn hide(&mut self) {
        if self.is_configuring() {
            self.state = ToolboxPlacementState::RecalcSize;
        }
        debug!(state = %self.state, "hiding floating toolbox");
        self.host.hide_toolbox();
    }

    /// Makes the next layout pass remeasure the toolbox, e.g. after its
    /// toolbars changed.
    pub fn flag_recalculate_size_required(&mut self) {
        self.state = ToolboxPlacementState::RecalcSize;
    }

    /// Layout callback for the toolbox child of the overlay.
    ///
    /// `container` is the overlay's visible area, `current` the toolbox's
    /// current allocation size. `measure_natural` is called only when the
    /// size has to be recomputed.
    pub fn place<F>(&mut self, container: Rect, current: Size, measure_natural: F) -> Rect
    where
        F: FnOnce() -> Size,
    {
        let placement =
            compute_overlay_placement(container, current, self.state, self.anchor, measure_natural);
        if placement.next_state != self.state {
            debug!(from = %self.state, to = %placement.next_state, "placement state changed");
        }
        self.state = placement.next_state;
        if !container.contains_rect(&placement.rect) {
            debug!(
                width = placement.rect.width,
                height = placement.rect.height,
                "floating toolbox larger than its overlay"
            );
        }
        placement.rect
    }

    /// The pointer left the toolbox. Configuration mode is sticky and has to
    /// be ended explicitly.
    pub fn handle_pointer_leave(&mut self) {
        if !self.is_configuring() {
            self.hide();
        }
    }
}
