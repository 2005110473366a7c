//! # InkKit Core
//!
//! Core types and rules for InkKit that do not depend on a GUI toolkit.
//! Provides geometry primitives, the floating toolbox placement algorithm
//! and its state machine, input button bindings, tap detection and the
//! static toolbar definition table.

pub mod actions;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod positioner;
pub mod tap;
pub mod toolbar;

pub use actions::{ButtonAction, ButtonId, PointerKind, BUTTON_COUNT};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use placement::{
    clamp_to_container, compute_overlay_placement, Placement, ToolboxPlacementState,
};
pub use positioner::{FloatingToolboxPositioner, ToolboxChrome, ToolboxHost, DEFAULT_ANCHOR};
pub use tap::{StrokeSample, TapFilter};
pub use toolbar::{ToolbarDefinition, FLOATING_TOOLBARS, TOOLBAR_DEFINITIONS};
