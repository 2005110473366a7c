//! Floating toolbox placement
//!
//! Computes where the floating toolbox goes inside its overlay on every
//! layout pass:
//! - Normal use: the toolbox is centered on the anchor (usually the pointer)
//! - Configuration: the anchor is the top-left corner and the box is padded
//!   so there is always room to drop one more tool into it
//!
//! The result is then pushed back inside the overlay's visible bounds.

use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Allocations shorter than this have never been laid out.
pub const UNINITIALIZED_HEIGHT: i32 = 2;

/// Extra width reserved in configuration mode.
pub const CONFIGURATION_EXTRA_WIDTH: i32 = 32;

/// Minimum width and height in configuration mode.
pub const CONFIGURATION_MIN_SIZE: i32 = 50;

/// What the next layout pass should do with the toolbox size and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolboxPlacementState {
    /// Remeasure the natural size, then center on the anchor.
    #[default]
    RecalcSize,
    /// Keep the last allocated size, center on the anchor.
    NoChange,
    /// Toolbar customization: anchor is the top-left corner, size is padded.
    Configuration,
}

impl std::fmt::Display for ToolboxPlacementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecalcSize => write!(f, "recalc-size"),
            Self::NoChange => write!(f, "no-change"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

/// Outcome of a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Final allocation in overlay coordinates.
    pub rect: Rect,
    /// State to use for the next layout pass.
    pub next_state: ToolboxPlacementState,
}

/// Computes the toolbox allocation for one layout pass.
///
/// `current` is the size the toolbox is allocated right now;
/// `measure_natural` is only called when the size has to be recomputed.
pub fn compute_overlay_placement<F>(
    container: Rect,
    current: Size,
    state: ToolboxPlacementState,
    anchor: Point,
    measure_natural: F,
) -> Placement
where
    F: FnOnce() -> Size,
{
    let size = if state != ToolboxPlacementState::NoChange || current.height < UNINITIALIZED_HEIGHT
    {
        measure_natural()
    } else {
        current
    };

    let (rect, next_state) = match state {
        ToolboxPlacementState::RecalcSize | ToolboxPlacementState::NoChange => (
            Rect::new(
                anchor.x - size.width / 2,
                anchor.y - size.height / 2,
                size.width,
                size.height,
            ),
            ToolboxPlacementState::NoChange,
        ),
        ToolboxPlacementState::Configuration => (
            Rect::new(
                anchor.x,
                anchor.y,
                (size.width + CONFIGURATION_EXTRA_WIDTH).max(CONFIGURATION_MIN_SIZE),
                size.height.max(CONFIGURATION_MIN_SIZE),
            ),
            ToolboxPlacementState::Configuration,
        ),
    };

    Placement {
        rect: clamp_to_container(rect, container),
        next_state,
    }
}

/// Shifts `rect` so it stays inside `container`.
///
/// Left and top are corrected first. The right and bottom edges are checked
/// against `container.width` and `container.height` alone, which is only
/// right when the container origin is (0, 0). The overlay reports its bounds
/// in its own coordinate space, so that holds for the toolbox.
pub fn clamp_to_container(mut rect: Rect, container: Rect) -> Rect {
    if rect.x < container.x {
        rect.x = container.x;
    }

    if rect.y < container.y {
        rect.y = container.y;
    }

    let right_bound = container.width;
    let right_current = rect.x + rect.width;
    if right_current > right_bound {
        rect.x -= right_current - right_bound;
    }

    let bottom_bound = container.height;
    let bottom_current = rect.y + rect.height;
    if bottom_current > bottom_bound {
        rect.y -= bottom_current - bottom_bound;
    }

    rect
}
