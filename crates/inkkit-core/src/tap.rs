//! Tap detection on the drawing canvas.
//!
//! Very short, very small strokes are treated as taps instead of ink. A tap
//! can open the floating toolbox when the user enabled that in the settings.

/// Timing and travel of one finished stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSample {
    /// Press time in milliseconds.
    pub start_ms: u64,
    /// Release time in milliseconds.
    pub end_ms: u64,
    /// Distance travelled by the pointer, in pixels.
    pub length_px: f64,
}

impl StrokeSample {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// Classifies finished strokes as taps or ink.
#[derive(Debug, Clone, PartialEq)]
pub struct TapFilter {
    ignore_time_ms: u64,
    ignore_length_px: f64,
    successive_time_ms: u64,
    last_accepted_end_ms: Option<u64>,
}

impl TapFilter {
    pub fn new(ignore_time_ms: u64, ignore_length_px: f64, successive_time_ms: u64) -> Self {
        Self {
            ignore_time_ms,
            ignore_length_px,
            successive_time_ms,
            last_accepted_end_ms: None,
        }
    }

    /// Returns `true` if `stroke` is a tap.
    ///
    /// A short stroke that starts within the successive window of the last
    /// accepted stroke counts as ink, so quick dots while writing survive.
    pub fn classify(&mut self, stroke: StrokeSample) -> bool {
        let short = stroke.duration_ms() < self.ignore_time_ms
            && stroke.length_px < self.ignore_length_px;

        let successive = self
            .last_accepted_end_ms
            .is_some_and(|end| stroke.start_ms.saturating_sub(end) < self.successive_time_ms);

        let is_tap = short && !successive;
        if !is_tap {
            self.last_accepted_end_ms = Some(stroke.end_ms);
        }

        tracing::trace!(
            duration_ms = stroke.duration_ms(),
            length_px = stroke.length_px,
            is_tap,
            "classified stroke"
        );
        is_tap
    }
}

impl Default for TapFilter {
    fn default() -> Self {
        Self::new(150, 1.0, 500)
    }
}
