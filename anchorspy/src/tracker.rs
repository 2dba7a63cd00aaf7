use alloc::string::String;
use alloc::vec::Vec;

use crate::{AnchorSet, Located, TrackingState, locate};

/// Frame-polled tracking state.
///
/// The adapter calls [`ScrollTracker::poll`] once per frame with the current scroll offset. The
/// tracker only asks for anchor offsets when the scroll offset moved since the previous frame (or
/// after [`ScrollTracker::reset`]), and only reports a state when `current` or `at_top` changed.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    state: TrackingState,
    last_scroll_offset: Option<f64>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    /// Forgets the tracking state and the last polled offset.
    ///
    /// Call this when the anchor set is rebuilt; the next poll re-evaluates unconditionally.
    pub fn reset(&mut self) {
        self.state = TrackingState::default();
        self.invalidate();
    }

    /// Keeps the state but forces the next poll to re-evaluate.
    ///
    /// Call this when geometry-affecting options (e.g. the pixel offset) change.
    pub fn invalidate(&mut self) {
        self.last_scroll_offset = None;
    }

    /// Returns `true` when `scroll_offset` differs from the previously polled one.
    pub fn needs_check(&self, scroll_offset: f64) -> bool {
        self.last_scroll_offset != Some(scroll_offset)
    }

    /// Per-frame check.
    ///
    /// `measure` is invoked only when a check is needed and must return the anchors' offsets in
    /// document order together with the container's end offset.
    ///
    /// Returns the new state when it changed.
    pub fn poll(
        &mut self,
        anchors: &AnchorSet,
        scroll_offset: f64,
        pixel_offset: f64,
        measure: impl FnOnce() -> (Vec<f64>, f64),
    ) -> Option<&TrackingState> {
        if !self.needs_check(scroll_offset) {
            return None;
        }
        self.last_scroll_offset = Some(scroll_offset);

        let (offsets, end) = measure();
        let located = locate(&offsets, end, scroll_offset, pixel_offset);
        self.apply(anchors, located)
    }

    /// Applies a located result, returning the new state when it changed.
    pub fn apply(&mut self, anchors: &AnchorSet, located: Located) -> Option<&TrackingState> {
        let current = located
            .index
            .and_then(|i| anchors.get(i))
            .map(|a| a.id.as_str());

        if self.state.current.as_deref() == current && self.state.at_top == located.at_top {
            return None;
        }

        sptrace!(
            current = current.unwrap_or(""),
            at_top = located.at_top,
            "tracking state changed"
        );
        self.state = TrackingState {
            current: current.map(String::from),
            at_top: located.at_top,
        };
        Some(&self.state)
    }
}
