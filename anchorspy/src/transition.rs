use alloc::string::String;

use crate::{HistoryOp, SpyOptions, Tween};

/// One animated scroll to an anchor.
///
/// A transition is superseded by the next one: the adapter keeps at most one and replaces it
/// wholesale, so the last request always owns the scroll position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionRequest {
    pub target: String,
    pub tween: Tween,
    /// How the URL hash was updated when the transition started, if at all.
    pub history: Option<HistoryOp>,
}

impl TransitionRequest {
    /// Plans a transition from `before` to the anchor at document offset `anchor_offset`.
    ///
    /// The end offset stops `pixel_offset` above the anchor; duration and delay are resolved from
    /// the before/after offsets.
    pub fn plan(
        target: impl Into<String>,
        before: f64,
        anchor_offset: f64,
        now_ms: f64,
        history: Option<HistoryOp>,
        options: &SpyOptions,
    ) -> Self {
        let after = anchor_offset - options.pixel_offset;
        let duration_ms = options.duration.resolve(before, after);
        let delay_ms = options.delay.resolve(before, after);
        Self {
            target: target.into(),
            tween: Tween::new(before, after, now_ms, delay_ms, duration_ms, options.easing),
            history,
        }
    }

    pub fn from(&self) -> f64 {
        self.tween.from
    }

    pub fn to(&self) -> f64 {
        self.tween.to
    }

    pub fn duration_ms(&self) -> f64 {
        self.tween.duration_ms
    }

    pub fn delay_ms(&self) -> f64 {
        self.tween.delay_ms
    }

    /// The scroll offset to write at `now_ms`, or `None` while the delay is pending.
    pub fn sample(&self, now_ms: f64) -> Option<f64> {
        if self.tween.is_pending(now_ms) {
            return None;
        }
        Some(self.tween.sample(now_ms))
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.tween.is_done(now_ms)
    }
}
