//! A headless scrollspy engine.
//!
//! For the host-driven component (anchor discovery, frame polling, hash sync), see the
//! `anchorspy-adapter` crate.
//!
//! This crate holds the pieces that need no host access:
//! - the anchor set and its heading outline
//! - locating the current anchor by bisection over anchor offsets
//! - frame-polled tracking state with change detection
//! - scroll transition planning (timing, easing, tweens)
//!
//! It is UI-agnostic. A DOM/TUI layer is expected to provide:
//! - the anchors in document order
//! - anchor geometry and the scroll offset
//! - frame ticks
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod anchors;
mod locate;
mod options;
mod tracker;
mod transition;
mod tween;
mod types;

#[cfg(test)]
mod tests;

pub use anchors::{Anchor, AnchorSet, OutlineNode};
pub use locate::{AT_TOP_TOLERANCE, Located, locate};
pub use options::{AnchorTopFn, SpyOptions, Timing, default_anchor_top, default_duration};
pub use tracker::ScrollTracker;
pub use transition::TransitionRequest;
pub use tween::{Easing, Tween};
pub use types::{AnchorGeometry, HashMode, HistoryOp, ScrollRestoration, TrackingState};
