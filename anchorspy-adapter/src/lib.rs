//! Host-driven scrollspy component for the `anchorspy` crate.
//!
//! The `anchorspy` crate is UI-agnostic and focuses on the tracking math and transition
//! planning. This crate wires it to a host environment through small capability traits:
//!
//! - [`AnchorSource`]: named anchors in document order, plus geometry queries
//! - [`Viewport`]: read/write the scroll offset
//! - [`History`]: the URL hash, history entries and scroll restoration
//! - [`FrameScheduler`]: a recurring per-frame callback
//!
//! The host owns the real event loop and forwards frames, nav clicks and hash changes to
//! [`ScrollSpy`]. Everything runs on one thread; there is no locking.
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod hash;
mod host;
mod nav;
mod spy;


pub use hash::{HashSync, fragment_to_id};
pub use host::{
    AnchorSource, DiscoveredAnchor, FrameId, FrameScheduler, History, Host, SubscriptionId,
    Viewport,
};
pub use nav::{NavItem, NavModel, anchor_classes};
pub use spy::{ContentId, ScrollSpy};

pub use anchorspy;
