use alloc::string::String;
use alloc::vec::Vec;

use anchorspy::ScrollRestoration;

/// An anchor as reported by the host, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscoveredAnchor<H> {
    /// The element's unique name.
    pub id: String,
    /// The element's text content.
    pub label: String,
    /// Level of the heading element the anchor wraps, if any.
    pub heading_level: Option<u8>,
    /// Opaque handle used for geometry queries.
    pub handle: H,
}

/// Enumerates the named anchors in the tracked content.
pub trait AnchorSource {
    type Handle: Clone;

    /// Every element carrying a unique name within the tracked content, in document order.
    fn list_anchors(&self) -> Vec<DiscoveredAnchor<Self::Handle>>;

    /// The element's top edge relative to the viewport, or `None` if it no longer exists.
    fn anchor_viewport_top(&self, handle: &Self::Handle) -> Option<f64>;
}

/// The scrollable viewport.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;

    fn scroll_to(&mut self, offset: f64);

    /// The tracked container's bottom edge relative to the viewport.
    fn container_bottom(&self) -> f64;
}

/// Handle for a hash-change subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle for a recurring frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// URL hash and history access.
pub trait History {
    /// The current hash fragment, with or without the leading `#`.
    fn hash(&self) -> String;

    /// Replaces the current history entry's hash with `#id`.
    fn replace_hash(&mut self, id: &str);

    /// Pushes a new history entry with hash `#id`.
    fn push_hash(&mut self, id: &str);

    fn set_scroll_restoration(&mut self, mode: ScrollRestoration);

    /// Starts delivering hash-change notifications to the component.
    fn subscribe_hash_change(&mut self) -> SubscriptionId;

    fn unsubscribe_hash_change(&mut self, subscription: SubscriptionId);
}

/// Recurring per-frame callbacks.
pub trait FrameScheduler {
    /// Starts calling the component's `on_frame` once per rendering frame.
    fn request_frames(&mut self) -> FrameId;

    fn cancel_frames(&mut self, frame: FrameId);
}

/// Everything the scrollspy needs from its environment.
pub trait Host: AnchorSource + Viewport + History + FrameScheduler {}

impl<T: AnchorSource + Viewport + History + FrameScheduler> Host for T {}
