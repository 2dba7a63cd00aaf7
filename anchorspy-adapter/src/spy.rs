use alloc::vec::Vec;

use anchorspy::{
    Anchor, AnchorGeometry, AnchorSet, HistoryOp, ScrollTracker, SpyOptions, TrackingState,
    TransitionRequest,
};

use crate::{AnchorSource, FrameId, HashSync, Host, NavModel, anchor_classes, fragment_to_id};

/// Identity of the tracked content.
///
/// Anchors are rediscovered only when the host reports a different id, i.e. when the content
/// subtree was replaced rather than merely re-rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Mounted,
    Destroyed,
}

/// A host-driven scrollspy component.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `mount` once, then `set_content` whenever the tracked content is replaced
/// - `on_frame(now_ms)` from the frame callback requested at mount
/// - `on_nav_click` / `on_hash_change` from the corresponding UI events
/// - `destroy` on teardown, which releases the frame and hash subscriptions
///
/// Rendering reads `nav()` and `anchor_classes()`.
pub struct ScrollSpy<S: AnchorSource> {
    options: SpyOptions,
    anchors: AnchorSet,
    handles: Vec<S::Handle>,
    content: Option<ContentId>,
    tracker: ScrollTracker,
    transition: Option<TransitionRequest>,
    hash: HashSync,
    frames: Option<FrameId>,
    lifecycle: Lifecycle,
}

impl<S: Host> ScrollSpy<S> {
    pub fn new(options: SpyOptions) -> Self {
        Self {
            options,
            anchors: AnchorSet::default(),
            handles: Vec::new(),
            content: None,
            tracker: ScrollTracker::new(),
            transition: None,
            hash: HashSync::Disconnected,
            frames: None,
            lifecycle: Lifecycle::Idle,
        }
    }

    pub fn options(&self) -> &SpyOptions {
        &self.options
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn tracking(&self) -> &TrackingState {
        self.tracker.state()
    }

    /// The in-flight transition, if any.
    pub fn transition(&self) -> Option<&TransitionRequest> {
        self.transition.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn hash_sync(&self) -> HashSync {
        self.hash
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Starts frame polling, discovers anchors and connects the hash binding if enabled.
    ///
    /// Mounting twice, or after `destroy`, does nothing.
    pub fn mount(&mut self, host: &mut S, content: ContentId, now_ms: f64) {
        if self.lifecycle != Lifecycle::Idle {
            awarn!("ScrollSpy::mount called on a mounted or destroyed component");
            return;
        }
        self.frames = Some(host.request_frames());
        self.lifecycle = Lifecycle::Mounted;
        self.discover(host, content);
        self.sync_hash(host, now_ms);
    }

    /// Rediscovers anchors if `content` differs from the tracked content.
    ///
    /// Returns `true` when the anchor set was rebuilt.
    pub fn set_content(&mut self, host: &mut S, content: ContentId) -> bool {
        if !self.is_mounted() || self.content == Some(content) {
            return false;
        }
        self.discover(host, content);
        true
    }

    /// Replaces the options, connecting or disconnecting the hash binding as needed.
    pub fn set_options(&mut self, host: &mut S, options: SpyOptions, now_ms: f64) {
        self.options = options;
        self.tracker.invalidate();
        adebug!(hash = ?self.options.hash, "ScrollSpy::set_options");
        if self.is_mounted() {
            self.sync_hash(host, now_ms);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, host: &mut S, now_ms: f64, f: impl FnOnce(&mut SpyOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(host, next, now_ms);
    }

    /// Per-frame work: advances the active transition, then re-evaluates tracking if the scroll
    /// offset moved.
    ///
    /// Returns the new tracking state when it changed.
    pub fn on_frame(&mut self, host: &mut S, now_ms: f64) -> Option<TrackingState> {
        if !self.is_mounted() {
            return None;
        }

        let finished = self.transition.as_ref().is_some_and(|transition| {
            if let Some(offset) = transition.sample(now_ms) {
                host.scroll_to(offset);
            }
            transition.is_done(now_ms)
        });
        if finished {
            atrace!("transition finished");
            self.transition = None;
        }

        let scroll = host.scroll_offset();
        let Self {
            tracker,
            anchors,
            handles,
            options,
            ..
        } = self;
        tracker
            .poll(anchors, scroll, options.pixel_offset, || {
                measure(host, handles, options, scroll)
            })
            .cloned()
    }

    /// Starts an animated scroll to the anchor named `id`.
    ///
    /// `active` marks user-initiated navigation, which pushes a history entry when the hash mode
    /// is `Push`. Any in-flight transition is superseded.
    ///
    /// Returns `false` (and does nothing) for unknown or empty ids.
    pub fn scroll_to(&mut self, host: &mut S, id: &str, now_ms: f64, active: bool) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let Some(index) = self.anchors.index_of(id) else {
            atrace!(id, "scroll_to: unknown anchor");
            return false;
        };
        let before = host.scroll_offset();
        let Some(viewport_top) = host.anchor_viewport_top(&self.handles[index]) else {
            awarn!(id, "scroll_to: anchor element vanished");
            return false;
        };

        let history = self.options.hash.history_op(active);
        match history {
            Some(HistoryOp::Push) => host.push_hash(id),
            Some(HistoryOp::Replace) => host.replace_hash(id),
            None => {}
        }

        let anchor_offset = (self.options.anchor_top)(AnchorGeometry {
            viewport_top,
            scroll_offset: before,
        });
        let request =
            TransitionRequest::plan(id, before, anchor_offset, now_ms, history, &self.options);
        adebug!(
            id,
            from = request.from(),
            to = request.to(),
            duration_ms = request.duration_ms(),
            superseded = self.transition.is_some(),
            "scroll transition started"
        );
        self.transition = Some(request);
        true
    }

    /// Handles a click on the navigation entry for `id`.
    ///
    /// Returns `true` when the host should prevent the default link navigation.
    pub fn on_nav_click(&mut self, host: &mut S, id: &str, now_ms: f64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.scroll_to(host, id, now_ms, true);
        true
    }

    /// Handles a hash-change notification.
    ///
    /// Returns `true` when a transition started and the host should suppress its native jump.
    /// Ignored while the hash binding is disconnected.
    pub fn on_hash_change(&mut self, host: &mut S, now_ms: f64) -> bool {
        if !self.hash.is_connected() {
            return false;
        }
        self.follow_hash(host, now_ms)
    }

    /// Stops frame polling and disconnects the hash binding.
    ///
    /// Afterwards every entry point is inert.
    pub fn destroy(&mut self, host: &mut S) {
        if let Some(frames) = self.frames.take() {
            host.cancel_frames(frames);
        }
        self.hash.disconnect(host);
        self.transition = None;
        self.lifecycle = Lifecycle::Destroyed;
        adebug!("ScrollSpy destroyed");
    }

    /// The navigation model for the current anchors and tracking state.
    pub fn nav(&self) -> NavModel {
        NavModel::build(&self.anchors, self.tracker.state(), &self.options)
    }

    /// Classes the host applies to the anchor element named `id`.
    pub fn anchor_classes(&self, id: &str) -> Vec<&str> {
        anchor_classes(id, self.tracker.state(), &self.options)
    }

    fn discover(&mut self, host: &mut S, content: ContentId) {
        let found = host.list_anchors();
        let mut anchors = Vec::with_capacity(found.len());
        self.handles.clear();
        for entry in found {
            if entry.id.is_empty() {
                awarn!("discover: skipping anchor with an empty name");
                continue;
            }
            anchors.push(
                Anchor::new(entry.id, entry.label).with_heading_level(entry.heading_level),
            );
            self.handles.push(entry.handle);
        }
        self.anchors = AnchorSet::new(anchors);
        self.content = Some(content);
        self.tracker.reset();
        adebug!(
            content = content.0,
            anchors = self.anchors.len(),
            "anchors discovered"
        );
    }

    fn sync_hash(&mut self, host: &mut S, now_ms: f64) {
        let enabled = self.options.hash.is_enabled();
        if enabled && !self.hash.is_connected() {
            self.follow_hash(host, now_ms);
            self.hash.connect(host);
        } else if !enabled && self.hash.is_connected() {
            self.hash.disconnect(host);
        }
    }

    fn follow_hash(&mut self, host: &mut S, now_ms: f64) -> bool {
        let hash = host.hash();
        let id = fragment_to_id(&hash);
        if id.is_empty() {
            return false;
        }
        self.scroll_to(host, &id, now_ms, false)
    }
}

impl<S: AnchorSource> core::fmt::Debug for ScrollSpy<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollSpy")
            .field("options", &self.options)
            .field("anchors", &self.anchors)
            .field("content", &self.content)
            .field("tracking", self.tracker.state())
            .field("transition", &self.transition)
            .field("hash", &self.hash)
            .field("frames", &self.frames)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

/// Anchor offsets in document order plus the container's end offset.
///
/// A vanished element takes the offset of the next present anchor (or the end offset), which
/// keeps the sequence ascending. On a tie the later anchor wins, so it is never current.
fn measure<S: Host>(
    host: &S,
    handles: &[S::Handle],
    options: &SpyOptions,
    scroll: f64,
) -> (Vec<f64>, f64) {
    let end = scroll + host.container_bottom();
    let mut offsets: Vec<f64> = handles
        .iter()
        .map(|handle| match host.anchor_viewport_top(handle) {
            Some(viewport_top) => (options.anchor_top)(AnchorGeometry {
                viewport_top,
                scroll_offset: scroll,
            }),
            None => f64::NAN,
        })
        .collect();

    let mut next = end;
    for offset in offsets.iter_mut().rev() {
        if offset.is_nan() {
            atrace!("measure: anchor element vanished");
            *offset = next;
        } else {
            next = *offset;
        }
    }
    (offsets, end)
}
