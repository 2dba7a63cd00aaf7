use alloc::string::String;
use alloc::sync::Arc;

use crate::{AnchorGeometry, Easing, HashMode};

/// Computes an anchor's document offset from its geometry.
pub type AnchorTopFn = Arc<dyn Fn(AnchorGeometry) -> f64 + Send + Sync>;

/// A transition duration or delay, in milliseconds.
#[derive(Clone)]
pub enum Timing {
    /// A fixed value.
    Value(f64),
    /// Computed from the scroll offsets before and after the transition.
    Computed(Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>),
}

impl Timing {
    pub fn resolve(&self, before: f64, after: f64) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Computed(f) => f(before, after),
        }
    }
}

impl core::fmt::Debug for Timing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Distance-proportional duration: `|before - after|^0.75 + 300` ms.
///
/// Short hops stay near the 300ms floor; long hops slow down sub-linearly.
pub fn default_duration(before: f64, after: f64) -> f64 {
    (before - after).abs().powf(0.75) + 300.0
}

/// The default anchor-top function: viewport-relative top plus the scroll offset.
pub fn default_anchor_top(geometry: AnchorGeometry) -> f64 {
    geometry.viewport_top + geometry.scroll_offset
}

/// Configuration for a scrollspy.
///
/// Callbacks are stored in `Arc`s so cloning and re-applying options is cheap.
pub struct SpyOptions {
    /// Whether the URL hash is read and written.
    pub hash: HashMode,

    /// Tag wrapping the navigation list, or `None` to render no navigation.
    pub nav: Option<String>,
    /// Tag wrapping the navigation and the tracked content.
    pub container: String,
    /// Passed through to the container.
    pub class_name: Option<String>,
    /// Passed through to the container.
    pub style: Option<String>,

    /// Class for the current anchor and its navigation entry.
    pub current_class: String,
    /// Class added to the current anchor while it sits at the trigger line.
    pub top_class: String,

    pub anchor_top: AnchorTopFn,

    pub duration: Timing,
    pub delay: Timing,
    pub easing: Easing,

    /// Distance in pixels between the viewport top and the trigger line.
    ///
    /// Transitions stop this far above an anchor, and tracking treats an anchor this far below
    /// the viewport top as reached.
    pub pixel_offset: f64,
}

impl Clone for SpyOptions {
    fn clone(&self) -> Self {
        Self {
            hash: self.hash,
            nav: self.nav.clone(),
            container: self.container.clone(),
            class_name: self.class_name.clone(),
            style: self.style.clone(),
            current_class: self.current_class.clone(),
            top_class: self.top_class.clone(),
            anchor_top: Arc::clone(&self.anchor_top),
            duration: self.duration.clone(),
            delay: self.delay.clone(),
            easing: self.easing,
            pixel_offset: self.pixel_offset,
        }
    }
}

impl Default for SpyOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SpyOptions {
    pub fn new() -> Self {
        Self {
            hash: HashMode::Off,
            nav: Some(String::from("nav")),
            container: String::from("div"),
            class_name: None,
            style: None,
            current_class: String::from("current"),
            top_class: String::from("top"),
            anchor_top: Arc::new(default_anchor_top),
            duration: Timing::Computed(Arc::new(default_duration)),
            delay: Timing::Value(0.0),
            easing: Easing::default(),
            pixel_offset: 0.0,
        }
    }

    pub fn with_hash(mut self, hash: HashMode) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_nav(mut self, nav: Option<impl Into<String>>) -> Self {
        self.nav = nav.map(Into::into);
        self
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    pub fn with_class_name(mut self, class_name: Option<impl Into<String>>) -> Self {
        self.class_name = class_name.map(Into::into);
        self
    }

    pub fn with_style(mut self, style: Option<impl Into<String>>) -> Self {
        self.style = style.map(Into::into);
        self
    }

    pub fn with_current_class(mut self, current_class: impl Into<String>) -> Self {
        self.current_class = current_class.into();
        self
    }

    pub fn with_top_class(mut self, top_class: impl Into<String>) -> Self {
        self.top_class = top_class.into();
        self
    }

    pub fn with_anchor_top(
        mut self,
        anchor_top: impl Fn(AnchorGeometry) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.anchor_top = Arc::new(anchor_top);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration = Timing::Value(duration_ms);
        self
    }

    pub fn with_duration_fn(
        mut self,
        duration: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.duration = Timing::Computed(Arc::new(duration));
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay = Timing::Value(delay_ms);
        self
    }

    pub fn with_delay_fn(
        mut self,
        delay: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.delay = Timing::Computed(Arc::new(delay));
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_pixel_offset(mut self, pixel_offset: f64) -> Self {
        self.pixel_offset = pixel_offset;
        self
    }
}

impl core::fmt::Debug for SpyOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpyOptions")
            .field("hash", &self.hash)
            .field("nav", &self.nav)
            .field("container", &self.container)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("current_class", &self.current_class)
            .field("top_class", &self.top_class)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("easing", &self.easing)
            .field("pixel_offset", &self.pixel_offset)
            .finish_non_exhaustive()
    }
}
