use alloc::string::String;

/// The result of the last tracking evaluation.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackingState {
    /// Id of the anchor whose section contains the trigger line.
    pub current: Option<String>,
    /// Whether the trigger line sits within 1px of the current anchor's own offset.
    pub at_top: bool,
}

impl TrackingState {
    pub fn is_current(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }
}

/// How the URL hash fragment follows navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashMode {
    /// The hash is neither read nor written.
    #[default]
    Off,
    /// Hash changes drive transitions; transitions replace the current history entry.
    Replace,
    /// Like `Replace`, but navigation clicks push a new history entry.
    Push,
}

impl HashMode {
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }

    /// The history operation used when a transition updates the hash.
    ///
    /// `active` is true for user-initiated navigation (nav clicks).
    pub fn history_op(self, active: bool) -> Option<HistoryOp> {
        match self {
            Self::Off => None,
            Self::Push if active => Some(HistoryOp::Push),
            Self::Replace | Self::Push => Some(HistoryOp::Replace),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HistoryOp {
    Replace,
    Push,
}

/// The host's native scroll restoration behavior on history traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollRestoration {
    #[default]
    Auto,
    Manual,
}

/// Geometry handed to the anchor-top function.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorGeometry {
    /// The anchor element's top edge relative to the viewport.
    pub viewport_top: f64,
    /// The document's current vertical scroll offset.
    pub scroll_offset: f64,
}
