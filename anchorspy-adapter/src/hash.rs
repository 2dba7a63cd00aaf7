use alloc::borrow::Cow;

use anchorspy::ScrollRestoration;
use percent_encoding::percent_decode_str;

use crate::{History, SubscriptionId};

/// Connection state of the hash binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashSync {
    #[default]
    Disconnected,
    Connected { subscription: SubscriptionId },
}

impl HashSync {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Subscribes to hash changes and takes over scroll restoration.
    ///
    /// No-op when already connected.
    pub fn connect(&mut self, history: &mut impl History) {
        if self.is_connected() {
            return;
        }
        let subscription = history.subscribe_hash_change();
        history.set_scroll_restoration(ScrollRestoration::Manual);
        adebug!(subscription = subscription.0, "hash sync connected");
        *self = Self::Connected { subscription };
    }

    /// Releases the subscription and restores automatic scroll restoration.
    ///
    /// No-op when already disconnected.
    pub fn disconnect(&mut self, history: &mut impl History) {
        let Self::Connected { subscription } = *self else {
            return;
        };
        history.unsubscribe_hash_change(subscription);
        history.set_scroll_restoration(ScrollRestoration::Auto);
        adebug!(subscription = subscription.0, "hash sync disconnected");
        *self = Self::Disconnected;
    }
}

/// Turns a raw hash (`"#caf%C3%A9"`, `"café"`) into an anchor id (`"café"`).
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn fragment_to_id(hash: &str) -> Cow<'_, str> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    percent_decode_str(fragment).decode_utf8_lossy()
}
