// Example: driving a ScrollSpy from a simulated page at 60fps.
use anchorspy_adapter::anchorspy::{HashMode, ScrollRestoration, SpyOptions};
use anchorspy_adapter::{
    AnchorSource, ContentId, DiscoveredAnchor, FrameId, FrameScheduler, History, ScrollSpy,
    SubscriptionId, Viewport,
};

struct Page {
    sections: Vec<(&'static str, u8, f64)>,
    height: f64,
    scroll: f64,
    hash: String,
}

impl AnchorSource for Page {
    type Handle = usize;

    fn list_anchors(&self) -> Vec<DiscoveredAnchor<usize>> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, (id, level, _))| DiscoveredAnchor {
                id: id.to_string(),
                label: id.replace('-', " "),
                heading_level: Some(*level),
                handle: i,
            })
            .collect()
    }

    fn anchor_viewport_top(&self, handle: &usize) -> Option<f64> {
        self.sections.get(*handle).map(|(_, _, top)| top - self.scroll)
    }
}

impl Viewport for Page {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset;
    }

    fn container_bottom(&self) -> f64 {
        self.height - self.scroll
    }
}

impl History for Page {
    fn hash(&self) -> String {
        self.hash.clone()
    }

    fn replace_hash(&mut self, id: &str) {
        self.hash = format!("#{id}");
        println!("  history.replace #{id}");
    }

    fn push_hash(&mut self, id: &str) {
        self.hash = format!("#{id}");
        println!("  history.push #{id}");
    }

    fn set_scroll_restoration(&mut self, mode: ScrollRestoration) {
        println!("  scrollRestoration = {mode:?}");
    }

    fn subscribe_hash_change(&mut self) -> SubscriptionId {
        SubscriptionId(1)
    }

    fn unsubscribe_hash_change(&mut self, _subscription: SubscriptionId) {}
}

impl FrameScheduler for Page {
    fn request_frames(&mut self) -> FrameId {
        FrameId(1)
    }

    fn cancel_frames(&mut self, _frame: FrameId) {}
}

fn main() {
    let mut page = Page {
        sections: vec![
            ("getting-started", 1, 0.0),
            ("install", 2, 500.0),
            ("configure", 2, 1200.0),
            ("reference", 1, 2400.0),
        ],
        height: 4000.0,
        scroll: 0.0,
        hash: "#install".to_string(),
    };

    let options = SpyOptions::new()
        .with_hash(HashMode::Push)
        .with_pixel_offset(16.0);
    let mut spy = ScrollSpy::new(options);
    spy.mount(&mut page, ContentId(1), 0.0);

    let mut now_ms = 0.0;
    let mut tick = |spy: &mut ScrollSpy<Page>, page: &mut Page, frames: usize| {
        for _ in 0..frames {
            now_ms += 16.0;
            if let Some(state) = spy.on_frame(page, now_ms) {
                println!("t={now_ms}ms scroll={:.1} {:?}", page.scroll, state);
            }
        }
        now_ms
    };

    let now = tick(&mut spy, &mut page, 40);
    spy.on_nav_click(&mut page, "reference", now);
    tick(&mut spy, &mut page, 60);

    for item in spy.nav().items {
        println!("{} {}", if item.current { "*" } else { " " }, item.label);
    }

    spy.destroy(&mut page);
}
