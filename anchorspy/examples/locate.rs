// Example: locating the current anchor while scrolling a page.
use anchorspy::{Anchor, AnchorSet, ScrollTracker, locate};

fn main() {
    let anchors: AnchorSet = ["intro", "install", "usage", "faq"]
        .into_iter()
        .map(|id| Anchor::new(id, id))
        .collect();
    let offsets = vec![0.0, 640.0, 1480.0, 2900.0];
    let end = 3600.0;

    // One-off query.
    let located = locate(&offsets, end, 700.0, 0.0);
    println!("scroll=700 -> {:?}", located);

    // Frame-polled tracking: only changes are reported.
    let mut tracker = ScrollTracker::new();
    for scroll in [0.0, 0.0, 320.0, 639.0, 640.0, 1500.0, 3599.0] {
        match tracker.poll(&anchors, scroll, 0.0, || (offsets.clone(), end)) {
            Some(state) => println!("scroll={scroll:>6} -> {state:?}"),
            None => println!("scroll={scroll:>6} -> (unchanged)"),
        }
    }
}
