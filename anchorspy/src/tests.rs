use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn expected_index(offsets: &[f64], end: f64, trigger: f64) -> Option<usize> {
    let key = trigger + 1.0;
    if end <= key {
        return None;
    }
    offsets.iter().rposition(|&a| a <= key)
}

fn set(ids: &[&str]) -> AnchorSet {
    ids.iter().map(|id| Anchor::new(*id, id.to_uppercase())).collect()
}

#[test]
fn locate_matches_reference_model_randomized() {
    let mut rng = Lcg::new(0x5eed);
    for _case in 0..500 {
        let n = rng.gen_range_u64(0, 12) as usize;
        let mut offsets = Vec::with_capacity(n);
        let mut cur = rng.gen_range_u64(0, 200) as f64;
        for _ in 0..n {
            offsets.push(cur);
            cur += rng.gen_range_u64(1, 400) as f64;
            if rng.gen_bool() {
                cur += 0.5;
            }
        }
        let end = cur + rng.gen_range_u64(0, 600) as f64;
        let pixel_offset = if rng.gen_bool() {
            rng.gen_range_u64(0, 80) as f64
        } else {
            0.0
        };

        for _ in 0..20 {
            let scroll = rng.gen_range_u64(0, end as u64 + 100) as f64;
            let got = locate(&offsets, end, scroll, pixel_offset);
            let want = expected_index(&offsets, end, scroll + pixel_offset);
            assert_eq!(
                got.index, want,
                "offsets={offsets:?} end={end} scroll={scroll} px={pixel_offset}"
            );
            if got.index.is_none() {
                assert!(!got.at_top);
            }
        }
    }
}

#[test]
fn locate_before_first_anchor_is_none() {
    let offsets = [100.0, 300.0, 700.0];
    let got = locate(&offsets, 1000.0, 0.0, 0.0);
    assert_eq!(got, Located::default());

    // Key = 99 + 1 reaches the first anchor, which is still a full pixel away.
    let got = locate(&offsets, 1000.0, 99.0, 0.0);
    assert_eq!(got.index, Some(0));
    assert!(!got.at_top);

    let got = locate(&offsets, 1000.0, 100.0, 0.0);
    assert_eq!(got.index, Some(0));
    assert!(got.at_top);
}

#[test]
fn locate_counts_anchor_on_the_key_as_current() {
    let offsets = [0.0, 200.0, 400.0];
    assert_eq!(locate(&offsets, 900.0, 198.5, 0.0).index, Some(0));
    assert_eq!(locate(&offsets, 900.0, 199.0, 0.0).index, Some(1));
    assert_eq!(locate(&offsets, 900.0, 200.0, 0.0).index, Some(1));
    assert_eq!(locate(&offsets, 900.0, 399.0, 0.0).index, Some(2));
}

#[test]
fn locate_tail_belongs_to_last_anchor_until_container_end() {
    let offsets = [0.0, 200.0];
    assert_eq!(locate(&offsets, 800.0, 600.0, 0.0).index, Some(1));
    assert_eq!(locate(&offsets, 800.0, 798.0, 0.0).index, Some(1));
    assert_eq!(locate(&offsets, 800.0, 799.0, 0.0).index, None);
    assert_eq!(locate(&offsets, 800.0, 5000.0, 0.0).index, None);
}

#[test]
fn locate_with_no_anchors_is_none() {
    assert_eq!(locate(&[], 800.0, 10.0, 0.0), Located::default());
}

#[test]
fn locate_tolerates_out_of_order_offsets() {
    let offsets = [0.0, 500.0, 300.0, 700.0];
    for scroll in [0.0, 250.0, 350.0, 650.0, 900.0] {
        let got = locate(&offsets, 1000.0, scroll, 0.0);
        assert!(got.index.is_none_or(|i| i < offsets.len()), "scroll={scroll}");
    }
    assert_eq!(locate(&offsets, 1000.0, 800.0, 0.0).index, Some(3));
}

#[test]
fn at_top_uses_strict_one_pixel_tolerance() {
    let offsets = [100.0, 500.0];
    let end = 2000.0;

    assert!(locate(&offsets, end, 500.0, 0.0).at_top);
    assert!(locate(&offsets, end, 500.999, 0.0).at_top);
    assert!(!locate(&offsets, end, 501.0, 0.0).at_top);
    assert!(locate(&offsets, end, 499.001, 0.0).at_top);
    // 499.0 keys exactly onto the anchor (499 + 1), 1.0 away from it.
    let got = locate(&offsets, end, 499.0, 0.0);
    assert_eq!(got.index, Some(1));
    assert!(!got.at_top);
}

#[test]
fn pixel_offset_moves_the_trigger_line() {
    let offsets = [0.0, 300.0, 600.0];
    let got = locate(&offsets, 2000.0, 250.0, 50.0);
    assert_eq!(got.index, Some(1));
    assert!(got.at_top);

    let got = locate(&offsets, 2000.0, 250.0, 0.0);
    assert_eq!(got.index, Some(0));
    assert!(!got.at_top);
}

#[test]
fn tracker_only_reports_changes() {
    let anchors = set(&["a", "b", "c"]);
    let offsets = vec![0.0, 300.0, 600.0];
    let mut tracker = ScrollTracker::new();
    let mut measured = 0usize;

    let poll = |t: &mut ScrollTracker, scroll: f64, measured: &mut usize| {
        t.poll(&anchors, scroll, 0.0, || {
            *measured += 1;
            (offsets.clone(), 1200.0)
        })
        .cloned()
    };

    let first = poll(&mut tracker, 0.0, &mut measured).unwrap();
    assert_eq!(first.current.as_deref(), Some("a"));
    assert!(first.at_top);

    // Same offset: no measurement, no state.
    assert_eq!(poll(&mut tracker, 0.0, &mut measured), None);
    assert_eq!(measured, 1);

    // Moved, at_top flips.
    let moved = poll(&mut tracker, 10.0, &mut measured).unwrap();
    assert_eq!(moved.current.as_deref(), Some("a"));
    assert!(!moved.at_top);

    // Moved within the same section: measured, but nothing changed.
    assert_eq!(poll(&mut tracker, 20.0, &mut measured), None);
    assert_eq!(measured, 3);

    let next = poll(&mut tracker, 320.0, &mut measured).unwrap();
    assert_eq!(next.current.as_deref(), Some("b"));
    assert!(tracker.state().is_current("b"));
}

#[test]
fn tracker_reset_forces_a_fresh_check() {
    let anchors = set(&["a", "b"]);
    let mut tracker = ScrollTracker::new();
    tracker.poll(&anchors, 250.0, 0.0, || (vec![0.0, 200.0], 900.0));
    assert!(tracker.state().is_current("b"));

    tracker.reset();
    assert_eq!(tracker.state(), &TrackingState::default());
    assert!(tracker.needs_check(250.0));

    let rebuilt = set(&["x"]);
    let state = tracker
        .poll(&rebuilt, 250.0, 0.0, || (vec![100.0], 900.0))
        .cloned()
        .unwrap();
    assert_eq!(state.current.as_deref(), Some("x"));
}

#[test]
fn default_duration_is_distance_proportional_with_floor() {
    let d = default_duration(100.0, 500.0);
    assert!((d - (400f64.powf(0.75) + 300.0)).abs() < 1e-9);
    assert!((d - 389.443).abs() < 0.01, "{d}");
    assert_eq!(default_duration(42.0, 42.0), 300.0);
    assert_eq!(default_duration(500.0, 100.0), d);
}

#[test]
fn timing_resolves_fixed_and_computed() {
    assert_eq!(Timing::Value(120.0).resolve(0.0, 1000.0), 120.0);
    let t = Timing::Computed(alloc::sync::Arc::new(|a: f64, b: f64| (b - a) / 10.0));
    assert_eq!(t.resolve(0.0, 1000.0), 100.0);
}

#[test]
fn tween_honors_delay_and_lands_on_target() {
    let tween = Tween::new(100.0, 500.0, 1000.0, 50.0, 200.0, Easing::Linear);
    assert!(tween.is_pending(1049.0));
    assert!(!tween.is_pending(1050.0));
    assert_eq!(tween.sample(1050.0), 100.0);
    assert_eq!(tween.sample(1150.0), 300.0);
    assert!(!tween.is_done(1249.0));
    assert!(tween.is_done(1250.0));
    assert_eq!(tween.sample(1250.0), 500.0);
    assert_eq!(tween.sample(9999.0), 500.0);
}

#[test]
fn zero_duration_tween_jumps() {
    let tween = Tween::new(0.0, 80.0, 10.0, 0.0, 0.0, Easing::CubicInOut);
    assert!(tween.is_done(10.0));
    assert_eq!(tween.sample(10.0), 80.0);
}

#[test]
fn easings_are_monotonic_and_anchored() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::QuadInOut,
        Easing::CubicInOut,
        Easing::SinInOut,
    ] {
        assert!(easing.sample(0.0).abs() < 1e-12, "{easing:?}");
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-12, "{easing:?}");
        assert!((easing.sample(0.5) - 0.5).abs() < 1e-9, "{easing:?}");
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = easing.sample(i as f64 / 100.0);
            assert!(v + 1e-12 >= prev, "{easing:?} not monotonic at {i}");
            prev = v;
        }
    }
    assert_eq!(Easing::default(), Easing::CubicInOut);
}

#[test]
fn transition_plan_applies_pixel_offset_and_timing() {
    let options = SpyOptions::new().with_pixel_offset(20.0).with_delay_ms(15.0);
    let req = TransitionRequest::plan("b", 100.0, 520.0, 0.0, Some(HistoryOp::Push), &options);
    assert_eq!(req.target, "b");
    assert_eq!(req.from(), 100.0);
    assert_eq!(req.to(), 500.0);
    assert!((req.duration_ms() - default_duration(100.0, 500.0)).abs() < 1e-9);
    assert_eq!(req.delay_ms(), 15.0);
    assert_eq!(req.sample(10.0), None);
    assert_eq!(req.sample(15.0), Some(100.0));
    assert_eq!(req.history, Some(HistoryOp::Push));

    let fixed = SpyOptions::new().with_duration_fn(|_, _| 0.0);
    let req = TransitionRequest::plan("a", 0.0, 300.0, 5.0, None, &fixed);
    assert!(req.is_done(5.0));
    assert_eq!(req.sample(5.0), Some(300.0));
}

#[test]
fn hash_mode_picks_history_op() {
    assert_eq!(HashMode::Off.history_op(true), None);
    assert_eq!(HashMode::Replace.history_op(true), Some(HistoryOp::Replace));
    assert_eq!(HashMode::Push.history_op(false), Some(HistoryOp::Replace));
    assert_eq!(HashMode::Push.history_op(true), Some(HistoryOp::Push));
    assert!(!HashMode::default().is_enabled());
}

#[test]
fn anchor_set_keeps_document_order() {
    let anchors = set(&["intro", "setup", "usage"]);
    let ids: Vec<&str> = anchors.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["intro", "setup", "usage"]);
    assert_eq!(anchors.index_of("setup"), Some(1));
    assert_eq!(anchors.index_of(""), None);
    assert!(!anchors.contains("missing"));
}

#[test]
fn outline_nests_by_heading_level() {
    let anchors = AnchorSet::new(vec![
        Anchor::new("a", "A").with_heading_level(Some(1)),
        Anchor::new("a1", "A1").with_heading_level(Some(2)),
        Anchor::new("a1x", "A1x"),
        Anchor::new("a1y", "A1y"),
        Anchor::new("a2", "A2").with_heading_level(Some(2)),
        Anchor::new("b", "B").with_heading_level(Some(1)),
        Anchor::new("b3", "B3").with_heading_level(Some(3)),
        Anchor::new("b2", "B2").with_heading_level(Some(2)),
    ]);

    let outline = anchors.outline();
    let expected = vec![
        OutlineNode {
            index: 0,
            children: vec![
                OutlineNode {
                    index: 1,
                    children: vec![
                        OutlineNode {
                            index: 2,
                            children: vec![],
                        },
                        OutlineNode {
                            index: 3,
                            children: vec![],
                        },
                    ],
                },
                OutlineNode {
                    index: 4,
                    children: vec![],
                },
            ],
        },
        OutlineNode {
            index: 5,
            children: vec![
                OutlineNode {
                    index: 6,
                    children: vec![],
                },
                OutlineNode {
                    index: 7,
                    children: vec![],
                },
            ],
        },
    ];
    assert_eq!(outline, expected);
}

#[test]
fn outline_of_flat_headingless_anchors_is_flat() {
    let outline = set(&["a", "b", "c"]).outline();
    let indexes: Vec<usize> = outline.iter().map(|n| n.index).collect();
    assert_eq!(indexes, [0, 1, 2]);
    assert!(outline.iter().all(|n| n.children.is_empty()));
}
