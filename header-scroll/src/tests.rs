use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

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

    fn gen_f32(&mut self, start: f32, end: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        start + (end - start) * unit
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4
}

fn collapsing() -> HeaderScrollOptions {
    HeaderScrollOptions::new()
        .with_heights(150.0, 350.0)
        .with_allows_collapse(true)
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    (calls, move || {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn defaults_match_documented_values() {
    let o = HeaderScrollOptions::default();
    assert_eq!(o.min_height, 150.0);
    assert_eq!(o.max_height, 350.0);
    assert!(!o.allows_collapse);
    assert!(!o.allows_growth);
    assert!(!o.allows_snap);
    assert!(o.shows_indicators);
    assert!(!o.has_refresh());
    assert!(o.validate().is_ok());
}

#[test]
fn inverted_heights_are_rejected_at_construction() {
    let err = HeaderScroll::new(HeaderScrollOptions::new().with_heights(400.0, 350.0)).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvertedHeights {
            min_height: 400.0,
            max_height: 350.0
        }
    );
}

#[test]
fn negative_and_non_finite_heights_are_rejected() {
    assert!(matches!(
        HeaderScrollOptions::new().with_heights(-1.0, 350.0).validate(),
        Err(ConfigError::NegativeHeight { .. })
    ));
    assert!(matches!(
        HeaderScrollOptions::new()
            .with_max_height(f32::INFINITY)
            .validate(),
        Err(ConfigError::NonFiniteHeight { .. })
    ));
    assert!(matches!(
        HeaderScrollOptions::new().with_min_height(f32::NAN).validate(),
        Err(ConfigError::NonFiniteHeight { .. })
    ));
}

#[test]
fn set_options_keeps_previous_options_on_error() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    assert!(h.update_options(|o| o.min_height = 500.0).is_err());
    assert_eq!(h.options().min_height, 150.0);

    h.update_options(|o| o.allows_snap = true).unwrap();
    assert!(h.options().allows_snap);
}

#[test]
fn collapsing_geometry_at_reference_offsets() {
    let o = collapsing();

    let g = HeaderGeometry::compute(0.0, &o);
    assert_eq!(g.header_height, 350.0);
    assert_eq!(g.collapse_progress, 0.0);
    assert_eq!(g.header_offset, 0.0);

    // Scrolled up by 100.
    let g = HeaderGeometry::compute(100.0, &o);
    assert_eq!(g.scroll_offset, -100.0);
    assert_eq!(g.header_height, 250.0);
    assert!(approx(g.collapse_progress, 0.5));
    assert_eq!(g.header_offset, 100.0);

    let g = HeaderGeometry::compute(200.0, &o);
    assert_eq!(g.header_height, 150.0);
    assert_eq!(g.collapse_progress, 1.0);

    let g = HeaderGeometry::compute(300.0, &o);
    assert_eq!(g.header_height, 150.0);
    assert_eq!(g.collapse_progress, 1.0);
    // Fully collapsed header stays pinned while the content keeps scrolling.
    assert_eq!(g.header_offset, 300.0);
}

#[test]
fn fixed_header_slides_out_until_min_height_remains() {
    let o = HeaderScrollOptions::new().with_heights(150.0, 350.0);

    for raw in [0.0f32, 50.0, 199.0] {
        let g = HeaderGeometry::compute(raw, &o);
        assert_eq!(g.header_height, 350.0);
        assert_eq!(g.header_offset, 0.0);
        assert_eq!(g.collapse_progress, 0.0);
    }

    // Past extra space the header offset follows the excess scroll.
    let g = HeaderGeometry::compute(260.0, &o);
    assert_eq!(g.header_height, 350.0);
    assert!(approx(g.header_offset, 60.0));
}

#[test]
fn pulled_down_header_offset_tracks_pull() {
    let o = collapsing();
    let g = HeaderGeometry::compute(-40.0, &o);
    assert_eq!(g.scroll_offset, 40.0);
    assert_eq!(g.header_offset, -40.0);
    // Without growth the height never exceeds max_height.
    assert_eq!(g.header_height, 350.0);
    assert_eq!(g.header_scale, 1.0);
}

#[test]
fn growth_scales_only_past_damped_threshold() {
    let o = collapsing().with_allows_growth(true);

    let g = HeaderGeometry::compute(-20.0, &o);
    assert_eq!(g.header_height, 370.0);
    // 370 / 350 * 0.9 < 1
    assert_eq!(g.header_scale, 1.0);

    let g = HeaderGeometry::compute(-350.0, &o);
    assert_eq!(g.header_height, 700.0);
    assert!(approx(g.header_scale, 1.8));
    assert_eq!(g.collapse_progress, 0.0);
}

#[test]
fn pull_to_refresh_scale_ignores_growth_flag() {
    let o = collapsing();
    assert_eq!(geometry::pull_to_refresh_scale(0.0, &o), 1.0);
    assert!(approx(geometry::pull_to_refresh_scale(350.0, &o), 1.8));
    assert_eq!(geometry::pull_to_refresh_scale(-100.0, &o), 1.0);
}

#[test]
fn equal_heights_do_not_divide_by_zero() {
    let o = HeaderScrollOptions::new()
        .with_heights(200.0, 200.0)
        .with_allows_collapse(true);
    for raw in [-50.0f32, 0.0, 50.0] {
        let g = HeaderGeometry::compute(raw, &o);
        assert_eq!(g.header_height, 200.0);
        assert_eq!(g.collapse_progress, 0.0);
        assert!(g.header_offset.is_finite());
    }

    let zero = HeaderScrollOptions::new()
        .with_heights(0.0, 0.0)
        .with_allows_growth(true);
    let g = HeaderGeometry::compute(-10.0, &zero);
    assert_eq!(g.header_scale, 1.0);
    assert_eq!(geometry::pull_to_refresh_scale(10.0, &zero), 1.0);
}

#[test]
fn height_floor_and_progress_bounds_hold_for_random_configs() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..500 {
        let min_height = rng.gen_f32(0.0, 300.0);
        let max_height = min_height + rng.gen_f32(0.0, 300.0);
        let o = HeaderScrollOptions::new()
            .with_heights(min_height, max_height)
            .with_allows_collapse(rng.gen_bool())
            .with_allows_growth(rng.gen_bool());
        let raw = rng.gen_f32(-1000.0, 1000.0);
        let g = HeaderGeometry::compute(raw, &o);

        assert!(g.header_height >= min_height);
        if !o.allows_growth {
            assert!(g.header_height <= max_height);
        }
        assert!((0.0..=1.0).contains(&g.collapse_progress));
        assert!(g.header_scale >= 1.0);
    }
}

#[test]
fn progress_is_monotonic_in_height() {
    let o = collapsing();
    let mut last = f32::INFINITY;
    let mut height = 100.0f32;
    while height <= 400.0 {
        let p = geometry::collapse_progress(height, &o);
        assert!(p <= last, "progress increased at height={height}");
        last = p;
        height += 2.5;
    }
    assert_eq!(geometry::collapse_progress(350.0, &o), 0.0);
    assert_eq!(geometry::collapse_progress(150.0, &o), 1.0);
}

#[test]
fn header_offset_is_continuous_at_branch_edges() {
    let mut rng = Lcg::new(42);
    for _ in 0..100 {
        let min_height = rng.gen_f32(0.0, 200.0);
        let max_height = min_height + rng.gen_f32(1.0, 200.0);
        let o = HeaderScrollOptions::new()
            .with_heights(min_height, max_height)
            .with_allows_collapse(rng.gen_bool())
            .with_allows_growth(rng.gen_bool());
        let extra = o.extra_space();
        for edge in [-extra, 0.0] {
            let below = geometry::header_offset(edge - 1e-3, &o);
            let above = geometry::header_offset(edge + 1e-3, &o);
            assert!((below - above).abs() < 1e-2, "jump at {edge}: {below} vs {above}");
        }
    }
}

#[test]
fn header_layer_offset_subtracts_layout_origin() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    h.on_scroll(-30.0);
    assert_eq!(h.header_layer_offset(10.0), 20.0);
}

#[test]
fn snap_policy_picks_nearest_end() {
    assert_eq!(snap_target(50.0, 200.0), 0.0);
    assert_eq!(snap_target(-30.0, 200.0), 0.0);
    assert_eq!(snap_target(100.0, 200.0), 200.0);
    assert_eq!(snap_target(150.0, 200.0), 200.0);
    assert_eq!(snap_target(320.0, 200.0), 320.0);
    // Applying the policy to its own result is stable.
    for raw in [0.0f32, 50.0, 150.0, 320.0] {
        let t = snap_target(raw, 200.0);
        assert_eq!(snap_target(t, 200.0), t);
    }
}

#[test]
fn scroll_is_published_only_on_flush() {
    let seen = Arc::new(Mutex::new(Vec::<Published>::new()));
    let sink = Arc::clone(&seen);
    let mut h = HeaderScroll::new(collapsing().with_on_change(Some(move |p: &Published| {
        sink.lock().unwrap().push(*p);
    })))
    .unwrap();

    h.on_scroll(100.0);
    assert!(h.has_pending_update());
    assert_eq!(h.collapse_progress(), 0.0);
    assert!(seen.lock().unwrap().is_empty());
    // Geometry is computed on demand, even before the flush.
    assert_eq!(h.geometry().header_height, 250.0);

    assert!(h.flush());
    assert!(!h.has_pending_update());
    assert!(approx(h.collapse_progress(), 0.5));
    assert_eq!(h.published().scroll_offset, -100.0);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(approx(seen[0].collapse_progress, 0.5));
}

#[test]
fn flush_skips_unchanged_values() {
    let (calls, _) = counter();
    let c = Arc::clone(&calls);
    let mut h = HeaderScroll::new(collapsing().with_on_change(Some(move |_: &Published| {
        c.fetch_add(1, Ordering::SeqCst);
    })))
    .unwrap();

    assert!(!h.flush());
    h.on_scroll(300.0);
    assert!(h.flush());
    // Still fully collapsed: progress is the same but the offset moved.
    h.on_scroll(320.0);
    assert!(h.flush());
    h.on_scroll(320.0);
    assert!(!h.flush());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn non_finite_offsets_are_ignored() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    h.on_scroll(f32::NAN);
    h.on_content_frame(f32::INFINITY);
    assert!(!h.has_pending_update());
    assert_eq!(h.raw_offset(), 0.0);
    assert_eq!(h.content_top(), 0.0);
}

#[test]
fn batch_update_coalesces_notifications() {
    let (calls, _) = counter();
    let c = Arc::clone(&calls);
    let mut h = HeaderScroll::new(collapsing().with_on_change(Some(move |_: &Published| {
        c.fetch_add(1, Ordering::SeqCst);
    })))
    .unwrap();

    h.batch_update(|h| {
        h.on_scroll(50.0);
        h.flush();
        h.on_scroll(100.0);
        h.flush();
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(approx(h.collapse_progress(), 0.5));
}

#[test]
fn drag_begin_is_inferred_from_dragging_flag() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    h.on_scroll_event(10.0, false);
    assert_eq!(h.phase(), GesturePhase::Idle);
    h.on_scroll_event(20.0, true);
    assert_eq!(h.phase(), GesturePhase::Dragging);
    assert!(h.is_dragging());
    h.on_drag_end();
    assert_eq!(h.phase(), GesturePhase::Idle);
}

#[test]
fn pull_past_threshold_triggers_refresh_once() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(collapsing().with_on_refresh(Some(on_refresh))).unwrap();

    h.on_drag_begin();
    h.on_scroll(-30.0);
    h.on_content_frame(30.0);
    assert!(h.is_spinning_indicator_visible());
    assert_eq!(h.on_drag_end(), None);

    assert!(h.is_loading());
    assert!(!h.is_spinning_indicator_visible());
    assert_eq!(h.phase(), GesturePhase::RefreshTriggered);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Pulling again while loading does not re-trigger.
    h.on_drag_begin();
    h.on_content_frame(40.0);
    h.on_drag_end();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.phase(), GesturePhase::RefreshTriggered);

    // The caller completes; the next pull triggers again.
    h.set_is_loading(false);
    assert_eq!(h.phase(), GesturePhase::Idle);
    h.on_drag_begin();
    h.on_content_frame(25.0);
    h.on_drag_end();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn short_pull_does_not_refresh() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(collapsing().with_on_refresh(Some(on_refresh))).unwrap();

    h.on_drag_begin();
    h.on_content_frame(REFRESH_THRESHOLD);
    assert!(!h.is_spinning_indicator_visible());
    h.on_drag_end();
    assert!(!h.is_loading());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn spinner_shows_without_refresh_callback_but_nothing_fires() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    h.on_drag_begin();
    h.on_content_frame(50.0);
    assert!(h.is_spinning_indicator_visible());
    // Dropping back under the threshold keeps the spinner until drag end.
    h.on_content_frame(5.0);
    assert!(h.is_spinning_indicator_visible());
    h.on_drag_end();
    assert!(!h.is_spinning_indicator_visible());
    assert!(!h.is_loading());
}

#[test]
fn drag_end_snaps_when_enabled() {
    let mut h = HeaderScroll::new(collapsing().with_allows_snap(true)).unwrap();

    h.on_drag_begin();
    h.on_scroll(50.0);
    let cmd = h.on_drag_end().unwrap();
    assert_eq!(
        cmd,
        ScrollCommand {
            offset: 0.0,
            animated: true,
            reason: CommandReason::Snap
        }
    );
    assert_eq!(h.phase(), GesturePhase::SnappingBack);
    h.finish_snap();
    assert_eq!(h.phase(), GesturePhase::Idle);

    h.on_drag_begin();
    h.on_scroll(150.0);
    assert_eq!(h.on_drag_end().unwrap().offset, 200.0);
}

#[test]
fn refresh_takes_priority_over_snap() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(
        collapsing()
            .with_allows_snap(true)
            .with_on_refresh(Some(on_refresh)),
    )
    .unwrap();

    h.on_drag_begin();
    h.on_scroll(-60.0);
    h.on_content_frame(60.0);
    assert_eq!(h.on_drag_end(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn drag_end_without_snap_settles_idle() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    h.on_drag_begin();
    h.on_scroll(120.0);
    assert_eq!(h.on_drag_end(), None);
    assert_eq!(h.phase(), GesturePhase::Idle);
}

#[test]
fn external_loading_flag_does_not_call_refresh() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(collapsing().with_on_refresh(Some(on_refresh))).unwrap();
    h.set_is_loading(true);
    assert_eq!(h.phase(), GesturePhase::RefreshTriggered);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    h.set_is_loading(false);
    assert_eq!(h.phase(), GesturePhase::Idle);
}

#[test]
fn scroll_to_top_is_one_shot() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    let cmd = h.set_scroll_to_top(true).unwrap();
    assert_eq!(cmd.offset, 200.0);
    assert!(cmd.animated);
    assert_eq!(cmd.reason, CommandReason::ScrollToTop);

    assert_eq!(h.set_scroll_to_top(false), None);
    assert_eq!(h.set_scroll_to_top(false), None);
    // Each new rising edge yields one more command.
    assert_eq!(h.set_scroll_to_top(true), Some(cmd));
}

#[test]
fn drag_end_snaps_during_open_refresh_session() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(
        collapsing()
            .with_allows_snap(true)
            .with_on_refresh(Some(on_refresh)),
    )
    .unwrap();
    h.set_is_loading(true);

    h.on_drag_begin();
    h.on_scroll(120.0);
    h.on_content_frame(0.0);
    let cmd = h.on_drag_end().unwrap();
    assert_eq!(cmd.offset, 200.0);
    assert_eq!(cmd.reason, CommandReason::Snap);
    assert_eq!(h.phase(), GesturePhase::SnappingBack);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // The session is still open once the snap settles.
    h.finish_snap();
    assert_eq!(h.phase(), GesturePhase::RefreshTriggered);
    assert!(h.is_loading());

    h.set_is_loading(false);
    assert_eq!(h.phase(), GesturePhase::Idle);
}

#[test]
fn pull_while_loading_snaps_instead_of_refreshing_again() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(
        collapsing()
            .with_allows_snap(true)
            .with_on_refresh(Some(on_refresh)),
    )
    .unwrap();

    h.on_drag_begin();
    h.on_scroll(-40.0);
    h.on_content_frame(40.0);
    assert_eq!(h.on_drag_end(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    h.on_drag_begin();
    h.on_scroll(-40.0);
    h.on_content_frame(40.0);
    assert_eq!(h.on_drag_end().unwrap().offset, 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Loading ends mid-snap: the snap settles straight to idle.
    h.set_is_loading(false);
    h.finish_snap();
    assert_eq!(h.phase(), GesturePhase::Idle);
}

#[test]
fn spinner_rises_without_drag_begin() {
    let mut h = HeaderScroll::new(collapsing()).unwrap();
    h.on_scroll(-10.0);
    h.on_content_frame(10.0);
    assert!(!h.is_spinning_indicator_visible());
    h.on_scroll(-40.0);
    h.on_content_frame(40.0);
    assert_eq!(h.phase(), GesturePhase::Idle);
    assert!(h.is_spinning_indicator_visible());
    h.on_drag_end();
    assert!(!h.is_spinning_indicator_visible());
}

#[test]
fn settling_snap_does_not_raise_spinner() {
    let mut h = HeaderScroll::new(collapsing().with_allows_snap(true)).unwrap();
    h.on_drag_begin();
    h.on_scroll(-30.0);
    h.on_content_frame(30.0);
    assert!(h.on_drag_end().is_some());
    assert_eq!(h.phase(), GesturePhase::SnappingBack);

    h.on_content_frame(25.0);
    assert!(!h.is_spinning_indicator_visible());
}

#[test]
fn drag_end_consumes_content_frame() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(collapsing().with_on_refresh(Some(on_refresh))).unwrap();

    h.on_drag_begin();
    h.on_content_frame(50.0);
    h.on_drag_end();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.content_top(), 0.0);

    h.set_is_loading(false);
    // A drag that reports no frame is not a pull.
    h.on_drag_begin();
    h.on_drag_end();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!h.is_loading());
}

#[test]
fn state_round_trips_without_callbacks() {
    let (calls, on_refresh) = counter();
    let mut h = HeaderScroll::new(collapsing().with_on_refresh(Some(on_refresh))).unwrap();
    h.on_scroll(80.0);
    h.set_is_loading(true);
    let state = h.state();
    assert_eq!(
        state,
        HeaderState {
            raw_offset: 80.0,
            is_loading: true
        }
    );

    let mut restored = HeaderScroll::new(collapsing()).unwrap();
    restored.restore_state(state);
    assert!(restored.is_loading());
    assert!(restored.flush());
    assert!(approx(restored.collapse_progress(), 0.4));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
