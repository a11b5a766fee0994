use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

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

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }
}

#[test]
fn fixed_size_range_and_total() {
    let mut w = RowWindow::new(WindowOptions::new(100, 1));
    w.set_viewport_size(10);
    w.set_scroll_offset(0);
    assert_eq!(w.total_size(), 100);

    let r = w.window();
    assert_eq!(r.start_index, 0);
    // 10 visible + overscan(1) at end
    assert_eq!(r.end_index, 11);
}

#[test]
fn overscan_and_scroll() {
    let mut w = RowWindow::new(WindowOptions::new(100, 1));
    w.set_viewport_size(10);
    w.set_scroll_offset(50);
    let r = w.window();
    assert_eq!(r.start_index, 49);
    assert_eq!(r.end_index, 61);
}

#[test]
fn empty_dataset_has_empty_window_and_zero_padding() {
    let mut w = RowWindow::new(WindowOptions::new(0, 35));
    w.set_viewport_size(384);
    w.set_scroll_offset(0);

    assert_eq!(w.total_size(), 0);
    let window = w.window();
    assert!(window.is_empty());

    let padding = w.padding();
    assert_eq!(padding, Padding { top: 0, bottom: 0 });
    assert_eq!(padding.top_spacer(), None);
    assert_eq!(padding.bottom_spacer(), None);

    let mut slots = Vec::new();
    w.collect_slots(&mut slots);
    assert!(slots.is_empty());
}

#[test]
fn unlaid_out_viewport_yields_empty_window() {
    let w = RowWindow::new(WindowOptions::new(100, 35));
    // viewport_size == 0 before the first layout report
    assert!(w.window().is_empty());
    assert_eq!(w.padding(), Padding { top: 0, bottom: 0 });
}

#[test]
fn top_of_track_has_zero_top_padding() {
    let mut w = RowWindow::new(WindowOptions::new(100, 10).with_overscan(3));
    w.set_viewport_size(50);
    w.set_scroll_offset(0);

    let window = w.window();
    assert_eq!(window.start_index, 0);
    let padding = w.padding();
    assert_eq!(padding.top, 0);
    assert_eq!(padding.top_spacer(), None);
    assert!(padding.bottom_spacer().is_some());
}

#[test]
fn bottom_of_track_has_zero_bottom_padding() {
    let mut w = RowWindow::new(WindowOptions::new(100, 10).with_overscan(3));
    w.set_viewport_size(50);
    w.set_scroll_offset(w.max_scroll_offset());

    let window = w.window();
    assert_eq!(window.end_index, 100);
    let padding = w.padding();
    assert_eq!(padding.bottom, 0);
    assert_eq!(padding.bottom_spacer(), None);
    assert!(padding.top_spacer().is_some());
}

#[test]
fn padding_plus_rendered_rows_reproduces_total() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let count = rng.gen_range_usize(1, 20_000);
        let h = rng.gen_range_u32(1, 100);
        let overscan = rng.gen_range_usize(0, 10);
        let mut w = RowWindow::new(WindowOptions::new(count, h).with_overscan(overscan));
        w.set_viewport_size(rng.gen_range_u32(1, 2_000));
        // Deliberately include offsets past the end of the track.
        let offset = rng.gen_range_u64(0, w.total_size() + 1_000);
        w.set_scroll_offset(offset);

        let window = w.window();
        assert!(window.start_index <= window.end_index);
        assert!(window.end_index <= count);

        let padding = w.padding();
        let rendered = window.len() as u64 * h as u64;
        assert_eq!(
            padding.top + rendered + padding.bottom,
            w.total_size(),
            "count={count} h={h} overscan={overscan}"
        );
    }
}

#[test]
fn window_is_idempotent_for_identical_inputs() {
    let mut w = RowWindow::new(WindowOptions::new(10_000, 35).with_overscan(5));
    w.set_viewport_size(384);
    w.set_scroll_offset(123_456);

    let a = w.window_for(123_456, 384);
    let b = w.window_for(123_456, 384);
    assert_eq!(a, b);

    let mut slots_a = Vec::new();
    let mut slots_b = Vec::new();
    w.collect_slots_for(123_456, 384, &mut slots_a);
    w.collect_slots_for(123_456, 384, &mut slots_b);
    assert_eq!(slots_a, slots_b);
}

#[test]
fn person_table_scenario_dimensions() {
    // 10k rows of 35px in a 384px viewport with overscan 5.
    let mut w = RowWindow::new(WindowOptions::new(10_000, 35).with_overscan(5));
    w.set_viewport_size(384);
    assert_eq!(w.total_size(), 350_000);

    // Interior, row-aligned offset: 11 visible rows plus 5 overscan per side.
    w.set_scroll_offset(3_500);
    let window = w.window();
    assert_eq!(window.start_index, 95);
    assert_eq!(window.end_index, 116);
    assert_eq!(window.len(), 21);

    // Top of track: leading overscan is clamped away.
    w.set_scroll_offset(0);
    let window = w.window();
    assert_eq!(window.start_index, 0);
    assert_eq!(window.end_index, 16);

    // Bottom of track: trailing overscan is clamped away.
    w.set_scroll_offset(w.max_scroll_offset());
    let window = w.window();
    assert_eq!(window.end_index, 10_000);
    assert_eq!(w.padding().bottom, 0);
}

#[test]
fn slots_are_contiguous_at_fixed_height() {
    let mut w = RowWindow::new(WindowOptions::new(1_000, 35).with_overscan(2));
    w.set_viewport_size(384);
    w.set_scroll_offset(7_000);

    let mut slots = Vec::new();
    w.collect_slots(&mut slots);
    assert!(!slots.is_empty());
    for pair in slots.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start);
        assert_eq!(pair[1].index, pair[0].index + 1);
    }
    assert_eq!(slots[0].start, slots[0].index as u64 * 35);
}

#[test]
fn offsets_past_the_track_clamp_to_the_last_rows() {
    let mut w = RowWindow::new(WindowOptions::new(50, 10));
    w.set_viewport_size(100);
    w.set_scroll_offset(1_000_000);

    let window = w.window();
    assert_eq!(window.end_index, 50);
    assert!(window.start_index < window.end_index);

    assert_eq!(w.index_at_offset(1_000_000), Some(49));
    assert_eq!(w.clamp_scroll_offset(1_000_000), 400);
}

#[test]
fn scroll_direction_tracks_previous_offset() {
    let mut w = RowWindow::new(WindowOptions::new(100, 10));
    w.set_viewport_size(50);
    assert_eq!(w.scroll_direction(), None);

    w.set_scroll_offset(100);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));
    w.set_scroll_offset(40);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Backward));
    // Same offset keeps the previous direction.
    w.set_scroll_offset(40);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn scrolling_flag_debounces_after_reset_delay() {
    let mut w =
        RowWindow::new(WindowOptions::new(100, 10).with_is_scrolling_reset_delay_ms(150));
    w.set_viewport_size(50);

    w.apply_scroll_offset_event(120, 1_000);
    assert!(w.is_scrolling());

    w.update_scrolling(1_100);
    assert!(w.is_scrolling());
    w.update_scrolling(1_150);
    assert!(!w.is_scrolling());
    assert_eq!(w.scroll_direction(), None);
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls2 = Arc::clone(&calls);
    let mut w = RowWindow::new(WindowOptions::new(100, 10).with_on_change(Some(
        move |_w: &RowWindow, _scrolling: bool| {
            calls2.fetch_add(1, Ordering::SeqCst);
        },
    )));

    calls.store(0, Ordering::SeqCst);
    w.batch_update(|w| {
        w.set_viewport_size(50);
        w.set_scroll_offset(100);
        w.notify_scroll_event(0);
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    calls.store(0, Ordering::SeqCst);
    w.apply_scroll_frame(Rect { main: 60, cross: 80 }, 200, 16);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn on_change_reports_scrolling_state() {
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let last2 = Arc::clone(&last);
    let mut w = RowWindow::new(WindowOptions::new(100, 10).with_on_change(Some(
        move |_w: &RowWindow, scrolling: bool| {
            last2.store(scrolling as usize, Ordering::SeqCst);
        },
    )));
    w.set_viewport_size(50);

    w.apply_scroll_offset_event(30, 0);
    assert_eq!(last.load(Ordering::SeqCst), 1);

    w.update_scrolling(1_000);
    assert_eq!(last.load(Ordering::SeqCst), 0);
}

#[test]
fn disabled_window_returns_empty_results() {
    let mut w = RowWindow::new(WindowOptions::new(100, 10).with_enabled(false));
    w.set_viewport_size(50);
    assert_eq!(w.total_size(), 0);
    assert!(w.window().is_empty());
    assert_eq!(w.index_at_offset(5), None);
    assert_eq!(w.row_start(0), None);

    w.set_enabled(true);
    w.set_viewport_size(50);
    assert_eq!(w.total_size(), 1_000);
    assert!(!w.window().is_empty());
}

#[test]
fn scroll_to_index_clamps_to_track() {
    let mut w = RowWindow::new(WindowOptions::new(100, 10));
    w.set_viewport_size(50);

    assert_eq!(w.scroll_to_index_offset(0, Align::Start), 0);
    assert_eq!(w.scroll_to_index_offset(99, Align::Start), 950); // clamped to max
    assert_eq!(w.scroll_to_index_offset(99, Align::End), 950);
    assert_eq!(w.scroll_to_index(50, Align::Start), 500);
    assert_eq!(w.scroll_offset(), 500);

    // Auto keeps an already-visible row in place.
    assert_eq!(w.scroll_to_index_offset(52, Align::Auto), 500);
}

#[test]
fn initial_offset_provider_seeds_scroll_state() {
    let w = RowWindow::new(
        WindowOptions::new(1_000, 10)
            .with_initial_rect(Some(Rect { main: 50, cross: 80 }))
            .with_initial_offset_provider(|| 120),
    );
    assert_eq!(w.scroll_offset(), 120);
    assert_eq!(w.viewport_size(), 50);
}

#[test]
fn zero_row_height_is_bumped_to_one() {
    let opts = WindowOptions::new(10, 0);
    assert_eq!(opts.row_height, 1);
    let w = RowWindow::new(opts);
    assert_eq!(w.total_size(), 10);
}
