use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::padding::{Padding, padding_for};
use crate::{Align, Rect, RowSlot, ScrollDirection, WindowOptions, WindowRange};

/// A headless scroll-window calculator for fixed-height rows.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your widget layer drives it by reporting viewport geometry and scroll
///   offsets.
/// - Materialized rows are exposed via zero-allocation iteration
///   (`for_each_slot`) plus `collect_*` conveniences.
///
/// All range math is arithmetic on the fixed row height, so every query is
/// O(1) in the row count and safe to run on every scroll event.
#[derive(Clone, Debug)]
pub struct RowWindow {
    options: WindowOptions,
    viewport_size: u32,
    scroll_offset: u64,
    scroll_rect: Rect,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl RowWindow {
    /// Creates a new window calculator from options.
    ///
    /// If `options.initial_rect` and/or `options.initial_offset` are set,
    /// those values are applied immediately.
    pub fn new(options: WindowOptions) -> Self {
        let scroll_rect = options.initial_rect.unwrap_or_default();
        let scroll_offset = options.initial_offset.resolve();
        rwdebug!(
            count = options.count,
            row_height = options.row_height,
            overscan = options.overscan,
            "RowWindow::new"
        );
        Self {
            viewport_size: scroll_rect.main,
            scroll_offset,
            scroll_rect,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WindowOptions) {
        let was_enabled = self.options.enabled;
        self.options = options;
        self.options.row_height = self.options.row_height.max(1);
        rwtrace!(
            count = self.options.count,
            enabled = self.options.enabled,
            overscan = self.options.overscan,
            "RowWindow::set_options"
        );

        if !self.options.enabled {
            self.reset_disabled();
        } else if !was_enabled {
            self.reset_to_initial();
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&RowWindow, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn reset_disabled(&mut self) {
        self.viewport_size = 0;
        self.scroll_offset = self.options.initial_offset.resolve();
        self.scroll_rect = Rect::default();
        self.is_scrolling = false;
        self.scroll_direction = None;
        self.last_scroll_event_ms = None;
    }

    fn reset_to_initial(&mut self) {
        self.scroll_offset = self.options.initial_offset.resolve();
        self.scroll_rect = self.options.initial_rect.unwrap_or_default();
        self.viewport_size = self.scroll_rect.main;
        self.is_scrolling = false;
        self.scroll_direction = None;
        self.last_scroll_event_ms = None;
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame an adapter updates the scroll rect, the scroll
    /// offset, and the scrolling flag together; without batching each setter
    /// would fire `on_change` separately.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.notify();
    }

    pub fn row_height(&self) -> u32 {
        self.options.row_height
    }

    pub fn set_row_height(&mut self, row_height: u32) {
        let row_height = row_height.max(1);
        if self.options.row_height == row_height {
            return;
        }
        self.options.row_height = row_height;
        self.notify();
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.reset_disabled();
        } else {
            self.reset_to_initial();
        }
        self.notify();
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Records a scroll event timestamp and marks the window as scrolling.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once the configured delay has elapsed since the
    /// last scroll event. Call this from a frame/timer tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.options.enabled || !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn scroll_rect(&self) -> Rect {
        self.scroll_rect
    }

    pub fn set_scroll_rect(&mut self, rect: Rect) {
        if self.scroll_rect == rect {
            return;
        }
        self.scroll_rect = rect;
        self.viewport_size = rect.main;
        self.notify();
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        if self.viewport_size == size && self.scroll_rect.main == size {
            return;
        }
        self.viewport_size = size;
        self.scroll_rect.main = size;
        self.notify();
    }

    /// Applies a viewport rect update from your UI layer as one coalesced
    /// notification.
    pub fn apply_viewport_event(&mut self, rect: Rect) {
        rwtrace!(main = rect.main, cross = rect.cross, "apply_viewport_event");
        self.batch_update(|w| {
            w.set_scroll_rect(rect);
        });
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag),
    /// and marks the window as scrolling.
    pub fn apply_scroll_offset_event(&mut self, offset: u64, now_ms: u64) {
        rwtrace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|w| {
            w.set_scroll_offset(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_offset_event`, but clamps the offset.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: u64, now_ms: u64) {
        rwtrace!(offset, now_ms, "apply_scroll_offset_event_clamped");
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Applies both viewport rect and scroll offset in a single coalesced
    /// update. The recommended entry point for adapters that receive scroll
    /// events along with updated geometry.
    pub fn apply_scroll_frame(&mut self, rect: Rect, scroll_offset: u64, now_ms: u64) {
        rwtrace!(
            rect_main = rect.main,
            rect_cross = rect.cross,
            scroll_offset,
            now_ms,
            "apply_scroll_frame"
        );
        self.batch_update(|w| {
            w.set_scroll_rect(rect);
            w.set_scroll_offset(scroll_offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Total scrollable track height implied by all rows, whether or not they
    /// are materialized.
    pub fn total_size(&self) -> u64 {
        if !self.options.enabled {
            return 0;
        }
        self.options.count as u64 * self.options.row_height as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        if !self.options.enabled {
            return self.options.initial_offset.resolve();
        }
        self.total_size().saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The overscanned window for the current scroll state.
    pub fn window(&self) -> WindowRange {
        self.window_for(self.scroll_offset, self.viewport_size)
    }

    /// The overscanned window for a given `scroll_offset`/`viewport_size`.
    ///
    /// The strictly visible range is expanded by `overscan` rows on each side
    /// and clamped to `[0, count]`.
    pub fn window_for(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        let mut range = self.visible_for(scroll_offset, viewport_size);
        if range.is_empty() {
            return range;
        }
        let overscan = self.options.overscan;
        range.start_index = range.start_index.saturating_sub(overscan);
        range.end_index = cmp::min(
            self.options.count,
            range.end_index.saturating_add(overscan),
        );
        range
    }

    /// The strictly visible range (no overscan) for the current scroll state.
    pub fn visible(&self) -> WindowRange {
        self.visible_for(self.scroll_offset, self.viewport_size)
    }

    /// The strictly visible range (no overscan): every row whose estimated
    /// bounding box intersects `[scroll_offset, scroll_offset + viewport)`.
    pub fn visible_for(&self, scroll_offset: u64, viewport_size: u32) -> WindowRange {
        let count = self.options.count;
        if !self.options.enabled || count == 0 || viewport_size == 0 {
            return WindowRange {
                start_index: 0,
                end_index: 0,
            };
        }

        let h = self.options.row_height as u64;
        let total = self.total_size();
        let view = viewport_size as u64;

        let offset = scroll_offset.min(total.saturating_sub(view));
        // total >= h >= 1 here, so both divisions index a real row.
        let last_visible = offset.saturating_add(view - 1).min(total - 1);

        let start = (offset / h) as usize;
        let end = (last_visible / h) as usize + 1;
        WindowRange {
            start_index: start.min(count),
            end_index: end.min(count),
        }
    }

    /// The row index whose bounding box contains `offset`, clamped to the last
    /// row for offsets past the end of the track.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        if !self.options.enabled || self.options.count == 0 {
            return None;
        }
        let i = (offset / self.options.row_height as u64) as usize;
        Some(i.min(self.options.count - 1))
    }

    pub fn row_start(&self, index: usize) -> Option<u64> {
        if !self.options.enabled {
            return None;
        }
        (index < self.options.count).then(|| index as u64 * self.options.row_height as u64)
    }

    pub fn row_end(&self, index: usize) -> Option<u64> {
        let start = self.row_start(index)?;
        Some(start.saturating_add(self.options.row_height as u64))
    }

    /// The slot for a row index. Callers must pass `index < count`.
    pub fn slot(&self, index: usize) -> RowSlot {
        debug_assert!(index < self.options.count, "slot index out of bounds");
        RowSlot {
            index,
            start: index as u64 * self.options.row_height as u64,
            size: self.options.row_height,
        }
    }

    pub fn for_each_slot(&self, f: impl FnMut(RowSlot)) {
        self.for_each_slot_for(self.scroll_offset, self.viewport_size, f);
    }

    /// Iterates the overscanned window's slots without allocating.
    pub fn for_each_slot_for(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
        mut f: impl FnMut(RowSlot),
    ) {
        let window = self.window_for(scroll_offset, viewport_size);
        let h = self.options.row_height;
        let mut start = window.start_index as u64 * h as u64;
        for index in window.start_index..window.end_index {
            f(RowSlot {
                index,
                start,
                size: h,
            });
            start = start.saturating_add(h as u64);
        }
    }

    /// Collects the overscanned window's slots into `out` (clears `out`
    /// first). Reuse the buffer across frames to avoid reallocation.
    pub fn collect_slots(&self, out: &mut Vec<RowSlot>) {
        self.collect_slots_for(self.scroll_offset, self.viewport_size, out);
    }

    pub fn collect_slots_for(
        &self,
        scroll_offset: u64,
        viewport_size: u32,
        out: &mut Vec<RowSlot>,
    ) {
        out.clear();
        self.for_each_slot_for(scroll_offset, viewport_size, |slot| out.push(slot));
    }

    /// The leading/trailing filler for the current window.
    pub fn padding(&self) -> Padding {
        self.padding_for(self.window())
    }

    /// The leading/trailing filler for a given window.
    pub fn padding_for(&self, window: WindowRange) -> Padding {
        padding_for(window, self.options.row_height, self.total_size())
    }

    /// Programmatically scrolls to a row (no animation).
    ///
    /// Sets the internal scroll offset to the computed (clamped) target and
    /// triggers `on_change`; does **not** mark the window as scrolling.
    /// Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if !self.options.enabled {
            return self.options.initial_offset.resolve();
        }
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let slot = self.slot(index);
        let view = self.viewport_size as u64;

        let target = match align {
            Align::Start => slot.start,
            Align::End => slot.end().saturating_sub(view),
            Align::Center => {
                let center = slot.start.saturating_add(slot.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if slot.start >= cur && slot.end() <= cur_end {
                    cur
                } else if slot.start < cur {
                    slot.start
                } else {
                    slot.end().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }
}
