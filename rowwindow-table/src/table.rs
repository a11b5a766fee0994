use rowwindow::{Align, Rect, RowWindow, WindowOptions};

use crate::bridge::{BridgePhase, ScrollChanged, ScrollEvent, ScrollSyncBridge, ScrollTelemetry};
use crate::columns::{Column, person_columns};
use crate::overlay::{OverlayFactory, OverlayOptions};
use crate::person::{Person, PersonGenerator};

/// Widget-level configuration, passed into the constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableOptions {
    /// Estimated height of every body row.
    pub row_height: u32,
    /// Extra rows materialized beyond the visible range on each side.
    pub overscan: usize,
    /// Options handed to the overlay-scrollbar primitive on attach.
    pub overlay: OverlayOptions,
}

impl TableOptions {
    pub fn new(row_height: u32) -> Self {
        Self {
            row_height,
            overscan: 5,
            overlay: OverlayOptions::default(),
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_overlay(mut self, overlay: OverlayOptions) -> Self {
        self.overlay = overlay;
        self
    }
}

/// One materialized body row: its index, estimated offsets, and cell text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedRow {
    pub index: usize,
    pub top: u64,
    pub height: u32,
    pub cells: Vec<String>,
}

/// What the embedding UI renders for the current frame: header cells, an
/// optional leading spacer, the windowed body rows, an optional trailing
/// spacer, and footer cells.
///
/// Spacers are present only when their size is > 0, so the scrollable track
/// always occupies exactly `total_size` and never gains zero-height filler
/// nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderModel {
    pub header: Vec<String>,
    pub top_spacer: Option<u64>,
    pub rows: Vec<RenderedRow>,
    pub bottom_spacer: Option<u64>,
    pub footer: Vec<String>,
    pub total_size: u64,
}

/// A virtualized table: an immutable row vector, a column set, the window
/// calculator, and the scroll-sync bridge for the overlay scrollbar.
///
/// All event handling is synchronous; each scroll/resize notification is
/// folded into the window state and the next `render_model` call reflects it.
pub struct VirtualTable<R, F: OverlayFactory> {
    rows: Vec<R>,
    columns: Vec<Column<R>>,
    window: RowWindow,
    bridge: ScrollSyncBridge<F>,
}

impl<F: OverlayFactory> VirtualTable<Person, F> {
    /// Builds a table over `count` synthetic person rows generated from
    /// `seed`, with the default person columns.
    pub fn with_people(count: usize, seed: u64, options: TableOptions, factory: F) -> Self {
        let rows = PersonGenerator::new(seed).take(count);
        Self::new(rows, person_columns(), options, factory)
    }
}

impl<R, F: OverlayFactory> VirtualTable<R, F> {
    pub fn new(rows: Vec<R>, columns: Vec<Column<R>>, options: TableOptions, factory: F) -> Self {
        let window = RowWindow::new(
            WindowOptions::new(rows.len(), options.row_height).with_overscan(options.overscan),
        );
        Self {
            rows,
            columns,
            window,
            bridge: ScrollSyncBridge::new(factory, options.overlay),
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn window(&self) -> &RowWindow {
        &self.window
    }

    pub fn telemetry(&self) -> ScrollTelemetry {
        self.bridge.telemetry()
    }

    pub fn bridge_phase(&self) -> BridgePhase {
        self.bridge.phase()
    }

    /// Attaches the overlay scrollbar. Call after the first render commit,
    /// once both elements exist; earlier calls are silent no-ops.
    pub fn mount(&mut self, host: Option<F::Element>, viewport: Option<F::Element>) {
        self.bridge.attach(host, viewport);
    }

    /// Releases the overlay scrollbar. Safe to call on every unmount path;
    /// repeat calls are no-ops.
    pub fn unmount(&mut self) {
        self.bridge.detach();
    }

    /// Reports a new viewport rect from the layout.
    pub fn on_resize(&mut self, rect: Rect) {
        self.window.apply_viewport_event(rect);
    }

    /// Reports a raw scroll event from the viewport element.
    pub fn on_scroll(&mut self, event: ScrollEvent) {
        let msg = self.bridge.on_scroll(event);
        self.apply_scroll_changed(msg);
    }

    /// Advances the debounce clock; call from a frame/timer tick.
    pub fn tick(&mut self, now_ms: u64) {
        self.window.update_scrolling(now_ms);
    }

    /// Scrolls so that `index` satisfies `align`, marking the window as
    /// scrolling. Returns the applied offset.
    pub fn scroll_to_row(&mut self, index: usize, align: Align, now_ms: u64) -> u64 {
        let offset = self.window.scroll_to_index_offset(index, align);
        self.window.apply_scroll_offset_event_clamped(offset, now_ms);
        self.window.scroll_offset()
    }

    // The single state-update function consuming bridge messages: the window
    // virtualizes the vertical axis, so only the y offset feeds it.
    fn apply_scroll_changed(&mut self, msg: ScrollChanged) {
        self.window
            .apply_scroll_offset_event_clamped(msg.y, msg.now_ms);
    }

    /// Maps the current window to what the UI should render.
    pub fn render_model(&self) -> RenderModel {
        let window = self.window.window();
        let padding = self.window.padding_for(window);

        let mut rows = Vec::with_capacity(window.len());
        self.window.for_each_slot(|slot| {
            let record = &self.rows[slot.index];
            rows.push(RenderedRow {
                index: slot.index,
                top: slot.start,
                height: slot.size,
                cells: self.columns.iter().map(|c| c.cell(record)).collect(),
            });
        });

        RenderModel {
            header: self.columns.iter().map(|c| c.header.clone()).collect(),
            top_spacer: padding.top_spacer(),
            rows,
            bottom_spacer: padding.bottom_spacer(),
            footer: self
                .columns
                .iter()
                .map(|c| c.footer.clone().unwrap_or_default())
                .collect(),
            total_size: self.window.total_size(),
        }
    }
}

impl<R, F: OverlayFactory> core::fmt::Debug for VirtualTable<R, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualTable")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns.len())
            .field("window", &self.window)
            .field("bridge", &self.bridge)
            .finish()
    }
}
