use alloc::sync::Arc;

use crate::Rect;
use crate::window::RowWindow;

/// A callback fired when a window state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&RowWindow, bool) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `RowWindow::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::RowWindow`].
///
/// Cheap to clone: the `on_change` callback is stored in an `Arc`, so adapters
/// can tweak a few fields and call `RowWindow::set_options` without
/// reallocating closures.
pub struct WindowOptions {
    pub count: usize,
    /// Estimated height of every row in the scroll axis. Always >= 1.
    pub row_height: u32,
    /// Extra rows materialized beyond the strictly visible range on each side.
    pub overscan: usize,

    /// Enables/disables windowing. When disabled, query methods return empty
    /// results and a zero total size.
    pub enabled: bool,

    /// The initial viewport rectangle, applied before the first layout report.
    pub initial_rect: Option<Rect>,

    /// Initial scroll offset.
    pub initial_offset: InitialOffset,

    /// Optional callback fired when the window's internal state changes.
    ///
    /// The `bool` argument indicates whether a scroll is in progress.
    pub on_change: Option<OnChangeCallback>,

    /// Debounced fallback duration for resetting `is_scrolling` after the last
    /// scroll event (see `RowWindow::update_scrolling`).
    pub is_scrolling_reset_delay_ms: u64,
}

impl WindowOptions {
    /// Creates options for `count` rows of `row_height` pixels each.
    ///
    /// A zero `row_height` is bumped to 1 so offset → index arithmetic stays
    /// well-defined.
    pub fn new(count: usize, row_height: u32) -> Self {
        Self {
            count,
            row_height: row_height.max(1),
            overscan: 1,
            enabled: true,
            initial_rect: None,
            initial_offset: InitialOffset::default(),
            on_change: None,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&RowWindow, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            row_height: self.row_height,
            overscan: self.overscan,
            enabled: self.enabled,
            initial_rect: self.initial_rect,
            initial_offset: self.initial_offset.clone(),
            on_change: self.on_change.clone(),
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
        }
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("row_height", &self.row_height)
            .field("overscan", &self.overscan)
            .field("enabled", &self.enabled)
            .field("initial_rect", &self.initial_rect)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
