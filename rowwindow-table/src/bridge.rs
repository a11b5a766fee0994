use crate::overlay::{OverlayFactory, OverlayInstance, OverlayOptions};

/// Last observed per-axis scroll offsets and the timestamps at which each
/// axis last moved.
///
/// Owned exclusively by the bridge; mutated only by its scroll handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTelemetry {
    pub scroll_x: u64,
    pub scroll_y: u64,
    pub last_scroll_x_ms: Option<u64>,
    pub last_scroll_y_ms: Option<u64>,
}

/// A raw scroll notification from the viewport element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub x: u64,
    pub y: u64,
    pub now_ms: u64,
}

/// The message the bridge emits for each scroll event, consumed by a single
/// state-update function in the embedding widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollChanged {
    pub x: u64,
    pub y: u64,
    /// Whether the horizontal offset moved relative to the stored telemetry.
    pub x_changed: bool,
    /// Whether the vertical offset moved relative to the stored telemetry.
    pub y_changed: bool,
    pub now_ms: u64,
}

/// Where the bridge is in its attach/release lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgePhase {
    Unattached,
    Active,
    Released,
}

struct Attachment<F: OverlayFactory> {
    host: F::Element,
    viewport: F::Element,
    instance: F::Instance,
}

/// Keeps an external overlay-scrollbar attached to the virtualization
/// viewport and funnels raw scroll events into [`ScrollTelemetry`].
///
/// Lifecycle: `Unattached → (attach, both elements present) → Active →
/// (detach) → Released`. Attach is idempotent for the same element pair and
/// re-initializes for a different pair; detach releases exactly once per
/// effective attach. Dropping the bridge releases too, so the overlay cannot
/// leak on any exit path.
pub struct ScrollSyncBridge<F: OverlayFactory> {
    factory: F,
    options: OverlayOptions,
    attachment: Option<Attachment<F>>,
    phase: BridgePhase,
    telemetry: ScrollTelemetry,
}

impl<F: OverlayFactory> ScrollSyncBridge<F> {
    pub fn new(factory: F, options: OverlayOptions) -> Self {
        Self {
            factory,
            options,
            attachment: None,
            phase: BridgePhase::Unattached,
            telemetry: ScrollTelemetry::default(),
        }
    }

    pub fn phase(&self) -> BridgePhase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn telemetry(&self) -> ScrollTelemetry {
        self.telemetry
    }

    /// Attaches the overlay against `host` with `viewport` as the scrolling
    /// region.
    ///
    /// Must be called once both elements exist in the layout tree. If either
    /// is `None` the call is a silent no-op: the overlay simply stays absent
    /// until layout completes and the caller attaches again. Re-invocation
    /// with the same pair is a no-op; a different pair re-initializes.
    pub fn attach(&mut self, host: Option<F::Element>, viewport: Option<F::Element>) {
        let (Some(host), Some(viewport)) = (host, viewport) else {
            return;
        };

        if let Some(current) = &self.attachment {
            if current.host == host && current.viewport == viewport {
                return;
            }
            self.release_current();
        }

        let instance = self.factory.initialize(host, viewport, &self.options);
        self.attachment = Some(Attachment {
            host,
            viewport,
            instance,
        });
        self.phase = BridgePhase::Active;
    }

    /// Releases the overlay instance. No-op when nothing is attached, so the
    /// unmount path can call it unconditionally.
    pub fn detach(&mut self) {
        if self.attachment.is_some() {
            self.release_current();
            self.phase = BridgePhase::Released;
        }
    }

    fn release_current(&mut self) {
        if let Some(mut attachment) = self.attachment.take() {
            attachment.instance.destroy();
        }
    }

    /// Folds a raw scroll event into the telemetry as one merged update and
    /// emits the resulting message.
    ///
    /// Each axis's timestamp is refreshed only when that axis's offset moved
    /// relative to the previously stored value.
    pub fn on_scroll(&mut self, event: ScrollEvent) -> ScrollChanged {
        let x_changed = event.x != self.telemetry.scroll_x;
        let y_changed = event.y != self.telemetry.scroll_y;

        self.telemetry = ScrollTelemetry {
            scroll_x: event.x,
            scroll_y: event.y,
            last_scroll_x_ms: if x_changed {
                Some(event.now_ms)
            } else {
                self.telemetry.last_scroll_x_ms
            },
            last_scroll_y_ms: if y_changed {
                Some(event.now_ms)
            } else {
                self.telemetry.last_scroll_y_ms
            },
        };

        ScrollChanged {
            x: event.x,
            y: event.y,
            x_changed,
            y_changed,
            now_ms: event.now_ms,
        }
    }
}

impl<F: OverlayFactory> Drop for ScrollSyncBridge<F> {
    fn drop(&mut self) {
        self.release_current();
    }
}

impl<F: OverlayFactory> core::fmt::Debug for ScrollSyncBridge<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollSyncBridge")
            .field("phase", &self.phase)
            .field("attached", &self.attachment.is_some())
            .field("telemetry", &self.telemetry)
            .finish_non_exhaustive()
    }
}
