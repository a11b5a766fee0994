/// When the overlay scrollbar hides itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoHide {
    /// Scrollbars stay visible.
    #[default]
    Never,
    /// Hide after scrolling stops.
    Scroll,
    /// Hide when the pointer leaves the host.
    Leave,
    /// Hide when the pointer stops moving over the host.
    Move,
}

/// Options handed to the overlay primitive at initialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayOptions {
    pub auto_hide: AutoHide,
}

/// A live overlay-scrollbar instance.
///
/// The primitive itself (thumb drawing, pointer handling, auto-hide timing)
/// is external; the only operation this layer needs is release.
pub trait OverlayInstance {
    fn destroy(&mut self);
}

/// Creates overlay-scrollbar instances against a host/viewport element pair.
///
/// Elements are opaque copyable ids owned by the embedding UI; the factory is
/// what actually talks to it.
pub trait OverlayFactory {
    type Element: Copy + PartialEq;
    type Instance: OverlayInstance;

    fn initialize(
        &mut self,
        host: Self::Element,
        viewport: Self::Element,
        options: &OverlayOptions,
    ) -> Self::Instance;
}
