use crate::WindowRange;

/// Leading/trailing filler sizes that keep the scrollable track at its full
/// height while only a window of rows is rendered.
///
/// Invariant: for a window computed against the same row height and total,
/// `top + window.len() * row_height + bottom == total`, so the track never
/// resizes as the window slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: u64,
    pub bottom: u64,
}

impl Padding {
    /// The leading spacer size, or `None` when no spacer should be emitted.
    pub fn top_spacer(&self) -> Option<u64> {
        (self.top > 0).then_some(self.top)
    }

    /// The trailing spacer size, or `None` when no spacer should be emitted.
    pub fn bottom_spacer(&self) -> Option<u64> {
        (self.bottom > 0).then_some(self.bottom)
    }
}

/// Converts a window's start/end offsets into leading/trailing filler sizes.
///
/// An empty window yields zero padding on both sides.
pub fn padding_for(window: WindowRange, row_height: u32, total_size: u64) -> Padding {
    if window.is_empty() {
        return Padding::default();
    }
    let h = row_height as u64;
    let top = window.start_index as u64 * h;
    let end = window.end_index as u64 * h;
    Padding {
        top,
        bottom: total_size.saturating_sub(end),
    }
}
