//! Headless scroll windowing for fixed-height rows.
//!
//! Given a row count, a fixed estimated row height, an overscan count, and the
//! current viewport/scroll state, this crate computes the minimal contiguous
//! index range of rows that must be materialized, per-row pixel offsets, and
//! the leading/trailing padding that keeps the scrollable track at its full
//! height while only a window of rows is rendered.
//!
//! It is UI-agnostic. A widget layer is expected to provide:
//! - viewport size (height/width)
//! - scroll offsets and event timestamps
//!
//! For the table widget built on top of this crate (overlay-scrollbar
//! lifecycle, row data, columns), see the `rowwindow-table` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod padding;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use options::{InitialOffset, OnChangeCallback, WindowOptions};
pub use padding::{Padding, padding_for};
pub use types::{Align, Rect, RowSlot, ScrollDirection, WindowRange};
pub use window::RowWindow;
