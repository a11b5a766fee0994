//! A virtualized table widget built on the `rowwindow` core.
//!
//! The `rowwindow` crate is UI-agnostic and focuses on the window/padding
//! math. This crate provides the widget layer around it:
//!
//! - An overlay-scrollbar seam (the cosmetic scrollbar is an external
//!   primitive with an initialize/release lifecycle)
//! - A scroll-sync bridge that owns that lifecycle and turns raw scroll
//!   events into per-axis scroll telemetry
//! - A synthetic person row source and declarative column configuration
//! - The table itself, which maps the current window to a render model of
//!   spacers plus materialized rows
//!
//! This crate is intentionally framework-agnostic: elements are opaque ids
//! supplied by the embedding UI, and rendering consumes the returned model.
#![forbid(unsafe_code)]

mod bridge;
mod columns;
mod overlay;
mod person;
mod table;


pub use bridge::{BridgePhase, ScrollChanged, ScrollEvent, ScrollSyncBridge, ScrollTelemetry};
pub use columns::{Column, person_columns};
pub use overlay::{AutoHide, OverlayFactory, OverlayInstance, OverlayOptions};
pub use person::{Person, PersonGenerator, Status};
pub use table::{RenderModel, RenderedRow, TableOptions, VirtualTable};
