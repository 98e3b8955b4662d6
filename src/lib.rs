//! Selection-rectangle geometry for image area pickers.
//!
//! Drag, resize and clamp a selection over a displayed image, with optional
//! aspect lock, min/max sizes and a secondary cross point, then map the
//! result back to native pixels. Pure geometry: no rendering, no event
//! wiring, `no_std` compatible.
//!
//! # Modules
//!
//! - [`selector`]: the [`Selector`] engine and [`initialize`]
//! - [`config`]: [`SelectorConfig`] constraints and defaults
//! - [`drag`]: gesture modes and per-step results
//! - [`geometry`]: points, rects, frames, border snapping
//! - [`capture`]: native-pixel output and crop regions

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod capture;
pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod selector;

pub use capture::{Capture, PixelRect, to_native_coordinates};
pub use config::SelectorConfig;
pub use drag::{DragMode, DragState, DragUpdate, Geometry, GestureKind};
pub use error::{Axis, SelectorError};
pub use geometry::{Border, Corner, Frame, Point, Rect, Size, nearest_border, snap_to_border};
pub use selector::{Placement, Selector, Visibility, initialize};
