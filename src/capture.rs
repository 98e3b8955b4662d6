//! Conversion of the selection back to native image pixels.
//!
//! # Example
//!
//! ```
//! use zenselect::{Point, Rect, to_native_coordinates};
//!
//! // Image shown at quarter size.
//! let capture = to_native_coordinates(
//!     &Rect::new(10.0, 20.0, 100.0, 50.0),
//!     Point::new(4.0, 8.0),
//!     0.25,
//! );
//! assert_eq!(capture.width, 400.0);
//! assert_eq!(capture.cross_point, Point::new(16.0, 32.0));
//! ```

use num_traits::Float;

use crate::geometry::{Point, Rect};

/// Selection and cross point in native pixel space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capture {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub cross_point: Point,
}

/// Divide every field by `scale` (display / native).
pub fn to_native_coordinates(rect: &Rect, cross_point: Point, scale: f64) -> Capture {
    Capture {
        x: rect.x / scale,
        y: rect.y / scale,
        width: rect.width / scale,
        height: rect.height / scale,
        cross_point: Point::new(cross_point.x / scale, cross_point.y / scale),
    }
}

impl Capture {
    /// The selection rectangle, native pixels.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Inverse of [`to_native_coordinates`]: back to display space.
    pub fn to_display(&self, scale: f64) -> (Rect, Point) {
        (self.rect().scaled(scale), self.cross_point.scaled(scale))
    }

    /// Round to whole pixels and clamp to an image of `native_w × native_h`.
    ///
    /// This is the region an external cropper should copy.
    pub fn pixel_rect(&self, native_w: u32, native_h: u32) -> PixelRect {
        PixelRect {
            x: to_pixel(self.x),
            y: to_pixel(self.y),
            width: to_pixel(self.width),
            height: to_pixel(self.height),
        }
        .clamp_to(native_w, native_h)
    }
}

fn to_pixel(v: f64) -> u32 {
    // Negative and NaN saturate to 0.
    Float::round(v) as u32
}

/// Integer crop region in native pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp this rect to fit within `(0, 0, max_w, max_h)`.
    /// Width and height are clamped to at least 1.
    pub fn clamp_to(self, max_w: u32, max_h: u32) -> Self {
        let x = self.x.min(max_w.saturating_sub(1));
        let y = self.y.min(max_h.saturating_sub(1));
        Self {
            x,
            y,
            width: self.width.min(max_w.saturating_sub(x)).max(1),
            height: self.height.min(max_h.saturating_sub(y)).max(1),
        }
    }

    /// Whether this covers the whole image (cropping would be a no-op).
    pub fn is_full(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }
}
