//! Selector configuration.
//!
//! Size limits are expressed in native image pixels unless
//! [`relative`](SelectorConfig::relative) is set, in which case they are
//! display pixels.
//!
//! # Example
//!
//! ```
//! use zenselect::{Rect, SelectorConfig};
//!
//! let config = SelectorConfig::default()
//!     .min_size(20.0, 20.0)
//!     .max_size(640.0, 480.0)
//!     .keep_aspect(false)
//!     .initial_rectangle(Rect::new(100.0, 80.0, 320.0, 240.0));
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{Axis, SelectorError};
use crate::geometry::{Point, Rect};

/// Constraints and initial placement for a [`Selector`](crate::Selector).
///
/// Immutable once a selector is built from it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectorConfig {
    /// Default 50.
    pub min_width: f64,
    /// Default 300. Also the numerator of the default aspect ratio.
    pub max_width: f64,
    /// Default 50.
    pub min_height: f64,
    /// Default 300. Also the denominator of the default aspect ratio.
    pub max_height: f64,
    /// Interpret the limits in display pixels instead of native pixels.
    pub relative: bool,
    /// All four handles preserve the aspect ratio.
    pub keep_aspect: bool,
    /// Derive the aspect ratio from `max_width / max_height` instead of the
    /// image's native ratio.
    pub custom_ratio: bool,
    pub show_cross_point: bool,
    /// Snap the cross point to the nearest frame edge after every move.
    pub cross_point_attached_to_border: bool,
    /// Starting selection, in native pixels. Its ratio becomes the aspect ratio.
    pub initial_rectangle: Option<Rect>,
    /// Starting cross point, in native pixels.
    pub initial_cross_point: Option<Point>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_width: 50.0,
            max_width: 300.0,
            min_height: 50.0,
            max_height: 300.0,
            relative: false,
            keep_aspect: true,
            custom_ratio: true,
            show_cross_point: false,
            cross_point_attached_to_border: false,
            initial_rectangle: None,
            initial_cross_point: None,
        }
    }
}

impl SelectorConfig {
    /// Set both minimums.
    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Set both maximums.
    pub fn max_size(mut self, width: f64, height: f64) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    pub fn keep_aspect(mut self, keep_aspect: bool) -> Self {
        self.keep_aspect = keep_aspect;
        self
    }

    pub fn custom_ratio(mut self, custom_ratio: bool) -> Self {
        self.custom_ratio = custom_ratio;
        self
    }

    pub fn show_cross_point(mut self, show: bool) -> Self {
        self.show_cross_point = show;
        self
    }

    pub fn cross_point_attached_to_border(mut self, attached: bool) -> Self {
        self.cross_point_attached_to_border = attached;
        self
    }

    /// Start from this selection (native pixels) instead of the centered default.
    pub fn initial_rectangle(mut self, rect: Rect) -> Self {
        self.initial_rectangle = Some(rect);
        self
    }

    /// Start the cross point here (native pixels) instead of the origin.
    pub fn initial_cross_point(mut self, point: Point) -> Self {
        self.initial_cross_point = Some(point);
        self
    }

    /// Check the constraints for values that would produce NaN or
    /// contradictory geometry.
    pub fn validate(&self) -> Result<(), SelectorError> {
        check_axis(Axis::Width, self.min_width, self.max_width)?;
        check_axis(Axis::Height, self.min_height, self.max_height)?;
        if let Some(r) = &self.initial_rectangle
            && !r.size().is_positive()
        {
            return Err(SelectorError::DegenerateInitialRectangle {
                width: r.width,
                height: r.height,
            });
        }
        Ok(())
    }

    /// Limits converted to display pixels for a frame at `scale`.
    pub(crate) fn display_limits(&self, scale: f64) -> Limits {
        let factor = if self.relative { 1.0 } else { scale };
        Limits {
            min_width: self.min_width * factor,
            max_width: self.max_width * factor,
            min_height: self.min_height * factor,
            max_height: self.max_height * factor,
        }
    }
}

fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), SelectorError> {
    if !min.is_finite() || min < 0.0 {
        return Err(SelectorError::InvalidMinimum { axis, value: min });
    }
    if !max.is_finite() || max <= 0.0 {
        return Err(SelectorError::InvalidMaximum { axis, value: max });
    }
    if min > max {
        return Err(SelectorError::MinExceedsMax { axis, min, max });
    }
    Ok(())
}

/// Size limits in display pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Limits {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

/// Clamp `value` into `[min, max]`, reporting whether it was out of range.
/// `min` wins when the range is inverted.
pub(crate) fn clamp_limit(value: f64, min: f64, max: f64) -> (f64, bool) {
    if value > max {
        (max.max(min), true)
    } else if value < min {
        (min, true)
    } else {
        (value, false)
    }
}
