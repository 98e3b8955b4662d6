//! Configuration errors reported at initialization.

use core::fmt;

use thiserror::Error;

/// Which dimension a size constraint applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Why a selector could not be initialized.
///
/// Only raised by [`initialize`](crate::initialize),
/// [`Selector::new`](crate::Selector::new),
/// [`Selector::reframe`](crate::Selector::reframe) and
/// [`SelectorConfig::validate`](crate::SelectorConfig::validate). Drag
/// operations never fail; out-of-range input is clamped.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum SelectorError {
    /// The image has not been laid out yet, or reported a zero/non-finite size.
    #[error("frame is not measured: {width}x{height}")]
    FrameNotMeasured { width: f64, height: f64 },

    /// A minimum is negative or not finite.
    #[error("minimum {axis} must be a non-negative number, got {value}")]
    InvalidMinimum { axis: Axis, value: f64 },

    /// A maximum is zero, negative or not finite. The default aspect ratio is
    /// derived from the maximums, so this would produce NaN geometry.
    #[error("maximum {axis} must be a positive number, got {value}")]
    InvalidMaximum { axis: Axis, value: f64 },

    #[error("minimum {axis} {min} exceeds maximum {max}")]
    MinExceedsMax { axis: Axis, min: f64, max: f64 },

    /// The initial rectangle has no area, so no aspect ratio can be derived.
    #[error("initial rectangle has no area: {width}x{height}")]
    DegenerateInitialRectangle { width: f64, height: f64 },
}
