//! The selection geometry engine.
//!
//! A [`Selector`] owns one selection rectangle, one cross point and the
//! gesture in progress on them. Input adapters translate device events into
//! image-local points and call [`begin_drag`](Selector::begin_drag),
//! [`continue_drag`](Selector::continue_drag) and
//! [`end_drag`](Selector::end_drag); every call returns the new geometry and
//! leaves rendering to the caller.
//!
//! # Example
//!
//! ```
//! use zenselect::{Corner, DragMode, Frame, Point, Rect, Selector, SelectorConfig};
//!
//! let config = SelectorConfig::default()
//!     .keep_aspect(false)
//!     .initial_rectangle(Rect::new(50.0, 50.0, 100.0, 80.0));
//! let mut selector = Selector::new(Frame::unscaled(400.0, 300.0), config).unwrap();
//!
//! selector.begin_drag(DragMode::Resizing(Corner::NorthWest), Point::new(50.0, 50.0));
//! let update = selector.continue_drag(Point::new(70.0, 60.0));
//! assert!(update.changed);
//! assert_eq!(selector.rectangle(), Rect::new(70.0, 60.0, 80.0, 70.0));
//! selector.end_drag();
//! ```

use tracing::{debug, trace};

use crate::capture::{Capture, to_native_coordinates};
use crate::config::{Limits, SelectorConfig, clamp_limit};
use crate::drag::{DragMode, DragState, DragUpdate, GestureKind, Geometry};
use crate::error::SelectorError;
use crate::geometry::{Corner, Frame, Point, Rect, Size, clamp_span, snap_to_border};

/// Initial geometry for a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Selection in display space, contained in the frame.
    pub rectangle: Rect,
    pub cross_point: Point,
    /// Width over height of the selection when aspect is locked.
    pub aspect_ratio: f64,
}

/// Compute the starting rectangle and cross point for `frame`.
///
/// The initial rectangle and cross point from `config` are in native pixels
/// and are scaled into display space. Without an initial rectangle the
/// selection is centered, half the frame width wide. Either way the size is
/// then brought within the display-unit limits about its center, using the
/// locked width range when aspect is kept, and the result is pulled back
/// into the frame.
pub fn initialize(frame: Frame, config: &SelectorConfig) -> Result<Placement, SelectorError> {
    if !frame.is_measured() {
        return Err(SelectorError::FrameNotMeasured {
            width: frame.display_width,
            height: frame.display_height,
        });
    }
    config.validate()?;

    let scale = frame.scale();
    let bounds = frame.display_size();
    let limits = config.display_limits(scale);

    let (rectangle, aspect_ratio) = match config.initial_rectangle {
        Some(initial) => (
            initial.scaled(scale).contain_within(bounds),
            initial.width / initial.height,
        ),
        None => {
            let aspect_ratio = if config.custom_ratio {
                config.max_width / config.max_height
            } else {
                frame.native_width / frame.native_height
            };
            let mut width = (bounds.width / 2.0).min(limits.max_width);
            let mut height = width / aspect_ratio;
            if height > bounds.height {
                height = bounds.height;
                width = height * aspect_ratio;
            }
            let rect = Rect::new(
                (bounds.width - width) / 2.0,
                (bounds.height - height) / 2.0,
                width,
                height,
            );
            (rect, aspect_ratio)
        }
    };
    let rectangle = if config.keep_aspect {
        let ratio = lock_ratio(config, aspect_ratio, frame);
        fit_locked(rectangle, &limits, bounds, ratio)
    } else {
        fit_free(rectangle, &limits, bounds)
    };

    let cross_point = match config.initial_cross_point {
        Some(initial) => {
            let p = initial.scaled(scale);
            let p = Point::new(clamp_span(p.x, bounds.width), clamp_span(p.y, bounds.height));
            if config.cross_point_attached_to_border {
                snap_to_border(p, bounds)
            } else {
                p
            }
        }
        None => Point::ORIGIN,
    };

    debug!(
        scale,
        aspect_ratio,
        x = rectangle.x,
        y = rectangle.y,
        width = rectangle.width,
        height = rectangle.height,
        "selector initialized"
    );

    Ok(Placement {
        rectangle,
        cross_point,
        aspect_ratio,
    })
}

/// Which overlays the adapter should draw.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Visibility {
    pub selection: bool,
    pub cross_point: bool,
}

/// Selection state for one image.
#[derive(Clone, Debug, PartialEq)]
pub struct Selector {
    frame: Frame,
    config: SelectorConfig,
    limits: Limits,
    aspect_ratio: f64,
    rectangle: Rect,
    cross_point: Point,
    drag: DragState,
    visibility: Visibility,
}

impl Selector {
    /// Build a selector on a measured frame.
    ///
    /// Call this once the image has non-zero display and native dimensions;
    /// an unmeasured frame is reported as [`SelectorError::FrameNotMeasured`].
    pub fn new(frame: Frame, config: SelectorConfig) -> Result<Self, SelectorError> {
        let placement = initialize(frame, &config)?;
        Ok(Self {
            frame,
            limits: config.display_limits(frame.scale()),
            config,
            aspect_ratio: placement.aspect_ratio,
            rectangle: placement.rectangle,
            cross_point: placement.cross_point,
            drag: DragState::IDLE,
            visibility: Visibility::default(),
        })
    }

    /// Re-initialize for a new displayed size or a new image.
    ///
    /// Rectangle and cross point are recomputed from the configuration and
    /// any gesture in progress is dropped. Visibility is kept. On error the
    /// selector is left untouched.
    pub fn reframe(&mut self, frame: Frame) -> Result<(), SelectorError> {
        let placement = initialize(frame, &self.config)?;
        debug!(
            display_width = frame.display_width,
            display_height = frame.display_height,
            "selector reframed"
        );
        self.frame = frame;
        self.limits = self.config.display_limits(frame.scale());
        self.aspect_ratio = placement.aspect_ratio;
        self.rectangle = placement.rectangle;
        self.cross_point = placement.cross_point;
        self.drag = DragState::IDLE;
        Ok(())
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Display-over-native factor of the current frame.
    pub fn scale(&self) -> f64 {
        self.frame.scale()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Selection in display space.
    pub fn rectangle(&self) -> Rect {
        self.rectangle
    }

    /// Cross point in display space.
    pub fn cross_point(&self) -> Point {
        self.cross_point
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Selection and cross point in native pixels.
    pub fn capture(&self) -> Capture {
        to_native_coordinates(&self.rectangle, self.cross_point, self.scale())
    }

    /// Show the selection, and the cross point if requested and enabled in
    /// the configuration.
    pub fn show(&mut self, cross_point: bool) {
        self.visibility = Visibility {
            selection: true,
            cross_point: cross_point && self.config.show_cross_point,
        };
    }

    pub fn hide(&mut self) {
        self.visibility = Visibility::default();
    }

    /// Start a gesture at `pointer` (image-local display coordinates).
    ///
    /// For moves, the grab offset is the pointer's distance from the element's
    /// top-left, so the element does not jump under the pointer.
    pub fn begin_drag(&mut self, mode: DragMode, pointer: Point) -> DragState {
        let offset = match mode {
            DragMode::MovingRectangle => Some(pointer.offset_from(self.rectangle.origin())),
            DragMode::MovingCrossPoint => Some(pointer.offset_from(self.cross_point)),
            DragMode::Idle | DragMode::Resizing(_) => None,
        };
        self.begin_drag_with_offset(mode, pointer, offset)
    }

    /// Start a gesture with the in-element offset reported by the device.
    ///
    /// `None` means the device did not report one: both the rectangle and the
    /// cross point then take half the rectangle's size. Ignored while another
    /// gesture is active.
    pub fn begin_drag_with_offset(
        &mut self,
        mode: DragMode,
        pointer: Point,
        offset: Option<Point>,
    ) -> DragState {
        if self.drag.mode.is_active() {
            trace!(active = ?self.drag.mode, requested = ?mode, "gesture already active");
            return self.drag;
        }
        let half = Point::new(self.rectangle.width / 2.0, self.rectangle.height / 2.0);
        let grab_offset = match mode {
            DragMode::MovingRectangle | DragMode::MovingCrossPoint => offset.unwrap_or(half),
            DragMode::Idle | DragMode::Resizing(_) => Point::ORIGIN,
        };
        self.drag = DragState::begin(mode, pointer, grab_offset);
        debug!(?mode, x = pointer.x, y = pointer.y, "gesture begin");
        self.drag
    }

    /// Feed the next pointer position into the active gesture.
    ///
    /// A no-op returning [`DragUpdate::idle`] when no gesture is active.
    /// Non-finite pointer coordinates are ignored.
    pub fn continue_drag(&mut self, pointer: Point) -> DragUpdate {
        let mode = self.drag.mode;
        let Some(gesture) = mode.gesture() else {
            return DragUpdate::idle();
        };
        if !(pointer.x.is_finite() && pointer.y.is_finite()) {
            return DragUpdate {
                geometry: Some(self.geometry_for(mode)),
                changed: false,
                started: false,
                gesture: Some(gesture),
            };
        }

        let started = !self.drag.in_progress;
        self.drag.in_progress = true;

        let changed = match mode {
            DragMode::Idle => false,
            DragMode::MovingRectangle => self.move_rectangle(pointer),
            DragMode::MovingCrossPoint => self.move_cross_point(pointer),
            DragMode::Resizing(corner) => self.resize(corner, pointer),
        };

        DragUpdate {
            geometry: Some(self.geometry_for(mode)),
            changed,
            started,
            gesture: Some(gesture),
        }
    }

    /// Finish the active gesture and return to idle.
    ///
    /// Returns the idle state and which gesture ended, or `None` if none was
    /// active.
    pub fn end_drag(&mut self) -> (DragState, Option<GestureKind>) {
        let ended = self.drag.mode.gesture();
        self.drag = DragState::IDLE;
        if let Some(gesture) = ended {
            debug!(?gesture, "gesture end");
        }
        (self.drag, ended)
    }

    fn geometry_for(&self, mode: DragMode) -> Geometry {
        match mode {
            DragMode::MovingCrossPoint => Geometry::CrossPoint(self.cross_point),
            _ => Geometry::Rectangle(self.rectangle),
        }
    }

    fn move_rectangle(&mut self, pointer: Point) -> bool {
        let target = pointer.offset_from(self.drag.grab_offset);
        let bounds = self.frame.display_size();
        let r = self.rectangle;
        let x = clamp_span(target.x, bounds.width - r.width);
        let y = clamp_span(target.y, bounds.height - r.height);
        let changed = x != r.x || y != r.y;
        self.rectangle.x = x;
        self.rectangle.y = y;
        trace!(x, y, changed, "move rectangle");
        changed
    }

    fn move_cross_point(&mut self, pointer: Point) -> bool {
        let target = pointer.offset_from(self.drag.grab_offset);
        let bounds = self.frame.display_size();
        let mut next = Point::new(
            clamp_span(target.x, bounds.width),
            clamp_span(target.y, bounds.height),
        );
        if self.config.cross_point_attached_to_border {
            next = snap_to_border(next, bounds);
        }
        let changed = next != self.cross_point;
        self.cross_point = next;
        trace!(x = next.x, y = next.y, changed, "move cross point");
        changed
    }

    fn resize(&mut self, corner: Corner, pointer: Point) -> bool {
        let dx = pointer.x - self.drag.origin.x;
        let dy = pointer.y - self.drag.origin.y;
        self.drag.origin = pointer;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }

        let before = self.rectangle;
        let next = if self.config.keep_aspect {
            self.resize_locked(corner, dx)
        } else {
            self.resize_free(corner, dx, dy)
        };
        self.rectangle = next;

        let changed = next.width != before.width || next.height != before.height;
        trace!(
            ?corner,
            x = next.x,
            y = next.y,
            width = next.width,
            height = next.height,
            changed,
            "resize"
        );
        changed
    }

    /// Each axis follows the pointer independently. The edge opposite the
    /// handle stays put.
    fn resize_free(&self, corner: Corner, dx: f64, dy: f64) -> Rect {
        let r = self.rectangle;
        let bounds = self.frame.display_size();
        let limits = self.limits;

        let (mut x, mut width) = if corner.moves_left_edge() {
            (r.x + dx, r.width - dx)
        } else {
            (r.x, r.width + dx)
        };
        let (mut y, mut height) = if corner.moves_top_edge() {
            (r.y + dy, r.height - dy)
        } else {
            (r.y, r.height + dy)
        };

        if x < 0.0 {
            width += x;
            x = 0.0;
        } else if x + width > bounds.width {
            width = bounds.width - x;
        }
        if y < 0.0 {
            height += y;
            y = 0.0;
        } else if y + height > bounds.height {
            height = bounds.height - y;
        }

        let (w, x_limit) = clamp_limit(width, limits.min_width, limits.max_width);
        if x_limit {
            width = w;
            if corner.moves_left_edge() {
                x = r.right() - width;
            }
            trace!(width, "width limit reached");
        }
        let (h, y_limit) = clamp_limit(height, limits.min_height, limits.max_height);
        if y_limit {
            height = h;
            if corner.moves_top_edge() {
                y = r.bottom() - height;
            }
            trace!(height, "height limit reached");
        }

        Rect::new(
            clamp_span(x, bounds.width - width),
            clamp_span(y, bounds.height - height),
            width,
            height,
        )
    }

    /// Width follows the pointer, height follows the lock ratio, and the
    /// rectangle grows or shrinks about its center.
    fn resize_locked(&self, corner: Corner, dx: f64) -> Rect {
        let r = self.rectangle;
        let bounds = self.frame.display_size();
        let limits = self.limits;
        let ratio = lock_ratio(&self.config, self.aspect_ratio, self.frame);

        let grow = if corner.moves_left_edge() { -dx } else { dx };
        let (min_width, max_width) = locked_width_range(&limits, bounds, ratio);
        let (width, limited) = clamp_limit(r.width + grow, min_width, max_width);
        if limited {
            trace!(width, "width limit reached");
        }
        let height = width / ratio;

        let mut x = r.x - (width - r.width) / 2.0;
        let mut y = r.y - (height - r.height) / 2.0;
        if x + width > bounds.width {
            x = bounds.width - width;
        }
        if y + height > bounds.height {
            y = bounds.height - height;
        }
        Rect::new(x.max(0.0), y.max(0.0), width, height)
    }
}

/// Width/height ratio enforced while resizing with aspect lock.
fn lock_ratio(config: &SelectorConfig, aspect_ratio: f64, frame: Frame) -> f64 {
    if config.custom_ratio {
        aspect_ratio
    } else {
        frame.display_width / frame.display_height
    }
}

/// Widths allowed under aspect lock: both axes within their limits and the
/// whole rectangle within the frame. The minimum wins if they conflict.
fn locked_width_range(limits: &Limits, bounds: Size, ratio: f64) -> (f64, f64) {
    let min_width = limits.min_width.max(limits.min_height * ratio);
    let max_width = limits
        .max_width
        .min(limits.max_height * ratio)
        .min(bounds.width)
        .min(bounds.height * ratio);
    (min_width, max_width)
}

/// Resize `rect` about its center so `width / height == ratio` and the width
/// is in [`locked_width_range`], then keep it in the frame.
fn fit_locked(rect: Rect, limits: &Limits, bounds: Size, ratio: f64) -> Rect {
    let (min_width, max_width) = locked_width_range(limits, bounds, ratio);
    let (width, _) = clamp_limit(rect.width, min_width, max_width);
    recenter(rect, width, width / ratio, bounds)
}

/// Clamp each axis of `rect` to its limits and the frame, about its center.
fn fit_free(rect: Rect, limits: &Limits, bounds: Size) -> Rect {
    let (width, _) = clamp_limit(
        rect.width,
        limits.min_width,
        limits.max_width.min(bounds.width),
    );
    let (height, _) = clamp_limit(
        rect.height,
        limits.min_height,
        limits.max_height.min(bounds.height),
    );
    recenter(rect, width, height, bounds)
}

fn recenter(rect: Rect, width: f64, height: f64, bounds: Size) -> Rect {
    let cx = rect.x + rect.width / 2.0;
    let cy = rect.y + rect.height / 2.0;
    Rect::new(
        clamp_span(cx - width / 2.0, bounds.width - width),
        clamp_span(cy - height / 2.0, bounds.height - height),
        width,
        height,
    )
}
