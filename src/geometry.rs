//! Display-space geometry primitives.
//!
//! All coordinates here are `f64` in the image's *display* frame: origin at
//! the top-left of the rendered image, x to the right, y down. Conversion to
//! native pixels lives in [`capture`](crate::capture).

/// A point in display space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiply both components by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Width × height extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both extents are positive and finite.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// x coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Multiply every field by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Shrink to fit inside `(0, 0, bounds.width, bounds.height)`, then pull
    /// the origin back so the whole rect is inside.
    ///
    /// Size is reduced before position, so a rect larger than the bounds ends
    /// up covering them exactly.
    pub fn contain_within(self, bounds: Size) -> Self {
        let width = self.width.min(bounds.width);
        let height = self.height.min(bounds.height);
        Self {
            x: clamp_span(self.x, bounds.width - width),
            y: clamp_span(self.y, bounds.height - height),
            width,
            height,
        }
    }

    /// Whether the rect lies inside `(0, 0, bounds.width, bounds.height)`,
    /// allowing `epsilon` of slack on every edge.
    pub fn is_within(&self, bounds: Size, epsilon: f64) -> bool {
        self.x >= -epsilon
            && self.y >= -epsilon
            && self.right() <= bounds.width + epsilon
            && self.bottom() <= bounds.height + epsilon
    }
}

/// Clamp `value` into `[0, span]`. A negative span pins to 0.
pub(crate) fn clamp_span(value: f64, span: f64) -> f64 {
    value.min(span).max(0.0)
}

/// The rendered image the selection lives on.
///
/// Display dimensions change with layout; native dimensions are the source
/// image's intrinsic pixel size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub display_width: f64,
    pub display_height: f64,
    pub native_width: f64,
    pub native_height: f64,
}

impl Frame {
    /// Create a frame from displayed and intrinsic dimensions.
    pub const fn new(
        display_width: f64,
        display_height: f64,
        native_width: f64,
        native_height: f64,
    ) -> Self {
        Self {
            display_width,
            display_height,
            native_width,
            native_height,
        }
    }

    /// A frame displayed at its native size (scale 1).
    pub const fn unscaled(width: f64, height: f64) -> Self {
        Self::new(width, height, width, height)
    }

    /// Display-over-native conversion factor.
    pub fn scale(&self) -> f64 {
        self.display_width / self.native_width
    }

    pub fn display_size(&self) -> Size {
        Size::new(self.display_width, self.display_height)
    }

    pub fn native_size(&self) -> Size {
        Size::new(self.native_width, self.native_height)
    }

    /// Whether layout has produced usable dimensions.
    ///
    /// Both display and native extents must be positive and finite before a
    /// selector can be initialized on this frame.
    pub fn is_measured(&self) -> bool {
        self.display_size().is_positive() && self.native_size().is_positive()
    }

    /// Same native image, new displayed size.
    pub fn with_display_size(self, display_width: f64, display_height: f64) -> Self {
        Self {
            display_width,
            display_height,
            ..self
        }
    }
}

/// Resize handle position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    /// All four handles, clockwise from top-left.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Whether dragging this handle moves the left edge.
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    /// Whether dragging this handle moves the top edge.
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }
}

/// One of the four frame edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Border {
    Left,
    Right,
    Top,
    Bottom,
}

/// Find the frame edge closest to `point`.
///
/// Distances are checked in the order left, right, top, bottom and a later
/// edge only wins when it is strictly closer, so ties go to the earlier edge.
pub fn nearest_border(point: Point, bounds: Size) -> Border {
    let candidates = [
        (Border::Right, bounds.width - point.x),
        (Border::Top, point.y),
        (Border::Bottom, bounds.height - point.y),
    ];
    let mut nearest = (Border::Left, point.x);
    for candidate in candidates {
        if candidate.1 < nearest.1 {
            nearest = candidate;
        }
    }
    nearest.0
}

/// Move `point` onto its nearest frame edge, keeping the other coordinate.
pub fn snap_to_border(point: Point, bounds: Size) -> Point {
    match nearest_border(point, bounds) {
        Border::Left => Point::new(0.0, point.y),
        Border::Right => Point::new(bounds.width, point.y),
        Border::Top => Point::new(point.x, 0.0),
        Border::Bottom => Point::new(point.x, bounds.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Rect ────────────────────────────────────────────────────────────

    #[test]
    fn contain_within_pulls_origin_back() {
        let r = Rect::new(350.0, -20.0, 100.0, 50.0).contain_within(Size::new(400.0, 300.0));
        assert_eq!(r, Rect::new(300.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn contain_within_shrinks_oversized() {
        let r = Rect::new(10.0, 10.0, 500.0, 500.0).contain_within(Size::new(400.0, 300.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn is_within_edges_inclusive() {
        let bounds = Size::new(400.0, 300.0);
        assert!(Rect::new(0.0, 0.0, 400.0, 300.0).is_within(bounds, 0.0));
        assert!(!Rect::new(0.5, 0.0, 400.0, 300.0).is_within(bounds, 0.0));
        assert!(Rect::new(0.5, 0.0, 400.0, 300.0).is_within(bounds, 1.0));
    }

    // ── Frame ───────────────────────────────────────────────────────────

    #[test]
    fn frame_scale_is_display_over_native() {
        let f = Frame::new(400.0, 300.0, 1600.0, 1200.0);
        assert_eq!(f.scale(), 0.25);
        assert!(f.is_measured());
    }

    #[test]
    fn unloaded_frame_is_not_measured() {
        assert!(!Frame::new(0.0, 0.0, 0.0, 0.0).is_measured());
        assert!(!Frame::new(400.0, 300.0, 0.0, 300.0).is_measured());
        assert!(!Frame::new(f64::NAN, 300.0, 400.0, 300.0).is_measured());
    }

    #[test]
    fn with_display_size_keeps_native() {
        let f = Frame::new(400.0, 300.0, 800.0, 600.0).with_display_size(200.0, 150.0);
        assert_eq!(f.native_size(), Size::new(800.0, 600.0));
        assert_eq!(f.scale(), 0.25);
    }

    // ── Border snapping ─────────────────────────────────────────────────

    #[test]
    fn nearest_border_each_edge() {
        let b = Size::new(400.0, 300.0);
        assert_eq!(nearest_border(Point::new(5.0, 150.0), b), Border::Left);
        assert_eq!(nearest_border(Point::new(395.0, 150.0), b), Border::Right);
        assert_eq!(nearest_border(Point::new(200.0, 5.0), b), Border::Top);
        assert_eq!(nearest_border(Point::new(200.0, 295.0), b), Border::Bottom);
    }

    #[test]
    fn right_beats_top_on_tie() {
        // right = 10, top = 10: right is checked first.
        let b = Size::new(400.0, 300.0);
        assert_eq!(nearest_border(Point::new(390.0, 10.0), b), Border::Right);
        assert_eq!(snap_to_border(Point::new(390.0, 10.0), b), Point::new(400.0, 10.0));
    }

    #[test]
    fn left_beats_top_on_tie() {
        let b = Size::new(400.0, 300.0);
        assert_eq!(snap_to_border(Point::new(10.0, 10.0), b), Point::new(0.0, 10.0));
    }

    #[test]
    fn top_beats_bottom_on_tie() {
        // Dead center: left = right = 200, top = bottom = 150.
        let b = Size::new(400.0, 300.0);
        assert_eq!(nearest_border(Point::new(200.0, 150.0), b), Border::Top);
        assert_eq!(snap_to_border(Point::new(200.0, 150.0), b), Point::new(200.0, 0.0));
    }

    #[test]
    fn point_on_edge_stays_put() {
        let b = Size::new(400.0, 300.0);
        assert_eq!(snap_to_border(Point::new(400.0, 120.0), b), Point::new(400.0, 120.0));
        assert_eq!(snap_to_border(Point::ORIGIN, b), Point::ORIGIN);
    }

    // ── Corner ──────────────────────────────────────────────────────────

    #[test]
    fn corner_edges() {
        assert!(Corner::NorthWest.moves_left_edge() && Corner::NorthWest.moves_top_edge());
        assert!(!Corner::NorthEast.moves_left_edge() && Corner::NorthEast.moves_top_edge());
        assert!(Corner::SouthWest.moves_left_edge() && !Corner::SouthWest.moves_top_edge());
        assert!(!Corner::SouthEast.moves_left_edge() && !Corner::SouthEast.moves_top_edge());
    }
}
