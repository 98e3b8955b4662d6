//! Drag gesture state.

use crate::geometry::{Corner, Point, Rect};

/// What the active gesture is manipulating.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// No gesture in progress.
    #[default]
    Idle,
    MovingRectangle,
    MovingCrossPoint,
    /// Resizing from a corner handle.
    Resizing(Corner),
}

impl DragMode {
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }

    /// The gesture kind reported to listeners, `None` when idle.
    pub fn gesture(self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::MovingRectangle => Some(GestureKind::Move),
            Self::MovingCrossPoint => Some(GestureKind::MoveCrossPoint),
            Self::Resizing(_) => Some(GestureKind::Resize),
        }
    }
}

/// Logical gesture reported with start/change/end notifications.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureKind {
    Move,
    Resize,
    MoveCrossPoint,
}

/// Transient state for one pointer gesture (down → moves → up).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragState {
    pub mode: DragMode,
    /// Pointer position at the previous event. Resize deltas are measured
    /// from here, not from where the gesture began.
    pub origin: Point,
    /// Pointer offset from the dragged element's top-left. Unused while resizing.
    pub grab_offset: Point,
    /// Set once the first move of the gesture has been processed.
    pub in_progress: bool,
}

impl DragState {
    /// The resting state between gestures.
    pub const IDLE: Self = Self {
        mode: DragMode::Idle,
        origin: Point::ORIGIN,
        grab_offset: Point::ORIGIN,
        in_progress: false,
    };

    pub(crate) fn begin(mode: DragMode, pointer: Point, grab_offset: Point) -> Self {
        Self {
            mode,
            origin: pointer,
            grab_offset,
            in_progress: false,
        }
    }
}

/// Geometry produced by a drag step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Geometry {
    Rectangle(Rect),
    CrossPoint(Point),
}

/// Result of feeding one pointer position into an active gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragUpdate {
    /// The element the gesture manipulates, after this step. `None` when idle.
    pub geometry: Option<Geometry>,
    /// Whether the element actually moved or resized.
    pub changed: bool,
    /// True only for the first step of a gesture.
    pub started: bool,
    pub gesture: Option<GestureKind>,
}

impl DragUpdate {
    /// A move received while no gesture is active.
    pub const fn idle() -> Self {
        Self {
            geometry: None,
            changed: false,
            started: false,
            gesture: None,
        }
    }
}
