//! Drag session state owned by the gesture controller.

use crate::drag::{DragEntity, DropIndicator};
use crate::geometry::{Point, Rect};

/// Input device that started a press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputModality {
    Mouse,
    Touch,
}

/// What started a press. Touches carry their identifier so the session
/// follows that finger only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressSource {
    Mouse,
    Touch { id: i32 },
}

impl PressSource {
    pub fn modality(&self) -> InputModality {
        match self {
            PressSource::Mouse => InputModality::Mouse,
            PressSource::Touch { .. } => InputModality::Touch,
        }
    }

    pub fn touch_id(&self) -> Option<i32> {
        match self {
            PressSource::Mouse => None,
            PressSource::Touch { id } => Some(*id),
        }
    }
}

/// Token identifying one press-to-release session. Long-press timers carry
/// it so a timer from an earlier session can be recognised and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// A touch press waiting for the long-press threshold
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPress {
    pub session: SessionId,
    pub entity: DragEntity,
    pub touch_id: Option<i32>,
    pub origin: Point,
    /// Bounding box of the pressed element
    pub element: Rect,
}

/// An active drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub session: SessionId,
    pub entity: DragEntity,
    pub modality: InputModality,
    /// Finger driving a touch drag
    pub touch_id: Option<i32>,
    /// Pointer position relative to the dragged element's top-left corner
    pub grab_offset: Point,
    pub pointer: Point,
    pub indicator: Option<DropIndicator>,
}

impl DragSession {
    /// Top-left corner of the ghost for the current pointer position
    pub fn ghost_origin(&self) -> Point {
        self.pointer.offset_from(self.grab_offset)
    }
}

/// Controller state: `Idle -> PendingPress -> (Dragging | Idle)`, `Dragging -> Idle`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GesturePhase {
    #[default]
    Idle,
    PendingPress(PendingPress),
    Dragging(DragSession),
}

impl GesturePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GesturePhase::Idle => "idle",
            GesturePhase::PendingPress(_) => "pending",
            GesturePhase::Dragging(_) => "dragging",
        }
    }
}
