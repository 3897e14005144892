//! Side effects requested by the gesture controller.
//!
//! The controller never touches the host environment itself; it returns
//! these in the order they must be executed.

use crate::domain::Dashboard;
use crate::drag::DropIndicator;
use crate::geometry::Point;

use super::session::{InputModality, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum GestureEffect {
    /// Start the one-shot long-press timer; report back with the session id
    ScheduleLongPress { session: SessionId, delay_ms: u32 },
    CancelLongPress,
    /// Cancel the pending press if the window loses focus before the timer fires
    AttachBlurGuard,
    DetachBlurGuard,
    /// Attach document/window move, up, cancel, blur and key listeners
    AttachGlobalListeners(InputModality),
    /// Remove every listener added by `AttachGlobalListeners`
    DetachGlobalListeners,
    HapticPulse { duration_ms: u32 },
    /// Clone the pressed element into a floating ghost at `origin`
    ShowGhost { origin: Point, width: f64, height: f64 },
    MoveGhost { origin: Point },
    HideGhost,
    /// Toggle the document-wide drag-in-progress marker
    SetDragMarker(bool),
    /// Drop target under the pointer changed
    Highlight(Option<DropIndicator>),
    /// Hand the replaced tree to the host
    Commit(Dashboard),
}
