//! Gesture Controller
//!
//! Pointer/touch state machine for drag sessions. Mouse presses start a drag
//! immediately; touch presses wait for a long press so scrolling still works.

mod controller;
mod effect;
mod session;

pub use controller::GestureController;
pub use effect::GestureEffect;
pub use session::{DragSession, GesturePhase, InputModality, PendingPress, PressSource, SessionId};
